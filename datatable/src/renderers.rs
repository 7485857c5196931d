//! Default renderers, used wherever the configuration leaves one unset.

use crate::bag::PropertyBag;

pub const TABLE_CLASS: &str = "table-table";
pub const COLUMN_CLASS: &str = "table-table__column";
pub const ROW_CLASS: &str = "table-table__row";
pub const CELL_CLASS: &str = "table-table__cell";

/// Table element: font, scroll overflow, margin and collapsed cell spacing.
pub fn table() -> PropertyBag {
    PropertyBag::new()
        .class_name(TABLE_CLASS)
        .style("fontFamily", "Arial")
        .style("fontSize", "13px")
        .style("fontWeight", 500)
        .style("overflow", "scroll")
        .style("margin", "15px")
        .set("cellSpacing", "0")
}

/// Header cell: fixed geometry, centered label, top and bottom rules.
pub fn column() -> PropertyBag {
    PropertyBag::new()
        .class_name(COLUMN_CLASS)
        .style("height", "48px")
        .style("width", "200px")
        .style("textAlign", "center")
        .style("borderBottom", "solid 1px rgba(218,220,224)")
        .style("borderTop", "solid 1px rgba(218,220,224)")
}

pub fn row() -> PropertyBag {
    PropertyBag::new()
        .class_name(ROW_CLASS)
        .style("height", "48px")
        .style("borderBottom", "solid 1px #dadce0")
}

pub fn cell() -> PropertyBag {
    PropertyBag::new().class_name(CELL_CLASS).with_style_block()
}
