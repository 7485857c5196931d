//! Render a small table, poke it with a few events and print the markup.
//!
//! Logs go to `datatable.log`.

use std::fs::File;

use datatable::{PropertyBag, TableConfig};
use htmldom::{Document, EventKind};
use simplelog::{Config, LevelFilter, WriteLogger};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let log_file = File::create("datatable.log")?;
    WriteLogger::init(LevelFilter::Trace, Config::default(), log_file)?;

    let mut doc = Document::new();
    let body = doc.body();
    let app = doc.append_element(body, "div")?;
    doc.try_element_mut(app)?.set_id("app");

    let config = TableConfig::from_json(
        r#"{
            "container": "app",
            "data": [
                { "depth": 0, "item": "src", "description": "sources" },
                { "depth": 1, "item": "lib.rs", "description": "crate root" },
                { "depth": 1, "item": "main.rs", "description": "binary" }
            ],
            "headers": { "names": ["Data Depth", "Item", "Description"] }
        }"#,
    )?
    .cell_renderer(|_, _, key| {
        let bag = PropertyBag::new().class_name("table-table__cell");
        if key == "depth" {
            bag.style("textAlign", "right")
        } else {
            bag
        }
    })
    .on_dbl_click(|doc, row, cell, default| {
        if let Some(el) = doc.element_mut(cell) {
            el.set_property("title", "opened".into());
        }
        default.apply(doc, row);
    });

    let table = datatable::init(&mut doc, &config)?;

    doc.dispatch(table.cells(&doc, 0)[1], EventKind::MouseOver)?;
    doc.dispatch(table.cells(&doc, 1)[1], EventKind::Click)?;
    doc.dispatch(table.cells(&doc, 1)[1], EventKind::DblClick)?;
    doc.dispatch(table.cells(&doc, 2)[0], EventKind::MouseOver)?;

    println!("{}", doc.inner_html(app));
    Ok(())
}
