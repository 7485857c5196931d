//! Styled HTML tables with click, double-click and hover behaviors.
//!
//! Build a [`TableConfig`] naming a container element id and the records to
//! show, then call [`init`] with an `htmldom::Document` that holds that
//! container. The returned [`RenderedTable`] gives access to the header
//! cells, rows and cells so events can be dispatched at them.

pub mod bag;
pub mod behavior;
pub mod builder;
pub mod config;
pub mod error;
pub mod renderers;

pub use bag::{apply_bag, PropertyBag};
pub use behavior::{
    click_default, dbl_click_default, hover_default, DefaultBehavior, InteractionKind,
    InteractionState, SharedInteraction,
};
pub use builder::{display_text, init, RenderedTable, TableBuilder};
pub use config::{
    CellConfig, CellHandler, CellRenderer, HeaderConfig, HeaderOptions, IndexRenderer, Record,
    RowConfig, TableConfig, TableOptions, TableRenderer,
};
pub use error::TableError;
