pub mod element;
pub mod error;
pub mod event;
pub mod render;
pub mod types;

pub use element::{Document, Element, NodeId};
pub use error::DomError;
pub use event::{Event, EventHandler, EventKind};
pub use types::CssStyle;
