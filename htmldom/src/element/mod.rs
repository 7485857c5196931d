mod document;
mod node;

pub use document::Document;
pub use node::{Element, NodeId};
