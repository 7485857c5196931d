use thiserror::Error;

use crate::NodeId;

/// Errors raised by document tree operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomError {
    /// The handle does not belong to this document.
    #[error("Node {0} does not exist in this document")]
    NodeNotFound(NodeId),

    /// The insertion would make a node its own ancestor.
    #[error("Cannot insert node {child} into {parent}: hierarchy request")]
    HierarchyRequest { parent: NodeId, child: NodeId },

    /// `remove_child` was called with a node that is not a child of `parent`.
    #[error("Node {child} is not a child of {parent}")]
    NotAChild { parent: NodeId, child: NodeId },

    /// An element-only operation was attempted on a fragment.
    #[error("Node {0} is not an element")]
    NotAnElement(NodeId),

    /// Merge into a property that holds a scalar.
    #[error("Property '{0}' is not an object and cannot be merged into")]
    NotAnObject(String),
}
