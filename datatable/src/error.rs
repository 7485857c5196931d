//! Table rendering errors.

use htmldom::DomError;
use thiserror::Error;

/// Errors that end an `init` call.
///
/// Nothing is appended to the document when one of these is returned.
#[derive(Debug, Error)]
pub enum TableError {
    /// No connected element carries the configured container id.
    #[error("Container element '{0}' not found")]
    ContainerNotFound(String),

    /// Header labels cannot be inferred without a first record.
    #[error("No header names given and the dataset is empty")]
    NoHeaderSource,

    /// A property bag was built from something other than a JSON object.
    #[error("Property bag must be a JSON object, got {0}")]
    InvalidBag(&'static str),

    /// The document rejected a tree operation.
    #[error(transparent)]
    Dom(#[from] DomError),

    /// Serialized table options could not be parsed.
    #[error("Invalid table options: {0}")]
    InvalidOptions(#[from] serde_json::Error),
}
