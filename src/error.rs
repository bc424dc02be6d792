use thiserror::Error;

use crate::render::LeafId;

/// Errors returned by the log view.
#[derive(Debug, Error)]
pub enum LogViewError {
    #[error("{0} is not supported by the log view")]
    UnsupportedEvent(String),
    #[error("leaf {0} is not part of the rendered tree")]
    UnknownLeaf(LeafId),
    #[error("leaf {0} has no children to expand or collapse")]
    NoChildren(LeafId),
}
