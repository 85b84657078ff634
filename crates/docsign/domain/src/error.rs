//! Errors raised while constructing or transitioning documents.

use crate::{SignatoryId, document::DocumentStatus};

/// Errors that can occur when constructing a [`Document`](crate::document::Document).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DocumentError {
    /// The same signatory appears more than once on the document.
    #[error("duplicate signatory error: {0}")]
    DuplicateSignatory(SignatoryId),

    /// The document is flagged as notarized while some signatures are still missing.
    #[error("notarized document has pending signatures")]
    NotarizedWithPendingSignatures,
}

/// Errors that can occur when moving a document through its signature lifecycle.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransitionError {
    /// The acting signatory has no entry on the document.
    #[error("signatory not found error: {0}")]
    SignatoryNotFound(SignatoryId),

    /// The requested status change is not permitted from the current status.
    #[error("invalid transition error: {from} -> {to}")]
    InvalidTransition {
        /// The status the document is currently in.
        from: DocumentStatus,
        /// The status that was requested.
        to: DocumentStatus,
    },
}
