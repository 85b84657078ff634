use secspace_docsign_domain::{
    ActionId, DocumentId, SignatoryId,
    document::DocumentStatus,
    error::{DocumentError, TransitionError},
};

pub type Result<T, E = LedgerError> = core::result::Result<T, E>;

/// Errors that can occur when operating on the ledger.
///
/// All of these are local validation failures; none of them is worth retrying.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LedgerError {
    /// No document with the given id exists in the ledger.
    #[error("document not found error: {0}")]
    NotFound(DocumentId),

    /// The acting signatory has no entry on the document.
    #[error("signatory {signatory_id} not found on document {document_id}")]
    SignatoryNotFound {
        /// The document that was targeted.
        document_id: DocumentId,
        /// The signatory that was not found.
        signatory_id: SignatoryId,
    },

    /// The document cannot move to the requested status from its current one.
    #[error("invalid transition error on document {document_id}: {from} -> {to}")]
    InvalidTransition {
        /// The document that was targeted.
        document_id: DocumentId,
        /// The current status of the document.
        from: DocumentStatus,
        /// The requested status.
        to: DocumentStatus,
    },

    /// A document with the same id is already registered.
    #[error("duplicate document error: {0}")]
    DuplicateDocument(DocumentId),

    /// The document refers to an action missing from the catalog.
    #[error("unknown action error: {0}")]
    UnknownAction(ActionId),

    /// The document itself is malformed.
    #[error("invalid document error: {0}")]
    Document(#[from] DocumentError),
}

impl LedgerError {
    pub(crate) fn transition(document_id: &DocumentId, err: TransitionError) -> Self {
        match err {
            TransitionError::SignatoryNotFound(signatory_id) => {
                Self::SignatoryNotFound { document_id: document_id.clone(), signatory_id }
            },
            TransitionError::InvalidTransition { from, to } => {
                Self::InvalidTransition { document_id: document_id.clone(), from, to }
            },
        }
    }
}
