use secspace_docsign_domain::{SignatoryId, error::DocumentError};

/// Top-level error for request validation.
///
/// This enum wraps all possible request validation errors.
#[derive(Debug, thiserror::Error)]
pub enum RequestError {
    /// Error creating a register document request.
    #[error("register document error: {0}")]
    RegisterDocument(#[from] RegisterDocumentRequestError),
}

/// Errors that can occur when validating a document registration request.
#[derive(Debug, thiserror::Error)]
pub enum RegisterDocumentRequestError {
    /// A document id was supplied but it is empty
    #[error("empty document id error")]
    EmptyDocumentId,

    /// The company id is empty
    #[error("empty company id error")]
    EmptyCompanyId,

    /// The title is empty or blank
    #[error("empty title error")]
    EmptyTitle,

    /// A signatory id is empty
    #[error("empty signatory id error")]
    EmptySignatoryId,

    /// A new document cannot arrive with signatures already collected
    #[error("presigned signatory error: {0}")]
    PresignedSignatory(SignatoryId),

    /// The document itself is malformed
    #[error("invalid document error: {0}")]
    Document(#[from] DocumentError),
}
