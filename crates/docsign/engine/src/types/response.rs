//! Response types for ledger engine operations.

use std::sync::Arc;

use dissolve_derive::Dissolve;
use secspace_docsign_domain::{action::ComplianceAction, document::Document};
use secspace_docsign_ledger::{DocumentEntry, DocumentStats};

/// Response from registering a document.
#[derive(Debug, Dissolve)]
pub struct RegisterDocumentResponse {
    /// The registered document snapshot
    document: Arc<Document>,
}

/// Response from retrieving a document.
#[derive(Debug, Dissolve)]
pub struct GetDocumentResponse {
    /// The document with its related action if found, `None` otherwise
    entry: Option<DocumentEntry>,
}

/// Response from listing documents.
#[derive(Debug, Dissolve)]
pub struct ListDocumentsResponse {
    /// Documents matching the query criteria, in document id order
    entries: Vec<DocumentEntry>,
}

/// Response from signing a document.
#[derive(Debug, Dissolve)]
pub struct SignDocumentResponse {
    /// The document snapshot after signing
    document: Arc<Document>,

    /// `false` when the signatory had already signed
    changed: bool,
}

/// Response from notarizing a document.
#[derive(Debug, Dissolve)]
pub struct NotarizeDocumentResponse {
    /// The document snapshot after notarization
    document: Arc<Document>,

    /// `false` when the document was already notarized and nothing was charged
    changed: bool,
}

/// Response from listing documents awaiting a signature.
#[derive(Debug, Dissolve)]
pub struct ListAwaitingSignatureResponse {
    /// Documents on which the signatory still has to sign
    documents: Vec<Arc<Document>>,
}

/// Response from counting documents per status.
#[derive(Debug, Dissolve)]
pub struct GetDocumentStatsResponse {
    /// The counts
    stats: DocumentStats,
}

/// Response from listing compliance actions.
#[derive(Debug, Dissolve)]
pub struct ListActionsResponse {
    /// The catalog, in id order
    actions: Vec<Arc<ComplianceAction>>,
}

#[bon::bon]
impl RegisterDocumentResponse {
    #[builder]
    pub(crate) fn new(document: Arc<Document>) -> Self {
        Self { document }
    }
}

#[bon::bon]
impl GetDocumentResponse {
    #[builder]
    pub(crate) fn new(entry: Option<DocumentEntry>) -> Self {
        Self { entry }
    }
}

#[bon::bon]
impl ListDocumentsResponse {
    #[builder]
    pub(crate) fn new(entries: Vec<DocumentEntry>) -> Self {
        Self { entries }
    }
}

#[bon::bon]
impl SignDocumentResponse {
    #[builder]
    pub(crate) fn new(document: Arc<Document>, changed: bool) -> Self {
        Self { document, changed }
    }
}

#[bon::bon]
impl NotarizeDocumentResponse {
    #[builder]
    pub(crate) fn new(document: Arc<Document>, changed: bool) -> Self {
        Self { document, changed }
    }
}

#[bon::bon]
impl ListAwaitingSignatureResponse {
    #[builder]
    pub(crate) fn new(documents: Vec<Arc<Document>>) -> Self {
        Self { documents }
    }
}

#[bon::bon]
impl GetDocumentStatsResponse {
    #[builder]
    pub(crate) fn new(stats: DocumentStats) -> Self {
        Self { stats }
    }
}

#[bon::bon]
impl ListActionsResponse {
    #[builder]
    pub(crate) fn new(actions: Vec<Arc<ComplianceAction>>) -> Self {
        Self { actions }
    }
}
