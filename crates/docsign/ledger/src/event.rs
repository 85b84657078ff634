//! Events emitted by ledger transitions.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use dissolve_derive::Dissolve;
use secspace_docsign_domain::{CompanyId, DocumentId, SignatoryId, document::Document, fee::Fee};

/// Something that happened to a document, for collaborators outside the ledger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LedgerEvent {
    /// A signatory signed a document.
    SignatureRecorded {
        /// The signed document.
        document_id: DocumentId,
        /// The signatory who signed.
        signatory_id: SignatoryId,
        /// When the signature was recorded.
        signed_at: DateTime<Utc>,
    },

    /// The last missing signature was collected.
    DocumentCompleted {
        /// The completed document.
        document_id: DocumentId,
        /// The company owning the document.
        company_id: CompanyId,
    },

    /// A document was notarized and its fee must be charged to the owning company.
    NotarizationRequested {
        /// The notarized document.
        document_id: DocumentId,
        /// The company to charge.
        company_id: CompanyId,
        /// The flat notarization fee.
        fee: Fee,
    },
}

/// The result of a ledger command.
#[derive(Debug, Clone, Dissolve)]
pub struct LedgerOutcome {
    /// The document snapshot after the command.
    document: Arc<Document>,

    /// Events produced by the command, in order. Empty for no-ops.
    events: Vec<LedgerEvent>,
}

impl LedgerOutcome {
    pub(crate) fn new(document: Arc<Document>, events: Vec<LedgerEvent>) -> Self {
        Self { document, events }
    }

    pub(crate) fn unchanged(document: Arc<Document>) -> Self {
        Self::new(document, Vec::new())
    }

    /// Returns the document snapshot.
    pub fn document(&self) -> &Arc<Document> {
        &self.document
    }

    /// Returns the events produced by the command.
    pub fn events(&self) -> &[LedgerEvent] {
        &self.events
    }

    /// Returns `true` if the command changed the document.
    pub fn is_changed(&self) -> bool {
        !self.events.is_empty()
    }
}
