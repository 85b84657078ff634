//! In-memory signature ledger for company documents.
//!
//! The ledger maps document ids to immutable document snapshots. Commands never modify a
//! snapshot in place: they build a new [`Document`] value and swap it in, so snapshots
//! handed out earlier stay valid and consistent.
//!
//! # Main Components
//!
//! - [`SignatureLedger`] - The document collection and its commands
//! - [`ActionCatalog`] - Read-only compliance actions used to label documents
//! - [`LedgerEvent`] - Side effects for collaborators such as billing
//! - [`LedgerError`] - Error types for ledger operations
//!
//! # Usage
//!
//! ```ignore
//! let mut ledger = SignatureLedger::builder().notarization_fee(fee).build();
//!
//! ledger.register_document(document, now)?;
//!
//! let outcome = ledger.sign_document(&document_id, &signatory_id, now)?;
//! if outcome.document().can_notarize() {
//!     let outcome = ledger.notarize_document(&document_id, now)?;
//! }
//! ```
//!
//! The ledger is synchronous and never blocks. Sharing it between concurrent callers
//! requires a single-writer boundary around it.

mod catalog;
mod error;
mod event;
mod query;

#[cfg(test)]
mod tests;

pub use self::{
    catalog::ActionCatalog,
    error::LedgerError,
    event::{LedgerEvent, LedgerOutcome, LedgerOutcomeDissolved},
    query::{
        DocumentEntry, DocumentEntryDissolved, DocumentQuery, DocumentQueryDissolved,
        DocumentStats,
    },
};

use std::{collections::BTreeMap, sync::Arc};

use chrono::{DateTime, Utc};
use secspace_docsign_domain::{
    CompanyId, DocumentId, SignatoryId, Timestamps,
    document::{Document, DocumentStatus},
    fee::Fee,
};

use self::error::Result;

/// The collection of documents and their signature state.
#[derive(Debug, Clone)]
pub struct SignatureLedger {
    documents: BTreeMap<DocumentId, Arc<Document>>,
    catalog: ActionCatalog,
    notarization_fee: Fee,
}

#[bon::bon]
impl SignatureLedger {
    /// Creates an empty ledger.
    ///
    /// `notarization_fee` is attached to every [`LedgerEvent::NotarizationRequested`].
    #[builder]
    pub fn new(#[builder(default)] catalog: ActionCatalog, notarization_fee: Fee) -> Self {
        Self { documents: BTreeMap::new(), catalog, notarization_fee }
    }
}

impl SignatureLedger {
    /// Registers a fully formed document.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A document with the same id is already registered
    /// - The related action is not in the catalog
    #[tracing::instrument(
        skip_all,
        fields(document_id = %document.id(), company_id = %document.company_id()),
    )]
    pub fn register_document(
        &mut self,
        document: Document<()>,
        at: DateTime<Utc>,
    ) -> Result<Arc<Document>> {
        if self.documents.contains_key(document.id()) {
            return Err(LedgerError::DuplicateDocument(document.id().clone()));
        }

        if let Some(action_id) = document.related_action_id() {
            if !self.catalog.contains(action_id) {
                return Err(LedgerError::UnknownAction(action_id.clone()));
            }
        }

        let (document, ()) = document.with_aux(Timestamps::new(at));
        let document = Arc::new(document);

        self.documents.insert(document.id().clone(), Arc::clone(&document));

        tracing::debug!(status = %document.status(), "registered document");

        Ok(document)
    }

    /// Returns the current snapshot of a document.
    pub fn get_document(&self, document_id: &DocumentId) -> Option<Arc<Document>> {
        self.documents.get(document_id).cloned()
    }

    /// Returns the current snapshot of a document with its related action resolved.
    pub fn get_document_entry(&self, document_id: &DocumentId) -> Option<DocumentEntry> {
        self.documents.get(document_id).map(|document| self.entry(document))
    }

    /// Lists the documents matching `query`, in document id order.
    pub fn list_documents(&self, query: &DocumentQuery) -> Vec<DocumentEntry> {
        self.documents
            .values()
            .filter(|document| query.matches(document))
            .map(|document| self.entry(document))
            .collect()
    }

    /// Lists the documents on which `signatory_id` still has to sign.
    pub fn documents_awaiting(
        &self,
        signatory_id: &SignatoryId,
        company_id: Option<&CompanyId>,
    ) -> Vec<Arc<Document>> {
        self.documents
            .values()
            .filter(|document| owned_by(document, company_id))
            .filter(|document| document.awaits_signature_from(signatory_id))
            .cloned()
            .collect()
    }

    /// Records the signature of `signatory_id` on a document.
    ///
    /// Signing twice is a no-op: the existing snapshot is returned with no events, and
    /// the original `signed_at` is kept.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The document doesn't exist
    /// - The signatory has no entry on the document
    #[tracing::instrument(skip_all, fields(%document_id, %signatory_id))]
    pub fn sign_document(
        &mut self,
        document_id: &DocumentId,
        signatory_id: &SignatoryId,
        at: DateTime<Utc>,
    ) -> Result<LedgerOutcome> {
        let current = self.try_get_document(document_id)?;

        let Some(signed) = current
            .sign(signatory_id, at)
            .map_err(|e| LedgerError::transition(document_id, e))?
        else {
            tracing::debug!("signatory already signed");
            return Ok(LedgerOutcome::unchanged(current));
        };

        let mut events = vec![LedgerEvent::SignatureRecorded {
            document_id: document_id.clone(),
            signatory_id: signatory_id.clone(),
            signed_at: at,
        }];

        if signed.status() == DocumentStatus::Completed {
            events.push(LedgerEvent::DocumentCompleted {
                document_id: document_id.clone(),
                company_id: signed.company_id().clone(),
            });
        }

        let document = self.replace(signed, at);

        tracing::info!(status = %document.status(), "signature recorded");

        Ok(LedgerOutcome::new(document, events))
    }

    /// Notarizes a completed document.
    ///
    /// Notarizing an already notarized document is a no-op and charges nothing.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The document doesn't exist
    /// - The document is still collecting signatures; it is left unchanged
    #[tracing::instrument(skip_all, fields(%document_id))]
    pub fn notarize_document(
        &mut self,
        document_id: &DocumentId,
        at: DateTime<Utc>,
    ) -> Result<LedgerOutcome> {
        let current = self.try_get_document(document_id)?;

        let Some(notarized) =
            current.notarize().map_err(|e| LedgerError::transition(document_id, e))?
        else {
            tracing::debug!("document already notarized");
            return Ok(LedgerOutcome::unchanged(current));
        };

        let event = LedgerEvent::NotarizationRequested {
            document_id: document_id.clone(),
            company_id: notarized.company_id().clone(),
            fee: self.notarization_fee.clone(),
        };

        let document = self.replace(notarized, at);

        tracing::info!(fee = %self.notarization_fee, "document notarized");

        Ok(LedgerOutcome::new(document, vec![event]))
    }

    /// Counts documents per status, optionally for one company only.
    pub fn document_stats(&self, company_id: Option<&CompanyId>) -> DocumentStats {
        self.documents
            .values()
            .filter(|document| owned_by(document, company_id))
            .fold(DocumentStats::default(), |stats, document| stats.record(document.status()))
    }

    /// Returns the action catalog.
    pub fn catalog(&self) -> &ActionCatalog {
        &self.catalog
    }

    /// Returns the flat notarization fee.
    pub fn notarization_fee(&self) -> &Fee {
        &self.notarization_fee
    }

    /// Returns the number of registered documents.
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Returns `true` if no document is registered.
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    fn try_get_document(&self, document_id: &DocumentId) -> Result<Arc<Document>> {
        self.get_document(document_id)
            .ok_or_else(|| LedgerError::NotFound(document_id.clone()))
    }

    fn entry(&self, document: &Arc<Document>) -> DocumentEntry {
        let related_action = document
            .related_action_id()
            .and_then(|action_id| self.catalog.get(action_id))
            .cloned();

        DocumentEntry::new(Arc::clone(document), related_action)
    }

    fn replace(&mut self, document: Document, at: DateTime<Utc>) -> Arc<Document> {
        let timestamps = document.aux().touched(at);
        let (document, _) = document.with_aux(timestamps);
        let document = Arc::new(document);

        self.documents.insert(document.id().clone(), Arc::clone(&document));

        document
    }
}

fn owned_by(document: &Document, company_id: Option<&CompanyId>) -> bool {
    company_id.is_none_or(|company_id| document.company_id() == company_id)
}
