use std::sync::Arc;

use bon::Builder;
use chrono::{DateTime, Utc};
use dissolve_derive::Dissolve;
use secspace_docsign_domain::{
    CompanyId, DocumentId, SignatoryId, action::ComplianceAction, document::Document,
};
use secspace_docsign_ledger::{
    DocumentEntry, DocumentQuery, DocumentStats, LedgerError, LedgerOutcome,
};
use tokio::sync::oneshot;

pub enum LedgerMsg {
    RegisterDocument(RegisterDocument),
    GetDocument(GetDocument),
    ListDocuments(ListDocuments),
    SignDocument(SignDocument),
    NotarizeDocument(NotarizeDocument),
    ListAwaitingSignature(ListAwaitingSignature),
    GetDocumentStats(GetDocumentStats),
    ListActions(ListActions),
    Shutdown,
}

#[derive(Debug, Builder, Dissolve)]
pub struct RegisterDocument {
    document: Document<()>,
    at: DateTime<Utc>,
    sender: oneshot::Sender<Result<Arc<Document>, LedgerError>>,
}

#[derive(Debug, Builder, Dissolve)]
pub struct GetDocument {
    document_id: DocumentId,
    sender: oneshot::Sender<Option<DocumentEntry>>,
}

#[derive(Debug, Builder, Dissolve)]
pub struct ListDocuments {
    query: DocumentQuery,
    sender: oneshot::Sender<Vec<DocumentEntry>>,
}

#[derive(Debug, Builder, Dissolve)]
pub struct SignDocument {
    document_id: DocumentId,
    signatory_id: SignatoryId,
    at: DateTime<Utc>,
    sender: oneshot::Sender<Result<LedgerOutcome, LedgerError>>,
}

#[derive(Debug, Builder, Dissolve)]
pub struct NotarizeDocument {
    document_id: DocumentId,
    at: DateTime<Utc>,
    sender: oneshot::Sender<Result<LedgerOutcome, LedgerError>>,
}

#[derive(Debug, Builder, Dissolve)]
pub struct ListAwaitingSignature {
    signatory_id: SignatoryId,
    company_id: Option<CompanyId>,
    sender: oneshot::Sender<Vec<Arc<Document>>>,
}

#[derive(Debug, Builder, Dissolve)]
pub struct GetDocumentStats {
    company_id: Option<CompanyId>,
    sender: oneshot::Sender<DocumentStats>,
}

#[derive(Debug, Builder, Dissolve)]
pub struct ListActions {
    sender: oneshot::Sender<Vec<Arc<ComplianceAction>>>,
}
