use bon::Builder;
use secspace_docsign_domain::action::ComplianceAction;
use serde::Serialize;

use crate::payload::{DocumentPayload, DocumentStatsPayload};

#[derive(Debug, Builder, Serialize)]
pub struct RegisterDocumentResponsePayload {
    document: DocumentPayload,
}

#[derive(Debug, Builder, Serialize)]
pub struct GetDocumentDetailsResponsePayload {
    document: DocumentPayload,
}

#[derive(Debug, Builder, Serialize)]
pub struct ListDocumentsResponsePayload {
    documents: Vec<DocumentPayload>,
}

#[derive(Debug, Builder, Serialize)]
pub struct SignDocumentResponsePayload {
    document: DocumentPayload,
    changed: bool,
}

#[derive(Debug, Builder, Serialize)]
pub struct NotarizeDocumentResponsePayload {
    document: DocumentPayload,
    changed: bool,
}

#[derive(Debug, Builder, Serialize)]
pub struct ListAwaitingSignatureResponsePayload {
    documents: Vec<DocumentPayload>,
}

#[derive(Debug, Builder, Serialize)]
pub struct GetDocumentStatsResponsePayload {
    stats: DocumentStatsPayload,
}

#[derive(Debug, Builder, Serialize)]
pub struct ListActionsResponsePayload {
    actions: Vec<ComplianceAction>,
}

#[derive(Debug, Builder, Serialize)]
pub struct ErrorResponsePayload {
    error: String,
}
