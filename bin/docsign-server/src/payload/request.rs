use chrono::NaiveDate;
use dissolve_derive::Dissolve;
use serde::Deserialize;

#[derive(Debug, Dissolve, Deserialize)]
pub struct RegisterDocumentRequestPayload {
    id: Option<String>,
    company_id: String,
    title: String,
    kind: String,
    file_kind: String,
    uploaded_on: Option<NaiveDate>,
    size: String,

    #[serde(default)]
    signatories: Vec<NewSignatoryPayload>,

    related_action_id: Option<String>,
}

#[derive(Debug, Dissolve, Deserialize)]
pub struct NewSignatoryPayload {
    id: String,
    name: String,

    /// Derived from the first letter of `name` when absent
    initials: Option<String>,

    #[serde(default)]
    is_current_user: bool,
}

#[derive(Debug, Dissolve, Deserialize)]
pub struct GetDocumentDetailsRequestPayload {
    document_id: String,
}

#[derive(Debug, Dissolve, Deserialize)]
pub struct ListDocumentsRequestPayload {
    company_id: Option<String>,
    search: Option<String>,
    status_filter: Option<String>,
}

#[derive(Debug, Dissolve, Deserialize)]
pub struct SignDocumentRequestPayload {
    document_id: String,
    signatory_id: String,
}

#[derive(Debug, Dissolve, Deserialize)]
pub struct NotarizeDocumentRequestPayload {
    document_id: String,
}

#[derive(Debug, Dissolve, Deserialize)]
pub struct ListAwaitingSignatureRequestPayload {
    signatory_id: String,
    company_id: Option<String>,
}

#[derive(Debug, Dissolve, Deserialize)]
pub struct GetDocumentStatsRequestPayload {
    company_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ListActionsRequestPayload {}
