pub mod request;
pub mod response;

use bon::Builder;
use chrono::{DateTime, NaiveDate, Utc};
use secspace_docsign_domain::{
    document::{Document, DocumentKind, DocumentStatus, FileKind},
    signatory::Signatory,
};
use secspace_docsign_ledger::{DocumentEntry, DocumentStats};
use serde::Serialize;
use serde_with::DisplayFromStr;

/// Label shown for documents produced outside any compliance action.
const GENERAL_DOCUMENT: &str = "General Document";

#[serde_with::serde_as]
#[derive(Debug, Builder, Serialize)]
pub struct DocumentPayload {
    id: String,
    company_id: String,
    title: String,

    #[serde_as(as = "DisplayFromStr")]
    kind: DocumentKind,

    #[serde_as(as = "DisplayFromStr")]
    file_kind: FileKind,

    uploaded_on: NaiveDate,
    size: String,

    #[serde_as(as = "DisplayFromStr")]
    status: DocumentStatus,

    is_notarized: bool,
    can_notarize: bool,
    signatories: Vec<SignatoryPayload>,

    #[serde(skip_serializing_if = "Option::is_none")]
    related_action_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    related_action_label: Option<String>,

    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

#[derive(Debug, Builder, Serialize)]
pub struct SignatoryPayload {
    id: String,
    name: String,
    initials: String,
    has_signed: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    signed_at: Option<DateTime<Utc>>,

    is_current_user: bool,
}

#[derive(Debug, Builder, Serialize)]
pub struct DocumentStatsPayload {
    total: u64,
    pending_signatures: u64,
    completed: u64,
    notarized: u64,
}

impl From<&Document> for DocumentPayload {
    fn from(document: &Document) -> Self {
        Self::builder()
            .id(document.id().to_string())
            .company_id(document.company_id().to_string())
            .title(document.title().to_owned())
            .kind(document.kind())
            .file_kind(document.file_kind())
            .uploaded_on(document.uploaded_on())
            .size(document.size().to_owned())
            .status(document.status())
            .is_notarized(document.is_notarized())
            .can_notarize(document.can_notarize())
            .signatories(document.signatories().iter().map(From::from).collect())
            .maybe_related_action_id(document.related_action_id().map(ToString::to_string))
            .created_at(document.aux().created_at())
            .updated_at(document.aux().updated_at())
            .build()
    }
}

impl From<&DocumentEntry> for DocumentPayload {
    fn from(entry: &DocumentEntry) -> Self {
        let label = entry
            .related_action()
            .map_or(GENERAL_DOCUMENT, |action| action.title())
            .to_owned();

        let document: &Document = entry.document();

        Self { related_action_label: Some(label), ..document.into() }
    }
}

impl From<&Signatory> for SignatoryPayload {
    fn from(signatory: &Signatory) -> Self {
        Self::builder()
            .id(signatory.id().to_string())
            .name(signatory.name().to_owned())
            .initials(signatory.initials().to_owned())
            .has_signed(signatory.has_signed())
            .maybe_signed_at(signatory.signed_at())
            .is_current_user(signatory.is_current_user())
            .build()
    }
}

impl From<DocumentStats> for DocumentStatsPayload {
    fn from(stats: DocumentStats) -> Self {
        Self::builder()
            .total(stats.total())
            .pending_signatures(stats.pending_signatures())
            .completed(stats.completed())
            .notarized(stats.notarized())
            .build()
    }
}
