//! Initial ledger content.
//!
//! A seed is a RON file listing compliance actions and already existing documents.
//! The demo seed (`base_seed.ron`) is embedded in the binary and used unless
//! `ledger.seed_path` points to another file of the same shape.

use chrono::{DateTime, NaiveDate, Utc};
use config::{ConfigError, File, FileFormat};
use dissolve_derive::Dissolve;
use itertools::Itertools;
use secspace_docsign_domain::{
    ActionId, CompanyId, DocumentId,
    action::ComplianceAction,
    document::{Document, DocumentKind, FileKind},
    error::DocumentError,
    fee::Fee,
    signatory::Signatory,
};
use secspace_docsign_ledger::{LedgerError, SignatureLedger};
use serde::Deserialize;

/// Errors that can occur while seeding the ledger.
#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("seed config error: {0}")]
    Config(#[from] ConfigError),

    #[error("invalid seed document error: {0}")]
    Document(#[from] DocumentError),

    #[error("seed ledger error: {0}")]
    Ledger(#[from] LedgerError),
}

#[derive(Debug, Deserialize, Dissolve)]
pub struct Seed {
    #[serde(default)]
    actions: Vec<ComplianceAction>,

    #[serde(default)]
    documents: Vec<DocumentSeed>,
}

#[derive(Debug, Deserialize, Dissolve)]
pub struct DocumentSeed {
    id: DocumentId,
    company_id: CompanyId,
    title: String,
    kind: DocumentKind,
    file_kind: FileKind,
    uploaded_on: NaiveDate,
    size: String,

    #[serde(default)]
    signatories: Vec<Signatory>,

    #[serde(default)]
    notarized: bool,

    related_action_id: Option<ActionId>,
}

/// Loads the seed at `seed_path`, or the embedded demo seed when `None`.
///
/// # Errors
///
/// If the file could not be read or parsed
pub fn load_seed(seed_path: Option<&str>) -> Result<Seed, ConfigError> {
    let builder = match seed_path {
        Some(path) => config::Config::builder().add_source(File::new(path, FileFormat::Ron)),
        None => config::Config::builder()
            .add_source(File::from_str(include_str!("base_seed.ron"), FileFormat::Ron)),
    };

    builder.build()?.try_deserialize()
}

/// Builds a ledger holding every seeded action and document.
///
/// Seeded documents are registered at `at`.
///
/// # Errors
///
/// If a seeded document is malformed, duplicated, or refers to an unknown action
#[tracing::instrument(skip_all, fields(%notarization_fee))]
pub fn seed_ledger(
    seed: Seed,
    notarization_fee: Fee,
    at: DateTime<Utc>,
) -> Result<SignatureLedger, SeedError> {
    let SeedDissolved { actions, documents } = seed.dissolve();

    let documents: Vec<_> = documents.into_iter().map(Document::<()>::try_from).try_collect()?;

    let mut ledger = SignatureLedger::builder()
        .catalog(actions.into_iter().collect())
        .notarization_fee(notarization_fee)
        .build();

    for document in documents {
        ledger.register_document(document, at)?;
    }

    tracing::info!(
        documents = ledger.len(),
        actions = ledger.catalog().len(),
        "seeded signature ledger"
    );

    Ok(ledger)
}

impl TryFrom<DocumentSeed> for Document<()> {
    type Error = DocumentError;

    fn try_from(seed: DocumentSeed) -> Result<Self, Self::Error> {
        let DocumentSeedDissolved {
            id,
            company_id,
            title,
            kind,
            file_kind,
            uploaded_on,
            size,
            signatories,
            notarized,
            related_action_id,
        } = seed.dissolve();

        Document::builder()
            .id(id)
            .company_id(company_id)
            .title(title)
            .kind(kind)
            .file_kind(file_kind)
            .uploaded_on(uploaded_on)
            .size(size)
            .signatories(signatories)
            .notarized(notarized)
            .maybe_related_action_id(related_action_id)
            .aux(())
            .build()
    }
}

#[cfg(test)]
mod tests {
    use secspace_docsign_domain::document::DocumentStatus;
    use secspace_docsign_test_utils::{notarization_fee, ts};

    use super::*;

    #[test]
    fn embedded_seed_matches_demo_company() {
        let seed = load_seed(None).expect("embedded seed parses");
        let ledger =
            seed_ledger(seed, notarization_fee(), ts(2024, 3, 15, 8, 0)).expect("seed is valid");

        assert_eq!(ledger.len(), 5);
        assert_eq!(ledger.catalog().len(), 6);

        let stats = ledger.document_stats(Some(&"c1".into()));
        assert_eq!(stats.pending_signatures(), 2);
        assert_eq!(stats.completed(), 2);
        assert_eq!(stats.notarized(), 1);

        let doc_1 = ledger.get_document(&"doc-1".into()).expect("doc-1 is seeded");
        assert_eq!(doc_1.status(), DocumentStatus::PendingSignatures);
        assert_eq!(
            doc_1.current_user_signatory().and_then(Signatory::signed_at),
            Some(ts(2024, 3, 10, 14, 30))
        );
    }

    #[test]
    fn notarized_seed_with_missing_signature_is_rejected() {
        let seed = DocumentSeed {
            id: "doc-x".into(),
            company_id: "c1".into(),
            title: "Broken".into(),
            kind: DocumentKind::Other,
            file_kind: FileKind::Pdf,
            uploaded_on: NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid date"),
            size: "1 KB".into(),
            signatories: vec![
                Signatory::builder().id("u1").name("Alex Chen").initials("A").build(),
            ],
            notarized: true,
            related_action_id: None,
        };

        assert_eq!(
            Document::<()>::try_from(seed).unwrap_err(),
            DocumentError::NotarizedWithPendingSignatures
        );
    }
}
