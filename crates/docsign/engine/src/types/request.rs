//! Request types for ledger engine operations.

mod error;

pub use self::error::{RegisterDocumentRequestError, RequestError};

use bon::Builder;
use chrono::{NaiveDate, Utc};
use dissolve_derive::Dissolve;
use secspace_docsign_domain::{
    ActionId, CompanyId, DocumentId, SignatoryId,
    document::{Document, DocumentKind, FileKind, StatusFilter},
    signatory::Signatory,
};
use uuid::Uuid;

/// Request to register a newly uploaded document.
///
/// # Validation
///
/// The request validates that:
/// - The title and company id are non-empty
/// - A supplied document id is non-empty; a `doc-<uuid>` id is generated otherwise
/// - Signatory ids are non-empty and unique
/// - No signatory has signed yet
#[derive(Debug, Dissolve)]
pub struct RegisterDocumentRequest {
    /// The unregistered document, validated
    document: Document<()>,
}

/// Request to retrieve a document by id.
#[derive(Debug, Builder, Dissolve)]
pub struct GetDocumentRequest {
    /// The document to look up
    #[builder(into)]
    document_id: DocumentId,
}

/// Request to list documents.
#[derive(Debug, Default, Builder, Dissolve)]
pub struct ListDocumentsRequest {
    /// Optional company filter. If `None`, documents of every company are listed.
    #[builder(into)]
    company_id: Option<CompanyId>,

    /// Optional case-insensitive title substring
    #[builder(into)]
    search: Option<String>,

    /// Status filter (All, Pending, Completed, Notarized)
    #[builder(default)]
    status_filter: StatusFilter,
}

/// Request to sign a document on behalf of one of its signatories.
#[derive(Debug, Builder, Dissolve)]
pub struct SignDocumentRequest {
    /// The document to sign
    #[builder(into)]
    document_id: DocumentId,

    /// The acting signatory
    #[builder(into)]
    signatory_id: SignatoryId,
}

/// Request to notarize a completed document.
#[derive(Debug, Builder, Dissolve)]
pub struct NotarizeDocumentRequest {
    /// The document to notarize
    #[builder(into)]
    document_id: DocumentId,
}

/// Request to list the documents awaiting a signatory's signature.
#[derive(Debug, Builder, Dissolve)]
pub struct ListAwaitingSignatureRequest {
    /// The signatory whose signature is awaited
    #[builder(into)]
    signatory_id: SignatoryId,

    /// Optional company filter
    #[builder(into)]
    company_id: Option<CompanyId>,
}

/// Request to count documents per status.
#[derive(Debug, Default, Builder, Dissolve)]
pub struct GetDocumentStatsRequest {
    /// Optional company filter
    #[builder(into)]
    company_id: Option<CompanyId>,
}

#[bon::bon]
impl RegisterDocumentRequest {
    /// Creates a new document registration request with validation.
    ///
    /// # Parameters
    ///
    /// * `id` - The document id, generated when `None`
    /// * `uploaded_on` - The upload date, today (UTC) when `None`
    /// * `signatories` - The parties required to sign, none of whom may have signed yet
    ///
    /// Returns an error if validation fails.
    #[builder]
    pub fn new(
        #[builder(into)] id: Option<DocumentId>,
        #[builder(into)] company_id: CompanyId,
        #[builder(into)] title: String,
        kind: DocumentKind,
        file_kind: FileKind,
        uploaded_on: Option<NaiveDate>,
        #[builder(into)] size: String,
        #[builder(default)] signatories: Vec<Signatory>,
        #[builder(into)] related_action_id: Option<ActionId>,
    ) -> Result<Self, RegisterDocumentRequestError> {
        if id.as_ref().is_some_and(DocumentId::is_empty) {
            return Err(RegisterDocumentRequestError::EmptyDocumentId);
        }

        if company_id.is_empty() {
            return Err(RegisterDocumentRequestError::EmptyCompanyId);
        }

        if title.trim().is_empty() {
            return Err(RegisterDocumentRequestError::EmptyTitle);
        }

        if signatories.iter().any(|s| s.id().is_empty()) {
            return Err(RegisterDocumentRequestError::EmptySignatoryId);
        }

        if let Some(signatory) = signatories.iter().find(|s| s.has_signed()) {
            return Err(RegisterDocumentRequestError::PresignedSignatory(signatory.id().clone()));
        }

        let document = Document::builder()
            .id(id.unwrap_or_else(|| Uuid::new_v4().into()))
            .company_id(company_id)
            .title(title)
            .kind(kind)
            .file_kind(file_kind)
            .uploaded_on(uploaded_on.unwrap_or_else(|| Utc::now().date_naive()))
            .size(size)
            .signatories(signatories)
            .maybe_related_action_id(related_action_id)
            .aux(())
            .build()?;

        Ok(Self { document })
    }
}
