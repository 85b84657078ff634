//! Document domain models and signature status derivation.

use alloc::{collections::BTreeSet, string::String, vec::Vec};

use chrono::{DateTime, NaiveDate, Utc};
use dissolve_derive::Dissolve;
use strum::{Display, EnumString, IntoStaticStr};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    ActionId, CompanyId, DocumentId, SignatoryId, Timestamps,
    error::{DocumentError, TransitionError},
    signatory::Signatory,
};

/// The signature status of a document.
///
/// A document moves strictly forward through these states:
/// `Pending Signatures -> Completed -> Notarized`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoStaticStr, EnumString, Display)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DocumentStatus {
    /// At least one signatory has not signed yet.
    #[strum(serialize = "Pending Signatures")]
    #[cfg_attr(feature = "serde", serde(rename = "Pending Signatures"))]
    PendingSignatures,
    /// Every signatory has signed.
    Completed,
    /// Every signatory has signed and the document has been notarized.
    Notarized,
}

/// The kind of legal document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoStaticStr, EnumString, Display)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DocumentKind {
    /// A board or shareholder resolution.
    Resolution,
    /// An agreement between parties.
    Agreement,
    /// A certificate issued to or by the company.
    Certificate,
    /// A filing lodged with the registrar.
    Filing,
    /// Anything else.
    Other,
}

/// The file format of the stored document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoStaticStr, EnumString, Display)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FileKind {
    /// Portable document format.
    #[strum(serialize = "PDF")]
    #[cfg_attr(feature = "serde", serde(rename = "PDF"))]
    Pdf,
    /// Word document.
    #[strum(serialize = "DOCX")]
    #[cfg_attr(feature = "serde", serde(rename = "DOCX"))]
    Docx,
}

/// A status filter applied when listing documents.
///
/// `Pending` matches documents in [`DocumentStatus::PendingSignatures`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, IntoStaticStr, EnumString, Display)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum StatusFilter {
    /// Matches every document.
    #[default]
    All,
    /// Matches documents still collecting signatures.
    Pending,
    /// Matches completed documents that are not notarized.
    Completed,
    /// Matches notarized documents.
    Notarized,
}

/// A company document with the signatories it requires.
///
/// The status of a document is not a field: [`Document::status`] derives it from the
/// signatories and the notarization flag every time it is called, so the invariants
/// between status and signatory state hold by construction.
///
/// # Type Parameters
///
/// * `AUX` - Auxiliary data type, defaults to [`Timestamps`] for tracking metadata.
#[derive(Debug, Clone, PartialEq, Eq, Dissolve)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Document<AUX = Timestamps> {
    /// The unique identifier for this document.
    id: DocumentId,

    /// The company this document belongs to.
    company_id: CompanyId,

    /// The title of the document.
    title: String,

    /// The kind of document.
    kind: DocumentKind,

    /// The file format of the document.
    file_kind: FileKind,

    /// The date the document was uploaded.
    uploaded_on: NaiveDate,

    /// A human readable size label, e.g. `1.2 MB`.
    size: String,

    /// The ordered list of parties required to sign.
    signatories: Vec<Signatory>,

    /// Whether the document has been notarized.
    notarized: bool,

    /// The compliance action this document was produced for, if any.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    related_action_id: Option<ActionId>,

    /// Auxiliary metadata associated with this document.
    aux: AUX,
}

/// Derives the status of a document from its signatories.
///
/// Returns [`DocumentStatus::Completed`] if the sequence is empty or every signatory has
/// signed, and [`DocumentStatus::PendingSignatures`] otherwise.
pub fn derive_status(signatories: &[Signatory]) -> DocumentStatus {
    if signatories.iter().all(Signatory::has_signed) {
        DocumentStatus::Completed
    } else {
        DocumentStatus::PendingSignatures
    }
}

impl StatusFilter {
    /// Returns `true` if a document in `status` passes this filter.
    pub fn matches(self, status: DocumentStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Pending => status == DocumentStatus::PendingSignatures,
            StatusFilter::Completed => status == DocumentStatus::Completed,
            StatusFilter::Notarized => status == DocumentStatus::Notarized,
        }
    }
}

#[bon::bon]
impl<AUX> Document<AUX> {
    /// Creates a fully formed document.
    ///
    /// Returns an error if a signatory appears twice, or if the document is flagged as
    /// notarized while some signatories have not signed.
    #[builder]
    pub fn new(
        #[builder(into)] id: DocumentId,
        #[builder(into)] company_id: CompanyId,
        #[builder(into)] title: String,
        kind: DocumentKind,
        file_kind: FileKind,
        uploaded_on: NaiveDate,
        #[builder(into)] size: String,
        #[builder(default)] signatories: Vec<Signatory>,
        #[builder(default)] notarized: bool,
        #[builder(into)] related_action_id: Option<ActionId>,
        aux: AUX,
    ) -> Result<Self, DocumentError> {
        let mut seen = BTreeSet::new();
        let duplicate = signatories.iter().map(Signatory::id).find(|id| !seen.insert(*id));
        if let Some(duplicate) = duplicate {
            return Err(DocumentError::DuplicateSignatory(duplicate.clone()));
        }

        if notarized && derive_status(&signatories) == DocumentStatus::PendingSignatures {
            return Err(DocumentError::NotarizedWithPendingSignatures);
        }

        Ok(Self {
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
            aux,
        })
    }
}

impl<AUX1> Document<AUX1> {
    /// Replaces the auxiliary data with a new value, returning both the updated document
    /// and the old auxiliary data.
    pub fn with_aux<AUX2>(self, aux: AUX2) -> (Document<AUX2>, AUX1) {
        let document = Document {
            id: self.id,
            company_id: self.company_id,
            title: self.title,
            kind: self.kind,
            file_kind: self.file_kind,
            uploaded_on: self.uploaded_on,
            size: self.size,
            signatories: self.signatories,
            notarized: self.notarized,
            related_action_id: self.related_action_id,
            aux,
        };

        (document, self.aux)
    }
}

impl<AUX> Document<AUX> {
    /// Returns the document id.
    pub fn id(&self) -> &DocumentId {
        &self.id
    }

    /// Returns the id of the owning company.
    pub fn company_id(&self) -> &CompanyId {
        &self.company_id
    }

    /// Returns the document title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the document kind.
    pub fn kind(&self) -> DocumentKind {
        self.kind
    }

    /// Returns the file format.
    pub fn file_kind(&self) -> FileKind {
        self.file_kind
    }

    /// Returns the upload date.
    pub fn uploaded_on(&self) -> NaiveDate {
        self.uploaded_on
    }

    /// Returns the size label.
    pub fn size(&self) -> &str {
        &self.size
    }

    /// Returns the signatories in their required order.
    pub fn signatories(&self) -> &[Signatory] {
        &self.signatories
    }

    /// Returns the related compliance action id, if any.
    pub fn related_action_id(&self) -> Option<&ActionId> {
        self.related_action_id.as_ref()
    }

    /// Returns a reference to the auxiliary metadata.
    pub fn aux(&self) -> &AUX {
        &self.aux
    }

    /// Returns the status derived from the current signatory state.
    pub fn status(&self) -> DocumentStatus {
        if self.notarized {
            DocumentStatus::Notarized
        } else {
            derive_status(&self.signatories)
        }
    }

    /// Returns `true` once the document has been notarized.
    pub fn is_notarized(&self) -> bool {
        self.status() == DocumentStatus::Notarized
    }

    /// Returns `true` if the document may be notarized now.
    pub fn can_notarize(&self) -> bool {
        self.status() == DocumentStatus::Completed
    }

    /// Looks up a signatory by id.
    pub fn signatory(&self, signatory_id: &SignatoryId) -> Option<&Signatory> {
        self.signatories.iter().find(|s| s.id() == signatory_id)
    }

    /// Returns the signatory flagged as the current user, if any.
    pub fn current_user_signatory(&self) -> Option<&Signatory> {
        self.signatories.iter().find(|s| s.is_current_user())
    }

    /// Returns `true` if `signatory_id` has an entry on this document and has not signed.
    pub fn awaits_signature_from(&self, signatory_id: &SignatoryId) -> bool {
        self.signatory(signatory_id).is_some_and(|s| !s.has_signed())
    }
}

impl<AUX: Clone> Document<AUX> {
    /// Records the signature of `signatory_id` at `at`.
    ///
    /// Returns `Ok(None)` when the signatory already signed, leaving the document as is.
    /// Otherwise returns the new snapshot; `self` is never modified.
    ///
    /// # Errors
    ///
    /// Returns [`TransitionError::SignatoryNotFound`] if the signatory has no entry on the
    /// document.
    pub fn sign(
        &self,
        signatory_id: &SignatoryId,
        at: DateTime<Utc>,
    ) -> Result<Option<Self>, TransitionError> {
        let idx = self
            .signatories
            .iter()
            .position(|s| s.id() == signatory_id)
            .ok_or_else(|| TransitionError::SignatoryNotFound(signatory_id.clone()))?;

        let Some(signed) = self.signatories[idx].signed(at) else {
            return Ok(None);
        };

        let mut document = self.clone();
        document.signatories[idx] = signed;

        Ok(Some(document))
    }

    /// Notarizes a completed document.
    ///
    /// Returns `Ok(None)` when the document is already notarized.
    ///
    /// # Errors
    ///
    /// Returns [`TransitionError::InvalidTransition`] while signatures are still pending.
    pub fn notarize(&self) -> Result<Option<Self>, TransitionError> {
        match self.status() {
            DocumentStatus::Notarized => Ok(None),
            DocumentStatus::Completed => Ok(Some(Self { notarized: true, ..self.clone() })),
            from @ DocumentStatus::PendingSignatures => {
                Err(TransitionError::InvalidTransition { from, to: DocumentStatus::Notarized })
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use chrono::TimeZone;

    use super::*;

    fn at(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 10, hour, 0, 0).unwrap()
    }

    fn signatory(id: &str, signed_at: Option<DateTime<Utc>>) -> Signatory {
        Signatory::builder()
            .id(id)
            .name(id)
            .initials("X")
            .maybe_signed_at(signed_at)
            .build()
    }

    fn document(signatories: Vec<Signatory>) -> Result<Document<()>, DocumentError> {
        Document::builder()
            .id("doc-1")
            .company_id("c1")
            .title("Board Resolution")
            .kind(DocumentKind::Resolution)
            .file_kind(FileKind::Pdf)
            .uploaded_on(NaiveDate::from_ymd_opt(2024, 3, 10).unwrap())
            .size("1.2 MB")
            .signatories(signatories)
            .aux(())
            .build()
    }

    #[test]
    fn empty_signatories_derive_completed() {
        assert_eq!(derive_status(&[]), DocumentStatus::Completed);
        assert_eq!(document(vec![]).unwrap().status(), DocumentStatus::Completed);
    }

    #[test]
    fn any_unsigned_signatory_derives_pending() {
        let signatories = vec![signatory("a", Some(at(9))), signatory("b", None)];
        assert_eq!(derive_status(&signatories), DocumentStatus::PendingSignatures);
    }

    #[test]
    fn duplicate_signatory_is_rejected() {
        let err = document(vec![signatory("a", None), signatory("a", None)]).unwrap_err();
        assert_eq!(err, DocumentError::DuplicateSignatory("a".into()));
    }

    #[test]
    fn notarized_flag_requires_all_signatures() {
        let err = Document::builder()
            .id("doc-1")
            .company_id("c1")
            .title("Shareholders Agreement")
            .kind(DocumentKind::Agreement)
            .file_kind(FileKind::Pdf)
            .uploaded_on(NaiveDate::from_ymd_opt(2024, 2, 28).unwrap())
            .size("3.5 MB")
            .signatories(vec![signatory("a", None)])
            .notarized(true)
            .aux(())
            .build()
            .unwrap_err();

        assert_eq!(err, DocumentError::NotarizedWithPendingSignatures);
    }

    #[test]
    fn sign_leaves_original_snapshot_untouched() {
        let original = document(vec![signatory("a", None), signatory("b", Some(at(8)))]).unwrap();

        let signed = original.sign(&"a".into(), at(10)).unwrap().unwrap();

        assert_eq!(original.status(), DocumentStatus::PendingSignatures);
        assert_eq!(signed.status(), DocumentStatus::Completed);
        assert_eq!(signed.signatory(&"a".into()).unwrap().signed_at(), Some(at(10)));
        assert_eq!(signed.signatory(&"b".into()).unwrap().signed_at(), Some(at(8)));
    }

    #[test]
    fn sign_twice_is_a_no_op() {
        let document = document(vec![signatory("a", Some(at(8)))]).unwrap();
        assert_eq!(document.sign(&"a".into(), at(12)).unwrap(), None);
    }

    #[test]
    fn sign_by_stranger_fails() {
        let document = document(vec![signatory("a", None)]).unwrap();
        assert_eq!(
            document.sign(&"z".into(), at(12)).unwrap_err(),
            TransitionError::SignatoryNotFound("z".into())
        );
    }

    #[test]
    fn notarize_requires_completion() {
        let pending = document(vec![signatory("a", None)]).unwrap();
        assert_eq!(
            pending.notarize().unwrap_err(),
            TransitionError::InvalidTransition {
                from: DocumentStatus::PendingSignatures,
                to: DocumentStatus::Notarized,
            }
        );

        let completed = document(vec![signatory("a", Some(at(8)))]).unwrap();
        let notarized = completed.notarize().unwrap().unwrap();
        assert!(notarized.is_notarized());
        assert!(!notarized.can_notarize());
        assert_eq!(notarized.notarize().unwrap(), None);
    }

    #[test]
    fn status_filter_maps_pending_to_pending_signatures() {
        assert!(StatusFilter::Pending.matches(DocumentStatus::PendingSignatures));
        assert!(!StatusFilter::Pending.matches(DocumentStatus::Completed));
        assert!(!StatusFilter::Completed.matches(DocumentStatus::Notarized));
        assert!(StatusFilter::All.matches(DocumentStatus::Notarized));
    }
}
