//! Document queries and derived listings.

use std::sync::Arc;

use bon::Builder;
use dissolve_derive::Dissolve;
use secspace_docsign_domain::{
    CompanyId,
    action::ComplianceAction,
    document::{Document, DocumentStatus, StatusFilter},
};

/// Criteria for listing documents.
///
/// Every criterion is optional; an empty query matches every document.
#[derive(Debug, Clone, Default, Builder, Dissolve)]
pub struct DocumentQuery {
    /// Only documents owned by this company.
    #[builder(into)]
    company_id: Option<CompanyId>,

    /// Case-insensitive substring of the title.
    #[builder(into)]
    search: Option<String>,

    /// Status filter, `All` when unset.
    #[builder(default)]
    status_filter: StatusFilter,
}

/// A listed document together with its resolved related action.
#[derive(Debug, Clone, Dissolve)]
pub struct DocumentEntry {
    document: Arc<Document>,
    related_action: Option<Arc<ComplianceAction>>,
}

/// Document counts per status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Builder, Dissolve)]
pub struct DocumentStats {
    /// The total number of documents.
    total: u64,

    /// The number of documents still collecting signatures.
    pending_signatures: u64,

    /// The number of completed, not notarized documents.
    completed: u64,

    /// The number of notarized documents.
    notarized: u64,
}

impl DocumentQuery {
    /// Returns `true` if `document` satisfies every criterion.
    pub fn matches<AUX>(&self, document: &Document<AUX>) -> bool {
        let company_matches =
            self.company_id.as_ref().is_none_or(|company_id| document.company_id() == company_id);

        let search_matches = self.search.as_deref().is_none_or(|search| {
            document.title().to_lowercase().contains(&search.to_lowercase())
        });

        company_matches && search_matches && self.status_filter.matches(document.status())
    }
}

impl DocumentEntry {
    pub(crate) fn new(
        document: Arc<Document>,
        related_action: Option<Arc<ComplianceAction>>,
    ) -> Self {
        Self { document, related_action }
    }

    /// Returns the document snapshot.
    pub fn document(&self) -> &Arc<Document> {
        &self.document
    }

    /// Returns the related action, `None` for general documents.
    pub fn related_action(&self) -> Option<&Arc<ComplianceAction>> {
        self.related_action.as_ref()
    }
}

impl DocumentStats {
    /// Returns the total number of documents.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Returns the number of documents still collecting signatures.
    pub fn pending_signatures(&self) -> u64 {
        self.pending_signatures
    }

    /// Returns the number of completed, not notarized documents.
    pub fn completed(&self) -> u64 {
        self.completed
    }

    /// Returns the number of notarized documents.
    pub fn notarized(&self) -> u64 {
        self.notarized
    }

    pub(crate) fn record(mut self, status: DocumentStatus) -> Self {
        self.total += 1;
        match status {
            DocumentStatus::PendingSignatures => self.pending_signatures += 1,
            DocumentStatus::Completed => self.completed += 1,
            DocumentStatus::Notarized => self.notarized += 1,
        }
        self
    }
}
