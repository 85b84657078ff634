//! Read-only catalog of compliance action definitions.

use std::{collections::BTreeMap, sync::Arc};

use secspace_docsign_domain::{ActionId, action::ComplianceAction};

/// Compliance actions keyed by id.
///
/// The ledger only reads from the catalog to resolve a document's related action.
#[derive(Debug, Clone, Default)]
pub struct ActionCatalog {
    actions: BTreeMap<ActionId, Arc<ComplianceAction>>,
}

impl ActionCatalog {
    /// Looks up an action by id.
    pub fn get(&self, action_id: &ActionId) -> Option<&Arc<ComplianceAction>> {
        self.actions.get(action_id)
    }

    /// Returns `true` if the catalog has an action with this id.
    pub fn contains(&self, action_id: &ActionId) -> bool {
        self.actions.contains_key(action_id)
    }

    /// Iterates over the actions in id order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<ComplianceAction>> {
        self.actions.values()
    }

    /// Returns the number of actions.
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// Returns `true` if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

impl FromIterator<ComplianceAction> for ActionCatalog {
    /// Builds a catalog; later actions replace earlier ones with the same id.
    fn from_iter<I: IntoIterator<Item = ComplianceAction>>(iter: I) -> Self {
        let actions = iter
            .into_iter()
            .map(|action| (action.id().clone(), Arc::new(action)))
            .collect();

        Self { actions }
    }
}
