//! Signatory domain model.

use alloc::string::String;

use bon::Builder;
use chrono::{DateTime, Utc};
use dissolve_derive::Dissolve;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::SignatoryId;

/// A party required to approve a document before it is considered complete.
///
/// Whether the signatory has signed is a projection of `signed_at`: the timestamp is
/// present exactly when the signature was given, so the two can never disagree.
#[derive(Debug, Clone, PartialEq, Eq, Builder, Dissolve)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Signatory {
    /// The stable identifier of the signatory.
    #[builder(into)]
    id: SignatoryId,

    /// The display name of the signatory.
    #[builder(into)]
    name: String,

    /// The initials shown on the signatory's avatar.
    #[builder(into)]
    initials: String,

    /// The moment the signature was given, if it was.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    signed_at: Option<DateTime<Utc>>,

    /// Marks the acting principal for display purposes only.
    #[builder(default)]
    #[cfg_attr(feature = "serde", serde(default))]
    is_current_user: bool,
}

impl Signatory {
    /// Returns the signatory id.
    pub fn id(&self) -> &SignatoryId {
        &self.id
    }

    /// Returns the display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the avatar initials.
    pub fn initials(&self) -> &str {
        &self.initials
    }

    /// Returns the signing timestamp, if signed.
    pub fn signed_at(&self) -> Option<DateTime<Utc>> {
        self.signed_at
    }

    /// Returns `true` once the signatory has signed.
    pub fn has_signed(&self) -> bool {
        self.signed_at.is_some()
    }

    /// Returns `true` if the signatory is flagged as the current user.
    pub fn is_current_user(&self) -> bool {
        self.is_current_user
    }

    /// Returns a signed copy, or `None` if the signatory already signed.
    ///
    /// An existing `signed_at` is never overwritten.
    pub(crate) fn signed(&self, at: DateTime<Utc>) -> Option<Self> {
        (!self.has_signed()).then(|| Self { signed_at: Some(at), ..self.clone() })
    }
}
