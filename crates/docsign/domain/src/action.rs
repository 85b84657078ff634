//! Compliance action definitions.
//!
//! Actions form a read-only catalog. Documents only refer to them by
//! [`ActionId`] to show which action they were produced for.

use alloc::{string::String, vec::Vec};

use bon::Builder;
use strum::{Display, EnumString, IntoStaticStr};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::ActionId;

/// The area of company administration an action belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, IntoStaticStr, EnumString, Display)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ActionCategory {
    /// Board and officer matters.
    Governance,
    /// Share capital and ownership.
    Shares,
    /// Day to day operations.
    Operations,
    /// Statutory compliance.
    Compliance,
}

/// How involved an action is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, IntoStaticStr, EnumString, Display)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Complexity {
    /// A single filing or resolution.
    Low,
    /// Several parties or filings involved.
    Medium,
    /// Involves duties, valuations or special resolutions.
    High,
}

/// Service fees per subscription plan.
///
/// A plan fee of `None` means the action is included in that plan.
#[derive(Debug, Clone, PartialEq, Eq, Builder)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ActionPricing {
    /// Fee for Basic plan subscribers.
    basic: u64,

    /// Fee for Essential plan subscribers.
    #[cfg_attr(feature = "serde", serde(default))]
    essential: Option<u64>,

    /// Fee for Pro plan subscribers.
    #[cfg_attr(feature = "serde", serde(default))]
    pro: Option<u64>,

    /// External government fees, charged on every plan.
    #[builder(default)]
    #[cfg_attr(feature = "serde", serde(default))]
    govt_fee: u64,
}

/// A single step of an action.
#[derive(Debug, Clone, PartialEq, Eq, Builder)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ActionStep {
    /// The step title.
    #[builder(into)]
    pub title: String,

    /// What happens in this step.
    #[builder(into)]
    pub description: String,
}

/// A frequently asked question about an action.
#[derive(Debug, Clone, PartialEq, Eq, Builder)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Faq {
    #[allow(missing_docs)]
    #[builder(into)]
    pub question: String,

    #[allow(missing_docs)]
    #[builder(into)]
    pub answer: String,
}

/// A compliance action the secretarial service performs for a company.
#[derive(Debug, Clone, PartialEq, Eq, Builder)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ComplianceAction {
    /// The catalog identifier.
    #[builder(into)]
    id: ActionId,

    /// The display title.
    #[builder(into)]
    title: String,

    /// A one line summary.
    #[builder(into)]
    short_description: String,

    /// The category of the action.
    category: ActionCategory,

    /// How long the action usually takes, e.g. `2-3 Business Days`.
    #[builder(into)]
    estimated_time: String,

    /// How involved the action is.
    complexity: Complexity,

    /// Plan-dependent pricing.
    pricing: ActionPricing,

    /// The steps performed, in order.
    #[builder(default)]
    #[cfg_attr(feature = "serde", serde(default))]
    steps: Vec<ActionStep>,

    /// Documents the company must provide.
    #[builder(default)]
    #[cfg_attr(feature = "serde", serde(default))]
    required_documents: Vec<String>,

    /// Frequently asked questions.
    #[builder(default)]
    #[cfg_attr(feature = "serde", serde(default))]
    faq: Vec<Faq>,
}

impl ActionPricing {
    /// Returns the Basic plan fee.
    pub fn basic(&self) -> u64 {
        self.basic
    }

    /// Returns the Essential plan fee, `None` if included.
    pub fn essential(&self) -> Option<u64> {
        self.essential
    }

    /// Returns the Pro plan fee, `None` if included.
    pub fn pro(&self) -> Option<u64> {
        self.pro
    }

    /// Returns the government fee.
    pub fn govt_fee(&self) -> u64 {
        self.govt_fee
    }
}

impl ComplianceAction {
    /// Returns the catalog identifier.
    pub fn id(&self) -> &ActionId {
        &self.id
    }

    /// Returns the display title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the one line summary.
    pub fn short_description(&self) -> &str {
        &self.short_description
    }

    /// Returns the category.
    pub fn category(&self) -> ActionCategory {
        self.category
    }

    /// Returns the estimated duration label.
    pub fn estimated_time(&self) -> &str {
        &self.estimated_time
    }

    /// Returns the complexity.
    pub fn complexity(&self) -> Complexity {
        self.complexity
    }

    /// Returns the pricing.
    pub fn pricing(&self) -> &ActionPricing {
        &self.pricing
    }

    /// Returns the steps in order.
    pub fn steps(&self) -> &[ActionStep] {
        &self.steps
    }

    /// Returns the documents the company must provide.
    pub fn required_documents(&self) -> &[String] {
        &self.required_documents
    }

    /// Returns the frequently asked questions.
    pub fn faq(&self) -> &[Faq] {
        &self.faq
    }
}
