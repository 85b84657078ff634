//! Flat fees charged against a company's billing ledger.

use alloc::string::String;
use core::fmt;

use bon::Builder;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A flat fee in whole units of `currency`.
#[derive(Debug, Clone, PartialEq, Eq, Builder)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Fee {
    /// The amount charged.
    amount: u64,

    /// The ISO 4217 currency code, e.g. `MYR`.
    #[builder(into)]
    currency: String,
}

impl Fee {
    /// Returns the amount charged.
    pub fn amount(&self) -> u64 {
        self.amount
    }

    /// Returns the currency code.
    pub fn currency(&self) -> &str {
        &self.currency
    }
}

impl fmt::Display for Fee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.currency, self.amount)
    }
}
