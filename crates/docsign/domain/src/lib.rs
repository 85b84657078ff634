//! Domain types for the document signature ledger.
//!
//! This crate provides the core domain models for tracking company documents, the
//! signatories each document requires, and the compliance actions documents relate to.
//! Document status is never stored: it is projected from signatory state by
//! [`derive_status`](document::derive_status) every time it is read.

#![no_std]

extern crate alloc;

pub mod action;
pub mod document;
pub mod error;
pub mod fee;
pub mod signatory;

mod id;

pub use self::id::{ActionId, CompanyId, DocumentId, SignatoryId};

use bon::Builder;
use chrono::{DateTime, Utc};
use dissolve_derive::Dissolve;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Timestamp metadata for tracking entity creation and modification times.
///
/// This struct is commonly used as auxiliary data (`AUX`) in other domain types
/// to track when entities were registered and last updated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Builder, Dissolve)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Timestamps {
    /// The timestamp when the entity was created.
    created_at: DateTime<Utc>,
    /// The timestamp when the entity was last updated.
    updated_at: DateTime<Utc>,
}

impl Timestamps {
    /// Creates timestamps for an entity created at `at`.
    pub fn new(at: DateTime<Utc>) -> Self {
        Self { created_at: at, updated_at: at }
    }

    /// Returns the creation timestamp.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the last update timestamp.
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Returns a copy with the update timestamp moved to `at`.
    pub fn touched(self, at: DateTime<Utc>) -> Self {
        Self { updated_at: at, ..self }
    }
}
