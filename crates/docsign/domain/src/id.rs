use alloc::string::String;
use core::fmt;

use uuid::Uuid;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
        pub struct $name(String);

        impl $name {
            /// Returns the identifier as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Returns `true` if the identifier is the empty string.
            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.into())
            }
        }

        impl From<$name> for String {
            fn from($name(id): $name) -> Self {
                id
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

string_id! {
    /// A stable identifier for a document.
    DocumentId
}

string_id! {
    /// A stable identifier for the company owning a document.
    CompanyId
}

string_id! {
    /// A stable identifier for a party required to sign a document.
    SignatoryId
}

string_id! {
    /// A stable identifier for a compliance action definition in the catalog.
    ActionId
}

impl From<Uuid> for DocumentId {
    /// Converts a UUID into a `doc-` prefixed document id.
    fn from(uuid: Uuid) -> Self {
        Self(alloc::format!("doc-{uuid}"))
    }
}
