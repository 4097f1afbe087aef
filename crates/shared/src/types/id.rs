//! Typed IDs for type-safe entity references.
//!
//! Every entity gets its own UUID newtype so a `CategoryId` can never be
//! handed to a function expecting an `AccountId`.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Generates a UUID-backed ID newtype with the common trait surface.
macro_rules! entity_id {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Creates a fresh random ID.
            #[must_use]
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Wraps an existing UUID.
            #[must_use]
            pub const fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            /// Returns the underlying UUID.
            #[must_use]
            pub const fn as_uuid(&self) -> Uuid {
                self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl From<Uuid> for $name {
            fn from(uuid: Uuid) -> Self {
                Self(uuid)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                self.0.fmt(f)
            }
        }

        impl std::str::FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Uuid::parse_str(s).map(Self)
            }
        }
    };
}

entity_id!(UserId, "Unique identifier for a user.");
entity_id!(AccountId, "Unique identifier for a bank account.");
entity_id!(CategoryId, "Unique identifier for a budget category.");
entity_id!(TransactionId, "Unique identifier for a transaction.");
entity_id!(ForecastId, "Unique identifier for a monthly budget forecast.");
entity_id!(SavingsGoalId, "Unique identifier for a savings goal.");
entity_id!(
    SavingsAllocationId,
    "Unique identifier for a savings allocation."
);
entity_id!(CreditId, "Unique identifier for a tracked credit line.");
entity_id!(MemoItemId, "Unique identifier for a monthly memo item.");
