//! Opaque identifiers for plan nodes, strategies, resources and saved
//! processes.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

macro_rules! opaque_id {
    ($(#[$meta:meta])* $name:ident, $prefix:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Generates a fresh identifier. Identifiers are never reused.
            pub fn generate() -> Self {
                Self(format!(concat!($prefix, "-{}"), Uuid::new_v4().simple()))
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

opaque_id!(
    /// Identity of a [`Step`](super::Step), unique across the whole tree.
    StepId,
    "step"
);
opaque_id!(
    /// Identity of a [`ParallelGroup`](super::ParallelGroup).
    GroupId,
    "group"
);
opaque_id!(
    /// Identity of a [`Strategy`](super::Strategy).
    StrategyId,
    "strategy"
);
opaque_id!(
    /// Identity of a [`Resource`](super::Resource) in the session registry.
    ResourceId,
    "res"
);
opaque_id!(
    /// Identity of a [`SavedProcess`](super::SavedProcess).
    ProcessId,
    "proc"
);
