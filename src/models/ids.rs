//! Strongly-typed ID wrappers for all entity types
//!
//! The hosted store keys every table by UUID; wrapping each one keeps an
//! expense id from being passed where an event id is expected.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Macro to generate ID newtype wrappers
macro_rules! define_id {
    ($name:ident, $display_prefix:literal) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Create a new random ID
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Create an ID from an existing UUID
            pub fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            /// Get the underlying UUID
            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}{}", $display_prefix, &self.0.to_string()[..8])
            }
        }

        impl From<Uuid> for $name {
            fn from(uuid: Uuid) -> Self {
                Self(uuid)
            }
        }

        impl FromStr for $name {
            type Err = uuid::Error;

            /// Accepts a bare UUID or one carrying this table's display
            /// prefix in any case, e.g. `EVT-<uuid>`
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let s = s.trim();
                let body = match s.get(..$display_prefix.len()) {
                    Some(prefix) if prefix.eq_ignore_ascii_case($display_prefix) => {
                        &s[$display_prefix.len()..]
                    }
                    _ => s,
                };
                Uuid::parse_str(body).map(Self)
            }
        }
    };
}

define_id!(EventId, "evt-");
define_id!(BudgetCategoryId, "bud-");
define_id!(ExpenseId, "exp-");
define_id!(VendorId, "ven-");
define_id!(AttendeeId, "att-");
define_id!(GuestId, "gst-");
define_id!(UserId, "usr-");
