//! Core data models for eventto
//!
//! View records for everything the dashboard shows: events, their budget
//! categories and expenses, vendors, attendees and guests, plus the derived
//! budget values computed from them.

use std::fmt;

/// Generates a closed enumeration whose wire form is a fixed lowercase name.
///
/// The same name is used by serde, `Display` and `FromStr`, so a status read
/// from a snapshot file and one typed on the command line compare equal.
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $wire:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        pub enum $name {
            $( $(#[$vmeta])* #[serde(rename = $wire)] $variant ),+
        }

        impl $name {
            /// Every variant in declaration order
            pub fn all() -> &'static [Self] {
                &[$(Self::$variant),+]
            }

            /// The wire name of this variant
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $wire),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::models::ParseKindError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let wanted = s.trim().to_lowercase();
                Self::all()
                    .iter()
                    .copied()
                    .find(|v| v.as_str() == wanted)
                    .ok_or_else(|| $crate::models::ParseKindError {
                        kind: stringify!($name),
                        value: s.to_string(),
                    })
            }
        }
    };
}

pub mod attendee;
pub mod budget;
pub mod category;
pub mod event;
pub mod expense;
pub mod guest;
pub mod ids;
pub mod money;
pub mod vendor;

pub use attendee::{Attendee, AttendeeStatus};
pub use budget::{Band, Budget, CategoryStats, Summary};
pub use category::{BudgetCategory, Category};
pub use event::{Event, EventStatus, Participants};
pub use expense::{Expense, ExpenseStatus};
pub use guest::{Guest, GuestStatus};
pub use ids::{AttendeeId, BudgetCategoryId, EventId, ExpenseId, GuestId, UserId, VendorId};
pub use money::Money;
pub use vendor::{Vendor, VendorCategory};

/// A status or category name that is not one of the known values
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseKindError {
    pub kind: &'static str,
    pub value: String,
}

impl fmt::Display for ParseKindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown {}: '{}'", self.kind, self.value)
    }
}

impl std::error::Error for ParseKindError {}
