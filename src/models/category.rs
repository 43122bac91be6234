//! Budget category model
//!
//! An event's budget is split into a fixed set of buckets. Each bucket has an
//! allocated amount and a running spent amount. Nothing stops `spent` from
//! exceeding `allocated`; overspend is a normal state.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{BudgetCategoryId, EventId};
use super::money::Money;

wire_enum! {
    /// The budget bucket shared by budget categories and expenses
    pub enum Category {
        Venue => "venue",
        Catering => "catering",
        Marketing => "marketing",
        Staff => "staff",
        Other => "other",
    }
}

impl Category {
    /// Capitalized label for tables and chart legends
    pub fn label(&self) -> &'static str {
        match self {
            Self::Venue => "Venue",
            Self::Catering => "Catering",
            Self::Marketing => "Marketing",
            Self::Staff => "Staff",
            Self::Other => "Other",
        }
    }
}

/// A budget bucket for one event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetCategory {
    pub id: BudgetCategoryId,

    /// The event that owns this category
    pub event_id: EventId,

    pub name: Category,

    /// Amount set aside for this bucket
    pub allocated: Money,

    /// Amount already spent from this bucket
    pub spent: Money,
}

impl BudgetCategory {
    /// Create a new budget category
    pub fn new(event_id: EventId, name: Category, allocated: Money, spent: Money) -> Self {
        Self {
            id: BudgetCategoryId::new(),
            event_id,
            name,
            allocated,
            spent,
        }
    }

    /// Allocated minus spent; negative when overspent
    pub fn remaining(&self) -> Money {
        self.allocated - self.spent
    }

    pub fn is_overspent(&self) -> bool {
        self.spent > self.allocated
    }
}

impl fmt::Display for BudgetCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} of {}", self.name.label(), self.spent, self.allocated)
    }
}
