//! Derived budget values
//!
//! None of these are stored. A [`Budget`] is a view over one event's
//! [`BudgetCategory`] rows and is rebuilt whenever the rows are loaded;
//! [`Summary`] and [`CategoryStats`] are computed from it by
//! `services::budget`.

use serde::Serialize;
use std::fmt;

use super::category::BudgetCategory;
use super::ids::EventId;
use super::money::Money;

/// Threshold classification of a percent-used figure
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Band {
    /// 75% or less used
    Nominal,
    /// More than 75%, at most 90%
    Warning,
    /// More than 90% used
    Critical,
}

impl Band {
    /// Classify a percent-used value; 90 and 75 belong to the lower band
    pub fn classify(percent_used: i64) -> Self {
        if percent_used > 90 {
            Self::Critical
        } else if percent_used > 75 {
            Self::Warning
        } else {
            Self::Nominal
        }
    }
}

impl fmt::Display for Band {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nominal => write!(f, "nominal"),
            Self::Warning => write!(f, "warning"),
            Self::Critical => write!(f, "critical"),
        }
    }
}

/// Totals for an event's whole budget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub total_allocated: Money,
    pub total_spent: Money,
    /// Allocated minus spent; negative when the event is over budget
    pub remaining: Money,
    /// Rounded percent of the allocation spent, 0 when nothing is allocated
    pub spent_percentage: i64,
}

impl Summary {
    pub fn band(&self) -> Band {
        Band::classify(self.spent_percentage)
    }
}

/// Derived figures for one budget category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryStats {
    pub remaining: Money,
    pub percent_used: i64,
    pub band: Band,
}

/// An event's budget: its categories and their combined allocation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Budget {
    pub event_id: EventId,
    pub total_allocated: Money,
    pub categories: Vec<BudgetCategory>,
}

impl Budget {
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}
