//! Expense model
//!
//! Individual spend records charged against an event's budget bucket.
//! Status is informational; nothing here moves an expense between states.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::Category;
use super::ids::{EventId, ExpenseId, VendorId};
use super::money::Money;

wire_enum! {
    /// Approval status of an expense
    pub enum ExpenseStatus {
        Pending => "pending",
        Approved => "approved",
        Rejected => "rejected",
    }
}

/// A single expense for an event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: ExpenseId,

    /// The event this expense belongs to
    pub event_id: EventId,

    /// Budget bucket the expense is charged to
    pub category: Category,

    pub amount: Money,

    /// Free-text description, searched by the expense list
    pub description: String,

    pub date: NaiveDate,

    /// Vendor that was paid, if recorded
    pub vendor_id: Option<VendorId>,

    pub receipt_url: Option<String>,

    pub status: ExpenseStatus,
}

impl Expense {
    /// Create a new pending expense
    pub fn new(
        event_id: EventId,
        category: Category,
        amount: Money,
        description: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: ExpenseId::new(),
            event_id,
            category,
            amount,
            description: description.into(),
            date,
            vendor_id: None,
            receipt_url: None,
            status: ExpenseStatus::Pending,
        }
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} ({}, {})",
            self.date, self.description, self.amount, self.status
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_expense_is_pending() {
        let expense = Expense::new(
            EventId::new(),
            Category::Venue,
            Money::from_major(2500),
            "Venue rental",
            NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
        );
        assert_eq!(expense.status, ExpenseStatus::Pending);
        assert!(expense.vendor_id.is_none());
        assert_eq!(
            expense.to_string(),
            "2025-06-01 Venue rental (₹2,500.00, pending)"
        );
    }

    #[test]
    fn test_status_parse() {
        assert_eq!(
            "APPROVED".parse::<ExpenseStatus>().unwrap(),
            ExpenseStatus::Approved
        );
        let err = "paid".parse::<ExpenseStatus>().unwrap_err();
        assert_eq!(err.to_string(), "Unknown ExpenseStatus: 'paid'");
    }
}
