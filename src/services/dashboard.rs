//! Dashboard statistics
//!
//! Headline counts across every loaded table, a handful of featured events
//! and the budget summary of the first one.

use tracing::debug;

use crate::models::{Attendee, BudgetCategory, Event, Expense, Money, Summary, Vendor};
use crate::services::budget::{budget_for_event, total_expenses};

/// Everything the dashboard page shows
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardStats {
    pub total_events: usize,
    pub total_attendees: usize,
    pub total_vendors: usize,
    /// Sum of every expense amount across all events
    pub total_expenses: Money,
    /// The first events in load order
    pub featured_events: Vec<Event>,
    /// Budget summary of the first event, if there is one
    pub featured_budget: Option<Summary>,
}

impl DashboardStats {
    pub fn compute(
        events: &[Event],
        attendees: &[Attendee],
        vendors: &[Vendor],
        expenses: &[Expense],
        categories: &[BudgetCategory],
        featured_limit: usize,
    ) -> Self {
        let featured_budget = events
            .first()
            .map(|event| budget_for_event(event.id, categories).summary());

        let stats = Self {
            total_events: events.len(),
            total_attendees: attendees.len(),
            total_vendors: vendors.len(),
            total_expenses: total_expenses(expenses),
            featured_events: events.iter().take(featured_limit).cloned().collect(),
            featured_budget,
        };

        debug!(
            events = stats.total_events,
            attendees = stats.total_attendees,
            vendors = stats.total_vendors,
            expenses = stats.total_expenses.minor(),
            "computed dashboard stats"
        );

        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, EventId, UserId, VendorCategory};
    use chrono::{NaiveDate, TimeZone, Utc};

    fn events(count: usize) -> Vec<Event> {
        let start = Utc.with_ymd_and_hms(2025, 6, 15, 9, 0, 0).unwrap();
        (0..count)
            .map(|i| Event::new(format!("Event {}", i), start, start, "Hall", UserId::new()))
            .collect()
    }

    #[test]
    fn test_empty_dashboard() {
        let stats = DashboardStats::compute(&[], &[], &[], &[], &[], 4);
        assert_eq!(stats.total_events, 0);
        assert_eq!(stats.total_expenses, Money::zero());
        assert!(stats.featured_events.is_empty());
        assert!(stats.featured_budget.is_none());
    }

    #[test]
    fn test_dashboard_counts_and_featured() {
        let events = events(6);
        let first = events[0].id;
        let categories = vec![
            BudgetCategory::new(
                first,
                Category::Venue,
                Money::from_major(5000),
                Money::from_major(4500),
            ),
            BudgetCategory::new(
                first,
                Category::Catering,
                Money::from_major(3000),
                Money::from_major(2800),
            ),
            BudgetCategory::new(
                events[1].id,
                Category::Venue,
                Money::from_major(100),
                Money::zero(),
            ),
        ];
        let date = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let expenses = vec![
            Expense::new(first, Category::Venue, Money::from_major(2500), "Venue rental", date),
            Expense::new(EventId::new(), Category::Staff, Money::from_minor(1050), "Ushers", date),
        ];
        let vendors = vec![Vendor::new("Hall", "hall@example.com", VendorCategory::Venue)];

        let stats = DashboardStats::compute(&events, &[], &vendors, &expenses, &categories, 4);

        assert_eq!(stats.total_events, 6);
        assert_eq!(stats.total_attendees, 0);
        assert_eq!(stats.total_vendors, 1);
        assert_eq!(stats.total_expenses, Money::from_minor(251050));
        assert_eq!(stats.featured_events.len(), 4);
        assert_eq!(stats.featured_events[0].id, first);

        let budget = stats.featured_budget.unwrap();
        assert_eq!(budget.total_allocated, Money::from_major(8000));
        assert_eq!(budget.spent_percentage, 91);
    }

    #[test]
    fn test_featured_budget_without_categories() {
        let events = events(1);
        let stats = DashboardStats::compute(&events, &[], &[], &[], &[], 4);
        let budget = stats.featured_budget.unwrap();
        assert_eq!(budget.total_allocated, Money::zero());
        assert_eq!(budget.spent_percentage, 0);
    }
}
