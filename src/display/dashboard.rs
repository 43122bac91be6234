//! Dashboard display formatting

use crate::config::Settings;
use crate::services::DashboardStats;

use super::{format_event_list, money};

/// Format the dashboard: headline counts, featured events and the first
/// event's budget
pub fn format_dashboard(stats: &DashboardStats, settings: &Settings) -> String {
    let mut output = String::new();

    output.push_str("Dashboard\n");
    output.push_str(&format!("  Total Events:     {:>10}\n", stats.total_events));
    output.push_str(&format!("  Total Attendees:  {:>10}\n", stats.total_attendees));
    output.push_str(&format!("  Total Vendors:    {:>10}\n", stats.total_vendors));
    output.push_str(&format!(
        "  Total Expenses:   {:>10}\n",
        money(stats.total_expenses, settings)
    ));

    output.push_str("\nUpcoming Events\n");
    output.push_str(&format_event_list(&stats.featured_events, settings));
    if !output.ends_with('\n') {
        output.push('\n');
    }

    if let (Some(event), Some(summary)) = (stats.featured_events.first(), &stats.featured_budget) {
        output.push_str(&format!("\nBudget Overview: {}\n", event.title));
        output.push_str(&format!(
            "  {} of {} spent ({}%, {})\n",
            money(summary.total_spent, settings),
            money(summary.total_allocated, settings),
            summary.spent_percentage,
            summary.band()
        ));
    }

    output
}
