//! Budget display formatting
//!
//! The summary block behind the budget page and the per-category breakdown
//! table with its progress bands.

use tabled::Tabled;

use crate::config::Settings;
use crate::models::{Budget, Event, Summary};

use super::{band_marker, money, table};

/// Width of the text progress bar in the summary
const BAR_WIDTH: usize = 20;

/// Format an event's budget totals
pub fn format_budget_summary(event: &Event, summary: &Summary, settings: &Settings) -> String {
    let mut output = String::new();

    output.push_str(&format!("Budget: {}\n", event.title));
    output.push_str(&format!(
        "  Total Budget:  {:>14}\n",
        money(summary.total_allocated, settings)
    ));
    output.push_str(&format!(
        "  Total Spent:   {:>14}\n",
        money(summary.total_spent, settings)
    ));
    output.push_str(&format!(
        "  Remaining:     {:>14}\n",
        money(summary.remaining, settings)
    ));
    output.push_str(&format!(
        "  Used:          {} {}% ({})\n",
        progress_bar(summary.spent_percentage),
        summary.spent_percentage,
        summary.band()
    ));

    if summary.remaining.is_negative() {
        output.push_str(&format!(
            "\nOver budget by {}\n",
            money(-summary.remaining, settings)
        ));
    }

    output
}

fn progress_bar(percent: i64) -> String {
    let clamped = percent.clamp(0, 100) as usize;
    let filled = (clamped * BAR_WIDTH + 50) / 100;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(BAR_WIDTH - filled))
}

#[derive(Tabled)]
struct CategoryRow {
    #[tabled(rename = "Category")]
    category: &'static str,
    #[tabled(rename = "Allocated")]
    allocated: String,
    #[tabled(rename = "Spent")]
    spent: String,
    #[tabled(rename = "Remaining")]
    remaining: String,
    #[tabled(rename = "Used")]
    used: String,
    #[tabled(rename = "Band")]
    band: String,
}

/// Format the per-category breakdown of a budget
pub fn format_category_breakdown(budget: &Budget, settings: &Settings) -> String {
    let rows = budget
        .breakdown()
        .into_iter()
        .map(|(category, stats)| CategoryRow {
            category: category.name.label(),
            allocated: money(category.allocated, settings),
            spent: money(category.spent, settings),
            remaining: money(stats.remaining, settings),
            used: format!("{}%{}", stats.percent_used, band_marker(stats.band)),
            band: stats.band.to_string(),
        })
        .collect();

    table(rows, "No budget categories for this event.")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BudgetCategory, Category, Money, UserId};
    use crate::services::budget_for_event;
    use chrono::{TimeZone, Utc};

    fn event() -> Event {
        let start = Utc.with_ymd_and_hms(2025, 6, 15, 9, 0, 0).unwrap();
        Event::new("Annual Tech Conference", start, start, "Downtown", UserId::new())
    }

    #[test]
    fn test_progress_bar() {
        assert_eq!(progress_bar(0), format!("[{}]", "-".repeat(20)));
        assert_eq!(progress_bar(50), format!("[{}{}]", "#".repeat(10), "-".repeat(10)));
        assert_eq!(progress_bar(140), format!("[{}]", "#".repeat(20)));
        assert_eq!(progress_bar(-5), format!("[{}]", "-".repeat(20)));
    }

    #[test]
    fn test_format_summary() {
        let event = event();
        let categories = vec![
            BudgetCategory::new(
                event.id,
                Category::Venue,
                Money::from_major(5000),
                Money::from_major(4500),
            ),
            BudgetCategory::new(
                event.id,
                Category::Catering,
                Money::from_major(3000),
                Money::from_major(2800),
            ),
        ];
        let summary = budget_for_event(event.id, &categories).summary();

        let output = format_budget_summary(&event, &summary, &Settings::default());
        assert!(output.contains("Budget: Annual Tech Conference"));
        assert!(output.contains("₹8,000.00"));
        assert!(output.contains("₹7,300.00"));
        assert!(output.contains("₹700.00"));
        assert!(output.contains("91% (critical)"));
        assert!(!output.contains("Over budget"));
    }

    #[test]
    fn test_format_summary_over_budget() {
        let event = event();
        let categories = vec![BudgetCategory::new(
            event.id,
            Category::Staff,
            Money::from_major(100),
            Money::from_major(150),
        )];
        let summary = budget_for_event(event.id, &categories).summary();

        let output = format_budget_summary(&event, &summary, &Settings::default());
        assert!(output.contains("150% (critical)"));
        assert!(output.contains("Over budget by ₹50.00"));
    }

    #[test]
    fn test_format_breakdown() {
        let event = event();
        let categories = vec![
            BudgetCategory::new(
                event.id,
                Category::Marketing,
                Money::from_major(2000),
                Money::from_major(1500),
            ),
            BudgetCategory::new(event.id, Category::Other, Money::zero(), Money::zero()),
        ];
        let budget = budget_for_event(event.id, &categories);

        let output = format_category_breakdown(&budget, &Settings::default());
        assert!(output.contains("Marketing"));
        assert!(output.contains("75%"));
        assert!(output.contains("nominal"));
        assert!(output.contains("0%"));

        let empty = budget_for_event(event.id, &[]);
        assert_eq!(
            format_category_breakdown(&empty, &Settings::default()),
            "No budget categories for this event."
        );
    }
}
