//! Display formatting for terminal output
//!
//! Lists render as tables; single records and the budget summary render as
//! aligned label/value blocks. Amounts and dates follow the user's settings.

pub mod attendee;
pub mod budget;
pub mod dashboard;
pub mod event;
pub mod expense;
pub mod guest;
pub mod vendor;

pub use attendee::format_attendee_list;
pub use budget::{format_budget_summary, format_category_breakdown};
pub use dashboard::format_dashboard;
pub use event::{format_event_details, format_event_list};
pub use expense::format_expense_list;
pub use guest::format_guest_list;
pub use vendor::format_vendor_list;

use std::fmt::Write;

use chrono::{DateTime, NaiveDate, Utc};
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::config::Settings;
use crate::models::{Band, Money};

/// Render an amount with the configured currency symbol
pub fn money(amount: Money, settings: &Settings) -> String {
    amount.format_with_symbol(&settings.currency_symbol)
}

/// Render a date with the configured format, falling back to ISO 8601 when
/// the format string is invalid
pub fn date(value: NaiveDate, settings: &Settings) -> String {
    let mut out = String::new();
    match write!(out, "{}", value.format(&settings.date_format)) {
        Ok(()) => out,
        Err(_) => value.format("%Y-%m-%d").to_string(),
    }
}

/// Render a timestamp's calendar date and time of day
pub fn timestamp(value: DateTime<Utc>, settings: &Settings) -> String {
    format!("{} {}", date(value.date_naive(), settings), value.format("%H:%M"))
}

/// Short marker for a band, shown next to percentages
pub fn band_marker(band: Band) -> &'static str {
    match band {
        Band::Nominal => "",
        Band::Warning => "!",
        Band::Critical => "!!",
    }
}

/// Render rows as a table, or the fallback line when there are none
pub(crate) fn table<T: Tabled>(rows: Vec<T>, empty: &str) -> String {
    if rows.is_empty() {
        return empty.to_string();
    }
    let mut table = Table::new(rows);
    table.with(Style::psql());
    format!("{}\n", table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_money_uses_configured_symbol() {
        let mut settings = Settings::default();
        assert_eq!(money(Money::from_minor(123456), &settings), "₹1,234.56");

        settings.currency_symbol = "$".into();
        assert_eq!(money(Money::from_major(-20), &settings), "-$20.00");
    }

    #[test]
    fn test_date_formats() {
        let mut settings = Settings::default();
        let day = NaiveDate::from_ymd_opt(2025, 6, 5).unwrap();
        assert_eq!(date(day, &settings), "Jun 5, 2025");

        settings.date_format = "%Y/%m/%d %Q".into();
        assert_eq!(date(day, &settings), "2025-06-05");
    }

    #[test]
    fn test_timestamp() {
        let settings = Settings::default();
        let ts = Utc.with_ymd_and_hms(2025, 6, 15, 9, 0, 0).unwrap();
        assert_eq!(timestamp(ts, &settings), "Jun 15, 2025 09:00");
    }

    #[test]
    fn test_empty_table_uses_fallback() {
        #[derive(Tabled)]
        struct Row {
            name: &'static str,
        }
        assert_eq!(table(Vec::<Row>::new(), "Nothing here."), "Nothing here.");
        assert!(table(vec![Row { name: "Hall" }], "").contains("Hall"));
    }
}
