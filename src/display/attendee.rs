//! Attendee display formatting

use tabled::Tabled;

use crate::config::Settings;
use crate::models::Attendee;

use super::{table, timestamp};

#[derive(Tabled)]
struct AttendeeRow<'a> {
    #[tabled(rename = "Name")]
    name: &'a str,
    #[tabled(rename = "Email")]
    email: &'a str,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Ticket")]
    ticket: &'a str,
    #[tabled(rename = "Registered")]
    registered: String,
    #[tabled(rename = "Checked In")]
    checked_in: String,
}

/// Format attendees as a table
pub fn format_attendee_list(attendees: &[Attendee], settings: &Settings) -> String {
    let rows = attendees
        .iter()
        .map(|attendee| AttendeeRow {
            name: &attendee.name,
            email: &attendee.email,
            status: attendee.status.to_string(),
            ticket: attendee.ticket_type.as_deref().unwrap_or("-"),
            registered: timestamp(attendee.registration_date, settings),
            checked_in: attendee
                .check_in_time
                .map(|ts| timestamp(ts, settings))
                .unwrap_or_else(|| "-".to_string()),
        })
        .collect();

    table(rows, "No attendees found.")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AttendeeStatus, EventId};
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_format_attendee_list() {
        let settings = Settings::default();
        assert_eq!(format_attendee_list(&[], &settings), "No attendees found.");

        let registered = Utc.with_ymd_and_hms(2025, 5, 1, 10, 20, 0).unwrap();
        let mut attendee = Attendee::new(
            EventId::new(),
            "Bob Smith",
            "bob@example.com",
            registered,
        );
        attendee.ticket_type = Some("VIP".into());
        attendee.status = AttendeeStatus::NoShow;

        let output = format_attendee_list(&[attendee], &settings);
        assert!(output.contains("Bob Smith"));
        assert!(output.contains("VIP"));
        assert!(output.contains("no-show"));
        assert!(output.contains("May 1, 2025 10:20"));
    }
}
