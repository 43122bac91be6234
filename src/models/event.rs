//! Event model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{EventId, UserId};

wire_enum! {
    /// Publication status of an event
    pub enum EventStatus {
        Draft => "draft",
        Published => "published",
        Canceled => "canceled",
        Completed => "completed",
    }
}

/// An event being planned
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,

    pub title: String,

    /// Empty when the store holds no description
    pub description: String,

    pub start: DateTime<Utc>,

    pub end: DateTime<Utc>,

    pub location: String,

    pub status: EventStatus,

    pub cover_image_url: Option<String>,

    /// User who created the event
    pub created_by: UserId,
}

impl Event {
    /// Create a new draft event
    pub fn new(
        title: impl Into<String>,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        location: impl Into<String>,
        created_by: UserId,
    ) -> Self {
        Self {
            id: EventId::new(),
            title: title.into(),
            description: String::new(),
            start,
            end,
            location: location.into(),
            status: EventStatus::Draft,
            cover_image_url: None,
            created_by,
        }
    }

    /// Length of the event in whole hours, rounded half up
    ///
    /// Negative when the end precedes the start.
    pub fn duration_hours(&self) -> i64 {
        let minutes = (self.end - self.start).num_minutes();
        (2 * minutes + 60).div_euclid(120)
    }
}

/// How many attendees and guests one event has
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Participants {
    pub attendees: usize,
    pub guests: usize,
}

impl fmt::Display for Participants {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} attendees, {} guests", self.attendees, self.guests)
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.title, self.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn event_between(start: DateTime<Utc>, end: DateTime<Utc>) -> Event {
        Event::new("Annual Tech Conference", start, end, "Convention Center", UserId::new())
    }

    #[test]
    fn test_new_event_is_draft() {
        let start = Utc.with_ymd_and_hms(2025, 6, 15, 9, 0, 0).unwrap();
        let event = event_between(start, start);
        assert_eq!(event.status, EventStatus::Draft);
        assert!(event.description.is_empty());
        assert_eq!(event.to_string(), "Annual Tech Conference (draft)");
    }

    #[test]
    fn test_duration_hours() {
        let start = Utc.with_ymd_and_hms(2025, 6, 15, 9, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2025, 6, 17, 18, 0, 0).unwrap();
        assert_eq!(event_between(start, end).duration_hours(), 57);

        let short_end = Utc.with_ymd_and_hms(2025, 6, 15, 13, 30, 0).unwrap();
        assert_eq!(event_between(start, short_end).duration_hours(), 5);

        let shorter_end = Utc.with_ymd_and_hms(2025, 6, 15, 13, 29, 0).unwrap();
        assert_eq!(event_between(start, shorter_end).duration_hours(), 4);
    }

    #[test]
    fn test_duration_hours_reversed() {
        let start = Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2025, 6, 15, 10, 0, 0).unwrap();
        assert_eq!(event_between(start, end).duration_hours(), -2);
    }

    #[test]
    fn test_status_wire_names() {
        assert_eq!(EventStatus::Canceled.to_string(), "canceled");
        assert_eq!(
            "published".parse::<EventStatus>().unwrap(),
            EventStatus::Published
        );
    }
}
