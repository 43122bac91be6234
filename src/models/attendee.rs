//! Attendee model
//!
//! People registered for an event, tracked from registration through check-in.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{AttendeeId, EventId};

wire_enum! {
    /// Registration status of an attendee
    pub enum AttendeeStatus {
        Registered => "registered",
        Attended => "attended",
        Canceled => "canceled",
        NoShow => "no-show",
    }
}

/// A registered attendee of one event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attendee {
    pub id: AttendeeId,
    pub event_id: EventId,
    pub name: String,
    pub email: String,
    pub registration_date: DateTime<Utc>,
    pub status: AttendeeStatus,
    pub ticket_type: Option<String>,
    pub check_in_time: Option<DateTime<Utc>>,
}

impl Attendee {
    /// Create a newly registered attendee
    pub fn new(
        event_id: EventId,
        name: impl Into<String>,
        email: impl Into<String>,
        registration_date: DateTime<Utc>,
    ) -> Self {
        Self {
            id: AttendeeId::new(),
            event_id,
            name: name.into(),
            email: email.into(),
            registration_date,
            status: AttendeeStatus::Registered,
            ticket_type: None,
            check_in_time: None,
        }
    }

    pub fn is_checked_in(&self) -> bool {
        self.check_in_time.is_some()
    }
}

impl fmt::Display for Attendee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <{}> ({})", self.name, self.email, self.status)
    }
}
