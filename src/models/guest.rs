//! Guest model
//!
//! Invited guests are separate from registered attendees: they are added by
//! an organiser and may bring a plus-one.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{EventId, GuestId, UserId};

wire_enum! {
    /// RSVP status of a guest
    pub enum GuestStatus {
        Invited => "invited",
        Confirmed => "confirmed",
        Declined => "declined",
        Attended => "attended",
    }
}

/// A guest invited to one event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Guest {
    pub id: GuestId,
    pub event_id: EventId,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    /// Organiser who sent the invitation
    pub invited_by: UserId,
    pub status: GuestStatus,
    pub plus_one: bool,
}

impl Guest {
    /// Create a newly invited guest without a plus-one
    pub fn new(
        event_id: EventId,
        name: impl Into<String>,
        email: impl Into<String>,
        invited_by: UserId,
    ) -> Self {
        Self {
            id: GuestId::new(),
            event_id,
            name: name.into(),
            email: email.into(),
            phone: None,
            invited_by,
            status: GuestStatus::Invited,
            plus_one: false,
        }
    }
}

impl fmt::Display for Guest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let plus_one = if self.plus_one { " +1" } else { "" };
        write!(f, "{}{} <{}> ({})", self.name, plus_one, self.email, self.status)
    }
}
