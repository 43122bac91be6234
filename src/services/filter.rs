//! List filtering
//!
//! Every list in the dashboard narrows its records the same way: an equality
//! facet (a status or category, or "all") combined with a case-insensitive
//! substring search over one or two text fields. [`Searchable`] says which
//! facet and fields a record exposes; [`filter_records`] does the rest.
//!
//! Filters are stable (input order is kept) and idempotent.

use std::fmt;
use std::str::FromStr;

use crate::models::{
    Attendee, AttendeeStatus, Category, Event, EventId, EventStatus, Expense, Guest, GuestStatus,
    Vendor, VendorCategory,
};

/// An equality constraint that may be switched off
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Facet<T> {
    /// Accept every value
    All,
    /// Accept only this value
    Only(T),
}

impl<T: PartialEq> Facet<T> {
    pub fn admits(&self, value: &T) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == value,
        }
    }
}

impl<T> Default for Facet<T> {
    fn default() -> Self {
        Self::All
    }
}

impl<T> From<Option<T>> for Facet<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::All, Self::Only)
    }
}

/// Parses `"all"` (any case) or an empty string as [`Facet::All`], anything
/// else through the value's own parser.
impl<T: FromStr> FromStr for Facet<T> {
    type Err = T::Err;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        trimmed.parse().map(Self::Only)
    }
}

impl<T: fmt::Display> fmt::Display for Facet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "all"),
            Self::Only(value) => write!(f, "{}", value),
        }
    }
}

/// A record that can be narrowed by a facet and a text search
pub trait Searchable {
    type Facet: PartialEq;

    /// The value the equality facet is compared against
    fn facet(&self) -> Self::Facet;

    /// Text fields the search string is matched against
    fn search_fields(&self) -> Vec<&str>;
}

/// A facet plus a search string, ready to test records
#[derive(Debug, Clone)]
pub struct ListFilter<F> {
    facet: Facet<F>,
    needle: String,
}

impl<F: PartialEq> ListFilter<F> {
    pub fn new(facet: Facet<F>, search: &str) -> Self {
        Self {
            facet,
            needle: search.to_lowercase(),
        }
    }

    pub fn matches<T>(&self, record: &T) -> bool
    where
        T: Searchable<Facet = F>,
    {
        self.facet.admits(&record.facet()) && self.matches_text(record)
    }

    fn matches_text<T>(&self, record: &T) -> bool
    where
        T: Searchable<Facet = F>,
    {
        self.needle.is_empty()
            || record
                .search_fields()
                .iter()
                .any(|field| field.to_lowercase().contains(&self.needle))
    }
}

/// Keep the records the filter accepts, in their original order
pub fn filter_records<T>(records: &[T], filter: &ListFilter<T::Facet>) -> Vec<T>
where
    T: Searchable + Clone,
{
    records
        .iter()
        .filter(|record| filter.matches(*record))
        .cloned()
        .collect()
}

impl Searchable for Expense {
    type Facet = Category;

    fn facet(&self) -> Category {
        self.category
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.description.as_str()]
    }
}

impl Searchable for Event {
    type Facet = EventStatus;

    fn facet(&self) -> EventStatus {
        self.status
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.description.as_str()]
    }
}

impl Searchable for Attendee {
    type Facet = AttendeeStatus;

    fn facet(&self) -> AttendeeStatus {
        self.status
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.email.as_str()]
    }
}

impl Searchable for Vendor {
    type Facet = VendorCategory;

    fn facet(&self) -> VendorCategory {
        self.category
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.email.as_str()]
    }
}

impl Searchable for Guest {
    type Facet = GuestStatus;

    fn facet(&self) -> GuestStatus {
        self.status
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.email.as_str()]
    }
}

/// Filter events by status and a search over title and description
pub fn filter_events(events: &[Event], status: Facet<EventStatus>, search: &str) -> Vec<Event> {
    filter_records(events, &ListFilter::new(status, search))
}

/// Filter attendees by event, status and a search over name and email
pub fn filter_attendees(
    attendees: &[Attendee],
    event: Facet<EventId>,
    status: Facet<AttendeeStatus>,
    search: &str,
) -> Vec<Attendee> {
    let filter = ListFilter::new(status, search);
    attendees
        .iter()
        .filter(|a| event.admits(&a.event_id) && filter.matches(*a))
        .cloned()
        .collect()
}

/// Filter vendors by category and a search over name and email
pub fn filter_vendors(
    vendors: &[Vendor],
    category: Facet<VendorCategory>,
    search: &str,
) -> Vec<Vendor> {
    filter_records(vendors, &ListFilter::new(category, search))
}

/// Filter guests by RSVP status and a search over name and email
pub fn filter_guests(guests: &[Guest], status: Facet<GuestStatus>, search: &str) -> Vec<Guest> {
    filter_records(guests, &ListFilter::new(status, search))
}
