//! Storage rows and their mapping into records
//!
//! Rows mirror the hosted store's tables field for field (snake_case names,
//! nullable text, floating point amounts, timestamps as strings). Each row
//! converts into its record with `TryFrom`; the reverse `From` conversions
//! produce rows for snapshot files.

use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{EventtoError, EventtoResult};
use crate::models::{
    Attendee, AttendeeId, AttendeeStatus, BudgetCategory, BudgetCategoryId, Category, Event,
    EventId, EventStatus, Expense, ExpenseId, ExpenseStatus, Guest, GuestId, GuestStatus, Money,
    UserId, Vendor, VendorCategory, VendorId,
};

/// Row of the `events` table, optionally carrying its nested `budget_categories`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventRow {
    pub id: EventId,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub start_date: String,
    pub end_date: String,
    pub location: String,
    pub status: EventStatus,
    #[serde(default)]
    pub cover_image_url: Option<String>,
    pub created_by: UserId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget_categories: Option<Vec<BudgetCategoryRow>>,
}

/// Row of the `budget_categories` table
///
/// `event_id` may be missing when the row is nested inside its event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetCategoryRow {
    pub id: BudgetCategoryId,
    #[serde(default)]
    pub event_id: Option<EventId>,
    pub name: Category,
    pub allocated: f64,
    pub spent: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// Row of the `expenses` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseRow {
    pub id: ExpenseId,
    pub event_id: EventId,
    pub category: Category,
    pub amount: f64,
    pub description: String,
    pub date: String,
    #[serde(default)]
    pub vendor_id: Option<VendorId>,
    #[serde(default)]
    pub receipt_url: Option<String>,
    pub status: ExpenseStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// Row of the `vendors` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VendorRow {
    pub id: VendorId,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    pub category: VendorCategory,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// Row of the `attendees` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendeeRow {
    pub id: AttendeeId,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    pub event_id: EventId,
    pub registration_date: String,
    pub status: AttendeeStatus,
    #[serde(default)]
    pub ticket_type: Option<String>,
    #[serde(default)]
    pub check_in_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// Row of the `guests` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuestRow {
    pub id: GuestId,
    pub event_id: EventId,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    pub invited_by: UserId,
    pub status: GuestStatus,
    #[serde(default)]
    pub plus_one: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// Parse a timestamp as the store and its web forms write them
///
/// Accepts RFC 3339, zone-less date-times (read as UTC, with or without
/// seconds) and bare dates (midnight UTC).
pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();

    if let Ok(ts) = DateTime::parse_from_rfc3339(value) {
        return Some(ts.with_timezone(&Utc));
    }

    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, format) {
            return Some(naive.and_utc());
        }
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Parse a calendar date, taking the date part of a full timestamp if given one
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .ok()
        .or_else(|| parse_timestamp(value).map(|ts| ts.date_naive()))
}

fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Secs, true)
}

fn required_timestamp(
    table: &'static str,
    row_id: impl ToString,
    field: &str,
    value: &str,
) -> EventtoResult<DateTime<Utc>> {
    parse_timestamp(value).ok_or_else(|| {
        EventtoError::mapping(table, row_id, format!("invalid {} '{}'", field, value))
    })
}

fn required_amount(
    table: &'static str,
    row_id: impl ToString,
    field: &str,
    value: f64,
) -> EventtoResult<Money> {
    Money::try_from_f64(value).ok_or_else(|| {
        EventtoError::mapping(table, row_id, format!("{} {} out of range", field, value))
    })
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

impl TryFrom<EventRow> for Event {
    type Error = EventtoError;

    fn try_from(row: EventRow) -> EventtoResult<Self> {
        let start = required_timestamp("events", row.id, "start_date", &row.start_date)?;
        let end = required_timestamp("events", row.id, "end_date", &row.end_date)?;

        Ok(Self {
            id: row.id,
            title: row.title,
            description: row.description.unwrap_or_default(),
            start,
            end,
            location: row.location,
            status: row.status,
            cover_image_url: non_blank(row.cover_image_url),
            created_by: row.created_by,
        })
    }
}

impl EventRow {
    /// Split off the nested categories, stamping each with this event's id
    ///
    /// A nested category that names a different event keeps its own id and
    /// is returned as-is; the caller decides what to do with it.
    pub fn take_budget_categories(&mut self) -> Vec<BudgetCategoryRow> {
        let event_id = self.id;
        self.budget_categories
            .take()
            .unwrap_or_default()
            .into_iter()
            .map(|mut row| {
                if row.event_id.is_none() {
                    row.event_id = Some(event_id);
                }
                row
            })
            .collect()
    }
}

impl TryFrom<BudgetCategoryRow> for BudgetCategory {
    type Error = EventtoError;

    fn try_from(row: BudgetCategoryRow) -> EventtoResult<Self> {
        let event_id = row
            .event_id
            .ok_or_else(|| EventtoError::mapping("budget_categories", row.id, "missing event_id"))?;

        Ok(Self {
            id: row.id,
            event_id,
            name: row.name,
            allocated: required_amount("budget_categories", row.id, "allocated", row.allocated)?,
            spent: required_amount("budget_categories", row.id, "spent", row.spent)?,
        })
    }
}

impl TryFrom<ExpenseRow> for Expense {
    type Error = EventtoError;

    fn try_from(row: ExpenseRow) -> EventtoResult<Self> {
        let date = parse_date(&row.date).ok_or_else(|| {
            EventtoError::mapping("expenses", row.id, format!("invalid date '{}'", row.date))
        })?;

        Ok(Self {
            id: row.id,
            event_id: row.event_id,
            category: row.category,
            amount: required_amount("expenses", row.id, "amount", row.amount)?,
            description: row.description,
            date,
            vendor_id: row.vendor_id,
            receipt_url: non_blank(row.receipt_url),
            status: row.status,
        })
    }
}

impl From<VendorRow> for Vendor {
    fn from(row: VendorRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            email: row.email,
            phone: row.phone.unwrap_or_default(),
            category: row.category,
            address: row.address.unwrap_or_default(),
            website: row.website.unwrap_or_default(),
            notes: row.notes.unwrap_or_default(),
        }
    }
}

impl TryFrom<AttendeeRow> for Attendee {
    type Error = EventtoError;

    fn try_from(row: AttendeeRow) -> EventtoResult<Self> {
        let registration_date = required_timestamp(
            "attendees",
            row.id,
            "registration_date",
            &row.registration_date,
        )?;
        let check_in_time = match non_blank(row.check_in_time) {
            Some(value) => Some(required_timestamp("attendees", row.id, "check_in_time", &value)?),
            None => None,
        };

        Ok(Self {
            id: row.id,
            event_id: row.event_id,
            name: row.name.unwrap_or_default(),
            email: row.email.unwrap_or_default(),
            registration_date,
            status: row.status,
            ticket_type: non_blank(row.ticket_type),
            check_in_time,
        })
    }
}

impl From<GuestRow> for Guest {
    fn from(row: GuestRow) -> Self {
        Self {
            id: row.id,
            event_id: row.event_id,
            name: row.name,
            email: row.email,
            phone: non_blank(row.phone),
            invited_by: row.invited_by,
            status: row.status,
            plus_one: row.plus_one,
        }
    }
}

impl From<&Event> for EventRow {
    fn from(event: &Event) -> Self {
        Self {
            id: event.id,
            title: event.title.clone(),
            description: Some(event.description.clone()),
            start_date: format_timestamp(&event.start),
            end_date: format_timestamp(&event.end),
            location: event.location.clone(),
            status: event.status,
            cover_image_url: event.cover_image_url.clone(),
            created_by: event.created_by,
            created_at: None,
            budget_categories: None,
        }
    }
}

impl From<&BudgetCategory> for BudgetCategoryRow {
    fn from(category: &BudgetCategory) -> Self {
        Self {
            id: category.id,
            event_id: Some(category.event_id),
            name: category.name,
            allocated: category.allocated.to_f64(),
            spent: category.spent.to_f64(),
            created_at: None,
        }
    }
}

impl From<&Expense> for ExpenseRow {
    fn from(expense: &Expense) -> Self {
        Self {
            id: expense.id,
            event_id: expense.event_id,
            category: expense.category,
            amount: expense.amount.to_f64(),
            description: expense.description.clone(),
            date: expense.date.format("%Y-%m-%d").to_string(),
            vendor_id: expense.vendor_id,
            receipt_url: expense.receipt_url.clone(),
            status: expense.status,
            created_at: None,
        }
    }
}

impl From<&Vendor> for VendorRow {
    fn from(vendor: &Vendor) -> Self {
        Self {
            id: vendor.id,
            name: vendor.name.clone(),
            email: vendor.email.clone(),
            phone: Some(vendor.phone.clone()),
            category: vendor.category,
            address: Some(vendor.address.clone()),
            website: Some(vendor.website.clone()),
            notes: Some(vendor.notes.clone()),
            created_at: None,
        }
    }
}

impl From<&Attendee> for AttendeeRow {
    fn from(attendee: &Attendee) -> Self {
        Self {
            id: attendee.id,
            name: Some(attendee.name.clone()),
            email: Some(attendee.email.clone()),
            event_id: attendee.event_id,
            registration_date: format_timestamp(&attendee.registration_date),
            status: attendee.status,
            ticket_type: attendee.ticket_type.clone(),
            check_in_time: attendee.check_in_time.as_ref().map(format_timestamp),
            created_at: None,
        }
    }
}

impl From<&Guest> for GuestRow {
    fn from(guest: &Guest) -> Self {
        Self {
            id: guest.id,
            event_id: guest.event_id,
            name: guest.name.clone(),
            email: guest.email.clone(),
            phone: guest.phone.clone(),
            invited_by: guest.invited_by,
            status: guest.status,
            plus_one: guest.plus_one,
            created_at: None,
        }
    }
}

/// Map every row of a table, stopping at the first row that fails
pub fn map_rows<R, T>(rows: Vec<R>) -> EventtoResult<Vec<T>>
where
    T: TryFrom<R, Error = EventtoError>,
{
    rows.into_iter().map(T::try_from).collect()
}
