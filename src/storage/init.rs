//! Storage initialization
//!
//! Handles first-run setup and the optional sample data set

use std::path::Path;

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::config::paths::EventtoPaths;
use crate::error::{EventtoError, EventtoResult};
use crate::models::{
    Attendee, AttendeeId, BudgetCategory, BudgetCategoryId, Category, Event, EventId,
    EventStatus, Expense, ExpenseId, ExpenseStatus, Guest, GuestId, GuestStatus, Money, UserId,
    Vendor, VendorCategory, VendorId,
};

use super::file_io::{read_json, write_json_atomic};
use super::rows::{AttendeeRow, BudgetCategoryRow, EventRow, ExpenseRow, GuestRow, VendorRow};

/// Initialize storage for a fresh installation
///
/// Creates the data directory and an empty snapshot for every table that
/// does not have one yet. Existing snapshots are left alone.
pub fn initialize_storage(paths: &EventtoPaths) -> EventtoResult<()> {
    paths.ensure_directories()?;

    for table in table_files(paths) {
        if !table.exists() {
            write_json_atomic(&table, &Vec::<serde_json::Value>::new())?;
        }
    }

    Ok(())
}

/// Check if storage needs initialization
pub fn needs_initialization(paths: &EventtoPaths) -> bool {
    table_files(paths).iter().any(|table| !table.exists())
}

fn table_files(paths: &EventtoPaths) -> [std::path::PathBuf; 6] {
    [
        paths.events_file(),
        paths.budget_categories_file(),
        paths.expenses_file(),
        paths.vendors_file(),
        paths.attendees_file(),
        paths.guests_file(),
    ]
}

/// Fixed sample ids so repeated runs produce identical snapshots
fn sample_uuid(n: u128) -> Uuid {
    Uuid::from_u128(0x6f1c_2d3e_0000_4000_8000_0000_0000_0000 | n)
}

fn utc(y: i32, m: u32, d: u32, h: u32, min: u32) -> EventtoResult<DateTime<Utc>> {
    Utc.with_ymd_and_hms(y, m, d, h, min, 0)
        .single()
        .ok_or_else(|| EventtoError::Storage(format!("invalid sample timestamp {y}-{m}-{d}")))
}

fn write_table<R, T>(path: &Path, records: &[T]) -> EventtoResult<()>
where
    R: Serialize + for<'a> From<&'a T>,
{
    let rows: Vec<R> = records.iter().map(R::from).collect();
    write_json_atomic(path, &rows)
}

/// Write the sample data set: three events with budgets, expenses, vendors,
/// attendees and guests
///
/// Refuses to run over an events table that already holds rows.
pub fn write_sample_data(paths: &EventtoPaths) -> EventtoResult<()> {
    let existing: Vec<EventRow> = read_json(paths.events_file())?;
    if !existing.is_empty() {
        return Err(EventtoError::Storage(format!(
            "{} already holds {} events; refusing to overwrite with sample data",
            paths.events_file().display(),
            existing.len()
        )));
    }

    let organizer = UserId::from_uuid(sample_uuid(0xa1));

    let mut conference = Event::new(
        "Annual Tech Conference",
        utc(2025, 6, 15, 9, 0)?,
        utc(2025, 6, 17, 18, 0)?,
        "Convention Center, Downtown",
        organizer,
    );
    conference.id = EventId::from_uuid(sample_uuid(0x01));
    conference.description = "A conference for tech enthusiasts and professionals".into();
    conference.status = EventStatus::Published;

    let mut launch = Event::new(
        "Product Launch Party",
        utc(2025, 7, 20, 18, 0)?,
        utc(2025, 7, 20, 22, 0)?,
        "Grand Ballroom, Luxury Hotel",
        organizer,
    );
    launch.id = EventId::from_uuid(sample_uuid(0x02));
    launch.description = "Celebration for the launch of our new product line".into();

    let mut retreat = Event::new(
        "Team Building Retreat",
        utc(2025, 8, 10, 8, 0)?,
        utc(2025, 8, 12, 17, 0)?,
        "Mountain Resort",
        organizer,
    );
    retreat.id = EventId::from_uuid(sample_uuid(0x03));
    retreat.description = "A weekend retreat for team bonding and strategic planning".into();
    retreat.status = EventStatus::Published;

    // (category, allocated, spent) in whole rupees for the conference; the
    // other events scale the same plan by (allocated %, spent %)
    let plan = [
        (Category::Venue, 5000, 4500),
        (Category::Catering, 3000, 2800),
        (Category::Marketing, 2000, 1500),
        (Category::Staff, 1500, 1200),
        (Category::Other, 1000, 600),
    ];
    let scales = [(conference.id, 100, 100), (launch.id, 70, 50), (retreat.id, 120, 80)];

    let mut categories = Vec::new();
    for (event_index, (event_id, allocated_pct, spent_pct)) in scales.into_iter().enumerate() {
        for (category_index, (name, allocated, spent)) in plan.into_iter().enumerate() {
            let allocated =
                Money::from_minor(Money::from_major(allocated).minor() * allocated_pct / 100);
            let spent = Money::from_minor(Money::from_major(spent).minor() * spent_pct / 100);
            let mut category = BudgetCategory::new(event_id, name, allocated, spent);
            category.id = BudgetCategoryId::from_uuid(sample_uuid(
                0xb00 + (event_index as u128) * 0x10 + category_index as u128,
            ));
            categories.push(category);
        }
    }

    let vendor_plan = [
        (
            0xd1,
            "Grand Convention Center",
            "bookings@grandconvention.com",
            VendorCategory::Venue,
            "123-456-7890",
            "123 Main St, Downtown",
            "www.grandconvention.com",
            "Preferred venue for large events",
        ),
        (
            0xd2,
            "Gourmet Catering Co.",
            "info@gourmetcatering.com",
            VendorCategory::Catering,
            "234-567-8901",
            "456 Food Ave, Culinary District",
            "www.gourmetcatering.com",
            "Excellent for corporate events",
        ),
        (
            0xd3,
            "MediaBoost Marketing",
            "campaigns@mediaboost.com",
            VendorCategory::Marketing,
            "345-678-9012",
            "789 Digital Blvd, Media Center",
            "www.mediaboost.com",
            "Specializes in event promotion",
        ),
    ];
    let vendors: Vec<Vendor> = vendor_plan
        .into_iter()
        .map(|(n, name, email, category, phone, address, website, notes)| {
            let mut vendor = Vendor::new(name, email, category);
            vendor.id = VendorId::from_uuid(sample_uuid(n));
            vendor.phone = phone.into();
            vendor.address = address.into();
            vendor.website = website.into();
            vendor.notes = notes.into();
            vendor
        })
        .collect();

    let expense_plan = [
        (0xe1, Category::Venue, 4500, "Venue rental fee", (2025, 5, 20), 0),
        (0xe2, Category::Catering, 2800, "Catering services for 200 people", (2025, 5, 25), 1),
        (0xe3, Category::Marketing, 1500, "Social media campaign", (2025, 5, 10), 2),
    ];
    let mut expenses = Vec::new();
    for (n, category, amount, description, (y, m, d), vendor_index) in expense_plan {
        let date = NaiveDate::from_ymd_opt(y, m, d)
            .ok_or_else(|| EventtoError::Storage(format!("invalid sample date {y}-{m}-{d}")))?;
        let mut expense =
            Expense::new(conference.id, category, Money::from_major(amount), description, date);
        expense.id = ExpenseId::from_uuid(sample_uuid(n));
        expense.vendor_id = Some(vendors[vendor_index].id);
        expense.receipt_url = Some(format!("receipt{}.pdf", n - 0xe0));
        expense.status = ExpenseStatus::Approved;
        expenses.push(expense);
    }

    let mut bob = Attendee::new(
        conference.id,
        "Bob Smith",
        "bob@example.com",
        utc(2025, 5, 1, 10, 20)?,
    );
    bob.id = AttendeeId::from_uuid(sample_uuid(0xc1));
    bob.ticket_type = Some("VIP".into());
    let mut charlie = Attendee::new(
        conference.id,
        "Charlie Davis",
        "charlie@example.com",
        utc(2025, 5, 3, 14, 45)?,
    );
    charlie.id = AttendeeId::from_uuid(sample_uuid(0xc2));
    charlie.ticket_type = Some("Standard".into());
    let attendees = vec![bob, charlie];

    let mut david = Guest::new(conference.id, "David Wilson", "david@example.com", organizer);
    david.id = GuestId::from_uuid(sample_uuid(0xf1));
    david.phone = Some("456-789-0123".into());
    david.status = GuestStatus::Confirmed;
    david.plus_one = true;
    let mut eva = Guest::new(conference.id, "Eva Martinez", "eva@example.com", organizer);
    eva.id = GuestId::from_uuid(sample_uuid(0xf2));
    eva.phone = Some("567-890-1234".into());
    let guests = vec![david, eva];

    let events = vec![conference, launch, retreat];

    write_table::<EventRow, _>(&paths.events_file(), &events)?;
    write_table::<BudgetCategoryRow, _>(&paths.budget_categories_file(), &categories)?;
    write_table::<ExpenseRow, _>(&paths.expenses_file(), &expenses)?;
    write_table::<VendorRow, _>(&paths.vendors_file(), &vendors)?;
    write_table::<AttendeeRow, _>(&paths.attendees_file(), &attendees)?;
    write_table::<GuestRow, _>(&paths.guests_file(), &guests)?;

    info!(
        events = events.len(),
        categories = categories.len(),
        "wrote sample data to {}",
        paths.data_dir().display()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::Storage;
    use tempfile::TempDir;

    fn paths() -> (TempDir, EventtoPaths) {
        let temp_dir = TempDir::new().unwrap();
        let paths = EventtoPaths::with_base_dir(temp_dir.path().to_path_buf());
        (temp_dir, paths)
    }

    #[test]
    fn test_initialize_storage() {
        let (_temp_dir, paths) = paths();
        assert!(needs_initialization(&paths));

        initialize_storage(&paths).unwrap();

        assert!(!needs_initialization(&paths));
        assert!(paths.events_file().exists());
        assert!(paths.guests_file().exists());
        assert_eq!(std::fs::read_to_string(paths.vendors_file()).unwrap().trim(), "[]");
    }

    #[test]
    fn test_doesnt_overwrite_existing() {
        let (_temp_dir, paths) = paths();
        initialize_storage(&paths).unwrap();
        write_sample_data(&paths).unwrap();

        initialize_storage(&paths).unwrap();

        let events: Vec<EventRow> = read_json(paths.events_file()).unwrap();
        assert_eq!(events.len(), 3);
    }

    #[test]
    fn test_sample_data_refuses_non_empty_events() {
        let (_temp_dir, paths) = paths();
        write_sample_data(&paths).unwrap();
        assert!(write_sample_data(&paths).is_err());
    }

    #[test]
    fn test_sample_data_loads() {
        let (_temp_dir, paths) = paths();
        write_sample_data(&paths).unwrap();

        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();

        assert_eq!(storage.events().len(), 3);
        assert_eq!(storage.categories().len(), 15);
        assert_eq!(storage.expenses().len(), 3);
        assert_eq!(storage.vendors().len(), 3);
        assert_eq!(storage.attendees().len(), 2);
        assert_eq!(storage.guests().len(), 2);

        let conference = storage.events()[0].id;
        let summary = storage.budget_for(conference).summary();
        assert_eq!(summary.total_allocated, Money::from_major(12500));
        assert_eq!(summary.total_spent, Money::from_major(10600));
        assert_eq!(summary.spent_percentage, 85);

        let launch = storage.require_event("Product Launch Party").unwrap();
        assert_eq!(launch.status, EventStatus::Draft);
        let summary = storage.budget_for(launch.id).summary();
        assert_eq!(summary.total_allocated, Money::from_major(8750));
        assert_eq!(summary.total_spent, Money::from_major(5300));
    }
}
