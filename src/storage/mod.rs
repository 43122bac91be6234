//! Storage layer for eventto
//!
//! Each hosted table is mirrored by one JSON snapshot under the data
//! directory. [`Storage`] reads every snapshot, maps rows into records and
//! keeps them in load order, which is the order every list and the
//! dashboard's featured events follow.

pub mod file_io;
pub mod init;
pub mod rows;

pub use file_io::{json_file_valid, read_json, write_json_atomic};
pub use init::{initialize_storage, needs_initialization, write_sample_data};
pub use rows::{
    AttendeeRow, BudgetCategoryRow, EventRow, ExpenseRow, GuestRow, VendorRow,
};

use std::collections::HashSet;

use tracing::{debug, info, warn};

use crate::config::paths::EventtoPaths;
use crate::error::{EventtoError, EventtoResult};
use crate::models::{
    Attendee, Budget, BudgetCategory, Event, EventId, Expense, Guest, Participants, Vendor,
};
use crate::services::{budget_for_event, DashboardStats};

use rows::map_rows;

/// All records loaded from the table snapshots
pub struct Storage {
    paths: EventtoPaths,
    events: Vec<Event>,
    categories: Vec<BudgetCategory>,
    expenses: Vec<Expense>,
    vendors: Vec<Vendor>,
    attendees: Vec<Attendee>,
    guests: Vec<Guest>,
}

impl Storage {
    /// Create an empty storage over the given paths
    pub fn new(paths: EventtoPaths) -> EventtoResult<Self> {
        paths.ensure_directories()?;

        Ok(Self {
            paths,
            events: Vec::new(),
            categories: Vec::new(),
            expenses: Vec::new(),
            vendors: Vec::new(),
            attendees: Vec::new(),
            guests: Vec::new(),
        })
    }

    pub fn paths(&self) -> &EventtoPaths {
        &self.paths
    }

    /// Load every table from disk, replacing what was loaded before
    ///
    /// Missing snapshots load as empty tables. Budget categories nested
    /// inside event rows are merged into the category table; a category
    /// present in both keeps its table row.
    pub fn load_all(&mut self) -> EventtoResult<()> {
        let mut event_rows: Vec<EventRow> = read_json(self.paths.events_file())?;
        let mut category_rows: Vec<BudgetCategoryRow> =
            read_json(self.paths.budget_categories_file())?;

        let mut seen: HashSet<_> = category_rows.iter().map(|row| row.id).collect();
        for event_row in &mut event_rows {
            let event_id = event_row.id;
            for nested in event_row.take_budget_categories() {
                if nested.event_id != Some(event_id) {
                    warn!(
                        category = %nested.id,
                        event = %event_id,
                        "nested budget category belongs to another event"
                    );
                }
                if seen.insert(nested.id) {
                    category_rows.push(nested);
                }
            }
        }

        self.events = map_rows(event_rows)?;
        self.categories = map_rows(category_rows)?;
        self.expenses = map_rows(read_json::<Vec<ExpenseRow>, _>(self.paths.expenses_file())?)?;
        self.attendees =
            map_rows(read_json::<Vec<AttendeeRow>, _>(self.paths.attendees_file())?)?;
        self.vendors = read_json::<Vec<VendorRow>, _>(self.paths.vendors_file())?
            .into_iter()
            .map(Vendor::from)
            .collect();
        self.guests = read_json::<Vec<GuestRow>, _>(self.paths.guests_file())?
            .into_iter()
            .map(Guest::from)
            .collect();

        info!(
            events = self.events.len(),
            categories = self.categories.len(),
            expenses = self.expenses.len(),
            vendors = self.vendors.len(),
            attendees = self.attendees.len(),
            guests = self.guests.len(),
            "loaded snapshots from {}",
            self.paths.data_dir().display()
        );

        Ok(())
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn categories(&self) -> &[BudgetCategory] {
        &self.categories
    }

    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn vendors(&self) -> &[Vendor] {
        &self.vendors
    }

    pub fn attendees(&self) -> &[Attendee] {
        &self.attendees
    }

    pub fn guests(&self) -> &[Guest] {
        &self.guests
    }

    /// Find an event by full UUID, display id (`evt-1a2b3c4d`) or title
    ///
    /// Titles compare case-insensitively; the first match in load order wins.
    pub fn find_event(&self, identifier: &str) -> Option<&Event> {
        let identifier = identifier.trim();

        if let Ok(id) = identifier.parse::<EventId>() {
            if let Some(event) = self.events.iter().find(|e| e.id == id) {
                return Some(event);
            }
        }

        self.events
            .iter()
            .find(|e| e.id.to_string().eq_ignore_ascii_case(identifier))
            .or_else(|| {
                let wanted = identifier.to_lowercase();
                self.events.iter().find(|e| e.title.to_lowercase() == wanted)
            })
    }

    /// Like [`Storage::find_event`], but a miss is an error
    pub fn require_event(&self, identifier: &str) -> EventtoResult<&Event> {
        self.find_event(identifier).ok_or_else(|| {
            debug!(identifier, "event lookup failed");
            EventtoError::event_not_found(identifier)
        })
    }

    /// The budget view over one event's categories
    pub fn budget_for(&self, event_id: EventId) -> Budget {
        budget_for_event(event_id, &self.categories)
    }

    /// Expenses recorded against one event, in load order
    pub fn expenses_for(&self, event_id: EventId) -> Vec<Expense> {
        self.expenses
            .iter()
            .filter(|e| e.event_id == event_id)
            .cloned()
            .collect()
    }

    /// Guests invited to one event, in load order
    pub fn guests_for(&self, event_id: EventId) -> Vec<Guest> {
        self.guests
            .iter()
            .filter(|g| g.event_id == event_id)
            .cloned()
            .collect()
    }

    /// Attendee and guest counts for one event
    pub fn participants(&self, event_id: EventId) -> Participants {
        Participants {
            attendees: self.attendees.iter().filter(|a| a.event_id == event_id).count(),
            guests: self.guests.iter().filter(|g| g.event_id == event_id).count(),
        }
    }

    /// Dashboard statistics over everything loaded
    pub fn dashboard(&self, featured_limit: usize) -> DashboardStats {
        DashboardStats::compute(
            &self.events,
            &self.attendees,
            &self.vendors,
            &self.expenses,
            &self.categories,
            featured_limit,
        )
    }

    /// Check if storage has been initialized (settings file exists)
    pub fn is_initialized(&self) -> bool {
        self.paths.is_initialized()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use std::fs;
    use tempfile::TempDir;

    const EVENT_A: &str = "6f1c2d3e-0000-4000-8000-00000000000a";
    const EVENT_B: &str = "6f1c2d3e-0000-4000-8000-00000000000b";

    fn storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = EventtoPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();
        (temp_dir, storage)
    }

    fn event_row(id: &str, title: &str, nested: &str) -> String {
        format!(
            r#"{{"id": "{}", "title": "{}", "description": "", "start_date": "2025-06-15T09:00:00Z",
                "end_date": "2025-06-15T17:00:00Z", "location": "Hall", "status": "published",
                "cover_image_url": null, "created_by": "6f1c2d3e-0000-4000-8000-0000000000aa",
                "budget_categories": [{}]}}"#,
            id, title, nested
        )
    }

    #[test]
    fn test_storage_creation() {
        let (temp_dir, storage) = storage();
        assert!(temp_dir.path().join("data").exists());
        assert!(!storage.is_initialized());
    }

    #[test]
    fn test_load_empty_storage() {
        let (_temp_dir, mut storage) = storage();
        storage.load_all().unwrap();

        assert!(storage.events().is_empty());
        assert!(storage.find_event("anything").is_none());
        let stats = storage.dashboard(4);
        assert_eq!(stats.total_events, 0);
    }

    #[test]
    fn test_load_merges_nested_categories() {
        let (_temp_dir, mut storage) = storage();
        let paths = storage.paths().clone();

        let events = format!(
            "[{}, {}]",
            event_row(
                EVENT_A,
                "Annual Tech Conference",
                r#"{"id": "6f1c2d3e-0000-4000-8000-0000000000b1", "name": "venue", "allocated": 5000, "spent": 4500},
                   {"id": "6f1c2d3e-0000-4000-8000-0000000000b2", "name": "catering", "allocated": 3000, "spent": 2800}"#
            ),
            event_row(EVENT_B, "Team Building Retreat", "")
        );
        let categories = format!(
            r#"[{{"id": "6f1c2d3e-0000-4000-8000-0000000000b2", "event_id": "{}", "name": "catering",
                  "allocated": 3000, "spent": 2900}},
                {{"id": "6f1c2d3e-0000-4000-8000-0000000000b3", "event_id": "{}", "name": "staff",
                  "allocated": 1500, "spent": 1200}}]"#,
            EVENT_A, EVENT_B
        );
        fs::write(paths.events_file(), events).unwrap();
        fs::write(paths.budget_categories_file(), categories).unwrap();

        storage.load_all().unwrap();

        assert_eq!(storage.events().len(), 2);
        assert_eq!(storage.categories().len(), 3);

        let event_a = storage.require_event("annual tech conference").unwrap().id;
        let summary = storage.budget_for(event_a).summary();
        assert_eq!(summary.total_allocated, Money::from_major(8000));
        // The table row wins over the nested copy
        assert_eq!(summary.total_spent, Money::from_major(7400));
        assert_eq!(summary.spent_percentage, 93);
    }

    #[test]
    fn test_find_event_by_id_forms() {
        let (_temp_dir, mut storage) = storage();
        fs::write(
            storage.paths().events_file(),
            format!("[{}]", event_row(EVENT_A, "Product Launch Party", "")),
        )
        .unwrap();
        storage.load_all().unwrap();

        let event = storage.find_event(EVENT_A).unwrap();
        assert_eq!(event.title, "Product Launch Party");
        assert!(storage.find_event(&event.id.to_string()).is_some());
        assert!(storage.find_event(&event.id.to_string().to_uppercase()).is_some());
        assert!(storage.find_event(" PRODUCT launch party ").is_some());
        assert!(storage.find_event(&format!("EVT-{}", EVENT_A)).is_some());

        let err = storage.require_event(EVENT_B).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_malformed_row_fails_load() {
        let (_temp_dir, mut storage) = storage();
        fs::write(
            storage.paths().expenses_file(),
            format!(
                r#"[{{"id": "6f1c2d3e-0000-4000-8000-0000000000e1", "event_id": "{}",
                     "category": "venue", "amount": 10, "description": "Deposit",
                     "date": "someday", "status": "pending"}}]"#,
                EVENT_A
            ),
        )
        .unwrap();

        let err = storage.load_all().unwrap_err();
        assert!(matches!(err, EventtoError::Mapping { table: "expenses", .. }));
    }

    #[test]
    fn test_per_event_views() {
        let (_temp_dir, mut storage) = storage();
        let paths = storage.paths().clone();
        initialize_storage(&paths).unwrap();
        write_sample_data(&paths).unwrap();
        storage.load_all().unwrap();

        let event = storage.require_event("Annual Tech Conference").unwrap().id;
        assert!(!storage.expenses_for(event).is_empty());
        assert!(storage.expenses_for(event).iter().all(|e| e.event_id == event));
        assert!(storage.guests_for(event).iter().all(|g| g.event_id == event));

        let participants = storage.participants(event);
        assert_eq!(participants.attendees, 2);
        assert_eq!(participants.guests, storage.guests_for(event).len());
        assert_eq!(storage.participants(EventId::new()), Participants::default());
    }
}
