//! Service layer for eventto
//!
//! Derived values over records the storage layer has already loaded:
//! budget aggregation, list filtering, dashboard statistics, and the
//! inactivity session. Nothing here performs I/O.

pub mod budget;
pub mod dashboard;
pub mod filter;
pub mod session;

pub use budget::{
    budget_for_event, category_breakdown, filter_expenses, summarize, total_expenses,
};
pub use dashboard::DashboardStats;
pub use filter::{
    filter_attendees, filter_events, filter_guests, filter_records, filter_vendors, Facet,
    ListFilter, Searchable,
};
pub use session::{Session, SessionState};
