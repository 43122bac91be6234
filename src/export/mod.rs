//! Export module for eventto
//!
//! CSV export of an event's expense list, filtered the same way as the
//! terminal listing.

pub mod csv;

pub use csv::export_expenses_csv;
