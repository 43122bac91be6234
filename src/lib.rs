//! eventto - event budgets, expenses and guest lists
//!
//! This library reads snapshots of an event-management store (events, budget
//! categories, expenses, vendors, attendees and guests) and derives the
//! values its dashboard shows: budget totals, percent used and threshold
//! bands, filtered lists, and headline statistics.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Path resolution and user settings
//! - `error`: Custom error types
//! - `models`: Records, typed ids, money and the derived budget values
//! - `storage`: JSON snapshot storage and row mapping
//! - `services`: Budget aggregation, list filtering, dashboard statistics
//!   and the inactivity session
//! - `display`: Terminal formatting
//! - `export`: CSV export
//! - `cli`: Command handlers for the `eventto` binary
//!
//! # Example
//!
//! ```rust
//! use eventto::models::{BudgetCategory, Category, EventId, Money};
//! use eventto::services::summarize;
//!
//! let event = EventId::new();
//! let major = Money::from_major;
//! let categories = vec![
//!     BudgetCategory::new(event, Category::Venue, major(5000), major(4500)),
//!     BudgetCategory::new(event, Category::Catering, major(3000), major(2800)),
//! ];
//!
//! let summary = summarize(&categories);
//! assert_eq!(summary.remaining, Money::from_major(700));
//! assert_eq!(summary.spent_percentage, 91);
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod services;
pub mod storage;

pub use error::EventtoError;
