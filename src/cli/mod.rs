//! CLI command handlers
//!
//! Each submodule defines one clap subcommand group and the handler that
//! runs it against loaded storage.

pub mod attendee;
pub mod budget;
pub mod event;
pub mod expense;
pub mod guest;
pub mod vendor;

pub use attendee::{handle_attendee_command, AttendeeCommands};
pub use budget::{handle_budget_command, BudgetCommands};
pub use event::{handle_event_command, EventCommands};
pub use expense::{handle_expense_command, ExpenseCommands};
pub use guest::{handle_guest_command, GuestCommands};
pub use vendor::{handle_vendor_command, VendorCommands};
