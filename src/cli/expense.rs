//! Expense CLI commands
//!
//! Listing and CSV export share the same category facet and search.

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use clap::Subcommand;
use crate::config::settings::Settings;
use crate::display::format_expense_list;
use crate::error::{EventtoError, EventtoResult};
use crate::export::export_expenses_csv;
use crate::models::{Category, Expense};
use crate::services::{filter_expenses, Facet};
use crate::storage::Storage;

/// Expense subcommands
#[derive(Subcommand)]
pub enum ExpenseCommands {
    /// List an event's expenses
    List {
        /// Event title or ID
        event: String,
        /// Only this category (venue, catering, marketing, staff, other or all)
        #[arg(short, long, default_value = "all")]
        category: Facet<Category>,
        /// Case-insensitive text to find in the description
        #[arg(short, long)]
        search: Option<String>,
    },
    /// Export an event's expenses to CSV
    Export {
        /// Event title or ID
        event: String,
        /// Output file path
        output: PathBuf,
        /// Only this category (venue, catering, marketing, staff, other or all)
        #[arg(short, long, default_value = "all")]
        category: Facet<Category>,
        /// Case-insensitive text to find in the description
        #[arg(short, long)]
        search: Option<String>,
    },
}

/// Handle an expense command
pub fn handle_expense_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ExpenseCommands,
) -> EventtoResult<()> {
    match cmd {
        ExpenseCommands::List {
            event,
            category,
            search,
        } => {
            let expenses = event_expenses(storage, &event, category, search.as_deref())?;
            println!("{}", format_expense_list(&expenses, settings));
        }
        ExpenseCommands::Export {
            event,
            output,
            category,
            search,
        } => {
            let expenses = event_expenses(storage, &event, category, search.as_deref())?;

            let file = File::create(&output).map_err(|e| {
                EventtoError::Export(format!(
                    "Failed to create file {}: {}",
                    output.display(),
                    e
                ))
            })?;
            let count = export_expenses_csv(&expenses, storage.vendors(), BufWriter::new(file))?;

            println!("Exported {} expenses to: {}", count, output.display());
        }
    }

    Ok(())
}

fn event_expenses(
    storage: &Storage,
    event: &str,
    category: Facet<Category>,
    search: Option<&str>,
) -> EventtoResult<Vec<Expense>> {
    let event = storage.require_event(event)?;
    Ok(filter_expenses(
        &storage.expenses_for(event.id),
        category,
        search.unwrap_or(""),
    ))
}
