//! Budget CLI commands
//!
//! Read-only views over one event's budget categories.

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::{format_budget_summary, format_category_breakdown};
use crate::error::EventtoResult;
use crate::storage::Storage;

/// Budget subcommands
#[derive(Subcommand)]
pub enum BudgetCommands {
    /// Show total budget, spent, remaining and percent used
    Summary {
        /// Event title or ID
        event: String,
    },
    /// Show allocation, spend and band per category
    Categories {
        /// Event title or ID
        event: String,
    },
}

/// Handle a budget command
pub fn handle_budget_command(
    storage: &Storage,
    settings: &Settings,
    cmd: BudgetCommands,
) -> EventtoResult<()> {
    match cmd {
        BudgetCommands::Summary { event } => {
            let event = storage.require_event(&event)?;
            let summary = storage.budget_for(event.id).summary();
            print!("{}", format_budget_summary(event, &summary, settings));
        }
        BudgetCommands::Categories { event } => {
            let event = storage.require_event(&event)?;
            let budget = storage.budget_for(event.id);
            println!("Budget categories: {}", event.title);
            println!("{}", format_category_breakdown(&budget, settings));
        }
    }

    Ok(())
}
