//! Event CLI commands

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::{format_event_details, format_event_list};
use crate::error::EventtoResult;
use crate::models::EventStatus;
use crate::services::{filter_events, Facet};
use crate::storage::Storage;

/// Event subcommands
#[derive(Subcommand)]
pub enum EventCommands {
    /// List events
    List {
        /// Only events with this status (draft, published, canceled, completed or all)
        #[arg(short = 't', long, default_value = "all")]
        status: Facet<EventStatus>,
        /// Case-insensitive text to find in the title or description
        #[arg(short, long)]
        search: Option<String>,
    },
    /// Show event details
    Show {
        /// Event title or ID
        event: String,
    },
}

/// Handle an event command
pub fn handle_event_command(
    storage: &Storage,
    settings: &Settings,
    cmd: EventCommands,
) -> EventtoResult<()> {
    match cmd {
        EventCommands::List { status, search } => {
            let events = filter_events(storage.events(), status, search.as_deref().unwrap_or(""));
            println!("{}", format_event_list(&events, settings));
        }
        EventCommands::Show { event } => {
            let event = storage.require_event(&event)?;
            let budget = storage.budget_for(event.id);
            let summary = (!budget.is_empty()).then(|| budget.summary());
            let participants = storage.participants(event.id);
            print!(
                "{}",
                format_event_details(event, participants, summary.as_ref(), settings)
            );
        }
    }

    Ok(())
}
