//! Attendee CLI commands

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::format_attendee_list;
use crate::error::EventtoResult;
use crate::models::AttendeeStatus;
use crate::services::{filter_attendees, Facet};
use crate::storage::Storage;

/// Attendee subcommands
#[derive(Subcommand)]
pub enum AttendeeCommands {
    /// List attendees across events, or for one event
    List {
        /// Event title or ID
        #[arg(short, long)]
        event: Option<String>,
        /// Only this status (registered, attended, canceled, no-show or all)
        #[arg(short = 't', long, default_value = "all")]
        status: Facet<AttendeeStatus>,
        /// Case-insensitive text to find in the name or email
        #[arg(short, long)]
        search: Option<String>,
    },
}

/// Handle an attendee command
pub fn handle_attendee_command(
    storage: &Storage,
    settings: &Settings,
    cmd: AttendeeCommands,
) -> EventtoResult<()> {
    match cmd {
        AttendeeCommands::List {
            event,
            status,
            search,
        } => {
            let scope = match event {
                Some(identifier) => Facet::Only(storage.require_event(&identifier)?.id),
                None => Facet::All,
            };
            let attendees = filter_attendees(
                storage.attendees(),
                scope,
                status,
                search.as_deref().unwrap_or(""),
            );
            println!("{}", format_attendee_list(&attendees, settings));
        }
    }

    Ok(())
}
