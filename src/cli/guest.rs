//! Guest CLI commands

use clap::Subcommand;

use crate::display::format_guest_list;
use crate::error::EventtoResult;
use crate::models::GuestStatus;
use crate::services::{filter_guests, Facet};
use crate::storage::Storage;

/// Guest subcommands
#[derive(Subcommand)]
pub enum GuestCommands {
    /// List an event's guests
    List {
        /// Event title or ID
        event: String,
        /// Only this RSVP status (invited, confirmed, declined, attended or all)
        #[arg(short = 't', long, default_value = "all")]
        status: Facet<GuestStatus>,
        /// Case-insensitive text to find in the name or email
        #[arg(short, long)]
        search: Option<String>,
    },
}

/// Handle a guest command
pub fn handle_guest_command(storage: &Storage, cmd: GuestCommands) -> EventtoResult<()> {
    match cmd {
        GuestCommands::List {
            event,
            status,
            search,
        } => {
            let event = storage.require_event(&event)?;
            let guests = filter_guests(
                &storage.guests_for(event.id),
                status,
                search.as_deref().unwrap_or(""),
            );
            println!("Guests: {}", event.title);
            println!("{}", format_guest_list(&guests));
        }
    }

    Ok(())
}
