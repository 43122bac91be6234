//! Vendor CLI commands

use clap::Subcommand;

use crate::display::format_vendor_list;
use crate::error::EventtoResult;
use crate::models::VendorCategory;
use crate::services::{filter_vendors, Facet};
use crate::storage::Storage;

/// Vendor subcommands
#[derive(Subcommand)]
pub enum VendorCommands {
    /// List vendors
    List {
        /// Only this category (venue, catering, marketing, entertainment, technology, other or all)
        #[arg(short, long, default_value = "all")]
        category: Facet<VendorCategory>,
        /// Case-insensitive text to find in the name or email
        #[arg(short, long)]
        search: Option<String>,
    },
}

/// Handle a vendor command
pub fn handle_vendor_command(storage: &Storage, cmd: VendorCommands) -> EventtoResult<()> {
    match cmd {
        VendorCommands::List { category, search } => {
            let vendors = filter_vendors(
                storage.vendors(),
                category,
                search.as_deref().unwrap_or(""),
            );
            println!("{}", format_vendor_list(&vendors));
        }
    }

    Ok(())
}
