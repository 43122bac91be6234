//! Guest list display formatting

use tabled::Tabled;

use crate::models::Guest;

use super::table;

#[derive(Tabled)]
struct GuestRow<'a> {
    #[tabled(rename = "Name")]
    name: &'a str,
    #[tabled(rename = "Email")]
    email: &'a str,
    #[tabled(rename = "Phone")]
    phone: &'a str,
    #[tabled(rename = "RSVP")]
    status: String,
    #[tabled(rename = "+1")]
    plus_one: &'static str,
}

/// Format guests as a table
pub fn format_guest_list(guests: &[Guest]) -> String {
    let rows = guests
        .iter()
        .map(|guest| GuestRow {
            name: &guest.name,
            email: &guest.email,
            phone: guest.phone.as_deref().unwrap_or("-"),
            status: guest.status.to_string(),
            plus_one: if guest.plus_one { "Yes" } else { "No" },
        })
        .collect();

    table(rows, "No guests found.")
}
