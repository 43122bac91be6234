//! Event display formatting

use tabled::Tabled;

use crate::config::Settings;
use crate::models::{Event, Participants, Summary};

use super::{money, table, timestamp};

#[derive(Tabled)]
struct EventRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Starts")]
    starts: String,
    #[tabled(rename = "Location")]
    location: String,
}

/// Format a list of events as a table
pub fn format_event_list(events: &[Event], settings: &Settings) -> String {
    let rows = events
        .iter()
        .map(|event| EventRow {
            id: event.id.to_string(),
            title: event.title.clone(),
            status: event.status.to_string(),
            starts: timestamp(event.start, settings),
            location: event.location.clone(),
        })
        .collect();

    table(rows, "No events found.")
}

/// Format a single event's details, with its budget totals when known
pub fn format_event_details(
    event: &Event,
    participants: Participants,
    budget: Option<&Summary>,
    settings: &Settings,
) -> String {
    let mut output = String::new();

    output.push_str(&format!("Event: {}\n", event.title));
    output.push_str(&format!("  ID:        {}\n", event.id));
    output.push_str(&format!("  Status:    {}\n", event.status));
    output.push_str(&format!("  Starts:    {}\n", timestamp(event.start, settings)));
    output.push_str(&format!("  Ends:      {}\n", timestamp(event.end, settings)));
    output.push_str(&format!("  Duration:  {} hours\n", event.duration_hours()));
    output.push_str(&format!("  Location:  {}\n", event.location));
    output.push_str(&format!("  Participants: {}\n", participants));

    if let Some(url) = &event.cover_image_url {
        output.push_str(&format!("  Cover:     {}\n", url));
    }

    if !event.description.is_empty() {
        output.push('\n');
        output.push_str(&format!("  {}\n", event.description));
    }

    if let Some(summary) = budget {
        output.push('\n');
        output.push_str(&format!(
            "  Budget:    {} of {} spent ({}%)\n",
            money(summary.total_spent, settings),
            money(summary.total_allocated, settings),
            summary.spent_percentage
        ));
    }

    output
}
