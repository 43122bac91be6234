//! CSV export of expenses

use std::collections::HashMap;
use std::io::Write;

use serde::Serialize;

use crate::error::{EventtoError, EventtoResult};
use crate::models::{Expense, Vendor};

#[derive(Serialize)]
struct ExpenseRecord<'a> {
    #[serde(rename = "ID")]
    id: String,
    #[serde(rename = "Date")]
    date: String,
    #[serde(rename = "Category")]
    category: &'static str,
    #[serde(rename = "Description")]
    description: &'a str,
    #[serde(rename = "Amount")]
    amount: String,
    #[serde(rename = "Status")]
    status: &'static str,
    #[serde(rename = "Vendor")]
    vendor: &'a str,
    #[serde(rename = "Receipt")]
    receipt: &'a str,
}

/// Write expenses to CSV, one row each in input order
///
/// Vendor ids are resolved to names; an id with no loaded vendor is
/// written as `Unknown`. Returns the number of rows written.
pub fn export_expenses_csv<W: Write>(
    expenses: &[Expense],
    vendors: &[Vendor],
    writer: W,
) -> EventtoResult<usize> {
    let vendor_names: HashMap<_, _> = vendors.iter().map(|v| (v.id, v.name.as_str())).collect();

    let mut csv = ::csv::Writer::from_writer(writer);
    for expense in expenses {
        let vendor = match expense.vendor_id {
            Some(id) => vendor_names.get(&id).copied().unwrap_or("Unknown"),
            None => "",
        };

        csv.serialize(ExpenseRecord {
            id: expense.id.as_uuid().to_string(),
            date: expense.date.format("%Y-%m-%d").to_string(),
            category: expense.category.as_str(),
            description: &expense.description,
            amount: format!("{:.2}", expense.amount.to_f64()),
            status: expense.status.as_str(),
            vendor,
            receipt: expense.receipt_url.as_deref().unwrap_or(""),
        })?;
    }

    csv.flush()
        .map_err(|e| EventtoError::Export(format!("Failed to flush CSV: {}", e)))?;

    Ok(expenses.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, EventId, Money, VendorCategory, VendorId};
    use chrono::NaiveDate;

    #[test]
    fn test_export_expenses_csv() {
        let event = EventId::new();
        let date = NaiveDate::from_ymd_opt(2025, 5, 20).unwrap();
        let vendor = Vendor::new(
            "Grand Convention Center",
            "bookings@grandconvention.com",
            VendorCategory::Venue,
        );

        let mut rental = Expense::new(
            event,
            Category::Venue,
            Money::from_major(4500),
            "Venue rental fee",
            date,
        );
        rental.vendor_id = Some(vendor.id);
        let mut deposit = Expense::new(
            event,
            Category::Catering,
            Money::from_minor(120050),
            "Catering, deposit",
            date,
        );
        deposit.vendor_id = Some(VendorId::new());
        let flyers = Expense::new(
            event,
            Category::Marketing,
            Money::from_major(80),
            "Flyers",
            date,
        );

        let mut buffer = Vec::new();
        let written =
            export_expenses_csv(&[rental, deposit, flyers], &[vendor], &mut buffer).unwrap();
        assert_eq!(written, 3);

        let output = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "ID,Date,Category,Description,Amount,Status,Vendor,Receipt");
        let rental_row =
            ",2025-05-20,venue,Venue rental fee,4500.00,pending,Grand Convention Center,";
        assert!(lines[1].ends_with(rental_row));
        assert!(lines[2].contains("\"Catering, deposit\",1200.50,pending,Unknown,"));
        assert!(lines[3].ends_with(",Flyers,80.00,pending,,"));
    }

    #[test]
    fn test_export_nothing_writes_nothing() {
        let mut buffer = Vec::new();
        assert_eq!(export_expenses_csv(&[], &[], &mut buffer).unwrap(), 0);
        assert!(buffer.is_empty());
    }
}
