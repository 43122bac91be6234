//! Vendor display formatting

use tabled::Tabled;

use crate::models::Vendor;

use super::table;

#[derive(Tabled)]
struct VendorRow<'a> {
    #[tabled(rename = "Name")]
    name: &'a str,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Email")]
    email: &'a str,
    #[tabled(rename = "Phone")]
    phone: &'a str,
    #[tabled(rename = "Website")]
    website: &'a str,
}

/// Format vendors as a table
pub fn format_vendor_list(vendors: &[Vendor]) -> String {
    let rows = vendors
        .iter()
        .map(|vendor| VendorRow {
            name: &vendor.name,
            category: vendor.category.to_string(),
            email: &vendor.email,
            phone: &vendor.phone,
            website: &vendor.website,
        })
        .collect();

    table(rows, "No vendors found.")
}
