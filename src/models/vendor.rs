//! Vendor model

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::VendorId;

wire_enum! {
    /// Kind of service a vendor provides
    ///
    /// Wider than the budget buckets: entertainment and technology vendors
    /// are billed under whichever bucket the planner chooses.
    pub enum VendorCategory {
        Venue => "venue",
        Catering => "catering",
        Marketing => "marketing",
        Entertainment => "entertainment",
        Technology => "technology",
        Other => "other",
    }
}

/// A supplier that events can hire
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vendor {
    pub id: VendorId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub category: VendorCategory,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub website: String,
    #[serde(default)]
    pub notes: String,
}

impl Vendor {
    /// Create a new vendor with contact details left blank
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        category: VendorCategory,
    ) -> Self {
        Self {
            id: VendorId::new(),
            name: name.into(),
            email: email.into(),
            phone: String::new(),
            category,
            address: String::new(),
            website: String::new(),
            notes: String::new(),
        }
    }
}

impl fmt::Display for Vendor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <{}>", self.name, self.email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_vendor() {
        let vendor = Vendor::new(
            "Stage Lights Co",
            "hello@stagelights.in",
            VendorCategory::Technology,
        );
        assert!(vendor.phone.is_empty());
        assert_eq!(vendor.to_string(), "Stage Lights Co <hello@stagelights.in>");
    }

    #[test]
    fn test_vendor_category_names() {
        assert_eq!(VendorCategory::all().len(), 6);
        assert_eq!(
            "entertainment".parse::<VendorCategory>().unwrap(),
            VendorCategory::Entertainment
        );
        assert!("staff".parse::<VendorCategory>().is_err());
    }
}
