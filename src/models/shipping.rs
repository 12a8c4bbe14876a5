// ABOUTME: Shipping address model and the country catalog offered by the shipping form

use serde::{Deserialize, Serialize};

/// A country the shop ships to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Country {
    pub code: &'static str,
    pub label: &'static str,
}

/// Countries offered in the shipping form, in display order
pub const COUNTRIES: &[Country] = &[
    Country { code: "US", label: "United States" },
    Country { code: "CA", label: "Canada" },
    Country { code: "GB", label: "United Kingdom" },
    Country { code: "FR", label: "France" },
    Country { code: "DE", label: "Germany" },
    Country { code: "JP", label: "Japan" },
    Country { code: "AU", label: "Australia" },
];

impl Country {
    /// Look up a country by its code
    pub fn find(code: &str) -> Option<&'static Self> {
        COUNTRIES.iter().find(|c| c.code == code)
    }

    /// Display label for a code, falling back to the code itself
    pub fn label_for(code: &str) -> &str {
        Self::find(code).map_or(code, |c| c.label)
    }

    /// Position of a code in the catalog
    pub fn index_of(code: &str) -> Option<usize> {
        COUNTRIES.iter().position(|c| c.code == code)
    }
}

/// Validated shipping details committed by the first checkout step
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingInfo {
    pub full_name: String,
    pub address_line1: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_line2: Option<String>,
    pub city: String,
    pub state_province: String,
    pub postal_code: String,
    pub country: String,
}

impl ShippingInfo {
    /// Street line as shown on the review step ("1 Main St, Apt 4")
    pub fn street_line(&self) -> String {
        match &self.address_line2 {
            Some(line2) => format!("{}, {}", self.address_line1, line2),
            None => self.address_line1.clone(),
        }
    }

    /// City line as shown on the review step ("Paris, IDF 75001")
    pub fn locality_line(&self) -> String {
        format!("{}, {} {}", self.city, self.state_province, self.postal_code)
    }

    pub fn country_label(&self) -> &str {
        Country::label_for(&self.country)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ShippingInfo {
        ShippingInfo {
            full_name: "Jane Doe".to_string(),
            address_line1: "1 Main St".to_string(),
            address_line2: None,
            city: "Paris".to_string(),
            state_province: "IDF".to_string(),
            postal_code: "75001".to_string(),
            country: "FR".to_string(),
        }
    }

    #[test]
    fn test_country_lookup() {
        assert_eq!(Country::label_for("FR"), "France");
        assert_eq!(Country::label_for("ZZ"), "ZZ");
        assert_eq!(Country::index_of("US"), Some(0));
        assert!(Country::find("XX").is_none());
    }

    #[test]
    fn test_review_lines() {
        let mut info = sample();
        assert_eq!(info.street_line(), "1 Main St");
        assert_eq!(info.locality_line(), "Paris, IDF 75001");
        assert_eq!(info.country_label(), "France");

        info.address_line2 = Some("Apt 4".to_string());
        assert_eq!(info.street_line(), "1 Main St, Apt 4");
    }
}
