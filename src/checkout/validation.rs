// ABOUTME: Field-level validation rules and the error types raised when a checkout step is rejected

use lazy_static::lazy_static;
use regex::Regex;
use std::fmt;
use thiserror::Error;

lazy_static! {
    // ASCII classes on purpose: `\d` would accept any Unicode digit
    static ref CARD_NUMBER: Regex = Regex::new(r"^[0-9]{16}$").unwrap();
    static ref EXPIRY_DATE: Regex = Regex::new(r"^(0[1-9]|1[0-2])/[0-9]{2}$").unwrap();
    static ref CVV: Regex = Regex::new(r"^[0-9]{3,4}$").unwrap();
}

/// Every input field across the checkout forms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    FullName,
    AddressLine1,
    AddressLine2,
    City,
    StateProvince,
    PostalCode,
    Country,
    PaymentMethod,
    CardNumber,
    ExpiryDate,
    Cvv,
}

impl Field {
    pub fn label(&self) -> &'static str {
        match self {
            Self::FullName => "Full Name",
            Self::AddressLine1 => "Address Line 1",
            Self::AddressLine2 => "Address Line 2 (Optional)",
            Self::City => "City",
            Self::StateProvince => "State / Province",
            Self::PostalCode => "Postal Code",
            Self::Country => "Country",
            Self::PaymentMethod => "Payment Method",
            Self::CardNumber => "Card Number",
            Self::ExpiryDate => "Expiry Date",
            Self::Cvv => "CVV",
        }
    }

    /// Hint shown in an empty input
    pub fn placeholder(&self) -> &'static str {
        match self {
            Self::FullName => "Your full name",
            Self::AddressLine1 => "Street address, P.O. box",
            Self::AddressLine2 => "Apartment, suite, unit, building, floor, etc.",
            Self::City => "e.g., New York",
            Self::StateProvince => "e.g., NY",
            Self::PostalCode => "e.g., 10001",
            Self::Country => "Select a country",
            Self::PaymentMethod => "",
            Self::CardNumber => "0000 0000 0000 0000",
            Self::ExpiryDate => "MM/YY",
            Self::Cvv => "123",
        }
    }

    /// Fields that pick from a fixed list instead of taking text
    pub fn is_choice(&self) -> bool {
        matches!(self, Self::Country | Self::PaymentMethod)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single complaint tying a field to the reason it was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {message}")]
pub struct FieldValidationError {
    pub field: Field,
    pub message: String,
}

impl FieldValidationError {
    pub fn new(field: Field, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// All field errors from one submission of a step
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error("{} field(s) failed validation", .0.len())]
pub struct ValidationErrors(Vec<FieldValidationError>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, error: FieldValidationError) {
        self.0.push(error);
    }

    /// Record an error when `check` produced one
    pub fn collect(&mut self, check: Option<FieldValidationError>) {
        if let Some(error) = check {
            self.push(error);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: Field) -> Option<&FieldValidationError> {
        self.0.iter().find(|e| e.field == field)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.get(field).is_some()
    }

    pub fn fields(&self) -> Vec<Field> {
        self.0.iter().map(|e| e.field).collect()
    }

    pub fn clear_field(&mut self, field: Field) {
        self.0.retain(|e| e.field != field);
    }

    /// `Ok(value)` when nothing was collected
    pub fn into_result<T>(self, value: T) -> Result<T, Self> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }
}

/// Reject values shorter than `min`, measured in UTF-16 code units like browser string length
pub fn min_length(
    field: Field,
    value: &str,
    min: usize,
    message: &str,
) -> Option<FieldValidationError> {
    (value.encode_utf16().count() < min).then(|| FieldValidationError::new(field, message))
}

pub fn card_number(value: &str) -> Option<FieldValidationError> {
    (!CARD_NUMBER.is_match(value))
        .then(|| FieldValidationError::new(Field::CardNumber, "Card number must be 16 digits."))
}

pub fn expiry_date(value: &str) -> Option<FieldValidationError> {
    (!EXPIRY_DATE.is_match(value)).then(|| {
        FieldValidationError::new(Field::ExpiryDate, "Expiry date must be in MM/YY format.")
    })
}

pub fn cvv(value: &str) -> Option<FieldValidationError> {
    (!CVV.is_match(value))
        .then(|| FieldValidationError::new(Field::Cvv, "CVV must be 3 or 4 digits."))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_min_length_counts_utf16_units() {
        assert!(min_length(Field::City, "", 2, "City is required.").is_some());
        assert!(min_length(Field::City, "P", 2, "City is required.").is_some());
        assert!(min_length(Field::City, "Pa", 2, "City is required.").is_none());
        // Two characters, four bytes, two units
        assert!(min_length(Field::City, "éé", 2, "City is required.").is_none());
        assert!(min_length(Field::City, "é", 2, "City is required.").is_some());
        // Outside the BMP: one character, two units
        assert!(min_length(Field::FullName, "😀", 2, "Full name must be at least 2 characters.").is_none());
        assert!(min_length(Field::AddressLine1, "😀😀", 5, "Address line 1 is required.").is_some());
        assert!(min_length(Field::AddressLine1, "😀😀😀", 5, "Address line 1 is required.").is_none());
    }

    #[test]
    fn test_card_number_rules() {
        assert!(card_number("1234567890123456").is_none());
        assert!(card_number("12345").is_some());
        assert!(card_number("1234 5678 9012 3456").is_some());
        assert!(card_number("12345678901234567").is_some());
        assert!(card_number("١٢٣٤٥٦٧٨٩٠١٢٣٤٥٦").is_some());
    }

    #[test]
    fn test_expiry_rules() {
        assert!(expiry_date("09/27").is_none());
        assert!(expiry_date("12/26").is_none());
        assert!(expiry_date("01/00").is_none());
        assert!(expiry_date("13/26").is_some());
        assert!(expiry_date("00/26").is_some());
        assert!(expiry_date("9/27").is_some());
        assert!(expiry_date("09/2027").is_some());
        assert!(expiry_date("").is_some());
    }

    #[test]
    fn test_cvv_rules() {
        assert!(cvv("123").is_none());
        assert!(cvv("1234").is_none());
        assert!(cvv("12").is_some());
        assert!(cvv("12345").is_some());
        assert!(cvv("abc").is_some());
    }

    #[test]
    fn test_error_collection() {
        let mut errors = ValidationErrors::new();
        errors.collect(None);
        assert!(errors.is_empty());

        errors.collect(cvv("1"));
        errors.collect(card_number(""));
        assert_eq!(errors.len(), 2);
        assert_eq!(errors.fields(), vec![Field::Cvv, Field::CardNumber]);
        assert_eq!(
            errors.get(Field::Cvv).map(|e| e.message.as_str()),
            Some("CVV must be 3 or 4 digits.")
        );

        errors.clear_field(Field::Cvv);
        assert!(!errors.contains(Field::Cvv));
        assert!(errors.clone().into_result(()).is_err());
        assert_eq!(errors.to_string(), "1 field(s) failed validation");
    }

    #[test]
    fn test_field_error_display() {
        let error = FieldValidationError::new(Field::CardNumber, "Card number must be 16 digits.");
        assert_eq!(error.to_string(), "Card Number: Card number must be 16 digits.");
    }
}
