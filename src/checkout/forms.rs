// ABOUTME: Step-scoped form drafts holding in-progress edits before they are committed
// Drafts are only promoted to wizard state through validate()

use super::validation::{self, Field, FieldValidationError, ValidationErrors};
use crate::models::{CardDetails, Country, PaymentInfo, PaymentMethod, ShippingInfo, COUNTRIES};

/// Editing surface shared by the step forms. Keys are routed here by the event handler.
pub trait StepForm {
    /// Fields currently visible, in focus order
    fn fields(&self) -> &'static [Field];
    fn focus(&self) -> usize;
    fn set_focus(&mut self, focus: usize);
    /// Backing text for free-text fields; `None` for choice fields
    fn text_mut(&mut self, field: Field) -> Option<&mut String>;
    fn errors(&self) -> &ValidationErrors;
    fn errors_mut(&mut self) -> &mut ValidationErrors;
    /// Step a choice field (country, payment method) when it has focus
    fn cycle_choice(&mut self, forward: bool);

    fn focused_field(&self) -> Field {
        let fields = self.fields();
        fields[self.focus().min(fields.len() - 1)]
    }

    fn insert_char(&mut self, c: char) {
        let field = self.focused_field();
        if let Some(text) = self.text_mut(field) {
            text.push(c);
            self.errors_mut().clear_field(field);
        }
    }

    fn backspace(&mut self) {
        let field = self.focused_field();
        if let Some(text) = self.text_mut(field) {
            text.pop();
            self.errors_mut().clear_field(field);
        }
    }

    fn clear_field(&mut self) {
        let field = self.focused_field();
        if let Some(text) = self.text_mut(field) {
            text.clear();
            self.errors_mut().clear_field(field);
        }
    }

    fn focus_next(&mut self) {
        let len = self.fields().len();
        self.set_focus((self.focus() + 1) % len);
    }

    fn focus_previous(&mut self) {
        let len = self.fields().len();
        self.set_focus((self.focus() + len - 1) % len);
    }

    /// Move focus to the first field that failed validation
    fn focus_first_error(&mut self) {
        let errors = self.errors();
        let first = self.fields().iter().position(|f| errors.contains(*f));
        if let Some(pos) = first {
            self.set_focus(pos);
        }
    }

    fn error_for(&self, field: Field) -> Option<&FieldValidationError> {
        self.errors().get(field)
    }
}

/// In-progress shipping details
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShippingForm {
    pub full_name: String,
    pub address_line1: String,
    pub address_line2: String,
    pub city: String,
    pub state_province: String,
    pub postal_code: String,
    /// Country code; empty until one is picked
    pub country: String,
    pub focus: usize,
    pub errors: ValidationErrors,
}

impl ShippingForm {
    pub const FIELDS: &'static [Field] = &[
        Field::FullName,
        Field::AddressLine1,
        Field::AddressLine2,
        Field::City,
        Field::StateProvince,
        Field::PostalCode,
        Field::Country,
    ];

    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::FullName => &self.full_name,
            Field::AddressLine1 => &self.address_line1,
            Field::AddressLine2 => &self.address_line2,
            Field::City => &self.city,
            Field::StateProvince => &self.state_province,
            Field::PostalCode => &self.postal_code,
            Field::Country => &self.country,
            _ => "",
        }
    }

    /// Text shown for a field; the country shows its label
    pub fn display_value(&self, field: Field) -> &str {
        if field == Field::Country {
            return Country::label_for(&self.country);
        }
        self.value(field)
    }

    /// Check every rule without touching the stored errors
    pub fn validate(&self) -> Result<ShippingInfo, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.collect(validation::min_length(
            Field::FullName,
            &self.full_name,
            2,
            "Full name must be at least 2 characters.",
        ));
        errors.collect(validation::min_length(
            Field::AddressLine1,
            &self.address_line1,
            5,
            "Address line 1 is required.",
        ));
        errors.collect(validation::min_length(Field::City, &self.city, 2, "City is required."));
        errors.collect(validation::min_length(
            Field::StateProvince,
            &self.state_province,
            2,
            "State/Province is required.",
        ));
        errors.collect(validation::min_length(
            Field::PostalCode,
            &self.postal_code,
            3,
            "Postal code is required.",
        ));
        errors.collect(validation::min_length(
            Field::Country,
            &self.country,
            2,
            "Please select a country.",
        ));

        errors.into_result(ShippingInfo {
            full_name: self.full_name.clone(),
            address_line1: self.address_line1.clone(),
            address_line2: (!self.address_line2.is_empty()).then(|| self.address_line2.clone()),
            city: self.city.clone(),
            state_province: self.state_province.clone(),
            postal_code: self.postal_code.clone(),
            country: self.country.clone(),
        })
    }
}

impl StepForm for ShippingForm {
    fn fields(&self) -> &'static [Field] {
        Self::FIELDS
    }

    fn focus(&self) -> usize {
        self.focus
    }

    fn set_focus(&mut self, focus: usize) {
        self.focus = focus;
    }

    fn text_mut(&mut self, field: Field) -> Option<&mut String> {
        match field {
            Field::FullName => Some(&mut self.full_name),
            Field::AddressLine1 => Some(&mut self.address_line1),
            Field::AddressLine2 => Some(&mut self.address_line2),
            Field::City => Some(&mut self.city),
            Field::StateProvince => Some(&mut self.state_province),
            Field::PostalCode => Some(&mut self.postal_code),
            _ => None,
        }
    }

    fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    fn errors_mut(&mut self) -> &mut ValidationErrors {
        &mut self.errors
    }

    fn clear_field(&mut self) {
        let field = self.focused_field();
        if field == Field::Country {
            self.country.clear();
        } else if let Some(text) = self.text_mut(field) {
            text.clear();
        }
        self.errors.clear_field(field);
    }

    /// Step through the country list
    fn cycle_choice(&mut self, forward: bool) {
        if self.focused_field() != Field::Country {
            return;
        }
        let len = COUNTRIES.len();
        let next = match Country::index_of(&self.country) {
            Some(i) if forward => (i + 1) % len,
            Some(i) => (i + len - 1) % len,
            None if forward => 0,
            None => len - 1,
        };
        self.country = COUNTRIES[next].code.to_string();
        self.errors.clear_field(Field::Country);
    }
}

/// In-progress payment details. Card fields are kept when switching to PayPal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaymentForm {
    pub method: PaymentMethod,
    pub card_number: String,
    pub expiry_date: String,
    pub cvv: String,
    pub focus: usize,
    pub errors: ValidationErrors,
}

impl PaymentForm {
    const CARD_FIELDS: &'static [Field] =
        &[Field::PaymentMethod, Field::CardNumber, Field::ExpiryDate, Field::Cvv];
    const PAYPAL_FIELDS: &'static [Field] = &[Field::PaymentMethod];

    pub fn new() -> Self {
        Self::default()
    }

    pub fn shows_card_fields(&self) -> bool {
        self.method == PaymentMethod::CreditCard
    }

    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::PaymentMethod => self.method.label(),
            Field::CardNumber => &self.card_number,
            Field::ExpiryDate => &self.expiry_date,
            Field::Cvv => &self.cvv,
            _ => "",
        }
    }

    pub fn set_method(&mut self, method: PaymentMethod) {
        self.method = method;
        // Field list may have shrunk
        self.focus = self.focus.min(self.fields().len() - 1);
        self.errors.clear_field(Field::PaymentMethod);
    }

    pub fn validate(&self) -> Result<PaymentInfo, ValidationErrors> {
        match self.method {
            PaymentMethod::PayPal => Ok(PaymentInfo::PayPal),
            PaymentMethod::CreditCard => {
                let mut errors = ValidationErrors::new();
                errors.collect(validation::card_number(&self.card_number));
                errors.collect(validation::expiry_date(&self.expiry_date));
                errors.collect(validation::cvv(&self.cvv));
                errors.into_result(PaymentInfo::CreditCard(CardDetails {
                    card_number: self.card_number.clone(),
                    expiry_date: self.expiry_date.clone(),
                    cvv: self.cvv.clone(),
                }))
            }
        }
    }
}

impl StepForm for PaymentForm {
    /// Card inputs are only part of the form under credit card
    fn fields(&self) -> &'static [Field] {
        match self.method {
            PaymentMethod::CreditCard => Self::CARD_FIELDS,
            PaymentMethod::PayPal => Self::PAYPAL_FIELDS,
        }
    }

    fn focus(&self) -> usize {
        self.focus
    }

    fn set_focus(&mut self, focus: usize) {
        self.focus = focus;
    }

    fn text_mut(&mut self, field: Field) -> Option<&mut String> {
        match field {
            Field::CardNumber => Some(&mut self.card_number),
            Field::ExpiryDate => Some(&mut self.expiry_date),
            Field::Cvv => Some(&mut self.cvv),
            _ => None,
        }
    }

    fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    fn errors_mut(&mut self) -> &mut ValidationErrors {
        &mut self.errors
    }

    /// Two methods, so either direction toggles
    fn cycle_choice(&mut self, _forward: bool) {
        if self.focused_field() == Field::PaymentMethod {
            self.set_method(self.method.toggled());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn filled_shipping() -> ShippingForm {
        ShippingForm {
            full_name: "Jane Doe".to_string(),
            address_line1: "1 Main St".to_string(),
            city: "Paris".to_string(),
            state_province: "IDF".to_string(),
            postal_code: "75001".to_string(),
            country: "FR".to_string(),
            ..ShippingForm::default()
        }
    }

    #[test]
    fn test_empty_shipping_reports_every_required_field() {
        let errors = ShippingForm::new().validate().unwrap_err();
        assert_eq!(
            errors.fields(),
            vec![
                Field::FullName,
                Field::AddressLine1,
                Field::City,
                Field::StateProvince,
                Field::PostalCode,
                Field::Country,
            ]
        );
    }

    #[test]
    fn test_short_values_rejected() {
        let mut form = filled_shipping();
        form.address_line1 = "1 Ma".to_string();
        form.postal_code = "75".to_string();
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.fields(), vec![Field::AddressLine1, Field::PostalCode]);
        assert_eq!(
            errors.get(Field::AddressLine1).unwrap().message,
            "Address line 1 is required."
        );
    }

    #[test]
    fn test_astral_name_meets_minimum() {
        let mut form = filled_shipping();
        form.full_name = "😀".to_string();
        assert_eq!(form.validate().unwrap().full_name, "😀");
    }

    #[test]
    fn test_empty_address_line2_becomes_none() {
        let info = filled_shipping().validate().unwrap();
        assert_eq!(info.address_line2, None);

        let mut form = filled_shipping();
        form.address_line2 = "Apt 4".to_string();
        assert_eq!(form.validate().unwrap().address_line2.as_deref(), Some("Apt 4"));
    }

    #[test]
    fn test_typing_into_focused_field() {
        let mut form = ShippingForm::new();
        for c in "Jo".chars() {
            form.insert_char(c);
        }
        assert_eq!(form.full_name, "Jo");

        form.focus_next();
        assert_eq!(form.focused_field(), Field::AddressLine1);
        form.insert_char('x');
        form.backspace();
        assert_eq!(form.address_line1, "");

        form.focus_previous();
        form.focus_previous();
        assert_eq!(form.focused_field(), Field::Country);
    }

    #[test]
    fn test_editing_clears_stale_error() {
        let mut form = ShippingForm::new();
        form.errors = form.validate().unwrap_err();
        assert!(form.error_for(Field::FullName).is_some());

        form.insert_char('J');
        assert!(form.error_for(Field::FullName).is_none());
        assert!(form.error_for(Field::City).is_some());
    }

    #[test]
    fn test_focus_jumps_to_first_error() {
        let mut form = filled_shipping();
        form.city.clear();
        form.focus = 0;
        form.errors = form.validate().unwrap_err();
        form.focus_first_error();
        assert_eq!(form.focused_field(), Field::City);
    }

    #[test]
    fn test_country_cycles_through_catalog() {
        let mut form = ShippingForm::new();
        form.focus = ShippingForm::FIELDS.len() - 1;
        form.insert_char('x');
        assert_eq!(form.country, "");

        form.cycle_choice(true);
        assert_eq!(form.country, "US");
        assert_eq!(form.display_value(Field::Country), "United States");
        form.cycle_choice(false);
        assert_eq!(form.country, "AU");
        form.cycle_choice(true);
        assert_eq!(form.country, "US");
    }

    #[test]
    fn test_credit_card_requires_all_card_fields() {
        let form = PaymentForm::new();
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.fields(), vec![Field::CardNumber, Field::ExpiryDate, Field::Cvv]);
    }

    #[test]
    fn test_credit_card_accepts_valid_details() {
        let form = PaymentForm {
            card_number: "1234567890123456".to_string(),
            expiry_date: "09/27".to_string(),
            cvv: "123".to_string(),
            ..PaymentForm::default()
        };
        let info = form.validate().unwrap();
        assert_eq!(info.method(), PaymentMethod::CreditCard);
    }

    #[test]
    fn test_paypal_ignores_card_fields() {
        let form = PaymentForm {
            method: PaymentMethod::PayPal,
            card_number: "12345".to_string(),
            ..PaymentForm::default()
        };
        assert_eq!(form.validate().unwrap(), PaymentInfo::PayPal);
    }

    #[test]
    fn test_switching_method_keeps_card_draft() {
        let mut form = PaymentForm::new();
        form.focus_next();
        form.insert_char('4');
        form.focus = 0;
        form.cycle_choice(true);
        assert_eq!(form.method, PaymentMethod::PayPal);
        assert!(!form.shows_card_fields());
        assert_eq!(form.fields(), &[Field::PaymentMethod]);

        // Typing is inert while PayPal is selected
        form.insert_char('1');
        form.cycle_choice(true);
        assert_eq!(form.card_number, "4");
    }

    #[test]
    fn test_method_switch_clamps_focus() {
        let mut form = PaymentForm::new();
        form.focus = 3;
        form.set_method(PaymentMethod::PayPal);
        assert_eq!(form.focused_field(), Field::PaymentMethod);
        form.focus_next();
        assert_eq!(form.focus, 0);
    }
}
