// ABOUTME: Payment method selection and the committed payment details for checkout
// Card fields only exist on the credit card variant; PayPal carries nothing

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PaymentMethod {
    #[default]
    CreditCard,
    PayPal,
}

impl PaymentMethod {
    pub fn all() -> &'static [Self] {
        &[Self::CreditCard, Self::PayPal]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::CreditCard => "Credit Card",
            Self::PayPal => "PayPal",
        }
    }

    /// The other method; there are only two
    pub fn toggled(&self) -> Self {
        match self {
            Self::CreditCard => Self::PayPal,
            Self::PayPal => Self::CreditCard,
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Card details, present only when paying by credit card
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardDetails {
    pub card_number: String,
    pub expiry_date: String,
    pub cvv: String,
}

impl CardDetails {
    /// Card number with everything but the last four digits hidden
    pub fn masked_number(&self) -> String {
        let digits: Vec<char> = self.card_number.chars().collect();
        let visible = digits.len().saturating_sub(4);
        let tail: String = digits[visible..].iter().collect();
        format!("•••• •••• •••• {tail}")
    }
}

// Keep card data out of logs
impl fmt::Debug for CardDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CardDetails")
            .field("card_number", &self.masked_number())
            .field("expiry_date", &self.expiry_date)
            .field("cvv", &"***")
            .finish()
    }
}

/// Validated payment details committed by the second checkout step
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "paymentMethod", rename_all = "camelCase")]
pub enum PaymentInfo {
    CreditCard(CardDetails),
    PayPal,
}

impl PaymentInfo {
    pub fn method(&self) -> PaymentMethod {
        match self {
            Self::CreditCard(_) => PaymentMethod::CreditCard,
            Self::PayPal => PaymentMethod::PayPal,
        }
    }

    /// One-line description for the review step
    pub fn describe(&self) -> String {
        match self {
            Self::CreditCard(card) => {
                format!("Credit Card {} (exp {})", card.masked_number(), card.expiry_date)
            }
            Self::PayPal => "PayPal".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card() -> CardDetails {
        CardDetails {
            card_number: "4111111111111111".to_string(),
            expiry_date: "12/26".to_string(),
            cvv: "321".to_string(),
        }
    }

    #[test]
    fn test_method_toggle() {
        assert_eq!(PaymentMethod::default(), PaymentMethod::CreditCard);
        assert_eq!(PaymentMethod::CreditCard.toggled(), PaymentMethod::PayPal);
        assert_eq!(PaymentMethod::PayPal.toggled(), PaymentMethod::CreditCard);
    }

    #[test]
    fn test_card_debug_hides_secrets() {
        let rendered = format!("{:?}", card());
        assert!(!rendered.contains("4111111111111111"));
        assert!(!rendered.contains("321"));
        assert!(rendered.contains("1111"));
    }

    #[test]
    fn test_describe() {
        let info = PaymentInfo::CreditCard(card());
        assert_eq!(info.method(), PaymentMethod::CreditCard);
        assert_eq!(info.describe(), "Credit Card •••• •••• •••• 1111 (exp 12/26)");
        assert_eq!(PaymentInfo::PayPal.describe(), "PayPal");
    }

    #[test]
    fn test_tagged_serialization() {
        let json = serde_json::to_value(PaymentInfo::PayPal).unwrap();
        assert_eq!(json["paymentMethod"], "payPal");

        let json = serde_json::to_value(PaymentInfo::CreditCard(card())).unwrap();
        assert_eq!(json["paymentMethod"], "creditCard");
        assert_eq!(json["expiryDate"], "12/26");
    }
}
