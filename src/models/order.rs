// ABOUTME: Order summary model derived from the placeholder catalog plus fixed shipping and tax

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Mul};

/// An amount of money in cents
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(u64);

impl Money {
    pub const ZERO: Self = Self(0);

    pub const fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    pub const fn from_dollars(dollars: u64) -> Self {
        Self(dollars * 100)
    }

    pub const fn cents(self) -> u64 {
        self.0
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Mul<u32> for Money {
    type Output = Self;

    fn mul(self, rhs: u32) -> Self {
        Self(self.0 * u64::from(rhs))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}.{:02}", self.0 / 100, self.0 % 100)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub id: String,
    pub name: String,
    pub unit_price: Money,
    pub quantity: u32,
    pub fabric: String,
    pub color: String,
}

impl LineItem {
    pub fn line_total(&self) -> Money {
        self.unit_price * self.quantity
    }

    /// "Fabric: Italian Silk, Color: Champagne"
    pub fn attributes(&self) -> String {
        format!("Fabric: {}, Color: {}", self.fabric, self.color)
    }
}

/// Items currently in the bag. Placeholder data; there is no cart backend.
pub fn placeholder_items() -> Vec<LineItem> {
    vec![
        LineItem {
            id: "1".to_string(),
            name: "Custom Tailored Silk Blouse".to_string(),
            unit_price: Money::from_dollars(350),
            quantity: 1,
            fabric: "Italian Silk".to_string(),
            color: "Champagne".to_string(),
        },
        LineItem {
            id: "2".to_string(),
            name: "Bespoke Wool Trousers".to_string(),
            unit_price: Money::from_dollars(450),
            quantity: 1,
            fabric: "Merino Wool".to_string(),
            color: "Charcoal Grey".to_string(),
        },
    ]
}

/// Computed order totals. Never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderSummary {
    pub items: Vec<LineItem>,
    pub subtotal: Money,
    pub shipping: Money,
    pub tax: Money,
    pub total: Money,
}

impl OrderSummary {
    pub fn compute(items: Vec<LineItem>, shipping: Money, tax: Money) -> Self {
        let subtotal: Money = items.iter().map(LineItem::line_total).sum();
        Self {
            items,
            subtotal,
            shipping,
            tax,
            total: subtotal + shipping + tax,
        }
    }

    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|i| i.quantity).sum()
    }
}
