// ABOUTME: Core data models for checkout: shipping, payment, and the derived order summary

pub mod order;
pub mod payment;
pub mod shipping;

pub use order::{placeholder_items, LineItem, Money, OrderSummary};
pub use payment::{CardDetails, PaymentInfo, PaymentMethod};
pub use shipping::{Country, ShippingInfo, COUNTRIES};
