// ABOUTME: Checkout wizard module: step state machine, form drafts, validation, and injected services
// Shipping and payment are validated before the wizard moves forward; review places the order

pub mod forms;
pub mod services;
pub mod validation;
pub mod wizard;

pub use forms::{PaymentForm, ShippingForm, StepForm};
pub use services::{ChannelNavigator, ChannelNotifier, Navigator, Notice, NoticeKind, Notifier};
pub use validation::{Field, FieldValidationError, ValidationErrors};
pub use wizard::{
    CheckoutSettings, CheckoutStep, CheckoutWizard, Review, Transition, WizardState, HOME_PATH,
    ORDER_PLACED_DESCRIPTION, ORDER_PLACED_MESSAGE, PAYPAL_PLACEHOLDER_DESCRIPTION,
    PAYPAL_PLACEHOLDER_MESSAGE,
};
