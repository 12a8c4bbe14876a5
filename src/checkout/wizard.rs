// ABOUTME: Checkout wizard state machine: shipping -> payment -> review, gated by step validation
// Forward moves re-validate the step's draft every time; backward moves never validate

use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

use super::forms::{PaymentForm, ShippingForm, StepForm};
use super::services::{Navigator, Notice, Notifier};
use super::validation::ValidationErrors;
use crate::models::{
    placeholder_items, Money, OrderSummary, PaymentInfo, PaymentMethod, ShippingInfo,
};

/// Where the shopper lands after placing an order
pub const HOME_PATH: &str = "/";

pub const ORDER_PLACED_MESSAGE: &str = "Your order has been placed successfully!";
pub const ORDER_PLACED_DESCRIPTION: &str = "You will receive an email confirmation shortly.";
pub const PAYPAL_PLACEHOLDER_MESSAGE: &str = "PayPal integration placeholder";
pub const PAYPAL_PLACEHOLDER_DESCRIPTION: &str = "In a real app, this would redirect to PayPal.";

/// Steps in the checkout wizard
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum CheckoutStep {
    Shipping,
    Payment,
    Review,
}

impl CheckoutStep {
    pub fn all() -> &'static [Self] {
        &[Self::Shipping, Self::Payment, Self::Review]
    }

    /// 1-indexed for display
    pub fn number(&self) -> usize {
        match self {
            Self::Shipping => 1,
            Self::Payment => 2,
            Self::Review => 3,
        }
    }

    pub fn total() -> usize {
        3
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Shipping => "Shipping Details",
            Self::Payment => "Payment Method",
            Self::Review => "Review Your Order",
        }
    }

    /// Short name for the progress trail
    pub fn short_title(&self) -> &'static str {
        match self {
            Self::Shipping => "Shipping",
            Self::Payment => "Payment",
            Self::Review => "Review",
        }
    }

    pub fn next(&self) -> Option<Self> {
        match self {
            Self::Shipping => Some(Self::Payment),
            Self::Payment => Some(Self::Review),
            Self::Review => None,
        }
    }

    pub fn previous(&self) -> Option<Self> {
        match self {
            Self::Shipping => None,
            Self::Payment => Some(Self::Shipping),
            Self::Review => Some(Self::Payment),
        }
    }
}

/// Committed cross-step data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WizardState {
    pub current_step: CheckoutStep,
    pub shipping: Option<ShippingInfo>,
    pub payment: Option<PaymentInfo>,
}

impl Default for WizardState {
    fn default() -> Self {
        Self {
            current_step: CheckoutStep::Shipping,
            shipping: None,
            payment: None,
        }
    }
}

/// Amounts and timings the wizard works with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutSettings {
    pub shipping_fee: Money,
    pub tax: Money,
    pub redirect_delay: Duration,
    pub notification_duration: Duration,
}

impl Default for CheckoutSettings {
    fn default() -> Self {
        Self {
            shipping_fee: Money::from_dollars(25),
            tax: Money::from_dollars(64),
            redirect_delay: Duration::from_secs(2),
            notification_duration: Duration::from_secs(5),
        }
    }
}

/// Outcome of the "Next" action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Advanced(CheckoutStep),
    Confirmed,
    /// Nothing to do (e.g. the order was already placed)
    Unchanged,
}

/// Everything the review step shows
#[derive(Debug, Clone, Copy)]
pub struct Review<'a> {
    pub shipping: &'a ShippingInfo,
    pub payment: &'a PaymentInfo,
    pub summary: &'a OrderSummary,
}

pub struct CheckoutWizard {
    state: WizardState,
    shipping_form: ShippingForm,
    payment_form: PaymentForm,
    summary: OrderSummary,
    settings: CheckoutSettings,
    notifier: Arc<dyn Notifier>,
    navigator: Arc<dyn Navigator>,
    placed: bool,
}

impl CheckoutWizard {
    /// Mount a fresh wizard on the shipping step
    pub fn new(
        notifier: Arc<dyn Notifier>,
        navigator: Arc<dyn Navigator>,
        settings: CheckoutSettings,
    ) -> Self {
        let summary =
            OrderSummary::compute(placeholder_items(), settings.shipping_fee, settings.tax);
        debug!("Checkout mounted with total {}", summary.total);
        Self {
            state: WizardState::default(),
            shipping_form: ShippingForm::new(),
            payment_form: PaymentForm::new(),
            summary,
            settings,
            notifier,
            navigator,
            placed: false,
        }
    }

    pub fn state(&self) -> &WizardState {
        &self.state
    }

    pub fn current_step(&self) -> CheckoutStep {
        self.state.current_step
    }

    pub fn shipping(&self) -> Option<&ShippingInfo> {
        self.state.shipping.as_ref()
    }

    pub fn payment(&self) -> Option<&PaymentInfo> {
        self.state.payment.as_ref()
    }

    pub fn shipping_form(&self) -> &ShippingForm {
        &self.shipping_form
    }

    pub fn shipping_form_mut(&mut self) -> &mut ShippingForm {
        &mut self.shipping_form
    }

    pub fn payment_form(&self) -> &PaymentForm {
        &self.payment_form
    }

    pub fn payment_form_mut(&mut self) -> &mut PaymentForm {
        &mut self.payment_form
    }

    pub fn order_summary(&self) -> &OrderSummary {
        &self.summary
    }

    pub fn settings(&self) -> &CheckoutSettings {
        &self.settings
    }

    pub fn is_placed(&self) -> bool {
        self.placed
    }

    /// Completed fraction of the wizard, `step / total`
    pub fn progress(&self) -> f64 {
        self.state.current_step.number() as f64 / CheckoutStep::total() as f64
    }

    pub fn progress_percent(&self) -> u16 {
        (self.state.current_step.number() * 100 / CheckoutStep::total()) as u16
    }

    pub fn can_go_back(&self) -> bool {
        self.state.current_step.previous().is_some()
    }

    /// Label of the forward button for the current step
    pub fn next_label(&self) -> String {
        match self.state.current_step {
            CheckoutStep::Shipping => "Next: Payment".to_string(),
            CheckoutStep::Payment => "Next: Review Order".to_string(),
            CheckoutStep::Review => format!("Confirm & Pay {}", self.summary.total),
        }
    }

    /// Form of the open step; the review step has none
    pub fn active_form_mut(&mut self) -> Option<&mut dyn StepForm> {
        match self.state.current_step {
            CheckoutStep::Shipping => Some(&mut self.shipping_form),
            CheckoutStep::Payment => Some(&mut self.payment_form),
            CheckoutStep::Review => None,
        }
    }

    /// Committed data for the review step; only available once there
    pub fn review(&self) -> Option<Review<'_>> {
        if self.state.current_step != CheckoutStep::Review {
            return None;
        }
        Some(Review {
            shipping: self.state.shipping.as_ref()?,
            payment: self.state.payment.as_ref()?,
            summary: &self.summary,
        })
    }

    /// The "Next" action for whichever step is open
    pub fn submit(&mut self) -> Result<Transition, ValidationErrors> {
        match self.state.current_step {
            CheckoutStep::Shipping => self.submit_shipping().map(Transition::Advanced),
            CheckoutStep::Payment => self.submit_payment().map(Transition::Advanced),
            CheckoutStep::Review => Ok(if self.confirm() {
                Transition::Confirmed
            } else {
                Transition::Unchanged
            }),
        }
    }

    /// Validate the shipping draft and move on to payment
    pub fn submit_shipping(&mut self) -> Result<CheckoutStep, ValidationErrors> {
        if self.state.current_step != CheckoutStep::Shipping {
            debug!("Ignoring shipping submit on {:?}", self.state.current_step);
            return Ok(self.state.current_step);
        }

        match self.shipping_form.validate() {
            Ok(info) => {
                info!(
                    full_name = %info.full_name,
                    city = %info.city,
                    country = %info.country,
                    "Shipping details accepted"
                );
                self.shipping_form.errors = ValidationErrors::new();
                self.state.shipping = Some(info);
                self.advance();
                Ok(self.state.current_step)
            }
            Err(errors) => {
                debug!("Shipping rejected: {:?}", errors.fields());
                self.shipping_form.errors = errors.clone();
                self.shipping_form.focus_first_error();
                Err(errors)
            }
        }
    }

    /// Validate the payment draft under the selected method and move on to review
    pub fn submit_payment(&mut self) -> Result<CheckoutStep, ValidationErrors> {
        if self.state.current_step != CheckoutStep::Payment {
            debug!("Ignoring payment submit on {:?}", self.state.current_step);
            return Ok(self.state.current_step);
        }

        match self.payment_form.validate() {
            Ok(info) => {
                info!(method = %info.method(), "Payment details accepted");
                self.payment_form.errors = ValidationErrors::new();
                self.state.payment = Some(info);
                self.advance();
                Ok(self.state.current_step)
            }
            Err(errors) => {
                debug!("Payment rejected: {:?}", errors.fields());
                self.payment_form.errors = errors.clone();
                self.payment_form.focus_first_error();
                Err(errors)
            }
        }
    }

    fn advance(&mut self) {
        if let Some(next) = self.state.current_step.next() {
            self.state.current_step = next;
        }
    }

    /// Step back one screen. Keeps committed data and drafts.
    pub fn previous(&mut self) -> bool {
        if let Some(prev) = self.state.current_step.previous() {
            self.state.current_step = prev;
            return true;
        }
        false
    }

    /// Place the order: notify, then head home after the redirect delay.
    /// Returns false when not on the review step or already placed.
    pub fn confirm(&mut self) -> bool {
        if self.placed {
            debug!("Order already placed; ignoring confirm");
            return false;
        }
        let Some(review) = self.review() else {
            warn!("Confirm requested on {:?}", self.state.current_step);
            return false;
        };

        info!(
            shipping = ?review.shipping,
            payment = ?review.payment,
            total = %review.summary.total,
            "Order confirmed"
        );

        self.notifier.notify(Notice::success(
            ORDER_PLACED_MESSAGE,
            ORDER_PLACED_DESCRIPTION,
            self.settings.notification_duration,
        ));
        self.placed = true;
        self.schedule_redirect();
        true
    }

    /// Stand-in for the PayPal hand-off; only meaningful with PayPal selected
    pub fn request_paypal(&self) -> bool {
        if self.state.current_step != CheckoutStep::Payment
            || self.payment_form.method != PaymentMethod::PayPal
        {
            return false;
        }
        self.notifier.notify(Notice::info(
            PAYPAL_PLACEHOLDER_MESSAGE,
            PAYPAL_PLACEHOLDER_DESCRIPTION,
            self.settings.notification_duration,
        ));
        true
    }

    fn schedule_redirect(&self) {
        let navigator = Arc::clone(&self.navigator);
        let delay = self.settings.redirect_delay;
        debug!("Redirecting to {} in {:?}", HOME_PATH, delay);

        if let Ok(handle) = tokio::runtime::Handle::try_current() {
            handle.spawn(async move {
                tokio::time::sleep(delay).await;
                navigator.navigate(HOME_PATH);
            });
        } else {
            std::thread::spawn(move || {
                std::thread::sleep(delay);
                navigator.navigate(HOME_PATH);
            });
        }
    }
}
