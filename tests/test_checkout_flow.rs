// ABOUTME: End-to-end checkout flow tests driven through app events and the service channels

use atelier::app::events::AppEvent;
use atelier::app::{App, AppState, EventHandler, NotificationType, Route};
use atelier::checkout::{
    CheckoutStep, Field, StepForm, ORDER_PLACED_DESCRIPTION, ORDER_PLACED_MESSAGE,
    PAYPAL_PLACEHOLDER_MESSAGE,
};
use atelier::config::AppConfig;
use atelier::models::{CardDetails, Country, PaymentInfo, PaymentMethod, ShippingInfo};
use pretty_assertions::assert_eq;
use std::time::Duration;

fn send(state: &mut AppState, event: AppEvent) {
    EventHandler::process_event(event, state);
}

fn type_text(state: &mut AppState, text: &str) {
    for c in text.chars() {
        send(state, AppEvent::InputChar(c));
    }
}

/// Fill the shipping form in field order; empty strings skip the field
fn fill_shipping(state: &mut AppState, values: [&str; 6], country: &str) {
    for value in values {
        type_text(state, value);
        send(state, AppEvent::NextField);
    }
    // The country picker starts unset; each step forward moves one entry down the catalog
    let steps = Country::index_of(country).map_or(0, |i| i + 1);
    for _ in 0..steps {
        send(state, AppEvent::CycleChoice { forward: true });
    }
}

fn jane_doe_shipping(state: &mut AppState) {
    fill_shipping(state, ["Jane Doe", "1 Main St", "", "Paris", "IDF", "75001"], "FR");
}

fn fill_card(state: &mut AppState, number: &str) {
    send(state, AppEvent::NextField);
    type_text(state, number);
    send(state, AppEvent::NextField);
    type_text(state, "12/26");
    send(state, AppEvent::NextField);
    type_text(state, "321");
}

#[tokio::test(start_paused = true)]
async fn test_jane_doe_checkout_end_to_end() {
    let mut app = App::new(AppConfig::default());

    jane_doe_shipping(&mut app.state);
    send(&mut app.state, AppEvent::Submit);
    assert_eq!(app.state.wizard.current_step(), CheckoutStep::Payment);

    fill_card(&mut app.state, "4111111111111111");
    send(&mut app.state, AppEvent::Submit);
    assert_eq!(app.state.wizard.current_step(), CheckoutStep::Review);

    let review = app.state.wizard.review().unwrap();
    assert_eq!(
        review.shipping,
        &ShippingInfo {
            full_name: "Jane Doe".to_string(),
            address_line1: "1 Main St".to_string(),
            address_line2: None,
            city: "Paris".to_string(),
            state_province: "IDF".to_string(),
            postal_code: "75001".to_string(),
            country: "FR".to_string(),
        }
    );
    assert_eq!(review.shipping.country_label(), "France");
    assert_eq!(
        review.payment,
        &PaymentInfo::CreditCard(CardDetails {
            card_number: "4111111111111111".to_string(),
            expiry_date: "12/26".to_string(),
            cvv: "321".to_string(),
        })
    );
    assert_eq!(review.summary.subtotal.to_string(), "$800.00");
    assert_eq!(review.summary.total.to_string(), "$889.00");

    send(&mut app.state, AppEvent::Submit);
    app.tick();

    let notifications = app.state.get_current_notifications();
    assert_eq!(notifications.len(), 1);
    assert_eq!(notifications[0].message, ORDER_PLACED_MESSAGE);
    assert_eq!(notifications[0].description, ORDER_PLACED_DESCRIPTION);
    assert_eq!(notifications[0].notification_type, NotificationType::Success);
    assert_eq!(notifications[0].duration, Duration::from_secs(5));
    assert_eq!(app.state.route, Route::Checkout);

    // Redirect only happens once the delay has passed
    tokio::time::sleep(Duration::from_millis(1500)).await;
    app.tick();
    assert_eq!(app.state.route, Route::Checkout);

    tokio::time::sleep(Duration::from_millis(600)).await;
    app.tick();
    assert_eq!(app.state.route, Route::Home);
}

#[test]
fn test_review_echoes_second_address_line() {
    let mut state = AppState::default();
    fill_shipping(
        &mut state,
        ["Jane Doe", "1 Main St", "Apt 4", "Paris", "IDF", "75001"],
        "FR",
    );
    send(&mut state, AppEvent::Submit);
    send(&mut state, AppEvent::CycleChoice { forward: true });
    send(&mut state, AppEvent::Submit);

    let review = state.wizard.review().unwrap();
    assert_eq!(
        review.shipping,
        &ShippingInfo {
            full_name: "Jane Doe".to_string(),
            address_line1: "1 Main St".to_string(),
            address_line2: Some("Apt 4".to_string()),
            city: "Paris".to_string(),
            state_province: "IDF".to_string(),
            postal_code: "75001".to_string(),
            country: "FR".to_string(),
        }
    );
    assert_eq!(review.shipping.street_line(), "1 Main St, Apt 4");
    assert_eq!(review.payment, &PaymentInfo::PayPal);
}

#[tokio::test(start_paused = true)]
async fn test_second_confirm_is_ignored() {
    let mut app = App::new(AppConfig::default());
    jane_doe_shipping(&mut app.state);
    send(&mut app.state, AppEvent::Submit);
    fill_card(&mut app.state, "4111111111111111");
    send(&mut app.state, AppEvent::Submit);

    send(&mut app.state, AppEvent::Submit);
    send(&mut app.state, AppEvent::Submit);
    app.tick();

    assert!(app.state.wizard.is_placed());
    assert_eq!(app.state.get_current_notifications().len(), 1);
}

#[test]
fn test_short_values_keep_shopper_on_shipping() {
    let mut state = AppState::default();
    fill_shipping(&mut state, ["J", "12 A", "", "S", "I", "62"], "US");
    send(&mut state, AppEvent::Submit);

    assert_eq!(state.wizard.current_step(), CheckoutStep::Shipping);
    let form = state.wizard.shipping_form();
    assert_eq!(
        form.error_for(Field::FullName).map(|e| e.message.as_str()),
        Some("Full name must be at least 2 characters.")
    );
    assert!(form.error_for(Field::AddressLine1).is_some());
    assert!(form.error_for(Field::City).is_some());
    assert!(form.error_for(Field::StateProvince).is_some());
    assert!(form.error_for(Field::PostalCode).is_some());
    assert!(form.error_for(Field::Country).is_none());
    assert!(state.wizard.shipping().is_none());
}

#[test]
fn test_bad_card_number_blocks_review() {
    let mut state = AppState::default();
    jane_doe_shipping(&mut state);
    send(&mut state, AppEvent::Submit);

    fill_card(&mut state, "12345");
    send(&mut state, AppEvent::Submit);

    assert_eq!(state.wizard.current_step(), CheckoutStep::Payment);
    let form = state.wizard.payment_form();
    assert_eq!(form.errors.fields(), vec![Field::CardNumber]);
    assert_eq!(form.focused_field(), Field::CardNumber);
}

#[test]
fn test_paypal_skips_card_fields() {
    let mut state = AppState::default();
    jane_doe_shipping(&mut state);
    send(&mut state, AppEvent::Submit);

    send(&mut state, AppEvent::CycleChoice { forward: true });
    assert_eq!(state.wizard.payment_form().method, PaymentMethod::PayPal);

    send(&mut state, AppEvent::RequestPayPal);
    state.drain_services();
    let notifications = state.get_current_notifications();
    assert_eq!(notifications.len(), 1);
    assert_eq!(notifications[0].message, PAYPAL_PLACEHOLDER_MESSAGE);
    assert_eq!(notifications[0].notification_type, NotificationType::Info);

    send(&mut state, AppEvent::Submit);
    assert_eq!(state.wizard.current_step(), CheckoutStep::Review);
    assert_eq!(state.wizard.payment(), Some(&PaymentInfo::PayPal));
}

#[test]
fn test_back_then_resubmit_reaches_same_state() {
    let mut state = AppState::default();
    jane_doe_shipping(&mut state);
    send(&mut state, AppEvent::Submit);
    fill_card(&mut state, "4111111111111111");
    send(&mut state, AppEvent::Submit);
    let first = state.wizard.state().clone();

    send(&mut state, AppEvent::PreviousStep);
    send(&mut state, AppEvent::PreviousStep);
    assert_eq!(state.wizard.current_step(), CheckoutStep::Shipping);
    assert_eq!(state.wizard.shipping_form().full_name, "Jane Doe");

    send(&mut state, AppEvent::Submit);
    send(&mut state, AppEvent::Submit);
    assert_eq!(state.wizard.state(), &first);

    // Nothing was announced along the way
    state.drain_services();
    assert!(state.notifications.is_empty());
}

#[test]
fn test_config_amounts_flow_into_summary() {
    let mut config = AppConfig::default();
    config.checkout.shipping_fee_cents = 0;
    config.checkout.tax_cents = 1999;

    let state = AppState::new(config);
    assert_eq!(state.wizard.order_summary().total.to_string(), "$819.99");
    assert_eq!(state.wizard.settings().redirect_delay, Duration::from_secs(2));
}
