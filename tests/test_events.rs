// ABOUTME: Unit tests for event handling to ensure keyboard inputs map to correct app actions

use atelier::app::events::AppEvent;
use atelier::app::{AppState, EventHandler, Route};
use atelier::checkout::{CheckoutStep, Field, StepForm};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use pretty_assertions::assert_eq;

const fn create_key_event(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

const fn create_key_event_with_modifiers(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
    KeyEvent::new(code, modifiers)
}

fn press(state: &mut AppState, code: KeyCode) {
    if let Some(event) = EventHandler::handle_key_event(create_key_event(code), state) {
        EventHandler::process_event(event, state);
    }
}

fn type_text(state: &mut AppState, text: &str) {
    for c in text.chars() {
        press(state, KeyCode::Char(c));
    }
}

#[test]
fn test_ctrl_c_quits_everywhere() {
    let mut state = AppState::default();
    let ctrl_c = create_key_event_with_modifiers(KeyCode::Char('c'), KeyModifiers::CONTROL);

    assert_eq!(EventHandler::handle_key_event(ctrl_c, &mut state), Some(AppEvent::Quit));

    state.navigate_to("/");
    assert_eq!(EventHandler::handle_key_event(ctrl_c, &mut state), Some(AppEvent::Quit));
}

#[test]
fn test_letters_are_typed_into_form_fields() {
    let mut state = AppState::default();

    // 'q' is text on the shipping step, not quit
    assert_eq!(
        EventHandler::handle_key_event(create_key_event(KeyCode::Char('q')), &mut state),
        Some(AppEvent::InputChar('q'))
    );

    type_text(&mut state, "Jane");
    assert_eq!(state.wizard.shipping_form().full_name, "Jane");
    assert!(!state.should_quit);
}

#[test]
fn test_field_navigation_keys() {
    let mut state = AppState::default();

    press(&mut state, KeyCode::Tab);
    assert_eq!(state.wizard.shipping_form().focused_field(), Field::AddressLine1);
    press(&mut state, KeyCode::Down);
    assert_eq!(state.wizard.shipping_form().focused_field(), Field::AddressLine2);
    press(&mut state, KeyCode::BackTab);
    press(&mut state, KeyCode::Up);
    assert_eq!(state.wizard.shipping_form().focused_field(), Field::FullName);

    // Wraps around to the country picker
    press(&mut state, KeyCode::Up);
    assert_eq!(state.wizard.shipping_form().focused_field(), Field::Country);
    press(&mut state, KeyCode::Right);
    assert_eq!(state.wizard.shipping_form().country, "US");
    press(&mut state, KeyCode::Left);
    assert_eq!(state.wizard.shipping_form().country, "AU");
    press(&mut state, KeyCode::Left);
    assert_eq!(state.wizard.shipping_form().country, "JP");
}

#[test]
fn test_backspace_and_clear() {
    let mut state = AppState::default();
    type_text(&mut state, "Janet");
    press(&mut state, KeyCode::Backspace);
    assert_eq!(state.wizard.shipping_form().full_name, "Jane");

    let ctrl_u = create_key_event_with_modifiers(KeyCode::Char('u'), KeyModifiers::CONTROL);
    assert_eq!(
        EventHandler::handle_key_event(ctrl_u, &mut state),
        Some(AppEvent::ClearField)
    );
    EventHandler::process_event(AppEvent::ClearField, &mut state);
    assert_eq!(state.wizard.shipping_form().full_name, "");
}

#[test]
fn test_esc_on_first_step_quits() {
    let mut state = AppState::default();
    assert_eq!(
        EventHandler::handle_key_event(create_key_event(KeyCode::Esc), &mut state),
        Some(AppEvent::Quit)
    );
}

#[test]
fn test_enter_with_empty_form_stays_on_shipping() {
    let mut state = AppState::default();
    press(&mut state, KeyCode::Enter);

    assert_eq!(state.wizard.current_step(), CheckoutStep::Shipping);
    assert!(state.wizard.shipping_form().error_for(Field::FullName).is_some());
    assert_eq!(state.wizard.shipping_form().focused_field(), Field::FullName);
}

#[test]
fn test_help_overlay_swallows_keys() {
    let mut state = AppState::default();
    press(&mut state, KeyCode::F(1));
    assert!(state.help_visible);

    type_text(&mut state, "abc");
    assert_eq!(state.wizard.shipping_form().full_name, "");

    press(&mut state, KeyCode::Esc);
    assert!(!state.help_visible);
    assert!(!state.should_quit);
}

#[test]
fn test_page_keys_outside_checkout() {
    let mut state = AppState::default();
    state.navigate_to("/lookbook");
    assert_eq!(state.route, Route::NotFound("/lookbook".to_string()));

    press(&mut state, KeyCode::Char('h'));
    assert_eq!(state.route, Route::Home);

    press(&mut state, KeyCode::Char('c'));
    assert_eq!(state.route, Route::Checkout);
    assert_eq!(state.wizard.current_step(), CheckoutStep::Shipping);

    state.navigate_to("/");
    press(&mut state, KeyCode::Char('q'));
    assert!(state.should_quit);
}
