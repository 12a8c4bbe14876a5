// ABOUTME: Event handling system mapping keyboard input to app actions on the current page

use crate::app::state::{AppState, Route, CHECKOUT_PATH};
use crate::checkout::{CheckoutStep, StepForm, Transition, HOME_PATH};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    Quit,
    ToggleHelp,
    // Checkout form editing
    InputChar(char),
    Backspace,
    ClearField,
    NextField,
    PreviousField,
    CycleChoice { forward: bool },
    // Checkout navigation
    Submit,       // Next step / confirm
    PreviousStep, // Back one step, no validation
    RequestPayPal,
    // Page navigation
    StartCheckout,
    GoHome,
}

pub struct EventHandler;

impl EventHandler {
    pub fn handle_key_event(key_event: KeyEvent, state: &mut AppState) -> Option<AppEvent> {
        if key_event.modifiers.contains(KeyModifiers::CONTROL)
            && key_event.code == KeyCode::Char('c')
        {
            return Some(AppEvent::Quit);
        }

        if state.help_visible {
            return match key_event.code {
                KeyCode::Esc | KeyCode::F(1) | KeyCode::Char('?') => Some(AppEvent::ToggleHelp),
                _ => None,
            };
        }

        if key_event.code == KeyCode::F(1) {
            return Some(AppEvent::ToggleHelp);
        }

        match state.route {
            Route::Checkout => Self::handle_checkout_keys(key_event, state),
            Route::Home | Route::NotFound(_) => Self::handle_page_keys(key_event),
        }
    }

    fn handle_page_keys(key_event: KeyEvent) -> Option<AppEvent> {
        match key_event.code {
            KeyCode::Char('c') => Some(AppEvent::StartCheckout),
            KeyCode::Char('h') => Some(AppEvent::GoHome),
            KeyCode::Char('?') => Some(AppEvent::ToggleHelp),
            KeyCode::Char('q') | KeyCode::Esc => Some(AppEvent::Quit),
            _ => None,
        }
    }

    fn handle_checkout_keys(key_event: KeyEvent, state: &AppState) -> Option<AppEvent> {
        let ctrl = key_event.modifiers.contains(KeyModifiers::CONTROL);
        let on_review = state.wizard.current_step() == CheckoutStep::Review;

        match key_event.code {
            KeyCode::Enter => Some(AppEvent::Submit),
            KeyCode::Esc => {
                if state.wizard.can_go_back() {
                    Some(AppEvent::PreviousStep)
                } else {
                    Some(AppEvent::Quit)
                }
            }
            KeyCode::Tab | KeyCode::Down => Some(AppEvent::NextField),
            KeyCode::BackTab | KeyCode::Up => Some(AppEvent::PreviousField),
            KeyCode::Right => Some(AppEvent::CycleChoice { forward: true }),
            KeyCode::Left => Some(AppEvent::CycleChoice { forward: false }),
            KeyCode::Backspace => Some(AppEvent::Backspace),
            KeyCode::Char('u') if ctrl => Some(AppEvent::ClearField),
            KeyCode::Char('p') if ctrl => Some(AppEvent::RequestPayPal),
            KeyCode::Char(_) if ctrl => None,
            // The review step has no inputs, so plain keys act as shortcuts there
            KeyCode::Char('q') if on_review => Some(AppEvent::Quit),
            KeyCode::Char('b') if on_review => Some(AppEvent::PreviousStep),
            KeyCode::Char('?') if on_review => Some(AppEvent::ToggleHelp),
            KeyCode::Char(_) if on_review => None,
            KeyCode::Char(c) => Some(AppEvent::InputChar(c)),
            _ => None,
        }
    }

    pub fn process_event(event: AppEvent, state: &mut AppState) {
        match event {
            AppEvent::Quit => {
                info!("Quit requested");
                state.should_quit = true;
            }
            AppEvent::ToggleHelp => state.help_visible = !state.help_visible,
            AppEvent::StartCheckout => state.navigate_to(CHECKOUT_PATH),
            AppEvent::GoHome => state.navigate_to(HOME_PATH),
            AppEvent::Submit => match state.wizard.submit() {
                Ok(Transition::Advanced(step)) => {
                    info!("Checkout advanced to step {} ({})", step.number(), step.title());
                }
                Ok(Transition::Confirmed) => info!("Order placed"),
                Ok(Transition::Unchanged) => {}
                Err(errors) => debug!(
                    "Step {} has {} invalid field(s)",
                    state.wizard.current_step().number(),
                    errors.len()
                ),
            },
            AppEvent::PreviousStep => {
                state.wizard.previous();
            }
            AppEvent::RequestPayPal => {
                state.wizard.request_paypal();
            }
            AppEvent::InputChar(c) => Self::edit_active_form(state, |form| form.insert_char(c)),
            AppEvent::Backspace => Self::edit_active_form(state, |form| form.backspace()),
            AppEvent::ClearField => Self::edit_active_form(state, |form| form.clear_field()),
            AppEvent::NextField => Self::edit_active_form(state, |form| form.focus_next()),
            AppEvent::PreviousField => Self::edit_active_form(state, |form| form.focus_previous()),
            AppEvent::CycleChoice { forward } => {
                Self::edit_active_form(state, |form| form.cycle_choice(forward));
            }
        }
    }

    fn edit_active_form(state: &mut AppState, edit: impl FnOnce(&mut dyn StepForm)) {
        if let Some(form) = state.wizard.active_form_mut() {
            edit(form);
        }
    }
}
