// ABOUTME: Checkout wizard component
// Renders the progress header, the open step's form or review, and the navigation footer

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Gauge, Paragraph, Wrap},
    Frame,
};

use crate::checkout::{CheckoutStep, CheckoutWizard, Field, PaymentForm, ShippingForm, StepForm};
use crate::models::PaymentMethod;

// Color palette from TUI style guide
const CORNFLOWER_BLUE: Color = Color::Rgb(100, 149, 237);
const GOLD: Color = Color::Rgb(255, 215, 0);
const SELECTION_GREEN: Color = Color::Rgb(100, 200, 100);
const DARK_BG: Color = Color::Rgb(25, 25, 35);
const PANEL_BG: Color = Color::Rgb(30, 30, 40);
const SOFT_WHITE: Color = Color::Rgb(220, 220, 230);
const MUTED_GRAY: Color = Color::Rgb(120, 120, 140);
const SUBDUED_BORDER: Color = Color::Rgb(60, 60, 80);
const ERROR_RED: Color = Color::Rgb(220, 80, 80);

pub struct CheckoutComponent;

impl CheckoutComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, wizard: &CheckoutWizard) {
        frame.render_widget(Clear, area);
        frame.render_widget(Block::default().style(Style::default().bg(DARK_BG)), area);

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(6), // Title, progress trail, gauge
                Constraint::Min(10),   // Step content
                Constraint::Length(3), // Navigation footer
            ])
            .split(area);

        self.render_header(frame, layout[0], wizard);
        match wizard.current_step() {
            CheckoutStep::Shipping => self.render_shipping(frame, layout[1], wizard.shipping_form()),
            CheckoutStep::Payment => self.render_payment(frame, layout[1], wizard.payment_form()),
            CheckoutStep::Review => self.render_review(frame, layout[1], wizard),
        }
        self.render_navigation(frame, layout[2], wizard);
    }

    fn render_header(&self, frame: &mut Frame, area: Rect, wizard: &CheckoutWizard) {
        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(CORNFLOWER_BLUE))
            .style(Style::default().bg(PANEL_BG));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Title
                Constraint::Length(1), // Description
                Constraint::Length(1), // Step trail
                Constraint::Length(1), // Gauge
            ])
            .split(inner);

        let title = Paragraph::new(Span::styled(
            "Secure Checkout",
            Style::default().fg(GOLD).add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center);
        frame.render_widget(title, rows[0]);

        let description = Paragraph::new(Span::styled(
            format!(
                "Complete your luxurious custom order in {} simple steps.",
                CheckoutStep::total()
            ),
            Style::default().fg(MUTED_GRAY),
        ))
        .alignment(Alignment::Center);
        frame.render_widget(description, rows[1]);

        let current = wizard.current_step();
        let mut spans = Vec::new();
        for (idx, step) in CheckoutStep::all().iter().enumerate() {
            let (icon, style) = if *step < current {
                ("●", Style::default().fg(SELECTION_GREEN))
            } else if *step == current {
                ("◉", Style::default().fg(GOLD).add_modifier(Modifier::BOLD))
            } else {
                ("○", Style::default().fg(MUTED_GRAY))
            };
            spans.push(Span::styled(icon, style));
            spans.push(Span::raw(" "));
            spans.push(Span::styled(
                step.short_title(),
                if *step == current {
                    Style::default().fg(SOFT_WHITE)
                } else {
                    Style::default().fg(MUTED_GRAY)
                },
            ));
            if idx < CheckoutStep::total() - 1 {
                spans.push(Span::styled(" → ", Style::default().fg(SUBDUED_BORDER)));
            }
        }
        frame.render_widget(Paragraph::new(Line::from(spans)).alignment(Alignment::Center), rows[2]);

        let gauge = Gauge::default()
            .gauge_style(Style::default().fg(CORNFLOWER_BLUE).bg(DARK_BG))
            .percent(wizard.progress_percent())
            .label(format!("Step {} of {}", current.number(), CheckoutStep::total()));
        frame.render_widget(gauge, rows[3]);
    }

    fn step_block(step: CheckoutStep) -> Block<'static> {
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(CORNFLOWER_BLUE))
            .style(Style::default().bg(PANEL_BG))
            .title(format!(" {}. {} ", step.number(), step.title()))
            .title_style(Style::default().fg(GOLD).add_modifier(Modifier::BOLD))
    }

    /// Label, value (or placeholder) and any inline error for one field
    fn field_lines(field: Field, value: &str, focused: bool, error: Option<&str>) -> Vec<Line<'static>> {
        let label_style = if focused {
            Style::default().fg(GOLD).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(SOFT_WHITE)
        };
        let marker = if focused { "▸ " } else { "  " };

        let value_span = if value.is_empty() && !focused {
            Span::styled(field.placeholder().to_string(), Style::default().fg(SUBDUED_BORDER))
        } else if field.is_choice() {
            let shown = if value.is_empty() { field.placeholder() } else { value };
            Span::styled(format!("◂ {shown} ▸"), Style::default().fg(SOFT_WHITE))
        } else if focused {
            Span::styled(format!("{value}│"), Style::default().fg(SOFT_WHITE))
        } else {
            Span::styled(value.to_string(), Style::default().fg(SOFT_WHITE))
        };

        let mut lines = vec![
            Line::from(vec![
                Span::styled(marker, Style::default().fg(GOLD)),
                Span::styled(field.label(), label_style),
            ]),
            Line::from(vec![Span::raw("    "), value_span]),
        ];
        if let Some(message) = error {
            lines.push(Line::from(vec![
                Span::raw("    "),
                Span::styled(message.to_string(), Style::default().fg(ERROR_RED)),
            ]));
        }
        lines
    }

    fn render_shipping(&self, frame: &mut Frame, area: Rect, form: &ShippingForm) {
        let block = Self::step_block(CheckoutStep::Shipping);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let focused = form.focused_field();
        let lines: Vec<Line> = form
            .fields()
            .iter()
            .flat_map(|field| {
                Self::field_lines(
                    *field,
                    form.display_value(*field),
                    *field == focused,
                    form.error_for(*field).map(|e| e.message.as_str()),
                )
            })
            .collect();

        frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
    }

    fn render_payment(&self, frame: &mut Frame, area: Rect, form: &PaymentForm) {
        let block = Self::step_block(CheckoutStep::Payment);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let focused = form.focused_field();
        let method_style = if focused == Field::PaymentMethod {
            Style::default().fg(GOLD).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(SOFT_WHITE)
        };

        let mut method_spans = vec![
            Span::styled(if focused == Field::PaymentMethod { "▸ " } else { "  " }, Style::default().fg(GOLD)),
            Span::styled("Select Payment Method  ", method_style),
        ];
        for method in PaymentMethod::all() {
            let radio = if *method == form.method { "(•) " } else { "( ) " };
            method_spans.push(Span::styled(radio, Style::default().fg(GOLD)));
            method_spans.push(Span::styled(format!("{}   ", method.label()), Style::default().fg(SOFT_WHITE)));
        }

        let mut lines = vec![Line::from(method_spans), Line::from("")];

        if form.shows_card_fields() {
            for field in &[Field::CardNumber, Field::ExpiryDate, Field::Cvv] {
                lines.extend(Self::field_lines(
                    *field,
                    form.value(*field),
                    *field == focused,
                    form.error_for(*field).map(|e| e.message.as_str()),
                ));
            }
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                "  🔒 Secure SSL Encrypted Payment",
                Style::default().fg(MUTED_GRAY),
            )));
        } else {
            lines.push(Line::from(Span::styled(
                "  You will be redirected to PayPal to complete your payment securely.",
                Style::default().fg(SOFT_WHITE),
            )));
            lines.push(Line::from(""));
            lines.push(Line::from(vec![
                Span::styled("  Ctrl-P", Style::default().fg(GOLD)),
                Span::styled(" Proceed with PayPal", Style::default().fg(MUTED_GRAY)),
            ]));
        }

        frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
    }

    fn render_review(&self, frame: &mut Frame, area: Rect, wizard: &CheckoutWizard) {
        let block = Self::step_block(CheckoutStep::Review);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let Some(review) = wizard.review() else {
            let msg = Paragraph::new(Span::styled(
                "Shipping and payment details are missing",
                Style::default().fg(ERROR_RED),
            ))
            .alignment(Alignment::Center);
            frame.render_widget(msg, inner);
            return;
        };

        let width = inner.width.saturating_sub(4) as usize;
        let row = |left: String, right: String, style: Style| {
            let pad = width.saturating_sub(left.chars().count() + right.chars().count());
            Line::from(Span::styled(format!("  {left}{}{right}", " ".repeat(pad)), style))
        };

        let mut lines = Vec::new();
        for item in &review.summary.items {
            lines.push(row(
                format!("{} (x{})", item.name, item.quantity),
                item.line_total().to_string(),
                Style::default().fg(SOFT_WHITE).add_modifier(Modifier::BOLD),
            ));
            lines.push(Line::from(Span::styled(
                format!("  {}", item.attributes()),
                Style::default().fg(MUTED_GRAY),
            )));
        }
        lines.push(Line::from(""));
        let muted = Style::default().fg(MUTED_GRAY);
        lines.push(row("Subtotal".to_string(), review.summary.subtotal.to_string(), muted));
        lines.push(row("Shipping".to_string(), review.summary.shipping.to_string(), muted));
        lines.push(row("Tax (Est.)".to_string(), review.summary.tax.to_string(), muted));
        lines.push(row(
            "Total".to_string(),
            review.summary.total.to_string(),
            Style::default().fg(GOLD).add_modifier(Modifier::BOLD),
        ));

        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "  Shipping to:",
            Style::default().fg(SOFT_WHITE).add_modifier(Modifier::BOLD),
        )));
        for text in [
            review.shipping.full_name.clone(),
            review.shipping.street_line(),
            review.shipping.locality_line(),
            review.shipping.country_label().to_string(),
        ] {
            lines.push(Line::from(Span::styled(format!("  {text}"), muted)));
        }

        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled("  Paying with: ", Style::default().fg(SOFT_WHITE).add_modifier(Modifier::BOLD)),
            Span::styled(review.payment.describe(), muted),
        ]));

        frame.render_widget(Paragraph::new(lines), inner);
    }

    fn render_navigation(&self, frame: &mut Frame, area: Rect, wizard: &CheckoutWizard) {
        let back_style = if wizard.can_go_back() {
            Style::default().fg(SOFT_WHITE)
        } else {
            Style::default().fg(SUBDUED_BORDER)
        };
        let next_color = if wizard.current_step() == CheckoutStep::Review {
            SELECTION_GREEN
        } else {
            CORNFLOWER_BLUE
        };
        let next_text = if wizard.is_placed() {
            "Order placed".to_string()
        } else {
            wizard.next_label()
        };

        let nav = Paragraph::new(Line::from(vec![
            Span::styled(" Esc ", Style::default().fg(GOLD)),
            Span::styled("‹ Previous", back_style),
            Span::styled("   │   ", Style::default().fg(SUBDUED_BORDER)),
            Span::styled("Tab ", Style::default().fg(GOLD)),
            Span::styled("field  ", Style::default().fg(MUTED_GRAY)),
            Span::styled("F1 ", Style::default().fg(GOLD)),
            Span::styled("help", Style::default().fg(MUTED_GRAY)),
            Span::styled("   │   ", Style::default().fg(SUBDUED_BORDER)),
            Span::styled("Enter ", Style::default().fg(GOLD)),
            Span::styled(next_text, Style::default().fg(next_color).add_modifier(Modifier::BOLD)),
            Span::styled(" »", Style::default().fg(next_color)),
        ]))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(Style::default().fg(SUBDUED_BORDER))
                .style(Style::default().bg(PANEL_BG)),
        );
        frame.render_widget(nav, area);
    }
}

impl Default for CheckoutComponent {
    fn default() -> Self {
        Self::new()
    }
}
