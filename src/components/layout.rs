// ABOUTME: Main layout component routing between pages, with a status bar and notification toasts

use ratatui::{
    prelude::*,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

// Premium color palette (TUI Style Guide)
const CORNFLOWER_BLUE: Color = Color::Rgb(100, 149, 237);
const GOLD: Color = Color::Rgb(255, 215, 0);
const SELECTION_GREEN: Color = Color::Rgb(100, 200, 100);
const DARK_BG: Color = Color::Rgb(25, 25, 35);
const PANEL_BG: Color = Color::Rgb(30, 30, 40);
const SOFT_WHITE: Color = Color::Rgb(220, 220, 230);
const MUTED_GRAY: Color = Color::Rgb(120, 120, 140);

use super::{CheckoutComponent, HelpComponent, LandingComponent};
use crate::app::state::NotificationType;
use crate::app::{AppState, Route};

pub struct LayoutComponent {
    checkout: CheckoutComponent,
    landing: LandingComponent,
    help: HelpComponent,
}

impl LayoutComponent {
    pub fn new() -> Self {
        Self {
            checkout: CheckoutComponent::new(),
            landing: LandingComponent::new(),
            help: HelpComponent::new(),
        }
    }

    pub fn render(&mut self, frame: &mut Frame, state: &mut AppState) {
        let area = frame.size();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(area);

        match &state.route {
            Route::Home => self.landing.render_home(frame, chunks[0]),
            Route::Checkout => self.checkout.render(frame, chunks[0], &state.wizard),
            Route::NotFound(path) => self.landing.render_not_found(frame, chunks[0], path),
        }

        self.render_status_bar(frame, chunks[1], state);
        self.render_notifications(frame, area, state);

        if state.help_visible {
            self.help.render(frame, area);
        }
    }

    fn render_status_bar(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let summary = state.wizard.order_summary();
        let status = Paragraph::new(Line::from(vec![
            Span::styled(" ◆ ", Style::default().fg(GOLD)),
            Span::styled(state.route.path().to_string(), Style::default().fg(SOFT_WHITE)),
            Span::styled("  │  ", Style::default().fg(MUTED_GRAY)),
            Span::styled(
                format!("{} item(s)", summary.item_count()),
                Style::default().fg(MUTED_GRAY),
            ),
            Span::styled("  │  ", Style::default().fg(MUTED_GRAY)),
            Span::styled(
                format!("Bag total {}", summary.total),
                Style::default().fg(CORNFLOWER_BLUE),
            ),
            Span::styled("  │  F1 help  Ctrl+C quit", Style::default().fg(MUTED_GRAY)),
        ]))
        .style(Style::default().bg(DARK_BG))
        .alignment(Alignment::Left);

        frame.render_widget(status, area);
    }

    fn render_notifications(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let notifications = state.get_current_notifications();
        if notifications.is_empty() {
            return;
        }

        // Position notifications in the top-right corner
        let notification_width = 54.min(area.width.saturating_sub(2));
        let notification_height = notifications.len() as u16 * 4; // 4 lines per notification

        let notification_area = Rect {
            x: area.width.saturating_sub(notification_width + 2),
            y: 1,
            width: notification_width,
            height: notification_height.min(area.height.saturating_sub(2)),
        };

        for (i, notification) in notifications.iter().enumerate() {
            let y_offset = i as u16 * 4;
            if y_offset >= notification_area.height {
                break; // Don't render notifications that won't fit
            }

            let single_notification_area = Rect {
                x: notification_area.x,
                y: notification_area.y + y_offset,
                width: notification_area.width,
                height: 4.min(notification_area.height - y_offset),
            };

            let (icon, color) = match notification.notification_type {
                NotificationType::Success => ("✓ ", SELECTION_GREEN),
                NotificationType::Info => ("ℹ ", CORNFLOWER_BLUE),
            };

            let lines = vec![
                Line::from(vec![
                    Span::styled(icon, Style::default().fg(color).add_modifier(Modifier::BOLD)),
                    Span::styled(
                        notification.message.as_str(),
                        Style::default().fg(color).add_modifier(Modifier::BOLD),
                    ),
                ]),
                Line::from(Span::styled(
                    notification.description.as_str(),
                    Style::default().fg(SOFT_WHITE),
                )),
            ];

            let notification_widget = Paragraph::new(lines)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_type(BorderType::Rounded)
                        .border_style(Style::default().fg(color))
                        .style(Style::default().bg(PANEL_BG)),
                )
                .wrap(ratatui::widgets::Wrap { trim: true });

            frame.render_widget(ratatui::widgets::Clear, single_notification_area);
            frame.render_widget(notification_widget, single_notification_area);
        }
    }
}

impl Default for LayoutComponent {
    fn default() -> Self {
        Self::new()
    }
}
