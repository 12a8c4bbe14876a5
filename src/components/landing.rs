// ABOUTME: Static storefront pages: the home landing page and the not-found page

use ratatui::{
    prelude::*,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

const CORNFLOWER_BLUE: Color = Color::Rgb(100, 149, 237);
const GOLD: Color = Color::Rgb(255, 215, 0);
const PANEL_BG: Color = Color::Rgb(30, 30, 40);
const SOFT_WHITE: Color = Color::Rgb(220, 220, 230);
const MUTED_GRAY: Color = Color::Rgb(120, 120, 140);
const WARNING_YELLOW: Color = Color::Rgb(255, 200, 80);

pub struct LandingComponent;

impl LandingComponent {
    pub fn new() -> Self {
        Self
    }

    fn key_hint(key: &'static str, action: &'static str) -> Vec<Span<'static>> {
        vec![
            Span::styled(format!("[{key}]"), Style::default().fg(GOLD).add_modifier(Modifier::BOLD)),
            Span::styled(format!(" {action}   "), Style::default().fg(MUTED_GRAY)),
        ]
    }

    fn page(frame: &mut Frame, area: Rect, title: &'static str, lines: Vec<Line<'static>>) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(CORNFLOWER_BLUE))
            .style(Style::default().bg(PANEL_BG))
            .title(title)
            .title_style(Style::default().fg(GOLD).add_modifier(Modifier::BOLD));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        // Vertically center the page body
        let height = lines.len() as u16;
        let top = inner.height.saturating_sub(height) / 2;
        let body = Rect {
            y: inner.y + top,
            height: height.min(inner.height),
            ..inner
        };

        frame.render_widget(
            Paragraph::new(lines).alignment(Alignment::Center).wrap(Wrap { trim: true }),
            body,
        );
    }

    pub fn render_home(&self, frame: &mut Frame, area: Rect) {
        let mut hints = Self::key_hint("c", "Checkout");
        hints.extend(Self::key_hint("q", "Quit"));

        let lines = vec![
            Line::from(Span::styled(
                "ATELIER",
                Style::default().fg(GOLD).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "Bespoke garments, tailored to you.",
                Style::default().fg(SOFT_WHITE),
            )),
            Line::from(Span::styled(
                "Your bag is ready whenever you are.",
                Style::default().fg(MUTED_GRAY),
            )),
            Line::from(""),
            Line::from(hints),
        ];
        Self::page(frame, area, " Home ", lines);
    }

    pub fn render_not_found(&self, frame: &mut Frame, area: Rect, path: &str) {
        let mut hints = Self::key_hint("h", "Home");
        hints.extend(Self::key_hint("c", "Checkout"));

        let lines = vec![
            Line::from(Span::styled(
                "404",
                Style::default().fg(WARNING_YELLOW).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                format!("Oops! Page not found: {path}"),
                Style::default().fg(SOFT_WHITE),
            )),
            Line::from(""),
            Line::from(hints),
        ];
        Self::page(frame, area, " Not Found ", lines);
    }
}

impl Default for LandingComponent {
    fn default() -> Self {
        Self::new()
    }
}
