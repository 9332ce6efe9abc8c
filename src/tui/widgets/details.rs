//! Verified details panel — read-only fields from the loaded record.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::model::Record;

/// Rows needed to render the panel including its border.
pub const DETAILS_HEIGHT: u16 = 5;

/// Data shown in the panel; decoupled from [`Record`] so it can be built
/// directly in tests.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DetailsContext {
    pub name: String,
    pub email: String,
    /// Payment already formatted for display.
    pub payment: String,
}

impl From<&Record> for DetailsContext {
    fn from(record: &Record) -> Self {
        Self {
            name: record.name.clone(),
            email: record.email.clone(),
            payment: record.payment_display(),
        }
    }
}

/// Renders the verified name, email and payment in a bordered block.
///
/// Layout:
/// ```text
/// ┌ Verified details ──────────┐
/// │Name     Ada Lovelace       │
/// │Email    ada@example.com    │
/// │Payment  $1500              │
/// └────────────────────────────┘
/// ```
#[mutants::skip]
pub fn draw_details(ctx: &DetailsContext, frame: &mut Frame, area: Rect) {
    let label = Style::default().fg(Color::DarkGray);
    let value = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);

    let row = |name: &'static str, text: &str| {
        Line::from(vec![
            Span::styled(format!("{name:<9}"), label),
            Span::styled(text.to_string(), value),
        ])
    };

    let lines = vec![
        row("Name", &ctx.name),
        row("Email", &ctx.email),
        row("Payment", &ctx.payment),
    ];

    let block = Block::default()
        .title(" Verified details ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
