//! Form widget for the editable intake fields.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

/// Height of a single-line field including its border.
const SINGLE_LINE_HEIGHT: u16 = 3;
/// Height of a multi-line field including its border.
const MULTI_LINE_HEIGHT: u16 = 6;

/// A single field to render within a [`Form`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField<'a> {
    /// Title shown in the field border.
    pub label: &'a str,
    /// Current text value.
    pub value: &'a str,
    /// Whether the value may span several lines.
    pub multiline: bool,
}

/// A view over several fields with one of them focused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Form<'a> {
    fields: Vec<FormField<'a>>,
    focus: usize,
    disabled: bool,
}

impl<'a> Form<'a> {
    /// Creates a form with the field at `focus` highlighted.
    pub fn new(fields: Vec<FormField<'a>>, focus: usize) -> Self {
        Self {
            fields,
            focus,
            disabled: false,
        }
    }

    /// Renders every field greyed out with no cursor.
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Returns the index of the focused field.
    pub fn focus(&self) -> usize {
        self.focus
    }

    /// Returns the fields.
    pub fn fields(&self) -> &[FormField<'a>] {
        &self.fields
    }

    /// Total rows needed to render every field.
    pub fn height(&self) -> u16 {
        self.fields.iter().map(row_height).sum()
    }
}

fn row_height(field: &FormField<'_>) -> u16 {
    if field.multiline {
        MULTI_LINE_HEIGHT
    } else {
        SINGLE_LINE_HEIGHT
    }
}

/// Renders a form within the given area.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_form(form: &Form<'_>, frame: &mut Frame, area: Rect) {
    let constraints: Vec<Constraint> = form
        .fields
        .iter()
        .map(|f| Constraint::Length(row_height(f)))
        .collect();

    let rows = Layout::vertical(constraints).split(area);

    for (i, field) in form.fields.iter().enumerate() {
        let is_focused = i == form.focus && !form.disabled;

        let border_color = if is_focused {
            Color::Yellow
        } else {
            Color::DarkGray
        };

        let block = Block::default()
            .title(field.label)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color));

        let mut lines: Vec<Line> = field.value.split('\n').map(Line::raw).collect();
        if is_focused && let Some(last) = lines.last_mut() {
            last.push_span(Span::styled(
                "\u{2588}",
                Style::default().add_modifier(Modifier::SLOW_BLINK),
            ));
        }

        let style = if form.disabled {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default()
        };
        let inner = block.inner(rows[i]);
        frame.render_widget(block, rows[i]);

        let paragraph = Paragraph::new(Text::from(lines))
            .style(style)
            .wrap(Wrap { trim: false });
        let scroll = tail_scroll(paragraph.line_count(inner.width), inner.height);
        frame.render_widget(paragraph.scroll((scroll, 0)), inner);
    }
}

/// Rows to scroll so the last of `line_count` wrapped lines stays visible
/// in a viewport `height` rows tall.
fn tail_scroll(line_count: usize, height: u16) -> u16 {
    let hidden = line_count.saturating_sub(usize::from(height));
    u16::try_from(hidden).unwrap_or(u16::MAX)
}
