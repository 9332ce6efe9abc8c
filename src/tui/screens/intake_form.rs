//! Intake form screen — verified details plus the three editable fields.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::controller::IdleState;
use crate::model::{FieldEdit, FieldId};
use crate::tui::action::Action;
use crate::tui::widgets::details::{DETAILS_HEIGHT, DetailsContext, draw_details};
use crate::tui::widgets::form::{Form, FormField, draw_form};

/// State for the intake form screen. Field values live in the controller;
/// this only tracks focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntakeFormState {
    focus: FieldId,
}

impl Default for IntakeFormState {
    fn default() -> Self {
        Self::new()
    }
}

impl IntakeFormState {
    /// Creates the screen state with focus on the first field.
    pub fn new() -> Self {
        Self {
            focus: FieldId::ALL[0],
        }
    }

    /// Returns the focused field.
    pub fn focus(&self) -> FieldId {
        self.focus
    }

    fn focus_index(&self) -> usize {
        FieldId::ALL
            .iter()
            .position(|&f| f == self.focus)
            .unwrap_or(0)
    }

    fn focus_next(&mut self) {
        let next = (self.focus_index() + 1) % FieldId::ALL.len();
        self.focus = FieldId::ALL[next];
    }

    fn focus_prev(&mut self) {
        let len = FieldId::ALL.len();
        let prev = (self.focus_index() + len - 1) % len;
        self.focus = FieldId::ALL[prev];
    }

    /// Handles a key event, returning an [`Action`] for the app to apply.
    pub fn handle_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::Submit,
            KeyCode::Tab => {
                self.focus_next();
                Action::None
            }
            KeyCode::BackTab => {
                self.focus_prev();
                Action::None
            }
            KeyCode::Char(_)
                if key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                Action::None
            }
            KeyCode::Char(ch) => Action::Edit(self.focus, FieldEdit::Insert(ch)),
            KeyCode::Backspace => Action::Edit(self.focus, FieldEdit::Backspace),
            KeyCode::Enter if self.focus.is_multiline() => {
                Action::Edit(self.focus, FieldEdit::Newline)
            }
            KeyCode::Enter => Action::Submit,
            KeyCode::Esc => Action::Quit,
            _ => Action::None,
        }
    }
}

/// Renders the intake form for a loaded record.
#[mutants::skip]
pub fn draw_intake_form(state: &IntakeFormState, idle: &IdleState, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" Complete your registration ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let fields = idle.fields();
    let form = Form::new(
        FieldId::ALL
            .iter()
            .map(|&id| FormField {
                label: id.label(),
                value: fields.get(id),
                multiline: id.is_multiline(),
            })
            .collect(),
        state.focus_index(),
    )
    .disabled(idle.is_submitting());

    let error = idle.error().map(|err| {
        Paragraph::new(Line::from(Span::styled(
            err,
            Style::default().fg(Color::Red),
        )))
        .wrap(Wrap { trim: true })
    });
    let error_height = error
        .as_ref()
        .map_or(0, |p| u16::try_from(p.line_count(inner.width)).unwrap_or(u16::MAX));

    let [details_area, form_area, error_area, _spacer, footer_area] = Layout::vertical([
        Constraint::Length(DETAILS_HEIGHT),
        Constraint::Length(form.height()),
        Constraint::Length(error_height),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(inner);

    draw_details(&DetailsContext::from(idle.record()), frame, details_area);
    draw_form(&form, frame, form_area);

    if let Some(error) = error {
        frame.render_widget(error, error_area);
    }

    let footer = if idle.is_submitting() {
        Paragraph::new(Line::from("Submitting\u{2026}")).style(Style::default().fg(Color::Yellow))
    } else {
        Paragraph::new(Line::from(
            "Tab/Shift+Tab: next/prev  Enter: submit  Ctrl+S: submit  Esc: quit",
        ))
        .style(Style::default().fg(Color::DarkGray))
    };
    frame.render_widget(footer, footer_area);
}
