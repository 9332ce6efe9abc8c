//! Full-screen notices for every status other than the editable form.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::controller::Status;
use crate::tui::action::Action;

/// Handles a key event on a notice screen.
///
/// `q`/`Esc` quit everywhere; `r` retries after an error; `t` loads the
/// sample id when there is no usable invitation.
pub fn handle_notice_key(status: &Status, key: KeyEvent) -> Action {
    match (status, key.code) {
        (_, KeyCode::Char('q') | KeyCode::Esc) => Action::Quit,
        (Status::Error(_), KeyCode::Char('r')) => Action::Retry,
        (Status::Error(_) | Status::MissingId, KeyCode::Char('t')) => Action::LoadSample,
        _ => Action::None,
    }
}

struct Notice {
    title: &'static str,
    color: Color,
    body: Vec<String>,
    hint: &'static str,
}

fn notice_for(status: &Status, sample_id: &str) -> Notice {
    match status {
        Status::Loading | Status::Idle(_) => Notice {
            title: " Loading ",
            color: Color::Cyan,
            body: vec!["Loading your details\u{2026}".to_string()],
            hint: "q: quit",
        },
        Status::MissingId => Notice {
            title: " No invitation ",
            color: Color::Yellow,
            body: vec![
                "This invitation link has no id.".to_string(),
                "Open the link from your invitation email to continue.".to_string(),
                String::new(),
                format!("Press t to try the sample invitation ({sample_id})."),
            ],
            hint: "t: try sample  q: quit",
        },
        Status::Error(message) => Notice {
            title: " Something went wrong ",
            color: Color::Red,
            body: vec![message.clone()],
            hint: "r: retry  t: try sample  q: quit",
        },
        Status::AlreadySubmitted => Notice {
            title: " Already submitted ",
            color: Color::Green,
            body: vec![
                "You have already completed this form.".to_string(),
                "No further action is needed.".to_string(),
            ],
            hint: "q: quit",
        },
        Status::Success => Notice {
            title: " Thank you ",
            color: Color::Green,
            body: vec![
                "Your details have been submitted.".to_string(),
                "We'll be in touch soon.".to_string(),
            ],
            hint: "q: quit",
        },
    }
}

/// Renders the notice for `status`.
#[mutants::skip]
pub fn draw_notice(status: &Status, sample_id: &str, frame: &mut Frame, area: Rect) {
    let notice = notice_for(status, sample_id);

    let block = Block::default()
        .title(notice.title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(notice.color));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [content_area, footer_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(inner);

    let lines: Vec<Line> = notice.body.into_iter().map(Line::from).collect();
    let body = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    let body_height = u16::try_from(body.line_count(content_area.width)).unwrap_or(u16::MAX);
    let [body_area] = Layout::vertical([Constraint::Length(body_height)])
        .flex(Flex::Center)
        .areas(content_area);
    frame.render_widget(body, body_area);

    let footer = Paragraph::new(Line::from(notice.hint))
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, footer_area);
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyEventKind, KeyEventState, KeyModifiers};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn error() -> Status {
        Status::Error("server said no".into())
    }

    mod keys {
        use super::*;

        #[test]
        fn q_and_esc_quit_everywhere() {
            let statuses = [
                Status::Loading,
                Status::MissingId,
                error(),
                Status::AlreadySubmitted,
                Status::Success,
            ];
            for status in &statuses {
                assert_eq!(
                    handle_notice_key(status, press(KeyCode::Char('q'))),
                    Action::Quit,
                    "q on {status:?}"
                );
                assert_eq!(
                    handle_notice_key(status, press(KeyCode::Esc)),
                    Action::Quit,
                    "Esc on {status:?}"
                );
            }
        }

        #[test]
        fn r_retries_only_on_error() {
            assert_eq!(handle_notice_key(&error(), press(KeyCode::Char('r'))), Action::Retry);
            for status in [Status::MissingId, Status::Success, Status::AlreadySubmitted] {
                assert_eq!(
                    handle_notice_key(&status, press(KeyCode::Char('r'))),
                    Action::None,
                    "r on {status:?}"
                );
            }
        }

        #[test]
        fn t_loads_sample_on_missing_id_and_error() {
            assert_eq!(
                handle_notice_key(&Status::MissingId, press(KeyCode::Char('t'))),
                Action::LoadSample
            );
            assert_eq!(
                handle_notice_key(&error(), press(KeyCode::Char('t'))),
                Action::LoadSample
            );
        }

        #[test]
        fn t_ignored_on_terminal_outcomes() {
            for status in [Status::Success, Status::AlreadySubmitted, Status::Loading] {
                assert_eq!(
                    handle_notice_key(&status, press(KeyCode::Char('t'))),
                    Action::None,
                    "t on {status:?}"
                );
            }
        }
    }

    mod rendering {
        use super::*;
        use crate::api::ApiError;
        use crate::controller::load_error_message;

        fn buffer_to_string(buf: &ratatui::buffer::Buffer) -> String {
            let mut s = String::new();
            for y in 0..buf.area.height {
                for x in 0..buf.area.width {
                    s.push(buf[(x, y)].symbol().chars().next().unwrap_or(' '));
                }
                s.push('\n');
            }
            s
        }

        fn render(status: &Status) -> String {
            render_sized(status, 80, 16)
        }

        fn render_sized(status: &Status, width: u16, height: u16) -> String {
            let backend = TestBackend::new(width, height);
            let mut terminal = Terminal::new(backend).unwrap();
            terminal
                .draw(|frame| draw_notice(status, "demo-1", frame, frame.area()))
                .unwrap();
            buffer_to_string(terminal.backend().buffer())
        }

        #[test]
        fn loading() {
            assert!(render(&Status::Loading).contains("Loading your details"));
        }

        #[test]
        fn missing_id_mentions_sample() {
            let output = render(&Status::MissingId);
            assert!(output.contains("no id"));
            assert!(output.contains("demo-1"));
            assert!(output.contains("t: try sample"));
        }

        #[test]
        fn error_shows_message_and_retry() {
            let output = render(&error());
            assert!(output.contains("server said no"));
            assert!(output.contains("r: retry"));
        }

        #[test]
        fn long_transport_error_is_not_cut_off() {
            let err = ApiError::Transport(
                "https://intake.example.com/api/record?id=rec-42: Dns Failed: resolve dns name \
                 'intake.example.com:443': failed to lookup address information: \
                 Name or service not known"
                    .into(),
            );
            let output = render_sized(&Status::Error(load_error_message(&err)), 80, 24);
            assert!(output.contains("not known"), "error detail cut off:\n{output}");
            assert!(output.contains("again."), "error ending cut off:\n{output}");
        }

        #[test]
        fn already_submitted() {
            assert!(render(&Status::AlreadySubmitted).contains("already completed"));
        }

        #[test]
        fn success() {
            assert!(render(&Status::Success).contains("have been submitted"));
        }
    }
}
