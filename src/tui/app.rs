use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{Frame, Terminal};

use crate::api::IntakeApi;
use crate::controller::{FormController, Status};
use crate::model::Submission;

use super::action::Action;
use super::error::AppError;
use super::screens::{IntakeFormState, draw_intake_form, draw_notice, handle_notice_key};

/// A network call waiting to run after the next draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Pending {
    /// Fetch the record for this id.
    Fetch(String),
    /// Post this submission.
    Submit(Submission),
}

/// Top-level application state.
pub struct App<A> {
    api: A,
    controller: FormController,
    form: IntakeFormState,
    sample_id: String,
    pending: Option<Pending>,
    should_quit: bool,
}

impl<A: IntakeApi> App<A> {
    /// Creates the app for the id taken from the invitation link.
    ///
    /// With an id the first record fetch is queued; without one the app
    /// starts on the missing-id notice and makes no request.
    pub fn new(api: A, launch_id: Option<String>, sample_id: impl Into<String>) -> Self {
        let mut controller = FormController::new();
        let pending = controller.initialize(launch_id).map(Pending::Fetch);
        Self {
            api,
            controller,
            form: IntakeFormState::new(),
            sample_id: sample_id.into(),
            pending,
            should_quit: false,
        }
    }

    /// Main event loop: draw → run pending call or read event → dispatch.
    ///
    /// Drawing before a pending call keeps the loading and submitting
    /// states visible while the blocking request runs.
    #[cfg_attr(coverage_nightly, coverage(off))]
    #[mutants::skip]
    pub fn run<B: ratatui::backend::Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
    ) -> Result<(), AppError> {
        while !self.should_quit {
            terminal.draw(|frame| self.draw(frame))?;
            if self.perform_pending() {
                continue;
            }
            if let Event::Key(key) = event::read()? {
                self.handle_key(key);
            }
        }
        Ok(())
    }

    /// Renders the screen for the current status.
    #[cfg_attr(coverage_nightly, coverage(off))]
    #[mutants::skip]
    fn draw(&self, frame: &mut Frame) {
        let area = frame.area();
        match self.controller.status() {
            Status::Idle(idle) => draw_intake_form(&self.form, idle, frame, area),
            status => draw_notice(status, &self.sample_id, frame, area),
        }
    }

    /// Runs the queued network call, if any. Returns `true` if one ran.
    pub fn perform_pending(&mut self) -> bool {
        let Some(pending) = self.pending.take() else {
            return false;
        };
        match pending {
            Pending::Fetch(id) => {
                self.controller.load(&self.api, &id);
                if matches!(self.controller.status(), Status::Idle(_)) {
                    self.form = IntakeFormState::new();
                }
            }
            Pending::Submit(submission) => {
                let result = self.api.submit(&submission);
                self.controller.apply_submit(result);
            }
        }
        true
    }

    /// Handles a key event: global keys first, then screen-specific.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press || self.pending.is_some() {
            return;
        }

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        let action = match self.controller.status() {
            Status::Idle(idle) if idle.is_submitting() => Action::None,
            Status::Idle(_) => self.form.handle_key(key),
            status => handle_notice_key(status, key),
        };
        self.apply(action);
    }

    fn apply(&mut self, action: Action) {
        match action {
            Action::None => {}
            Action::Edit(field, edit) => {
                self.controller.edit(field, edit);
            }
            Action::Submit => {
                self.pending = self.controller.begin_submit().map(Pending::Submit);
            }
            Action::Retry => {
                self.pending = self.controller.retry().map(Pending::Fetch);
            }
            Action::LoadSample => {
                let id = self.controller.load_with_id(self.sample_id.clone());
                self.pending = Some(Pending::Fetch(id));
            }
            Action::Quit => self.should_quit = true,
        }
    }

    /// Returns the controller.
    pub fn controller(&self) -> &FormController {
        &self.controller
    }

    /// Returns the queued network call, if any.
    pub fn pending(&self) -> Option<&Pending> {
        self.pending.as_ref()
    }

    /// Returns `true` if the app should quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Returns the API client.
    pub fn api(&self) -> &A {
        &self.api
    }
}
