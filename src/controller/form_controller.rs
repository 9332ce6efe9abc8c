use super::status::{IdleState, Status};
use crate::api::{ApiError, IntakeApi};
use crate::model::{FieldEdit, FieldId, Record, Submission};

/// Owns the status lifecycle of a single intake session.
///
/// Network calls are split into a `begin` step that moves the controller
/// into its waiting state and hands back what to send, and an `apply` step
/// that consumes the result. [`load`](Self::load) and
/// [`submit`](Self::submit) run both steps around a blocking call.
#[derive(Debug, Clone, PartialEq)]
pub struct FormController {
    status: Status,
    requested_id: Option<String>,
}

impl Default for FormController {
    fn default() -> Self {
        Self::new()
    }
}

impl FormController {
    /// Creates a controller in [`Status::Loading`] with no id yet.
    pub fn new() -> Self {
        Self {
            status: Status::Loading,
            requested_id: None,
        }
    }

    /// Returns the current status.
    pub fn status(&self) -> &Status {
        &self.status
    }

    /// The id the current record was (or is being) requested with.
    pub fn requested_id(&self) -> Option<&str> {
        self.requested_id.as_deref()
    }

    /// Starts the session from the id found in the invitation link.
    ///
    /// Returns the id to fetch, or `None` after entering
    /// [`Status::MissingId`] when there is nothing to fetch.
    pub fn initialize(&mut self, id: Option<String>) -> Option<String> {
        match id.filter(|id| !id.is_empty()) {
            Some(id) => Some(self.load_with_id(id)),
            None => {
                self.set_status(Status::MissingId);
                None
            }
        }
    }

    /// Starts loading a literal id, bypassing the invitation link.
    ///
    /// Returns the id to fetch.
    pub fn load_with_id(&mut self, id: impl Into<String>) -> String {
        let id = id.into();
        self.requested_id = Some(id.clone());
        self.set_status(Status::Loading);
        id
    }

    /// Re-enters loading with the last requested id. Only valid from
    /// [`Status::Error`].
    pub fn retry(&mut self) -> Option<String> {
        if !matches!(self.status, Status::Error(_)) {
            return None;
        }
        let id = self.requested_id.clone()?;
        Some(self.load_with_id(id))
    }

    /// Applies the outcome of a fetch. Ignored unless loading.
    pub fn apply_fetch(&mut self, result: Result<Record, ApiError>) {
        if self.status != Status::Loading {
            log::debug!("ignoring fetch result while {}", self.status.name());
            return;
        }
        let next = match result {
            Ok(record) if record.is_submitted() => Status::AlreadySubmitted,
            Ok(record) => Status::Idle(IdleState::new(record)),
            Err(err) => {
                log::warn!("record load failed: {err}");
                Status::Error(load_error_message(&err))
            }
        };
        self.set_status(next);
    }

    /// Applies an edit to `field`. Returns `false` when the form is not
    /// editable (not idle, or a submission is in flight).
    pub fn edit(&mut self, field: FieldId, edit: FieldEdit) -> bool {
        match &mut self.status {
            Status::Idle(idle) if !idle.submitting => {
                idle.fields.apply(field, edit);
                true
            }
            _ => false,
        }
    }

    /// Marks a submission as in flight and builds its payload.
    ///
    /// Returns `None` unless idle with no submission already in flight.
    pub fn begin_submit(&mut self) -> Option<Submission> {
        let requested_id = self.requested_id.as_deref();
        let Status::Idle(idle) = &mut self.status else {
            return None;
        };
        if idle.submitting {
            return None;
        }
        idle.submitting = true;
        idle.error = None;
        let id = Submission::effective_id(&idle.record, requested_id);
        Some(Submission::new(id, &idle.fields))
    }

    /// Applies the outcome of a submission. Ignored unless a submission is
    /// in flight.
    ///
    /// On failure the form stays open with its values and an inline error.
    pub fn apply_submit(&mut self, result: Result<(), ApiError>) {
        let name = self.status.name();
        let Status::Idle(idle) = &mut self.status else {
            log::debug!("ignoring submit result while {name}");
            return;
        };
        if !idle.submitting {
            return;
        }
        match result {
            Ok(()) => self.set_status(Status::Success),
            Err(err) => {
                log::warn!("submission failed: {err}");
                idle.submitting = false;
                idle.error = Some(submit_error_message(&err));
            }
        }
    }

    /// Fetches `id` and applies the result.
    pub fn load<A: IntakeApi + ?Sized>(&mut self, api: &A, id: &str) {
        let result = api.fetch_record(id);
        self.apply_fetch(result);
    }

    /// Submits the current form, if possible, and applies the result.
    pub fn submit<A: IntakeApi + ?Sized>(&mut self, api: &A) {
        if let Some(submission) = self.begin_submit() {
            let result = api.submit(&submission);
            self.apply_submit(result);
        }
    }

    fn set_status(&mut self, status: Status) {
        if self.status.name() != status.name() {
            log::info!("status {} -> {}", self.status.name(), status.name());
        }
        self.status = status;
    }
}

/// User-facing message for a failed record load.
pub fn load_error_message(err: &ApiError) -> String {
    match err {
        ApiError::NotFound => {
            "We couldn't find an invitation for this link. Please check the link or contact the organizer."
                .to_string()
        }
        ApiError::Status(code) => {
            format!("The server could not load your details (status {code}). Please try again later.")
        }
        ApiError::Decode(_) => {
            format!("The server could not load your details ({err}). Please try again later.")
        }
        ApiError::Transport(_) => {
            format!("Could not load your details ({err}). Check your connection and try again.")
        }
    }
}

/// User-facing message for a failed submission.
pub fn submit_error_message(err: &ApiError) -> String {
    format!("Submission failed ({err}). Please try again.")
}
