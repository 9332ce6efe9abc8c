use crate::model::{IntakeFields, Record};

/// The intake flow's current state. Exactly one is active at a time.
#[derive(Debug, Clone, PartialEq)]
pub enum Status {
    /// Waiting on the read endpoint. The initial state.
    Loading,
    /// The invitation link carried no id. Terminal.
    MissingId,
    /// The record could not be loaded. Recoverable via retry.
    Error(String),
    /// The record was already completed. Terminal.
    AlreadySubmitted,
    /// The submission was accepted. Terminal.
    Success,
    /// The form is open for editing.
    Idle(IdleState),
}

impl Status {
    /// Short name for logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Loading => "loading",
            Self::MissingId => "missing-id",
            Self::Error(_) => "error",
            Self::AlreadySubmitted => "already-submitted",
            Self::Success => "success",
            Self::Idle(_) => "idle",
        }
    }

    /// Returns `true` for states that only a restart can leave.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::MissingId | Self::AlreadySubmitted | Self::Success)
    }
}

/// Everything that only exists while the form is editable.
#[derive(Debug, Clone, PartialEq)]
pub struct IdleState {
    pub(super) record: Record,
    pub(super) fields: IntakeFields,
    pub(super) submitting: bool,
    pub(super) error: Option<String>,
}

impl IdleState {
    pub(super) fn new(record: Record) -> Self {
        Self {
            record,
            fields: IntakeFields::default(),
            submitting: false,
            error: None,
        }
    }

    /// The loaded record.
    pub fn record(&self) -> &Record {
        &self.record
    }

    /// Current field values as typed.
    pub fn fields(&self) -> &IntakeFields {
        &self.fields
    }

    /// Whether a submission is in flight.
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Inline error from the last failed submission, if any.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_states() {
        assert!(Status::MissingId.is_terminal());
        assert!(Status::AlreadySubmitted.is_terminal());
        assert!(Status::Success.is_terminal());
        assert!(!Status::Loading.is_terminal());
        assert!(!Status::Error("x".into()).is_terminal());
    }

    #[test]
    fn names_are_unique() {
        let names = [
            Status::Loading.name(),
            Status::MissingId.name(),
            Status::Error(String::new()).name(),
            Status::AlreadySubmitted.name(),
            Status::Success.name(),
        ];
        for (i, a) in names.iter().enumerate() {
            assert!(!names[i + 1..].contains(a), "duplicate name {a}");
        }
    }
}
