use std::cell::RefCell;

use super::{ApiError, IntakeApi};
use crate::model::{Record, Submission};

/// In-memory [`IntakeApi`] with canned results that records every call.
pub(crate) struct FakeApi {
    fetch: Result<Record, ApiError>,
    submit: Result<(), ApiError>,
    pub(crate) fetched: RefCell<Vec<String>>,
    pub(crate) submitted: RefCell<Vec<Submission>>,
}

impl FakeApi {
    pub(crate) fn new(fetch: Result<Record, ApiError>, submit: Result<(), ApiError>) -> Self {
        Self {
            fetch,
            submit,
            fetched: RefCell::new(Vec::new()),
            submitted: RefCell::new(Vec::new()),
        }
    }

    pub(crate) fn returning(record: Record) -> Self {
        Self::new(Ok(record), Ok(()))
    }
}

impl IntakeApi for FakeApi {
    fn fetch_record(&self, id: &str) -> Result<Record, ApiError> {
        self.fetched.borrow_mut().push(id.to_string());
        self.fetch.clone()
    }

    fn submit(&self, submission: &Submission) -> Result<(), ApiError> {
        self.submitted.borrow_mut().push(submission.clone());
        self.submit.clone()
    }
}

/// A record with a link that differs from any query id used in tests.
pub(crate) fn make_record() -> Record {
    Record {
        name: "Ada Lovelace".into(),
        email: "ada@example.com".into(),
        payment: None,
        link: Some("rec-42".into()),
        company: Some("Prefilled Co".into()),
        profession: Some("Prefilled Role".into()),
        submitted: None,
    }
}
