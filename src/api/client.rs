use ureq::Agent;

use super::{ApiError, IntakeApi};
use crate::config::Config;
use crate::model::{Record, Submission};

const USER_AGENT: &str = concat!("intake/", env!("CARGO_PKG_VERSION"));

/// Blocking HTTP client for the read and write endpoints.
///
/// No timeout is configured and failed calls are never retried; the caller
/// decides what to do with the error.
#[derive(Clone)]
pub struct HttpIntakeApi {
    agent: Agent,
    fetch_url: String,
    submit_url: String,
}

impl HttpIntakeApi {
    /// Creates a client for the given endpoints.
    pub fn new(fetch_url: impl Into<String>, submit_url: impl Into<String>) -> Self {
        Self {
            agent: ureq::AgentBuilder::new().user_agent(USER_AGENT).build(),
            fetch_url: fetch_url.into(),
            submit_url: submit_url.into(),
        }
    }

    /// Creates a client for the endpoints in `config`.
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.fetch_url.clone(), config.submit_url.clone())
    }
}

impl IntakeApi for HttpIntakeApi {
    fn fetch_record(&self, id: &str) -> Result<Record, ApiError> {
        log::info!("fetching record from {}", self.fetch_url);
        let response = self
            .agent
            .get(&self.fetch_url)
            .query("id", id)
            .set("Accept", "application/json")
            .call()
            .map_err(|e| match e {
                ureq::Error::Status(404, _) => ApiError::NotFound,
                other => ApiError::from(other),
            })
            .inspect_err(|e| log::warn!("fetch failed: {e}"))?;

        log::info!("fetch returned status {}", response.status());
        response
            .into_json::<Record>()
            .map_err(|e| ApiError::Decode(e.to_string()))
            .inspect_err(|e| log::warn!("fetch failed: {e}"))
    }

    fn submit(&self, submission: &Submission) -> Result<(), ApiError> {
        log::info!("posting submission to {}", self.submit_url);
        let response = self
            .agent
            .post(&self.submit_url)
            .set("Accept", "application/json")
            .send_json(submission)
            .map_err(ApiError::from)
            .inspect_err(|e| log::warn!("submit failed: {e}"))?;

        log::info!("submit returned status {}", response.status());
        Ok(())
    }
}
