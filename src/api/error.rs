/// Errors returned by an [`IntakeApi`](super::IntakeApi) call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The read endpoint has no record for the requested id.
    #[error("no record found for this id")]
    NotFound,

    /// The endpoint answered with a non-success status.
    #[error("server returned status {0}")]
    Status(u16),

    /// The request never produced a response (DNS, connect, TLS, reset).
    #[error("network error: {0}")]
    Transport(String),

    /// The response body could not be parsed.
    #[error("invalid response body: {0}")]
    Decode(String),
}

impl From<ureq::Error> for ApiError {
    fn from(err: ureq::Error) -> Self {
        match err {
            ureq::Error::Status(code, _) => Self::Status(code),
            ureq::Error::Transport(t) => Self::Transport(t.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_are_distinct() {
        let messages = [
            ApiError::NotFound.to_string(),
            ApiError::Status(500).to_string(),
            ApiError::Transport("connection refused".into()).to_string(),
            ApiError::Decode("expected value".into()).to_string(),
        ];
        for (i, a) in messages.iter().enumerate() {
            for b in &messages[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn status_names_code() {
        assert_eq!(ApiError::Status(503).to_string(), "server returned status 503");
    }
}
