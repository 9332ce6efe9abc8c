//! Endpoint and log file configuration.
//!
//! Defaults are fixed at build time (`INTAKE_FETCH_URL`, `INTAKE_SUBMIT_URL`,
//! `INTAKE_SAMPLE_ID` in the build environment) and may be overridden at
//! runtime by environment variables of the same names. `INTAKE_LOG`
//! overrides the log file path.

use std::path::PathBuf;

const FETCH_URL_VAR: &str = "INTAKE_FETCH_URL";
const SUBMIT_URL_VAR: &str = "INTAKE_SUBMIT_URL";
const SAMPLE_ID_VAR: &str = "INTAKE_SAMPLE_ID";
const LOG_PATH_VAR: &str = "INTAKE_LOG";

const DEFAULT_FETCH_URL: &str = match option_env!("INTAKE_FETCH_URL") {
    Some(url) => url,
    None => "https://intake.example.com/api/record",
};

const DEFAULT_SUBMIT_URL: &str = match option_env!("INTAKE_SUBMIT_URL") {
    Some(url) => url,
    None => "https://intake.example.com/api/submit",
};

const DEFAULT_SAMPLE_ID: &str = match option_env!("INTAKE_SAMPLE_ID") {
    Some(id) => id,
    None => "sample-invitation",
};

/// Errors produced while loading configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// An endpoint is not an `http://` or `https://` URL.
    #[error("invalid {name} endpoint: {value}")]
    InvalidEndpoint {
        /// Variable the value came from.
        name: &'static str,
        /// The rejected value.
        value: String,
    },

    /// The platform does not provide a data directory for the log file.
    #[error("could not determine XDG data directory")]
    NoDataDir,
}

/// Runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Read endpoint; queried with `?id=`.
    pub fetch_url: String,
    /// Write endpoint; receives the JSON submission.
    pub submit_url: String,
    /// Literal id loaded by the sample shortcut.
    pub sample_id: String,
    /// File the log output is appended to.
    pub log_path: PathBuf,
}

impl Config {
    /// Loads configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration using `lookup` for variable values.
    ///
    /// Blank values are treated as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let fetch_url = get(FETCH_URL_VAR).unwrap_or_else(|| DEFAULT_FETCH_URL.to_string());
        let submit_url = get(SUBMIT_URL_VAR).unwrap_or_else(|| DEFAULT_SUBMIT_URL.to_string());
        validate_endpoint(FETCH_URL_VAR, &fetch_url)?;
        validate_endpoint(SUBMIT_URL_VAR, &submit_url)?;

        let sample_id = get(SAMPLE_ID_VAR).unwrap_or_else(|| DEFAULT_SAMPLE_ID.to_string());

        let log_path = match get(LOG_PATH_VAR) {
            Some(path) => PathBuf::from(path),
            None => default_log_path()?,
        };

        Ok(Self {
            fetch_url,
            submit_url,
            sample_id,
            log_path,
        })
    }
}

/// Returns `~/.local/share/intake/intake.log` (or the platform equivalent).
pub fn default_log_path() -> Result<PathBuf, ConfigError> {
    let data_dir = dirs::data_dir().ok_or(ConfigError::NoDataDir)?;
    Ok(data_dir.join("intake").join("intake.log"))
}

fn validate_endpoint(name: &'static str, value: &str) -> Result<(), ConfigError> {
    let has_host = ["http://", "https://"]
        .iter()
        .filter_map(|scheme| value.strip_prefix(scheme))
        .any(|rest| !rest.is_empty());
    if has_host {
        Ok(())
    } else {
        Err(ConfigError::InvalidEndpoint {
            name,
            value: value.to_string(),
        })
    }
}
