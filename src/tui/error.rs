use crate::config::ConfigError;
use crate::logging::LoggingError;

/// Errors that can occur while starting or running the TUI.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// An I/O error occurred (terminal, event reading, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The configuration could not be loaded.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Logging could not be initialized.
    #[error("logging error: {0}")]
    Logging(#[from] LoggingError),
}
