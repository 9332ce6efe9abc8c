//! Read and write endpoints for invitation records.
//!
//! [`IntakeApi`] is the seam the controller talks to; [`HttpIntakeApi`] is
//! the blocking HTTP implementation used by the binary.

mod client;
mod error;
#[cfg(test)]
pub(crate) mod fake;

pub use client::HttpIntakeApi;
pub use error::ApiError;

use crate::model::{Record, Submission};

/// The two network calls the intake flow makes.
pub trait IntakeApi {
    /// Fetches the record for `id` from the read endpoint.
    fn fetch_record(&self, id: &str) -> Result<Record, ApiError>;

    /// Posts a completed submission to the write endpoint.
    fn submit(&self, submission: &Submission) -> Result<(), ApiError>;
}
