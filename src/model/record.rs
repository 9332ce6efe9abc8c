use std::fmt;

use serde::Deserialize;

/// Value of `Submitted` that marks a record as already completed.
pub const SUBMITTED_SENTINEL: &str = "Yes";

/// A payment amount as sent by the read endpoint: either a JSON number or
/// numeric text.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum PaymentAmount {
    Number(f64),
    Text(String),
}

impl PaymentAmount {
    /// Returns the numeric value, parsing text amounts when possible.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Text(s) => s.trim().trim_start_matches('$').parse().ok(),
        }
    }
}

impl fmt::Display for PaymentAmount {
    /// Formats as a dollar amount: whole values without decimals, others
    /// with two. Non-numeric text is shown as-is after the `$`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_f64() {
            Some(n) if n.fract() == 0.0 => write!(f, "${n:.0}"),
            Some(n) => write!(f, "${n:.2}"),
            None => match self {
                Self::Text(s) => write!(f, "${}", s.trim()),
                Self::Number(n) => write!(f, "${n}"),
            },
        }
    }
}

/// A pre-filled invitation record returned by the read endpoint.
///
/// Keys on the wire are PascalCase; unknown keys are ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Record {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub payment: Option<PaymentAmount>,
    /// The record's own id; may differ from the id it was requested with.
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub profession: Option<String>,
    #[serde(default)]
    pub submitted: Option<String>,
}

impl Record {
    /// Returns `true` if the record carries the prior-submission sentinel.
    pub fn is_submitted(&self) -> bool {
        self.submitted.as_deref() == Some(SUBMITTED_SENTINEL)
    }

    /// Returns the record's own link if it is present and not blank.
    pub fn link(&self) -> Option<&str> {
        self.link.as_deref().filter(|l| !l.trim().is_empty())
    }

    /// Payment formatted for display.
    pub fn payment_display(&self) -> String {
        self.payment
            .as_ref()
            .map(ToString::to_string)
            .unwrap_or_else(|| "not recorded".to_string())
    }
}
