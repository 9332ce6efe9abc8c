//! Actions returned by screen event handlers.

use crate::model::{FieldEdit, FieldId};

/// An action that a screen handler returns to the [`App`](super::App).
///
/// The `App` interprets these by driving the
/// [`FormController`](crate::controller::FormController).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// No state change needed.
    None,
    /// Apply an edit to one of the intake fields.
    Edit(FieldId, FieldEdit),
    /// Submit the completed form.
    Submit,
    /// Reload the record after a failed load.
    Retry,
    /// Load the configured sample id instead of the invitation id.
    LoadSample,
    /// Quit the application.
    Quit,
}
