//! TUI screen implementations.

pub mod intake_form;
pub mod notice;

pub use intake_form::{IntakeFormState, draw_intake_form};
pub use notice::{draw_notice, handle_notice_key};
