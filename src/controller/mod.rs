//! The intake form controller and its status lifecycle.

mod form_controller;
mod status;

pub use form_controller::{FormController, load_error_message, submit_error_message};
pub use status::{IdleState, Status};
