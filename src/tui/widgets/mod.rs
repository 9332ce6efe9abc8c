//! Reusable TUI widgets.

pub mod details;
pub mod form;

pub use details::{DetailsContext, draw_details};
pub use form::{Form, FormField, draw_form};
