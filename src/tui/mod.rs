//! Terminal front end: one screen per controller status.

pub mod action;
pub mod app;
pub mod error;
pub mod screens;
pub mod widgets;

pub use app::{App, Pending};
pub use error::AppError;
