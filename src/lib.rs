//! Terminal intake form.
//!
//! Loads a pre-filled invitation record by the id in an invitation link,
//! shows the verified details next to three editable fields, and posts the
//! completed submission back.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod api;
pub mod config;
pub mod controller;
pub mod logging;
pub mod model;
pub mod tui;
