//! # premia-observability
//!
//! Structured logging for the prediction service: subscriber setup, one span
//! per request, and named events for the operations worth auditing.

pub mod tracing_setup;

pub use tracing_setup::{events, init_tracing, init_tracing_with_filter};
