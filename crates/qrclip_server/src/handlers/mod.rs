//! HTTP request handlers.

/// Clip data endpoints (submit, poll, delete, clear).
pub mod clip;
/// HTML page endpoints.
pub mod pages;
