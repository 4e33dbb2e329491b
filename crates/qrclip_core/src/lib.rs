//! Core domain library for QRClip (config, clipboard store, models).

/// Configuration loading and defaults.
pub mod config;
/// Shared constants used across QRClip crates.
pub mod constants;
/// Application error types.
pub mod error;
/// Clip data model.
pub mod models;
/// In-memory clipboard store.
pub mod store;
/// Token generation and submission-link composition.
pub mod token;

pub use config::Config;
pub use constants::{DEFAULT_MAX_CLIP_SIZE, DEFAULT_PORT};
pub use error::AppError;
pub use models::Clip;
pub use store::ClipboardStore;
