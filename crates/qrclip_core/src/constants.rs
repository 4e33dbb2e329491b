//! Shared constants used across QRClip crates.

/// Default HTTP port for the QRClip server.
pub const DEFAULT_PORT: u16 = 8000;

/// Default maximum clip size accepted by the API layer.
pub const DEFAULT_MAX_CLIP_SIZE: usize = 64 * 1024;

/// Length of generated clip identifiers.
pub const TOKEN_LEN: usize = 12;
