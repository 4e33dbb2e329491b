//! Clip data model shared by the store and the API.

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// A stored clipboard entry returned by store reads and listings.
#[derive(Debug, Clone)]
pub struct Clip {
    pub id: String,
    pub text: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Form payload for submitting clip text.
#[derive(Debug, Deserialize)]
pub struct SubmitClipForm {
    pub text: String,
}
