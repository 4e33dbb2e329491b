//! Clip HTTP handlers.

use crate::{error::HttpError, AppState};
use axum::{
    extract::{Path, State},
    Form, Json,
};
use qrclip_core::models::SubmitClipForm;
use qrclip_core::AppError;
use serde_json::{json, Map, Value};

/// Submit clip text under an identifier.
///
/// Unconditional upsert: a previously unseen identifier creates the entry,
/// a known one overwrites it.
///
/// # Arguments
/// - `state`: Application state.
/// - `id`: Clip identifier from the path.
/// - `form`: Form payload carrying the `text` field.
///
/// # Returns
/// `{"status":"ok"}` as JSON.
///
/// # Errors
/// Returns a bad-request error when the text exceeds the configured size limit.
pub async fn submit_clip(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Form(form): Form<SubmitClipForm>,
) -> Result<Json<Value>, HttpError> {
    if form.text.len() > state.config.max_clip_size {
        return Err(AppError::BadRequest(format!(
            "Clip size exceeds maximum of {} bytes",
            state.config.max_clip_size
        ))
        .into());
    }

    state.store.put(&id, &form.text);
    Ok(Json(json!({ "status": "ok" })))
}

/// Snapshot of all stored clips as an id-to-text JSON object.
///
/// Keys are ordered most recently updated first; the home page polls this
/// endpoint for its live view.
///
/// # Arguments
/// - `state`: Application state.
///
/// # Returns
/// JSON object mapping identifiers to their current text.
pub async fn clipboard_data(State(state): State<AppState>) -> Json<Value> {
    let mut data = Map::new();
    for clip in state.store.list() {
        data.insert(clip.id, Value::String(clip.text));
    }
    Json(Value::Object(data))
}

/// Delete a clip by id.
///
/// # Arguments
/// - `state`: Application state.
/// - `id`: Clip identifier from the path.
///
/// # Returns
/// `{"status":"deleted"}` as JSON.
///
/// # Errors
/// Returns a not-found error when no entry exists for `id`.
pub async fn delete_clip(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, HttpError> {
    state.store.delete(&id)?;
    Ok(Json(json!({ "status": "deleted" })))
}

/// Clear all stored clips unconditionally.
///
/// # Arguments
/// - `state`: Application state.
///
/// # Returns
/// `{"status":"cleared"}` as JSON.
pub async fn clear_clips(State(state): State<AppState>) -> Json<Value> {
    state.store.clear();
    Json(json!({ "status": "cleared" }))
}
