use crate::error::{ApiError, ErrorResponse};
use crate::models::{AddNoteRequest, AddNoteResponse};
use crate::routes;
use crate::state::AppState;
use axum::{extract::rejection::JsonRejection, extract::State, http::StatusCode, Json};
use serde_json::{Map, Value as JsonValue};

/// POST /api/notes handler - Append a note
#[utoipa::path(
    post,
    path = routes::NOTES,
    request_body = AddNoteRequest,
    responses(
        (status = 201, description = "Note stored", body = AddNoteResponse),
        (status = 400, description = "Note missing, empty or body malformed", body = ErrorResponse),
        (status = 413, description = "Body over the size limit", body = ErrorResponse),
        (status = 500, description = "Store error", body = ErrorResponse)
    ),
    tag = "notes"
)]
pub async fn add_note_handler(
    State(state): State<AppState>,
    payload: Result<Json<Map<String, JsonValue>>, JsonRejection>,
) -> Result<(StatusCode, Json<AddNoteResponse>), ApiError> {
    let Json(body) = payload?;
    let request = AddNoteRequest::from_object(body)
        .map_err(|e| ApiError::InvalidBody(e.to_string()))?;

    let note = match request.note {
        Some(note) if !note.is_empty() => note,
        _ => return Err(ApiError::MissingNote),
    };

    state.store.append(&note).await?;

    tracing::info!("Added note ({} bytes)", note.len());
    Ok((
        StatusCode::CREATED,
        Json(AddNoteResponse {
            success: true,
            note,
        }),
    ))
}
