use crate::error::{ApiError, ErrorResponse};
use crate::routes;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, Json};

/// GET /api/notes handler - List all notes, newest first
///
/// The store keeps notes in insertion order; the reversal happens here and
/// only affects what the client sees.
#[utoipa::path(
    get,
    path = routes::NOTES,
    responses(
        (status = 200, description = "All notes, most recent first", body = Vec<String>),
        (status = 500, description = "Store error", body = ErrorResponse)
    ),
    tag = "notes"
)]
pub async fn list_notes_handler(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<Vec<String>>), ApiError> {
    let mut notes = state.store.read_all().await?;
    notes.reverse();

    tracing::info!("Listed {} notes", notes.len());
    Ok((StatusCode::OK, Json(notes)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::test_support::{app_with_store, get_notes, list, post_note, send};
    use crate::store::testing::{InMemoryNoteStore, UnavailableNoteStore};
    use std::sync::Arc;

    #[tokio::test]
    async fn test_list_empty_store() {
        let app = app_with_store(Arc::new(InMemoryNoteStore::new()));

        let (status, body) = send(&app, get_notes()).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(&body[..], b"[]");
    }

    #[tokio::test]
    async fn test_list_reverses_storage_order() {
        let store = Arc::new(InMemoryNoteStore::with_notes(&["oldest", "middle", "newest"]));
        let app = app_with_store(store.clone());

        assert_eq!(list(&app).await, vec!["newest", "middle", "oldest"]);
        // Storage itself is untouched.
        assert_eq!(store.snapshot(), vec!["oldest", "middle", "newest"]);
    }

    #[tokio::test]
    async fn test_list_after_many_adds_is_most_recent_first() {
        let app = app_with_store(Arc::new(InMemoryNoteStore::new()));

        let added: Vec<String> = (0..10).map(|i| format!("note {}", i)).collect();
        for note in &added {
            let body = serde_json::json!({ "note": note }).to_string();
            let (status, _) = send(&app, post_note(body)).await;
            assert_eq!(status, StatusCode::CREATED);
        }

        let listed = list(&app).await;
        let expected: Vec<String> = added.into_iter().rev().collect();
        assert_eq!(listed, expected);
    }

    #[tokio::test]
    async fn test_list_is_repeatable() {
        let app = app_with_store(Arc::new(InMemoryNoteStore::with_notes(&["a", "b", "c"])));

        let first = list(&app).await;
        let second = list(&app).await;
        let third = list(&app).await;

        assert_eq!(first, second);
        assert_eq!(second, third);
    }

    #[tokio::test]
    async fn test_list_store_unavailable() {
        let app = app_with_store(Arc::new(UnavailableNoteStore::new()));

        let (status, body) = send(&app, get_notes()).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        let error_response: ErrorResponse = serde_json::from_slice(&body).unwrap();
        assert!(!error_response.error.is_empty());
        assert!(error_response.error.contains("Connection refused"));
    }
}
