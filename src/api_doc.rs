use utoipa::OpenApi;

use crate::error::{ErrorResponse, HealthResponse, UnhealthyResponse};
use crate::handlers;
use crate::models::{AddNoteRequest, AddNoteResponse};

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "redis-notes API",
        version = "1.0.0",
        description = "A minimal notes service backed by a Redis list"
    ),
    paths(
        handlers::health::health_handler,
        handlers::list::list_notes_handler,
        handlers::add::add_note_handler
    ),
    components(
        schemas(
            AddNoteRequest,
            AddNoteResponse,
            ErrorResponse,
            HealthResponse,
            UnhealthyResponse
        )
    ),
    tags(
        (name = "health", description = "Health check operations"),
        (name = "notes", description = "Note operations")
    )
)]
pub struct ApiDoc;
