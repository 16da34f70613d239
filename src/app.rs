use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api_doc::ApiDoc;
use crate::handlers::{add_note_handler, health_handler, list_notes_handler};
use crate::routes;
use crate::state::AppState;

/// Assemble the HTTP router with all endpoints and the shared state.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(routes::NOTES, get(list_notes_handler).post(add_note_handler))
        .route(routes::HEALTH, get(health_handler))
        .merge(SwaggerUi::new(routes::SWAGGER_UI).url(routes::OPENAPI_JSON, ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
