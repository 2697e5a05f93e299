//! HTTP routes.

use axum::{
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;

use grimoire_domain::DomainError;

use crate::api::docs;
use crate::app::App;
use crate::infrastructure::http::{character_routes, item_routes};

/// Create all HTTP routes.
pub fn routes() -> Router<Arc<App>> {
    Router::new()
        .route(
            "/itens",
            get(item_routes::list_items).post(item_routes::create_item),
        )
        .route(
            "/itens/{id}",
            get(item_routes::get_item)
                .put(item_routes::update_item)
                .delete(item_routes::delete_item),
        )
        .route(
            "/personagens",
            get(character_routes::list_characters).post(character_routes::create_character),
        )
        .route(
            "/personagens/{id}",
            get(character_routes::get_character)
                .put(character_routes::update_character)
                .delete(character_routes::delete_character),
        )
        .route(
            "/personagens/{id}/atribuir-item",
            post(character_routes::assign_item),
        )
        .route(
            "/personagens/{id}/remover-item",
            post(character_routes::remove_item),
        )
        .route(
            "/personagens/{id}/itens",
            get(character_routes::list_character_items),
        )
        .route(
            "/personagens/{id}/amuleto",
            get(character_routes::find_amulet),
        )
        .route("/api-docs", get(api_docs))
        .fallback(route_not_found)
}

/// Serve the generated API description. Carries no runtime state.
async fn api_docs() -> Json<docs::OpenApiSpec> {
    Json(docs::document())
}

async fn route_not_found() -> ApiError {
    ApiError::NotFound("Route not found.".to_string())
}

#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    BadRequest(String),
}

impl axum::response::IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            ApiError::NotFound(msg) => (axum::http::StatusCode::NOT_FOUND, msg),
            ApiError::BadRequest(msg) => (axum::http::StatusCode::BAD_REQUEST, msg),
        };
        (status, Json(serde_json::json!({ "message": message }))).into_response()
    }
}

impl From<DomainError> for ApiError {
    fn from(e: DomainError) -> Self {
        let message = e.to_string();
        if e.is_not_found() {
            ApiError::NotFound(message)
        } else {
            ApiError::BadRequest(message)
        }
    }
}
