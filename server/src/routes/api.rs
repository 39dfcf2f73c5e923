//! JSON API consumed by the hydrated client.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use catalog::{InformationBoard, MenuCatalog, Recipe};

use crate::backend::BackendError;
use crate::services::{information, menu, recipes};
use crate::state::AppState;

/// Upstream failure surfaced to the browser.
#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct ApiError(#[from] BackendError);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self.0, "backend request failed");
        let body = Json(serde_json::json!({ "error": self.0.to_string() }));
        (StatusCode::BAD_GATEWAY, body).into_response()
    }
}

/// `GET /api/menu` — categories, items and the derived tag list.
pub async fn menu_catalog(State(state): State<AppState>) -> Result<Json<MenuCatalog>, ApiError> {
    Ok(Json(menu::load_catalog(state.backend.as_ref()).await?))
}

/// `GET /api/recipes`
pub async fn recipe_list(State(state): State<AppState>) -> Result<Json<Vec<Recipe>>, ApiError> {
    Ok(Json(recipes::load_recipes(state.backend.as_ref()).await?))
}

/// `GET /api/information` — never fails; unavailable collections are named in the payload.
pub async fn information_board(State(state): State<AppState>) -> Json<InformationBoard> {
    Json(information::load_board(state.backend.as_ref()).await)
}
