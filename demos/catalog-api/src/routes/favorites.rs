use std::sync::Arc;

use axum::extract::{Query, State};
use axum::response::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::AppError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct ToggleParams {
    pub id: Option<String>,
}

/// GET /api/favorites
///
/// List favorite cards in catalog order.
pub async fn list_favorites(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Value>, AppError> {
    let cards = state.sdk.run(|s| s.cards().favorites()).await?;
    let count = cards.len();
    Ok(Json(json!({ "data": cards, "count": count })))
}

/// POST /api/favorites/toggle?id=base1-4
///
/// Flip the favorite status of a card and report the new status.
pub async fn toggle_favorite(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ToggleParams>,
) -> Result<Json<Value>, AppError> {
    let id = params.id.map(|id| id.trim().to_string()).unwrap_or_default();
    if id.is_empty() {
        return Err(AppError::bad_request("Missing required query parameter: id"));
    }

    let favorite = state.sdk.toggle_favorite(&id).await?;
    log::info!("favorite {id} -> {favorite}");
    Ok(Json(json!({ "id": id, "favorite": favorite })))
}
