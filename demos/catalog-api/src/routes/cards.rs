use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::response::Json;
use serde::Deserialize;
use serde_json::{json, Value};
use tcgdex_catalog::queries::parse_page;
use tcgdex_catalog::SearchCardsParams;

use crate::error::AppError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct ListCardsParams {
    pub q: Option<String>,
    #[serde(rename = "type")]
    pub card_type: Option<String>,
    pub series: Option<String>,
    pub page: Option<String>,
}

#[derive(Deserialize)]
pub struct DetailParams {
    pub set: Option<String>,
    pub local: Option<String>,
}

fn trimmed(value: Option<String>) -> String {
    value.map(|v| v.trim().to_string()).unwrap_or_default()
}

/// GET /api/cards?q=pika&type=Lightning&series=base&page=2
///
/// Search the catalog. `page` falls back to 1 when missing or invalid.
pub async fn list_cards(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListCardsParams>,
) -> Result<Json<Value>, AppError> {
    let search = SearchCardsParams {
        page: parse_page(params.page.as_deref()),
        text: trimmed(params.q),
        card_type: trimmed(params.card_type),
        series: trimmed(params.series),
    };

    let result = state
        .sdk
        .run(move |s| s.cards().search(&search))
        .await?;

    Ok(Json(json!({ "data": result })))
}

/// GET /api/cards/:id
///
/// Get full details for a single card by its composite id.
pub async fn get_card(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let card = state.sdk.run(move |s| s.cards().get(&id)).await?;
    let favorite = state.sdk.favorites().await?.contains_key(&card.id);
    Ok(Json(json!({ "data": card, "favorite": favorite })))
}

/// GET /api/details?set=base1&local=4
///
/// Get full details for a single card by set and local id.
pub async fn get_card_in_set(
    State(state): State<Arc<AppState>>,
    Query(params): Query<DetailParams>,
) -> Result<Json<Value>, AppError> {
    let set_id = trimmed(params.set);
    let local_id = trimmed(params.local);
    if set_id.is_empty() || local_id.is_empty() {
        return Err(AppError::bad_request("Missing required query parameters: set, local"));
    }

    let card = state
        .sdk
        .run(move |s| s.cards().get_in_set(&set_id, &local_id))
        .await?;
    let favorite = state.sdk.favorites().await?.contains_key(&card.id);
    Ok(Json(json!({ "data": card, "favorite": favorite })))
}
