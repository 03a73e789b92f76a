use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{
    server::AppState,
    types::{Item, ItemFields},
    utils,
};

/// Body of every 404 answer, serialized as a JSON string.
pub const NOT_FOUND: &str = "not found";

fn found_or_not_found(item: Option<Item>) -> Response {
    match item {
        Some(item) => (StatusCode::OK, Json(item)).into_response(),
        None => (StatusCode::NOT_FOUND, Json(NOT_FOUND)).into_response(),
    }
}

pub async fn list_items(State(state): State<AppState>) -> Json<Vec<Item>> {
    Json(state.items.lock().await.list())
}

pub async fn create_item(
    State(state): State<AppState>,
    Json(fields): Json<ItemFields>,
) -> (StatusCode, Json<Item>) {
    let item = state.items.lock().await.create(fields);
    (StatusCode::CREATED, Json(item))
}

pub async fn get_item(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let item = match utils::parse_item_id(&id) {
        Some(id) => state.items.lock().await.get(id),
        None => None,
    };
    found_or_not_found(item)
}

/// Removes the item and answers with what was removed.
pub async fn delete_item(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let item = match utils::parse_item_id(&id) {
        Some(id) => state.items.lock().await.remove(id),
        None => None,
    };
    found_or_not_found(item)
}

pub async fn update_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(partial): Json<ItemFields>,
) -> Response {
    let item = match utils::parse_item_id(&id) {
        Some(id) => state.items.lock().await.update(id, partial),
        None => None,
    };
    found_or_not_found(item)
}
