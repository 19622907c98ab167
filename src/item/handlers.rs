//! REST API handlers for item CRUD operations
//!
//! This module implements the HTTP endpoints that read and mutate the
//! item collection.

use super::{helpers::*, models::*, state::SharedState};
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use tracing::info;

/// Creates routes for item-related operations
pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/api/items", get(list_items).post(create_item))
        .route(
            "/api/items/:id",
            get(get_item).put(update_item).delete(delete_item),
        )
}

/// A non-integer id segment fails the route match rather than the handler,
/// so it receives the same response as any unknown path.
fn route_fallthrough() -> Response {
    (StatusCode::NOT_FOUND, error_body(ENDPOINT_NOT_FOUND)).into_response()
}

/// Endpoint: GET /api/items
/// Returns the full collection in insertion order.
async fn list_items(State(state): State<SharedState>) -> Json<ItemList> {
    info!("Retrieving all items");
    let items = state.items.read().await;

    Json(ItemList {
        items: items.clone(),
    })
}

/// Endpoint: GET /api/items/:id
/// Returns the first item with a matching id, or 404.
async fn get_item(State(state): State<SharedState>, Path(raw_id): Path<String>) -> Response {
    let Ok(id) = raw_id.parse::<u64>() else {
        return route_fallthrough();
    };

    info!("Retrieving item with ID {}", id);
    let items = state.items.read().await;

    match items.iter().find(|i| i.id == id) {
        Some(item) => Json(item.clone()).into_response(),
        None => (StatusCode::NOT_FOUND, error_body(ITEM_NOT_FOUND)).into_response(),
    }
}

/// Endpoint: POST /api/items
/// Appends a new item; the id is max(existing) + 1, or 1 when empty.
async fn create_item(
    State(state): State<SharedState>,
    body: Result<Json<CreateItemInput>, JsonRejection>,
) -> Response {
    // Missing body, malformed JSON and a missing `name` field all collapse
    // into the same validation failure.
    let Ok(Json(input)) = body else {
        return (StatusCode::BAD_REQUEST, error_body(NAME_REQUIRED)).into_response();
    };

    let mut items = state.items.write().await;
    let new_item = Item {
        id: next_item_id(&items),
        name: input.name,
        description: input.description,
    };
    items.push(new_item.clone());

    info!("Created new item with ID {}", new_item.id);
    (StatusCode::CREATED, Json(new_item)).into_response()
}

/// Endpoint: PUT /api/items/:id
/// Partial update: fields absent from the body keep their previous value.
async fn update_item(
    State(state): State<SharedState>,
    Path(raw_id): Path<String>,
    body: Result<Json<UpdateItemInput>, JsonRejection>,
) -> Response {
    let Ok(id) = raw_id.parse::<u64>() else {
        return route_fallthrough();
    };

    // The body is validated before the item lookup, so an unusable body on
    // an unknown id still reports 400.
    let input = match body {
        Ok(Json(input)) if !input.is_empty() => input,
        _ => return (StatusCode::BAD_REQUEST, error_body(NO_DATA_PROVIDED)).into_response(),
    };

    let mut items = state.items.write().await;
    match items.iter_mut().find(|i| i.id == id) {
        Some(item) => {
            apply_item_update(item, input);
            info!("Updated item {}", id);
            Json(item.clone()).into_response()
        }
        None => (StatusCode::NOT_FOUND, error_body(ITEM_NOT_FOUND)).into_response(),
    }
}

/// Endpoint: DELETE /api/items/:id
/// Removes the item, preserving the relative order of the survivors.
async fn delete_item(State(state): State<SharedState>, Path(raw_id): Path<String>) -> Response {
    let Ok(id) = raw_id.parse::<u64>() else {
        return route_fallthrough();
    };

    let mut items = state.items.write().await;
    match items.iter().position(|i| i.id == id) {
        Some(index) => {
            items.remove(index);
            info!("Deleted item {}", id);
            Json(MessageResponse {
                message: ITEM_DELETED.to_string(),
            })
            .into_response()
        }
        None => (StatusCode::NOT_FOUND, error_body(ITEM_NOT_FOUND)).into_response(),
    }
}
