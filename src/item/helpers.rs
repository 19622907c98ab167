//! Item Business Logic Helpers
//!
//! This module contains pure helper functions for id assignment and
//! partial updates, kept separate from the models for testability.

use super::models::{ErrorResponse, Item, UpdateItemInput};
use axum::Json;

/// Computes the id for the next created item.
///
/// # Behaviour
///
/// * Returns `max(existing ids) + 1` when the collection is non-empty.
/// * Returns `1` for an empty collection. Deleting every item resets the
///   numbering, so ids are only unique among *currently stored* items.
pub fn next_item_id(items: &[Item]) -> u64 {
    items.iter().map(|i| i.id).max().map_or(1, |max| max + 1)
}

/// Applies a partial update to `item` in-place.
///
/// Each field present in `update` replaces the stored value; absent fields
/// keep their previous value. The id is never touched.
pub fn apply_item_update(item: &mut Item, update: UpdateItemInput) {
    if let Some(name) = update.name {
        item.name = name;
    }
    if let Some(description) = update.description {
        item.description = description;
    }
}

/// Builds the JSON error body used by every failure response.
pub fn error_body(message: impl Into<String>) -> Json<ErrorResponse> {
    Json(ErrorResponse {
        error: message.into(),
    })
}
