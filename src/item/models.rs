//! Item Domain Models
//!
//! This module contains all data structures related to the item
//! business domain, plus the user-visible message constants.

use serde::{Deserialize, Serialize};

// =============================================================================
// Constants
// =============================================================================

/// Error body text for lookups of unknown item ids
pub const ITEM_NOT_FOUND: &str = "Item not found";
/// Error body text for create requests without a usable name
pub const NAME_REQUIRED: &str = "Name is required";
/// Error body text for update requests carrying no usable body
pub const NO_DATA_PROVIDED: &str = "No data provided";
/// Error body text for requests that match no route
pub const ENDPOINT_NOT_FOUND: &str = "Endpoint not found";
/// Error body text for unexpected faults
pub const INTERNAL_SERVER_ERROR: &str = "Internal server error";
/// Confirmation text returned by a successful delete
pub const ITEM_DELETED: &str = "Item deleted successfully";

// =============================================================================
// Item Domain Models
// =============================================================================

/// A single stored item
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Item {
    /// Identifier, unique among currently stored items
    pub id: u64,

    /// Display name
    pub name: String,

    /// Free-form description
    pub description: String,
}

/// Input for creating an item
#[derive(Debug, Deserialize)]
pub struct CreateItemInput {
    /// Name of the new item (required)
    pub name: String,

    /// Description of the new item (defaults to empty)
    #[serde(default)]
    pub description: String,
}

/// Input for updating an item; absent fields keep their previous value
#[derive(Debug, Deserialize)]
pub struct UpdateItemInput {
    /// Replacement name, if provided
    pub name: Option<String>,

    /// Replacement description, if provided
    pub description: Option<String>,
}

impl UpdateItemInput {
    /// True when the body carried none of the mutable fields
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.description.is_none()
    }
}

/// Response wrapper for the item listing
#[derive(Serialize)]
pub struct ItemList {
    /// All current items in insertion order
    pub items: Vec<Item>,
}

/// Response carrying a confirmation message
#[derive(Serialize)]
pub struct MessageResponse {
    /// Human-readable confirmation
    pub message: String,
}

/// Response carrying an error message
#[derive(Serialize)]
pub struct ErrorResponse {
    /// Human-readable error description
    pub error: String,
}

/// Response for the health check endpoint
#[derive(Serialize)]
pub struct HealthResponse {
    /// Fixed service status
    pub status: String,

    /// Human-readable status message
    pub message: String,
}
