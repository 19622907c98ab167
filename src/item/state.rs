//! Item State Management
//!
//! This module manages the application state: the in-memory,
//! insertion-ordered item collection.

use super::models::Item;
use std::sync::Arc;
use tokio::sync::RwLock;

// =============================================================================
// Application State
// =============================================================================

/// Shared application state that can be safely passed between threads
pub type SharedState = Arc<AppState>;

/// Core application state containing the item collection
pub struct AppState {
    /// In-memory item collection, insertion-ordered.
    /// One RwLock keeps every read consistent and every mutation exclusive,
    /// so the max-id scan and the append it feeds are a single step.
    pub items: RwLock<Vec<Item>>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Creates a new AppState seeded with the two sample items
    pub fn new() -> Self {
        Self {
            items: RwLock::new(seed_items()),
        }
    }
}

/// The collection contents at process start
fn seed_items() -> Vec<Item> {
    vec![
        Item {
            id: 1,
            name: "Item 1".to_string(),
            description: "First sample item".to_string(),
        },
        Item {
            id: 2,
            name: "Item 2".to_string(),
            description: "Second sample item".to_string(),
        },
    ]
}
