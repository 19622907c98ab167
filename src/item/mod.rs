//! Item Domain Module
//!
//! This module contains all item CRUD business logic, including:
//! - Domain models (Item, inputs, responses)
//! - Business logic helpers (id assignment, partial updates)
//! - Application state management
//! - REST API handlers

pub mod handlers;
pub mod helpers;
pub mod models;
pub mod state;

// Re-export commonly used types for convenience
pub use handlers::routes;
pub use state::{AppState, SharedState};
