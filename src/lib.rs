//! Courses API
//!
//! REST service exposing create, read, update and delete operations over an
//! in-memory, insertion-ordered registry of courses.

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use api::state::AppState;

/// Human-readable service name
pub const SERVICE_NAME: &str = "Courses API";

/// Short description, published in the OpenAPI document
pub const SERVICE_DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Create the application state with an empty course registry
pub fn create_app_state() -> AppState {
    AppState::in_memory()
}
