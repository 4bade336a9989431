//! Web layer for the trip planner.
//!
//! Provides JSON endpoints over the planning engine.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
