//! HTTP API module for the bonus allocation engine.
//!
//! This module provides the REST API endpoint for running the allocator
//! over a submitted settings/employee snapshot.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{AllocationRequest, EmployeeRequest, SettingsRequest};
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
