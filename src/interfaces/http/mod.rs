//! HTTP interface
//!
//! - `common`: envelopes, error mapping, extractors
//! - `modules`: per-module handlers and DTOs
//! - `state`: shared handler state
//! - `router`: router assembly with Swagger documentation

pub mod common;
pub mod modules;
pub mod router;
pub mod state;

pub use router::{create_api_router, ApiDoc};
pub use state::HubState;
