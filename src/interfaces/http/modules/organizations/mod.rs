//! Organizations module — party registration and directory

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
