//! Session aggregate
//!
//! Charging sessions, visible to the CPO owning the location and to the
//! eMSP whose driver is charging.

pub mod model;
pub mod repository;

pub use model::{Session, SessionScope, SessionStatus, StoredSession};
pub use repository::SessionRepository;
