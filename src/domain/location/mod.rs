//! Location aggregate
//!
//! CPO-owned charging topology: Location → EVSE → Connector.

pub mod model;
pub mod repository;

pub use model::{Connector, Evse, GeoLocation, Location, StoredLocation};
pub use repository::LocationRepository;
