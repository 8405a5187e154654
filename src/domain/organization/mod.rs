//! Organization aggregate
//!
//! A party registered with the hub, uniquely identified by
//! (country_code, party_id).

pub mod model;
pub mod repository;

pub use model::{NewOrganization, Organization, Role};
pub use repository::OrganizationRepository;
