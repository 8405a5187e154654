//! Application layer: authentication, authorization and the OCPI use cases

pub mod auth;
pub mod handshake;
pub mod registry;
pub mod resources;
pub mod role_gate;

pub use auth::{AuthenticatedParty, BearerToken, TokenAuthenticator};
pub use handshake::{CredentialsHandshake, OCPI_VERSION_PATH};
pub use registry::{PartyRegistry, RegisterParty, Registration};
pub use resources::{PageRequest, ResourceAccessor};
pub use role_gate::{Module, Operation, RoleGate};
