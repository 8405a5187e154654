//! Credentials aggregate
//!
//! Partner credentials received during the OCPI credentials handshake and the
//! handshake state they imply.

pub mod model;
pub mod repository;

pub use model::{CredentialsPayload, CredentialsRole, HandshakeState, PartnerCredential};
pub use repository::PartnerCredentialRepository;
