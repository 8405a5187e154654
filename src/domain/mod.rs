//! Domain layer: OCPI entities and the storage port.

pub mod credentials;
pub mod location;
pub mod organization;
pub mod repositories;
pub mod session;
pub mod token;

pub use credentials::{CredentialsPayload, CredentialsRole, HandshakeState, PartnerCredential};
pub use location::{Location, StoredLocation};
pub use organization::{NewOrganization, Organization, Role};
pub use repositories::{DomainResult, RepositoryProvider};
pub use session::{Session, SessionScope, SessionStatus, StoredSession};
pub use token::{StoredToken, Token, TokenType};

pub use crate::shared::errors::DomainError;
