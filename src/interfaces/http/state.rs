//! Shared handler state

use std::sync::Arc;
use std::time::Instant;

use sea_orm::DatabaseConnection;

use crate::application::{CredentialsHandshake, PartyRegistry, ResourceAccessor, TokenAuthenticator};
use crate::domain::RepositoryProvider;

/// Everything the OCPI handlers need, cloned per request.
#[derive(Clone)]
pub struct HubState {
    pub registry: PartyRegistry,
    pub authenticator: TokenAuthenticator,
    pub handshake: CredentialsHandshake,
    pub resources: ResourceAccessor,
    /// Pinged by `/health`; `None` when running on the in-memory store.
    pub db: Option<DatabaseConnection>,
    pub started_at: Arc<Instant>,
}

impl HubState {
    pub fn new(repos: Arc<dyn RepositoryProvider>, public_url: &str, page_limit: u64) -> Self {
        let registry = PartyRegistry::new(repos.clone());
        Self {
            authenticator: TokenAuthenticator::new(registry.clone()),
            handshake: CredentialsHandshake::new(repos.clone(), public_url),
            resources: ResourceAccessor::new(repos, page_limit),
            registry,
            db: None,
            started_at: Arc::new(Instant::now()),
        }
    }

    pub fn with_database(mut self, db: DatabaseConnection) -> Self {
        self.db = Some(db);
        self
    }
}
