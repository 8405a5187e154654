//! SeaORM implementation of RepositoryProvider

use sea_orm::DatabaseConnection;

use crate::domain::credentials::PartnerCredentialRepository;
use crate::domain::location::LocationRepository;
use crate::domain::organization::OrganizationRepository;
use crate::domain::repositories::RepositoryProvider;
use crate::domain::session::SessionRepository;
use crate::domain::token::TokenRepository;

use super::location_repository::SeaOrmLocationRepository;
use super::organization_repository::SeaOrmOrganizationRepository;
use super::partner_credential_repository::SeaOrmPartnerCredentialRepository;
use super::session_repository::SeaOrmSessionRepository;
use super::token_repository::SeaOrmTokenRepository;

/// Unified repository provider backed by SeaORM.
///
/// Holds one connection pool and exposes per-aggregate repository accessors.
///
/// ```ignore
/// let repos = SeaOrmRepositoryProvider::new(db.clone());
/// let org = repos.organizations().find_by_token_hash(&hash).await?;
/// let page = repos.locations().find_page(Page::default()).await?;
/// ```
pub struct SeaOrmRepositoryProvider {
    organizations: SeaOrmOrganizationRepository,
    partner_credentials: SeaOrmPartnerCredentialRepository,
    locations: SeaOrmLocationRepository,
    sessions: SeaOrmSessionRepository,
    tokens: SeaOrmTokenRepository,
}

impl SeaOrmRepositoryProvider {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            organizations: SeaOrmOrganizationRepository::new(db.clone()),
            partner_credentials: SeaOrmPartnerCredentialRepository::new(db.clone()),
            locations: SeaOrmLocationRepository::new(db.clone()),
            sessions: SeaOrmSessionRepository::new(db.clone()),
            tokens: SeaOrmTokenRepository::new(db),
        }
    }
}

impl RepositoryProvider for SeaOrmRepositoryProvider {
    fn organizations(&self) -> &dyn OrganizationRepository {
        &self.organizations
    }

    fn partner_credentials(&self) -> &dyn PartnerCredentialRepository {
        &self.partner_credentials
    }

    fn locations(&self) -> &dyn LocationRepository {
        &self.locations
    }

    fn sessions(&self) -> &dyn SessionRepository {
        &self.sessions
    }

    fn tokens(&self) -> &dyn TokenRepository {
        &self.tokens
    }
}
