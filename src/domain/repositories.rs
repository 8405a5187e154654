//! Repository traits for the domain layer
//!
//! Contains:
//! - `RepositoryProvider` — unified access to all per-aggregate repositories
//! - `DomainResult` — standard result type for domain operations

use super::credentials::PartnerCredentialRepository;
use super::location::LocationRepository;
use super::organization::OrganizationRepository;
use super::session::SessionRepository;
use super::token::TokenRepository;
use crate::shared::errors::DomainError;

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Storage port of the hub. Consumers request only the repository they need:
///
/// ```ignore
/// async fn handle(repos: &dyn RepositoryProvider) {
///     let org = repos.organizations().find_by_id("…").await?;
///     let page = repos.locations().find_page(Page::default()).await?;
/// }
/// ```
pub trait RepositoryProvider: Send + Sync {
    fn organizations(&self) -> &dyn OrganizationRepository;
    fn partner_credentials(&self) -> &dyn PartnerCredentialRepository;
    fn locations(&self) -> &dyn LocationRepository;
    fn sessions(&self) -> &dyn SessionRepository;
    fn tokens(&self) -> &dyn TokenRepository;
}
