//! Organization repository interface

use async_trait::async_trait;

use super::model::{NewOrganization, Organization};
use crate::domain::DomainResult;

#[async_trait]
pub trait OrganizationRepository: Send + Sync {
    /// Insert-if-absent on (country_code, party_id). Implementations must make
    /// the uniqueness check and the insert a single atomic step and report a
    /// clash as `DomainError::DuplicateParty`.
    async fn insert(&self, new: NewOrganization) -> DomainResult<Organization>;

    async fn find_by_id(&self, id: &str) -> DomainResult<Option<Organization>>;

    async fn find_by_token_hash(&self, token_hash: &str) -> DomainResult<Option<Organization>>;

    /// All organizations in creation order.
    async fn find_all(&self) -> DomainResult<Vec<Organization>>;
}
