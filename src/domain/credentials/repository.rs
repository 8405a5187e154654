//! Partner credential repository interface

use async_trait::async_trait;

use super::model::{CredentialsPayload, PartnerCredential};
use crate::domain::DomainResult;

#[async_trait]
pub trait PartnerCredentialRepository: Send + Sync {
    /// Append a submission. Never replaces an earlier record.
    async fn append(
        &self,
        organization_id: &str,
        credentials: CredentialsPayload,
    ) -> DomainResult<PartnerCredential>;

    /// Submissions of one organization in receipt order.
    async fn find_for_organization(&self, organization_id: &str)
        -> DomainResult<Vec<PartnerCredential>>;

    async fn count_for_organization(&self, organization_id: &str) -> DomainResult<u64>;
}
