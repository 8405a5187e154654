//! Location repository interface

use async_trait::async_trait;

use super::model::{Location, StoredLocation};
use crate::domain::DomainResult;
use crate::shared::{Page, Paged};

#[async_trait]
pub trait LocationRepository: Send + Sync {
    /// Insert, or replace the stored object when (country_code, party_id, id)
    /// already exists. A replaced location keeps its original position in
    /// listing order.
    async fn upsert(&self, owner_org_id: &str, location: Location) -> DomainResult<StoredLocation>;

    async fn find(
        &self,
        country_code: &str,
        party_id: &str,
        id: &str,
    ) -> DomainResult<Option<StoredLocation>>;

    /// Every location, in creation order.
    async fn find_page(&self, page: Page) -> DomainResult<Paged<Location>>;
}
