//! Session repository interface

use async_trait::async_trait;

use super::model::{Session, SessionScope, SessionStatus, StoredSession};
use crate::domain::DomainResult;
use crate::shared::{Page, Paged};

#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Insert, or update in place when (country_code, party_id, id) exists.
    async fn upsert(&self, stored: StoredSession) -> DomainResult<()>;

    /// Change status and bump `last_updated`.
    async fn update_status(
        &self,
        country_code: &str,
        party_id: &str,
        id: &str,
        status: SessionStatus,
    ) -> DomainResult<Session>;

    /// Sessions visible under `scope`, in creation order.
    async fn find_page(&self, scope: &SessionScope, page: Page) -> DomainResult<Paged<Session>>;
}
