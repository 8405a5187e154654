//! Token repository interface

use async_trait::async_trait;

use super::model::{StoredToken, Token};
use crate::domain::DomainResult;
use crate::shared::{Page, Paged};

#[async_trait]
pub trait TokenRepository: Send + Sync {
    /// Insert, or replace when (country_code, party_id, uid) exists.
    async fn upsert(&self, stored: StoredToken) -> DomainResult<()>;

    /// Tokens issued by `emsp_id`, in creation order.
    async fn find_page_for_emsp(&self, emsp_id: &str, page: Page) -> DomainResult<Paged<Token>>;
}
