//! SeaORM implementation of TokenRepository

use async_trait::async_trait;
use sea_orm::sea_query::OnConflict;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};
use tracing::debug;

use super::db_err;
use crate::domain::token::{StoredToken, Token, TokenRepository};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::token;
use crate::shared::{Page, Paged};

pub struct SeaOrmTokenRepository {
    db: DatabaseConnection,
}

impl SeaOrmTokenRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn decode(payload: &str) -> DomainResult<Token> {
    serde_json::from_str(payload).map_err(|e| DomainError::Storage(format!("token payload: {}", e)))
}

#[async_trait]
impl TokenRepository for SeaOrmTokenRepository {
    async fn upsert(&self, stored: StoredToken) -> DomainResult<()> {
        let t = &stored.token;
        debug!("Upserting token {}/{}/{}", t.country_code, t.party_id, t.uid);

        let payload = serde_json::to_string(t).map_err(|e| DomainError::Storage(e.to_string()))?;

        let model = token::ActiveModel {
            country_code: Set(t.country_code.clone()),
            party_id: Set(t.party_id.clone()),
            uid: Set(t.uid.clone()),
            emsp_id: Set(stored.emsp_id.clone()),
            valid: Set(t.valid),
            payload: Set(payload),
            last_updated: Set(t.last_updated),
            ..Default::default()
        };

        token::Entity::insert(model)
            .on_conflict(
                OnConflict::columns([
                    token::Column::CountryCode,
                    token::Column::PartyId,
                    token::Column::Uid,
                ])
                .update_columns([
                    token::Column::Valid,
                    token::Column::Payload,
                    token::Column::LastUpdated,
                ])
                .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await
            .map_err(db_err)?;

        Ok(())
    }

    async fn find_page_for_emsp(&self, emsp_id: &str, page: Page) -> DomainResult<Paged<Token>> {
        let query = token::Entity::find()
            .filter(token::Column::EmspId.eq(emsp_id))
            .order_by_asc(token::Column::Seq);

        let total = query.clone().count(&self.db).await.map_err(db_err)?;

        let items = query
            .offset(page.offset)
            .limit(page.limit)
            .all(&self.db)
            .await
            .map_err(db_err)?
            .iter()
            .map(|m| decode(&m.payload))
            .collect::<DomainResult<Vec<_>>>()?;

        Ok(Paged::new(items, total, page.limit))
    }
}
