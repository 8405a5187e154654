//! SeaORM implementation of SessionRepository

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::OnConflict;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Set,
};
use tracing::debug;

use super::db_err;
use crate::domain::session::{
    Session, SessionRepository, SessionScope, SessionStatus, StoredSession,
};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::session;
use crate::shared::{Page, Paged};

pub struct SeaOrmSessionRepository {
    db: DatabaseConnection,
}

impl SeaOrmSessionRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn decode(payload: &str) -> DomainResult<Session> {
    serde_json::from_str(payload).map_err(|e| DomainError::Storage(format!("session payload: {}", e)))
}

fn encode(s: &Session) -> DomainResult<String> {
    serde_json::to_string(s).map_err(|e| DomainError::Storage(e.to_string()))
}

#[async_trait]
impl SessionRepository for SeaOrmSessionRepository {
    async fn upsert(&self, stored: StoredSession) -> DomainResult<()> {
        let s = &stored.session;
        debug!("Upserting session {}/{}/{}", s.country_code, s.party_id, s.id);

        let model = session::ActiveModel {
            country_code: Set(s.country_code.clone()),
            party_id: Set(s.party_id.clone()),
            session_id: Set(s.id.clone()),
            location_owner_id: Set(stored.location_owner_id.clone()),
            emsp_id: Set(stored.emsp_id.clone()),
            status: Set(s.status.as_str().to_string()),
            payload: Set(encode(s)?),
            last_updated: Set(s.last_updated),
            ..Default::default()
        };

        session::Entity::insert(model)
            .on_conflict(
                OnConflict::columns([
                    session::Column::CountryCode,
                    session::Column::PartyId,
                    session::Column::SessionId,
                ])
                .update_columns([
                    session::Column::Status,
                    session::Column::Payload,
                    session::Column::LastUpdated,
                ])
                .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await
            .map_err(db_err)?;

        Ok(())
    }

    async fn update_status(
        &self,
        country_code: &str,
        party_id: &str,
        id: &str,
        status: SessionStatus,
    ) -> DomainResult<Session> {
        let existing = session::Entity::find()
            .filter(session::Column::CountryCode.eq(country_code))
            .filter(session::Column::PartyId.eq(party_id))
            .filter(session::Column::SessionId.eq(id))
            .one(&self.db)
            .await
            .map_err(db_err)?;

        let Some(existing) = existing else {
            return Err(DomainError::not_found("Session", "id", id));
        };

        let mut updated = decode(&existing.payload)?;
        updated.status = status;
        updated.last_updated = Utc::now();

        let mut active: session::ActiveModel = existing.into();
        active.status = Set(status.as_str().to_string());
        active.payload = Set(encode(&updated)?);
        active.last_updated = Set(updated.last_updated);
        active.update(&self.db).await.map_err(db_err)?;

        Ok(updated)
    }

    async fn find_page(&self, scope: &SessionScope, page: Page) -> DomainResult<Paged<Session>> {
        let query = match scope {
            SessionScope::LocationOwner(id) => {
                session::Entity::find().filter(session::Column::LocationOwnerId.eq(id.as_str()))
            }
            SessionScope::Emsp(id) => {
                session::Entity::find().filter(session::Column::EmspId.eq(id.as_str()))
            }
        }
        .order_by_asc(session::Column::Seq);

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
