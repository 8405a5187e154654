//! SeaORM implementation of LocationRepository

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::OnConflict;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};
use tracing::debug;

use super::db_err;
use crate::domain::location::{Location, LocationRepository, StoredLocation};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::location;
use crate::shared::{Page, Paged};

pub struct SeaOrmLocationRepository {
    db: DatabaseConnection,
}

impl SeaOrmLocationRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn decode(payload: &str) -> DomainResult<Location> {
    serde_json::from_str(payload).map_err(|e| DomainError::Storage(format!("location payload: {}", e)))
}

fn model_to_domain(m: location::Model) -> DomainResult<StoredLocation> {
    Ok(StoredLocation {
        location: decode(&m.payload)?,
        owner_org_id: m.owner_org_id,
        created_at: m.created_at,
    })
}

#[async_trait]
impl LocationRepository for SeaOrmLocationRepository {
    async fn upsert(&self, owner_org_id: &str, location: Location) -> DomainResult<StoredLocation> {
        debug!(
            "Upserting location {}/{}/{}",
            location.country_code, location.party_id, location.id
        );

        let payload =
            serde_json::to_string(&location).map_err(|e| DomainError::Storage(e.to_string()))?;

        let model = location::ActiveModel {
            country_code: Set(location.country_code.clone()),
            party_id: Set(location.party_id.clone()),
            location_id: Set(location.id.clone()),
            owner_org_id: Set(owner_org_id.to_string()),
            payload: Set(payload),
            last_updated: Set(location.last_updated),
            created_at: Set(Utc::now()),
            ..Default::default()
        };

        // Replacing keeps seq, owner and created_at of the first insert.
        location::Entity::insert(model)
            .on_conflict(
                OnConflict::columns([
                    location::Column::CountryCode,
                    location::Column::PartyId,
                    location::Column::LocationId,
                ])
                .update_columns([location::Column::Payload, location::Column::LastUpdated])
                .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await
            .map_err(db_err)?;

        self.find(&location.country_code, &location.party_id, &location.id)
            .await?
            .ok_or_else(|| DomainError::not_found("Location", "id", location.id.clone()))
    }

    async fn find(
        &self,
        country_code: &str,
        party_id: &str,
        id: &str,
    ) -> DomainResult<Option<StoredLocation>> {
        location::Entity::find()
            .filter(location::Column::CountryCode.eq(country_code))
            .filter(location::Column::PartyId.eq(party_id))
            .filter(location::Column::LocationId.eq(id))
            .one(&self.db)
            .await
            .map_err(db_err)?
            .map(model_to_domain)
            .transpose()
    }

    async fn find_page(&self, page: Page) -> DomainResult<Paged<Location>> {
        let query = location::Entity::find().order_by_asc(location::Column::Seq);

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
