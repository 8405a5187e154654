//! SeaORM implementation of OrganizationRepository

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
    SqlErr,
};
use tracing::debug;

use super::db_err;
use crate::domain::organization::{NewOrganization, Organization, OrganizationRepository, Role};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::organization;

pub struct SeaOrmOrganizationRepository {
    db: DatabaseConnection,
}

impl SeaOrmOrganizationRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

// ── Conversion helpers ──────────────────────────────────────────

fn model_to_domain(m: organization::Model) -> DomainResult<Organization> {
    let role: Role = m.role.parse().map_err(DomainError::Storage)?;
    let business_details = match m.business_details {
        Some(raw) => Some(
            serde_json::from_str(&raw)
                .map_err(|e| DomainError::Storage(format!("business_details: {}", e)))?,
        ),
        None => None,
    };

    Ok(Organization {
        id: m.id,
        name: m.name,
        website: m.website,
        logo: m.logo,
        country_code: m.country_code,
        party_id: m.party_id,
        role,
        business_details,
        created_at: m.created_at,
        updated_at: m.updated_at,
    })
}

// ── OrganizationRepository impl ─────────────────────────────────

#[async_trait]
impl OrganizationRepository for SeaOrmOrganizationRepository {
    async fn insert(&self, new: NewOrganization) -> DomainResult<Organization> {
        let org = new.organization;
        debug!(
            "Inserting organization {} ({}/{})",
            org.id, org.country_code, org.party_id
        );

        let business_details = org
            .business_details
            .as_ref()
            .map(serde_json::to_string)
            .transpose()
            .map_err(|e| DomainError::Storage(e.to_string()))?;

        let model = organization::ActiveModel {
            id: Set(org.id.clone()),
            name: Set(org.name.clone()),
            website: Set(org.website.clone()),
            logo: Set(org.logo.clone()),
            country_code: Set(org.country_code.clone()),
            party_id: Set(org.party_id.clone()),
            role: Set(org.role.as_str().to_string()),
            business_details: Set(business_details),
            api_token_hash: Set(new.api_token_hash),
            created_at: Set(org.created_at),
            updated_at: Set(org.updated_at),
            ..Default::default()
        };

        // idx_organizations_party rejects the second (country_code, party_id).
        match model.insert(&self.db).await {
            Ok(_) => Ok(org),
            Err(e) => match e.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => Err(DomainError::DuplicateParty {
                    country_code: org.country_code,
                    party_id: org.party_id,
                }),
                _ => Err(db_err(e)),
            },
        }
    }

    async fn find_by_id(&self, id: &str) -> DomainResult<Option<Organization>> {
        organization::Entity::find()
            .filter(organization::Column::Id.eq(id))
            .one(&self.db)
            .await
            .map_err(db_err)?
            .map(model_to_domain)
            .transpose()
    }

    async fn find_by_token_hash(&self, token_hash: &str) -> DomainResult<Option<Organization>> {
        organization::Entity::find()
            .filter(organization::Column::ApiTokenHash.eq(token_hash))
            .one(&self.db)
            .await
            .map_err(db_err)?
            .map(model_to_domain)
            .transpose()
    }

    async fn find_all(&self) -> DomainResult<Vec<Organization>> {
        organization::Entity::find()
            .order_by_asc(organization::Column::Seq)
            .all(&self.db)
            .await
            .map_err(db_err)?
            .into_iter()
            .map(model_to_domain)
            .collect()
    }
}
