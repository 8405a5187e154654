//! SeaORM implementation of PartnerCredentialRepository

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set,
};
use tracing::debug;

use super::db_err;
use crate::domain::credentials::{
    CredentialsPayload, CredentialsRole, PartnerCredential, PartnerCredentialRepository,
};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::partner_credential;

pub struct SeaOrmPartnerCredentialRepository {
    db: DatabaseConnection,
}

impl SeaOrmPartnerCredentialRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn model_to_domain(m: partner_credential::Model) -> DomainResult<PartnerCredential> {
    let roles: Vec<CredentialsRole> = serde_json::from_str(&m.roles)
        .map_err(|e| DomainError::Storage(format!("credentials roles: {}", e)))?;
    Ok(PartnerCredential {
        seq: i64::from(m.seq),
        organization_id: m.organization_id,
        credentials: CredentialsPayload {
            token: m.token,
            url: m.url,
            roles,
        },
        received_at: m.received_at,
    })
}

#[async_trait]
impl PartnerCredentialRepository for SeaOrmPartnerCredentialRepository {
    async fn append(
        &self,
        organization_id: &str,
        credentials: CredentialsPayload,
    ) -> DomainResult<PartnerCredential> {
        debug!("Appending partner credentials for organization {}", organization_id);

        let roles =
            serde_json::to_string(&credentials.roles).map_err(|e| DomainError::Storage(e.to_string()))?;

        let model = partner_credential::ActiveModel {
            organization_id: Set(organization_id.to_string()),
            token: Set(credentials.token),
            url: Set(credentials.url),
            roles: Set(roles),
            received_at: Set(Utc::now()),
            ..Default::default()
        };

        let saved = model.insert(&self.db).await.map_err(db_err)?;
        model_to_domain(saved)
    }

    async fn find_for_organization(
        &self,
        organization_id: &str,
    ) -> DomainResult<Vec<PartnerCredential>> {
        partner_credential::Entity::find()
            .filter(partner_credential::Column::OrganizationId.eq(organization_id))
            .order_by_asc(partner_credential::Column::Seq)
            .all(&self.db)
            .await
            .map_err(db_err)?
            .into_iter()
            .map(model_to_domain)
            .collect()
    }

    async fn count_for_organization(&self, organization_id: &str) -> DomainResult<u64> {
        partner_credential::Entity::find()
            .filter(partner_credential::Column::OrganizationId.eq(organization_id))
            .count(&self.db)
            .await
            .map_err(db_err)
    }
}
