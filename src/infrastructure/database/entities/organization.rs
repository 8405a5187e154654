//! Organization entity for database

use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;

/// Registered party. `(country_code, party_id)` and `api_token_hash` are
/// backed by unique indexes.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "organizations")]
pub struct Model {
    /// Insertion sequence, defines listing order
    #[sea_orm(primary_key)]
    pub seq: i32,

    #[sea_orm(unique)]
    pub id: String,

    pub name: String,
    pub website: Option<String>,
    pub logo: Option<String>,
    pub country_code: String,
    pub party_id: String,

    /// "CPO" | "EMSP" | "HUB"
    pub role: String,

    /// JSON object
    #[sea_orm(column_type = "Text", nullable)]
    pub business_details: Option<String>,

    /// SHA-256 hex digest of the bearer token
    #[sea_orm(unique)]
    pub api_token_hash: String,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::partner_credential::Entity")]
    PartnerCredentials,
}

impl Related<super::partner_credential::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PartnerCredentials.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
