//! Location entity for database

use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "locations")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub seq: i32,
    pub country_code: String,
    pub party_id: String,
    pub location_id: String,
    /// Organization id of the publishing CPO
    pub owner_org_id: String,
    /// Full OCPI Location object as JSON
    #[sea_orm(column_type = "Text")]
    pub payload: String,
    pub last_updated: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
