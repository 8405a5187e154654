//! Partner credential entity for database

use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;

/// Append-only log of credentials objects POSTed by partners.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "partner_credentials")]
pub struct Model {
    /// Receipt order
    #[sea_orm(primary_key)]
    pub seq: i32,
    pub organization_id: String,
    pub token: String,
    pub url: String,
    #[sea_orm(column_type = "Text")]
    pub roles: String, // JSON array of credentials roles
    pub received_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::organization::Entity",
        from = "Column::OrganizationId",
        to = "super::organization::Column::Id",
        on_delete = "Cascade"
    )]
    Organization,
}

impl Related<super::organization::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Organization.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
