//! Token entity for database

use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "tokens")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub seq: i32,
    pub country_code: String,
    pub party_id: String,
    pub uid: String,
    /// eMSP organization that issued the token
    pub emsp_id: String,
    pub valid: bool,
    /// Full OCPI Token object as JSON
    #[sea_orm(column_type = "Text")]
    pub payload: String,
    pub last_updated: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
