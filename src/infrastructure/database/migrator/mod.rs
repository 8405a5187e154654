//! Database migrations module

pub use sea_orm_migration::prelude::*;

mod m20250101_000001_create_organizations;
mod m20250101_000002_create_partner_credentials;
mod m20250101_000003_create_locations;
mod m20250101_000004_create_sessions;
mod m20250101_000005_create_tokens;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250101_000001_create_organizations::Migration),
            Box::new(m20250101_000002_create_partner_credentials::Migration),
            Box::new(m20250101_000003_create_locations::Migration),
            Box::new(m20250101_000004_create_sessions::Migration),
            Box::new(m20250101_000005_create_tokens::Migration),
        ]
    }
}
