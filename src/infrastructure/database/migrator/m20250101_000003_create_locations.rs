//! Create locations table

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Locations::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Locations::Seq)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Locations::CountryCode).string_len(2).not_null())
                    .col(ColumnDef::new(Locations::PartyId).string_len(3).not_null())
                    .col(ColumnDef::new(Locations::LocationId).string_len(36).not_null())
                    .col(ColumnDef::new(Locations::OwnerOrgId).string_len(36).not_null())
                    .col(ColumnDef::new(Locations::Payload).text().not_null())
                    .col(
                        ColumnDef::new(Locations::LastUpdated)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Locations::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_locations_key")
                    .table(Locations::Table)
                    .col(Locations::CountryCode)
                    .col(Locations::PartyId)
                    .col(Locations::LocationId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_locations_owner")
                    .table(Locations::Table)
                    .col(Locations::OwnerOrgId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Locations::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Locations {
    Table,
    Seq,
    CountryCode,
    PartyId,
    LocationId,
    OwnerOrgId,
    Payload,
    LastUpdated,
    CreatedAt,
}
