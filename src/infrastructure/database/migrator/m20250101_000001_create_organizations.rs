//! Create organizations table

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Organizations::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Organizations::Seq)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Organizations::Id)
                            .string_len(36)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Organizations::Name).string_len(255).not_null())
                    .col(ColumnDef::new(Organizations::Website).string().null())
                    .col(ColumnDef::new(Organizations::Logo).string().null())
                    .col(
                        ColumnDef::new(Organizations::CountryCode)
                            .string_len(2)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Organizations::PartyId).string_len(3).not_null())
                    .col(ColumnDef::new(Organizations::Role).string_len(8).not_null())
                    .col(ColumnDef::new(Organizations::BusinessDetails).text().null())
                    .col(
                        ColumnDef::new(Organizations::ApiTokenHash)
                            .string_len(64)
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Organizations::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Organizations::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // Party identity; concurrent registrations race on this index
        manager
            .create_index(
                Index::create()
                    .name("idx_organizations_party")
                    .table(Organizations::Table)
                    .col(Organizations::CountryCode)
                    .col(Organizations::PartyId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Organizations::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Organizations {
    Table,
    Seq,
    Id,
    Name,
    Website,
    Logo,
    CountryCode,
    PartyId,
    Role,
    BusinessDetails,
    ApiTokenHash,
    CreatedAt,
    UpdatedAt,
}
