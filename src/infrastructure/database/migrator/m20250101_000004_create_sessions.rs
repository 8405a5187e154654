//! Create sessions table

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Sessions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Sessions::Seq)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Sessions::CountryCode).string_len(2).not_null())
                    .col(ColumnDef::new(Sessions::PartyId).string_len(3).not_null())
                    .col(ColumnDef::new(Sessions::SessionId).string_len(36).not_null())
                    .col(
                        ColumnDef::new(Sessions::LocationOwnerId)
                            .string_len(36)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Sessions::EmspId).string_len(36).not_null())
                    .col(ColumnDef::new(Sessions::Status).string_len(16).not_null())
                    .col(ColumnDef::new(Sessions::Payload).text().not_null())
                    .col(
                        ColumnDef::new(Sessions::LastUpdated)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_sessions_key")
                    .table(Sessions::Table)
                    .col(Sessions::CountryCode)
                    .col(Sessions::PartyId)
                    .col(Sessions::SessionId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_sessions_location_owner")
                    .table(Sessions::Table)
                    .col(Sessions::LocationOwnerId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_sessions_emsp")
                    .table(Sessions::Table)
                    .col(Sessions::EmspId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Sessions::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Sessions {
    Table,
    Seq,
    CountryCode,
    PartyId,
    SessionId,
    LocationOwnerId,
    EmspId,
    Status,
    Payload,
    LastUpdated,
}
