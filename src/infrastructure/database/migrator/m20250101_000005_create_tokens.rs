//! Create tokens table

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Tokens::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Tokens::Seq)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Tokens::CountryCode).string_len(2).not_null())
                    .col(ColumnDef::new(Tokens::PartyId).string_len(3).not_null())
                    .col(ColumnDef::new(Tokens::Uid).string_len(36).not_null())
                    .col(ColumnDef::new(Tokens::EmspId).string_len(36).not_null())
                    .col(ColumnDef::new(Tokens::Valid).boolean().not_null().default(true))
                    .col(ColumnDef::new(Tokens::Payload).text().not_null())
                    .col(
                        ColumnDef::new(Tokens::LastUpdated)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_tokens_key")
                    .table(Tokens::Table)
                    .col(Tokens::CountryCode)
                    .col(Tokens::PartyId)
                    .col(Tokens::Uid)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_tokens_emsp")
                    .table(Tokens::Table)
                    .col(Tokens::EmspId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Tokens::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Tokens {
    Table,
    Seq,
    CountryCode,
    PartyId,
    Uid,
    EmspId,
    Valid,
    Payload,
    LastUpdated,
}
