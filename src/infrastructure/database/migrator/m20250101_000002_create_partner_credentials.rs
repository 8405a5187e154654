//! Create partner_credentials table

use sea_orm_migration::prelude::*;

use super::m20250101_000001_create_organizations::Organizations;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PartnerCredentials::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PartnerCredentials::Seq)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(PartnerCredentials::OrganizationId)
                            .string_len(36)
                            .not_null(),
                    )
                    .col(ColumnDef::new(PartnerCredentials::Token).string().not_null())
                    .col(ColumnDef::new(PartnerCredentials::Url).string().not_null())
                    .col(ColumnDef::new(PartnerCredentials::Roles).text().not_null())
                    .col(
                        ColumnDef::new(PartnerCredentials::ReceivedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_partner_credentials_organization")
                            .from(PartnerCredentials::Table, PartnerCredentials::OrganizationId)
                            .to(Organizations::Table, Organizations::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_partner_credentials_organization")
                    .table(PartnerCredentials::Table)
                    .col(PartnerCredentials::OrganizationId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PartnerCredentials::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum PartnerCredentials {
    Table,
    Seq,
    OrganizationId,
    Token,
    Url,
    Roles,
    ReceivedAt,
}
