//! Create `patra` table with FK to `grahaka`.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Patra::Table)
                    .if_not_exists()
                    .col(pk_auto(Patra::Id))
                    .col(string_len(Patra::Image, 2048).not_null())
                    .col(
                        ColumnDef::new(Patra::Document)
                            .string_len(2048)
                            .null(),
                    )
                    .col(string(Patra::Tags).not_null())
                    .col(integer(Patra::OwnerId).not_null())
                    .col(timestamp_with_time_zone(Patra::CreatedAt).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_patra_grahaka")
                            .from(Patra::Table, Patra::OwnerId)
                            .to(Grahaka::Table, Grahaka::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Patra::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Patra { Table, Id, Image, Document, Tags, OwnerId, CreatedAt }

#[derive(DeriveIden)]
enum Grahaka { Table, Id }
