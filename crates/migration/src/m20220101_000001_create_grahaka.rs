//! Create `grahaka` table.
//!
//! Customers; `email` carries the unique constraint that settles duplicate
//! registrations.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Grahaka::Table)
                    .if_not_exists()
                    .col(pk_auto(Grahaka::Id))
                    .col(string_len(Grahaka::Email, 255).unique_key().not_null())
                    .col(string(Grahaka::PasswordHashed).not_null())
                    .col(boolean(Grahaka::IsActive).not_null().default(true))
                    .col(timestamp_with_time_zone(Grahaka::CreatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Grahaka::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Grahaka { Table, Id, Email, PasswordHashed, IsActive, CreatedAt }
