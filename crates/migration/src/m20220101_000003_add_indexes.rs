use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Patra: index on owner_id
        manager
            .create_index(
                Index::create()
                    .name("idx_patra_owner")
                    .table(Patra::Table)
                    .col(Patra::OwnerId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_patra_owner").table(Patra::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Patra { Table, OwnerId }
