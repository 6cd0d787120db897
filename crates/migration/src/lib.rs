//! Migrator creating the `grahaka` and `patra` tables.
//! Indexes are applied last.
pub use sea_orm_migration::prelude::*;

mod m20220101_000001_create_grahaka;
mod m20220101_000002_create_patra;
mod m20220101_000003_add_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20220101_000001_create_grahaka::Migration),
            Box::new(m20220101_000002_create_patra::Migration),
            // Indexes should always be applied last
            Box::new(m20220101_000003_add_indexes::Migration),
        ]
    }
}
