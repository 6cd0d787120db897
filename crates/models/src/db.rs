use std::time::Duration;

use configs::DatabaseConfig;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::info;

/// Pool options for the `[database]` config section.
pub fn connect_options(cfg: &DatabaseConfig) -> ConnectOptions {
    let mut opt = ConnectOptions::new(cfg.url.clone());
    opt.connect_timeout(Duration::from_secs(cfg.connect_timeout_secs))
        .acquire_timeout(Duration::from_secs(cfg.acquire_timeout_secs))
        .sqlx_logging(cfg.sqlx_logging);
    // An in-memory SQLite database lives only as long as its connection:
    // one connection, never reaped or recycled.
    if cfg.is_memory_sqlite() {
        opt.max_connections(1).min_connections(1);
    } else {
        opt.max_connections(cfg.max_connections)
            .min_connections(cfg.min_connections)
            .idle_timeout(Duration::from_secs(cfg.idle_timeout_secs))
            .max_lifetime(Duration::from_secs(cfg.max_lifetime_secs));
    }
    opt
}

/// Build a pool from the `[database]` config section.
pub async fn connect_with_config(cfg: &DatabaseConfig) -> anyhow::Result<DatabaseConnection> {
    let db = Database::connect(connect_options(cfg)).await?;
    info!(max_connections = cfg.max_connections, sqlite = cfg.is_sqlite(), "database pool ready");
    Ok(db)
}

/// Apply pending schema migrations.
pub async fn migrate(db: &DatabaseConnection) -> anyhow::Result<()> {
    Migrator::up(db, None).await?;
    Ok(())
}

/// Fresh, migrated in-memory database; used by the test suites of every crate.
pub async fn connect_memory() -> anyhow::Result<DatabaseConnection> {
    let cfg = DatabaseConfig { url: "sqlite::memory:".into(), ..Default::default() };
    let db = connect_with_config(&cfg).await?;
    migrate(&db).await?;
    Ok(db)
}
