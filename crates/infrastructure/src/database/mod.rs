use ferrous_dyndns_domain::config::DatabaseConfig;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};
use std::time::Duration;

fn connect_options(cfg: &DatabaseConfig) -> SqliteConnectOptions {
    SqliteConnectOptions::new()
        .filename(&cfg.path)
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(Duration::from_secs(cfg.busy_timeout_secs))
}

/// Pool used for `append` and `delete`. A single connection serializes
/// writers, so a read-modify-write inside one transaction is atomic.
pub async fn create_write_pool(cfg: &DatabaseConfig) -> Result<SqlitePool, sqlx::Error> {
    SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(connect_options(cfg))
        .await
}

pub async fn create_read_pool(cfg: &DatabaseConfig) -> Result<SqlitePool, sqlx::Error> {
    SqlitePoolOptions::new()
        .max_connections(cfg.read_pool_max_connections)
        .connect_with(connect_options(cfg))
        .await
}

/// Create the record set table if it does not exist yet.
pub async fn create_bucket(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS rr (
            key TEXT PRIMARY KEY NOT NULL,
            value BLOB NOT NULL
        )",
    )
    .execute(pool)
    .await?;

    Ok(())
}
