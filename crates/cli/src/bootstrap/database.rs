use ferrous_dyndns_domain::config::DatabaseConfig;
use ferrous_dyndns_infrastructure::database::{create_bucket, create_read_pool, create_write_pool};
use sqlx::SqlitePool;
use tracing::{error, info};

/// Open the record database, creating the file and the `rr` table when
/// missing. Any failure here is fatal to the process.
pub async fn init_database(cfg: &DatabaseConfig) -> anyhow::Result<(SqlitePool, SqlitePool)> {
    info!("Initializing database: {}", cfg.path);

    let write_pool = create_write_pool(cfg).await.map_err(|e| {
        error!("Failed to initialize write pool: {}", e);
        anyhow::anyhow!(e)
    })?;

    create_bucket(&write_pool).await.map_err(|e| {
        error!("Failed to create record table: {}", e);
        anyhow::anyhow!(e)
    })?;

    let read_pool = create_read_pool(cfg).await.map_err(|e| {
        error!("Failed to initialize read pool: {}", e);
        anyhow::anyhow!(e)
    })?;

    info!(
        "Database initialized successfully (write_pool max=1, read_pool max={})",
        cfg.read_pool_max_connections,
    );

    Ok((write_pool, read_pool))
}
