use crate::bootstrap;
use ferrous_dyndns_domain::config::DatabaseConfig;
use ferrous_dyndns_infrastructure::repositories::SqliteRecordStore;
use std::sync::Arc;

pub struct Repositories {
    pub record_store: Arc<SqliteRecordStore>,
}

impl Repositories {
    pub async fn new(cfg: &DatabaseConfig) -> anyhow::Result<Self> {
        let (write_pool, read_pool) = bootstrap::init_database(cfg).await?;
        Ok(Self {
            record_store: Arc::new(SqliteRecordStore::with_pools(write_pool, read_pool)),
        })
    }
}
