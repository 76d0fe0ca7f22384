pub mod record_set_codec;
pub mod record_store_repository;

pub use record_store_repository::SqliteRecordStore;
