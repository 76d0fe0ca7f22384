pub mod builders;

#[allow(unused_imports)]
pub use builders::UpdateRecordBuilder;
