pub mod mock_repositories;

#[allow(unused_imports)]
pub use mock_repositories::{address_update, delete_all_update, opaque_update, MockRecordStore};
