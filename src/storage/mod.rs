pub mod file_store;
pub mod memory_store;
pub mod mvp_store;
pub mod storage_error;

pub use file_store::FileStore;
pub use memory_store::MemoryStore;
pub use mvp_store::MvpStore;
pub use storage_error::StoreError;
