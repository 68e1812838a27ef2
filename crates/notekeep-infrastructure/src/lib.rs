pub mod config_service;
pub mod logging;
pub mod memory_secure_store;
pub mod paths;
pub mod secure_store;
pub mod storage;

pub use crate::config_service::ConfigService;
pub use crate::memory_secure_store::MemorySecureStore;
pub use crate::paths::{NotekeepPaths, PathError, ServiceType};
pub use crate::secure_store::FileSecureStore;
