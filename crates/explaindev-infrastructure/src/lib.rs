pub mod config_service;
pub mod dto;
pub mod paths;
pub mod session_store;
pub mod storage;
pub mod term_store;

pub use crate::config_service::ConfigService;
pub use crate::session_store::SessionStoreImpl;
pub use crate::storage::{DirStorage, InMemoryStorage};
pub use crate::term_store::TermStoreImpl;
