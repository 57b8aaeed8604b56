//! Key/value storage adapters for the storage port.

mod atomic_file;
mod dir_storage;
mod memory_storage;

pub use atomic_file::{AtomicFile, AtomicFileError};
pub use dir_storage::DirStorage;
pub use memory_storage::InMemoryStorage;
