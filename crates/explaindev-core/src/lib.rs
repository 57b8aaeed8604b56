//! Domain layer of the ExplainDev glossary.
//!
//! Holds the term and session models, the store traits views program
//! against, the durable storage port, and read-side browse helpers.
//! Implementations of the stores and storage live in
//! `explaindev-infrastructure`.

pub mod browse;
pub mod config;
pub mod error;
pub mod session;
pub mod storage;
pub mod term;

// Re-export common error type
pub use error::GlossaryError;
