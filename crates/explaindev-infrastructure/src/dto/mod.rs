//! Data Transfer Objects (DTOs) for persistence.
//!
//! These DTOs represent the versioned schema of the two durable records.
//! They are private to the infrastructure layer and handle the evolution
//! of the storage format over time.
//!
//! ## Schema Versioning (Semantic Versioning)
//!
//! - **MAJOR (X.0.0)**: Breaking changes (field removal, type changes)
//! - **MINOR (1.X.0)**: Backward-compatible additions (new optional fields)
//!
//! ### Term Version History
//! - **1.0.0**: Initial schema
//!
//! ### SessionRecord Version History
//! - **1.0.0**: Initial schema

mod codec;
mod session_record;
mod term;

pub use codec::{LEGACY_VERSION, SessionCodec, TermCodec};
pub use session_record::{SessionRecordV1_0_0, create_session_record_migrator};
pub use term::{ResourceV1_0_0, TermV1_0_0, create_term_migrator};
