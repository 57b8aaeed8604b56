//! Session domain module.
//!
//! This module contains the locally simulated "signed-in user" record and
//! the store contract used by views.
//!
//! # Module Structure
//!
//! - `model`: Session record domain model
//! - `store`: Session store trait
//!
//! # Usage
//!
//! ```ignore
//! use explaindev_core::session::{SessionRecord, SessionStore};
//! ```

mod model;
mod store;

// Re-export public API
pub use model::SessionRecord;
pub use store::SessionStore;
