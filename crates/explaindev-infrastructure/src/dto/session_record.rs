//! Session record DTOs and migrations
//!
//! ## Version History
//! - **1.0.0**: Initial schema (`uid`, `email`, `displayName`)

use serde::{Deserialize, Serialize};
use version_migrate::{FromDomain, IntoDomain, Versioned};

use explaindev_core::session::SessionRecord;

/// Session record DTO V1.0.0
#[derive(Debug, Clone, Serialize, Deserialize, Versioned)]
#[versioned(version = "1.0.0")]
#[serde(rename_all = "camelCase")]
pub struct SessionRecordV1_0_0 {
    pub uid: String,
    pub email: String,
    pub display_name: String,
}

/// Convert SessionRecordV1_0_0 DTO to domain model
impl IntoDomain<SessionRecord> for SessionRecordV1_0_0 {
    fn into_domain(self) -> SessionRecord {
        SessionRecord {
            uid: self.uid,
            email: self.email,
            display_name: self.display_name,
        }
    }
}

/// Convert domain model to SessionRecordV1_0_0 DTO for persistence
impl FromDomain<SessionRecord> for SessionRecordV1_0_0 {
    fn from_domain(record: SessionRecord) -> Self {
        SessionRecordV1_0_0 {
            uid: record.uid,
            email: record.email,
            display_name: record.display_name,
        }
    }
}

/// Creates a Migrator for SessionRecord entities.
pub fn create_session_record_migrator() -> version_migrate::Migrator {
    version_migrate::migrator!("session_record" => [
        SessionRecordV1_0_0,
        SessionRecord
    ], save = true)
    .expect("Failed to create session_record migrator")
}
