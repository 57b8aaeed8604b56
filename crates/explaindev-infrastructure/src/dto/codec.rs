//! Byte encodings of the durable records.
//!
//! Each record is written in version-migrate's flat form: the record's own
//! JSON object plus a `version` field. The term collection is a JSON array
//! of such objects.

use explaindev_core::error::{GlossaryError, Result};
use explaindev_core::session::SessionRecord;
use explaindev_core::term::Term;
use serde_json::Value;
use version_migrate::Migrator;

use super::session_record::create_session_record_migrator;
use super::term::create_term_migrator;

/// Version assumed for records written before versioning was introduced.
pub const LEGACY_VERSION: &str = "1.0.0";

const VERSION_FIELD: &str = "version";

/// Tags an unversioned record object with [`LEGACY_VERSION`].
fn with_legacy_version(mut value: Value) -> Value {
    if let Value::Object(ref mut map) = value {
        map.entry(VERSION_FIELD)
            .or_insert_with(|| Value::String(LEGACY_VERSION.to_string()));
    }
    value
}

/// Encodes and decodes the term collection snapshot.
pub struct TermCodec {
    migrator: Migrator,
}

impl TermCodec {
    const ENTITY: &'static str = "term";

    pub fn new() -> Self {
        Self {
            migrator: create_term_migrator(),
        }
    }

    pub fn encode(&self, terms: &[Term]) -> Result<Vec<u8>> {
        let records = terms
            .iter()
            .map(|term| {
                let flat = self
                    .migrator
                    .save_domain_flat(Self::ENTITY, term.clone())
                    .map_err(|e| {
                        GlossaryError::migration(format!(
                            "Failed to version term '{}': {}",
                            term.id, e
                        ))
                    })?;
                serde_json::from_str::<Value>(&flat).map_err(GlossaryError::from)
            })
            .collect::<Result<Vec<Value>>>()?;

        Ok(serde_json::to_vec(&Value::Array(records))?)
    }

    pub fn decode(&self, bytes: &[u8]) -> Result<Vec<Term>> {
        let records: Vec<Value> = serde_json::from_slice(bytes)?;

        records
            .into_iter()
            .map(|record| {
                self.migrator
                    .load_flat_from(Self::ENTITY, with_legacy_version(record))
                    .map_err(|e| GlossaryError::migration(format!("Failed to migrate term: {}", e)))
            })
            .collect()
    }
}

impl Default for TermCodec {
    fn default() -> Self {
        Self::new()
    }
}

/// Encodes and decodes the session record.
pub struct SessionCodec {
    migrator: Migrator,
}

impl SessionCodec {
    const ENTITY: &'static str = "session_record";

    pub fn new() -> Self {
        Self {
            migrator: create_session_record_migrator(),
        }
    }

    pub fn encode(&self, record: &SessionRecord) -> Result<Vec<u8>> {
        let flat = self
            .migrator
            .save_domain_flat(Self::ENTITY, record.clone())
            .map_err(|e| {
                GlossaryError::migration(format!("Failed to version session record: {}", e))
            })?;
        Ok(flat.into_bytes())
    }

    pub fn decode(&self, bytes: &[u8]) -> Result<SessionRecord> {
        let value: Value = serde_json::from_slice(bytes)?;
        self.migrator
            .load_flat_from(Self::ENTITY, with_legacy_version(value))
            .map_err(|e| {
                GlossaryError::migration(format!("Failed to migrate session record: {}", e))
            })
    }
}

impl Default for SessionCodec {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use explaindev_core::term::seed_terms;

    #[test]
    fn test_term_snapshot_is_versioned_array() {
        let codec = TermCodec::new();
        let bytes = codec.encode(&seed_terms().unwrap()).unwrap();

        let value: Value = serde_json::from_slice(&bytes).unwrap();
        let records = value.as_array().unwrap();
        assert_eq!(records.len(), 5);
        assert!(records.iter().all(|r| r["version"] == LEGACY_VERSION));
        assert_eq!(records[4]["name"], "WebSockets");
    }

    #[test]
    fn test_term_snapshot_preserves_order() {
        let codec = TermCodec::new();
        let mut terms = seed_terms().unwrap();
        terms.reverse();

        let decoded = codec.decode(&codec.encode(&terms).unwrap()).unwrap();
        assert_eq!(decoded, terms);
    }

    #[test]
    fn test_decode_unversioned_terms() {
        let legacy = r#"[{
            "id": "1700000000000",
            "name": "GraphQL",
            "slug": "graphql",
            "category": "backend",
            "shortDescription": "A query language for APIs",
            "simpleExplanation": "",
            "technicalExplanation": "",
            "analogy": "",
            "tags": ["api"],
            "resources": [],
            "createdBy": "1",
            "createdAt": "2024-03-01T10:00:00.000Z"
        }]"#;

        let terms = TermCodec::new().decode(legacy.as_bytes()).unwrap();
        assert_eq!(terms.len(), 1);
        assert_eq!(terms[0].slug, "graphql");
        assert!(terms[0].code_example.is_none());
    }

    #[test]
    fn test_decode_rejects_non_array() {
        let err = TermCodec::new().decode(b"{\"id\":\"1\"}").unwrap_err();
        assert!(err.is_serialization());
    }

    #[test]
    fn test_session_roundtrip() {
        let codec = SessionCodec::new();
        let record = SessionRecord::new("1", "demo@example.com", "Demo User");

        let bytes = codec.encode(&record).unwrap();
        let value: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(value["displayName"], "Demo User");
        assert_eq!(value["version"], LEGACY_VERSION);

        assert_eq!(codec.decode(&bytes).unwrap(), record);
    }

    #[test]
    fn test_decode_unversioned_session() {
        let legacy = br#"{"uid":"1","email":"demo@example.com","displayName":"Demo User"}"#;
        let record = SessionCodec::new().decode(legacy).unwrap();
        assert_eq!(record.email, "demo@example.com");
    }
}
