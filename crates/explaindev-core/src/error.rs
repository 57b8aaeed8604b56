//! Error types for the ExplainDev glossary.

use thiserror::Error;

/// A shared error type for the glossary stores and their adapters.
///
/// Only `InvalidCredentials` and `NotFound` are part of the store contract
/// proper. The remaining variants come from the storage port and the
/// ambient layers (config, serialization, migration) and are surfaced to
/// the caller rather than swallowed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GlossaryError {
    /// Sign-in credentials did not match the designated pair
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Lookup by identifier found nothing
    #[error("Entity not found: {entity_type} '{id}'")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },

    /// Another term already owns the slug
    #[error("Slug '{slug}' is already used by term '{existing_id}'")]
    DuplicateSlug { slug: String, existing_id: String },

    /// Storage port failure (quota, unavailable backend, ...)
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("IO error: {message}")]
    Io { message: String },

    #[error("Serialization error: {format} - {message}")]
    Serialization {
        format: String,
        message: String,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    /// A versioned record could not be brought to the current schema
    #[error("Migration error: {0}")]
    Migration(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl GlossaryError {
    pub fn not_found(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type,
            id: id.into(),
        }
    }

    pub fn duplicate_slug(slug: impl Into<String>, existing_id: impl Into<String>) -> Self {
        Self::DuplicateSlug {
            slug: slug.into(),
            existing_id: existing_id.into(),
        }
    }

    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage(message.into())
    }

    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    pub fn migration(message: impl Into<String>) -> Self {
        Self::Migration(message.into())
    }

    /// True for a rejected sign-in.
    pub fn is_invalid_credentials(&self) -> bool {
        matches!(self, Self::InvalidCredentials)
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    pub fn is_duplicate_slug(&self) -> bool {
        matches!(self, Self::DuplicateSlug { .. })
    }

    /// True when the storage port itself failed.
    pub fn is_storage(&self) -> bool {
        matches!(self, Self::Storage(_))
    }

    pub fn is_serialization(&self) -> bool {
        matches!(self, Self::Serialization { .. })
    }

    fn serialization(format: &str, err: impl std::fmt::Display) -> Self {
        Self::Serialization {
            format: format.to_string(),
            message: err.to_string(),
        }
    }
}

impl From<std::io::Error> for GlossaryError {
    fn from(err: std::io::Error) -> Self {
        Self::io(format!("{} (kind: {:?})", err, err.kind()))
    }
}

impl From<serde_json::Error> for GlossaryError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization("JSON", err)
    }
}

impl From<toml::de::Error> for GlossaryError {
    fn from(err: toml::de::Error) -> Self {
        Self::serialization("TOML", err)
    }
}

impl From<version_migrate::MigrationError> for GlossaryError {
    fn from(err: version_migrate::MigrationError) -> Self {
        use version_migrate::MigrationError;

        match err {
            MigrationError::DeserializationError(_) | MigrationError::SerializationError(_) => {
                Self::serialization("versioned record", err)
            }
            MigrationError::IoError { .. } => Self::io(err.to_string()),
            _ => Self::Migration(err.to_string()),
        }
    }
}

/// A type alias for `Result<T, GlossaryError>`.
pub type Result<T> = std::result::Result<T, GlossaryError>;
