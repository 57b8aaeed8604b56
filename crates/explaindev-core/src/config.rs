//! Configuration model for the glossary stores.
//!
//! Every section is defaulted so an empty (or missing) `config.toml` is a
//! valid configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct GlossaryConfig {
    pub storage: StorageSettings,
    pub latency: LatencySettings,
    pub auth: AuthSettings,
    pub terms: TermSettings,
}

/// Where durable state lives.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct StorageSettings {
    /// Directory for the key/value files. `None` resolves to the platform
    /// data directory.
    pub dir: Option<PathBuf>,
}

/// Simulated latency applied before each store operation takes effect.
///
/// All values are milliseconds and default to zero.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct LatencySettings {
    pub sign_in_ms: u64,
    pub sign_up_ms: u64,
    pub sign_out_ms: u64,
    pub term_mutation_ms: u64,
}

impl LatencySettings {
    /// Latencies of the hosted browser demo.
    pub fn simulated() -> Self {
        Self {
            sign_in_ms: 1000,
            sign_up_ms: 1000,
            sign_out_ms: 500,
            term_mutation_ms: 500,
        }
    }

    pub fn sign_in(&self) -> Duration {
        Duration::from_millis(self.sign_in_ms)
    }

    pub fn sign_up(&self) -> Duration {
        Duration::from_millis(self.sign_up_ms)
    }

    pub fn sign_out(&self) -> Duration {
        Duration::from_millis(self.sign_out_ms)
    }

    pub fn term_mutation(&self) -> Duration {
        Duration::from_millis(self.term_mutation_ms)
    }
}

/// The single credential pair accepted by the mocked sign-in.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct AuthSettings {
    pub email: String,
    pub password: String,
    /// Identifier given to the session created by a successful sign-in
    pub uid: String,
    pub display_name: String,
}

impl Default for AuthSettings {
    fn default() -> Self {
        Self {
            email: "demo@example.com".to_string(),
            password: "password".to_string(),
            uid: "1".to_string(),
            display_name: "Demo User".to_string(),
        }
    }
}

impl AuthSettings {
    pub fn matches(&self, email: &str, password: &str) -> bool {
        self.email == email && self.password == password
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct TermSettings {
    /// Reject writes that would give two terms the same slug
    pub enforce_unique_slugs: bool,
}

impl Default for TermSettings {
    fn default() -> Self {
        Self {
            enforce_unique_slugs: true,
        }
    }
}
