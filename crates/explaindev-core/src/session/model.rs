//! SessionRecord domain model.

use serde::{Deserialize, Serialize};

/// The locally simulated representation of a signed-in user.
///
/// At most one record is alive at a time. It is created by sign-in or
/// sign-up and destroyed by sign-out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionRecord {
    /// Opaque user identifier
    pub uid: String,
    pub email: String,
    /// Name shown in the header and recorded as the author of new terms
    pub display_name: String,
}

impl SessionRecord {
    pub fn new(
        uid: impl Into<String>,
        email: impl Into<String>,
        display_name: impl Into<String>,
    ) -> Self {
        Self {
            uid: uid.into(),
            email: email.into(),
            display_name: display_name.into(),
        }
    }
}
