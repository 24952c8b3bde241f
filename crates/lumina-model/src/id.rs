//! Opaque entry identifiers.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque unique identifier for a résumé entry.
///
/// Ids are minted once when an entry is appended and never reused or
/// reassigned. Deserialization accepts any string, so ids produced by older
/// tooling (timestamp-based tokens) remain valid.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(String);

impl EntryId {
    /// Mint a fresh unique id.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for EntryId {
    fn default() -> Self {
        Self::generate()
    }
}

impl std::fmt::Display for EntryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EntryId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}
