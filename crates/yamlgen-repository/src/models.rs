//! Data models for the repository layer

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A named YAML document saved by one owner
///
/// The JSON form uses `userId` and `yaml` for the owner and document fields,
/// which is what web clients of the save/list endpoints read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Configuration {
    /// Store-assigned identifier, 1-based, never reused
    pub id: u64,

    /// Identifier of the authenticated owner
    #[serde(rename = "userId")]
    pub owner_id: String,

    /// Display name; not unique per owner
    pub name: String,

    /// The YAML document, stored verbatim
    #[serde(rename = "yaml")]
    pub yaml_text: String,

    /// When the store accepted the record
    pub created_at: DateTime<Utc>,
}

impl Configuration {
    /// Whether this record belongs to `owner_id` (exact match)
    pub fn is_owned_by(&self, owner_id: &str) -> bool {
        self.owner_id == owner_id
    }
}
