//! Core trait definition for configuration storage
//!
//! [`ConfigurationStore`] is the only seam between the HTTP layer and
//! storage. Swapping the in-memory map for a database means implementing
//! this trait; nothing upstream changes.

use async_trait::async_trait;

use crate::{Configuration, RepositoryResult};

/// Storage for saved configurations
///
/// # Contract
///
/// - `save` assigns ids that strictly increase across all owners and are
///   never reused, including under concurrent calls
/// - `save` rejects empty (or whitespace-only) YAML; it does not check name
///   uniqueness or re-parse the YAML
/// - `list_by_owner` returns exactly the owner's records, oldest first
///
/// # Thread Safety
///
/// All implementations must be `Send + Sync` for use across async tasks.
#[async_trait]
pub trait ConfigurationStore: Send + Sync {
    /// Append a new configuration and return the stored record
    ///
    /// # Arguments
    /// * `owner_id` - Identifier of the already-authenticated caller
    /// * `name` - Display name chosen by the caller
    /// * `yaml_text` - Document to store; must be non-empty
    async fn save(
        &self,
        owner_id: &str,
        name: &str,
        yaml_text: &str,
    ) -> RepositoryResult<Configuration>;

    /// List every configuration saved by `owner_id`, in save order
    ///
    /// Returns an empty vector for owners with nothing saved.
    async fn list_by_owner(&self, owner_id: &str) -> RepositoryResult<Vec<Configuration>>;
}
