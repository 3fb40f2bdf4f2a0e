//! In-memory configuration store
//!
//! Records live in a `BTreeMap` keyed by id. Ids are assigned monotonically,
//! so key order is insertion order and owner-scoped listings come out oldest
//! first without extra bookkeeping. The counter and the map sit behind one
//! lock: a save is a single critical section.

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::{Configuration, ConfigurationStore, RepositoryError, RepositoryResult};

#[derive(Debug)]
struct StoreState {
    next_id: u64,
    records: BTreeMap<u64, Configuration>,
}

/// Process-local [`ConfigurationStore`]; contents are lost on restart
#[derive(Debug)]
pub struct InMemoryConfigurationStore {
    state: RwLock<StoreState>,
}

impl InMemoryConfigurationStore {
    pub fn new() -> Self {
        Self {
            state: RwLock::new(StoreState {
                next_id: 1,
                records: BTreeMap::new(),
            }),
        }
    }

    /// Total number of stored records across all owners
    pub async fn len(&self) -> usize {
        self.state.read().await.records.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.state.read().await.records.is_empty()
    }
}

impl Default for InMemoryConfigurationStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ConfigurationStore for InMemoryConfigurationStore {
    async fn save(
        &self,
        owner_id: &str,
        name: &str,
        yaml_text: &str,
    ) -> RepositoryResult<Configuration> {
        if yaml_text.trim().is_empty() {
            return Err(RepositoryError::InvalidRecord(
                "yaml must not be empty".to_string(),
            ));
        }

        let mut state = self.state.write().await;
        let id = state.next_id;
        state.next_id = id
            .checked_add(1)
            .ok_or_else(|| RepositoryError::Storage("configuration id space exhausted".to_string()))?;

        let record = Configuration {
            id,
            owner_id: owner_id.to_string(),
            name: name.to_string(),
            yaml_text: yaml_text.to_string(),
            created_at: Utc::now(),
        };
        state.records.insert(id, record.clone());

        #[cfg(feature = "tracing")]
        tracing::debug!(id, owner = owner_id, name, "Saved configuration");

        Ok(record)
    }

    async fn list_by_owner(&self, owner_id: &str) -> RepositoryResult<Vec<Configuration>> {
        let state = self.state.read().await;
        Ok(state
            .records
            .values()
            .filter(|record| record.is_owned_by(owner_id))
            .cloned()
            .collect())
    }
}
