//! Storage abstraction for saved YAML configurations
//!
//! This crate defines the [`ConfigurationStore`] interface the HTTP layer
//! depends on, and ships an in-memory implementation.
//!
//! # Quick Start
//!
//! ```no_run
//! use yamlgen_repository::{ConfigurationStore, InMemoryConfigurationStore};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = InMemoryConfigurationStore::new();
//!
//!     let saved = store.save("u1", "app1", "version: 1.0").await?;
//!     assert_eq!(saved.id, 1);
//!
//!     let mine = store.list_by_owner("u1").await?;
//!     assert_eq!(mine.len(), 1);
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌────────────────────────────────────────┐
//! │        HTTP handlers (server)          │
//! └──────────────┬─────────────────────────┘
//!                │ ConfigurationStore trait
//!                ↓
//! ┌────────────────────────────────────────┐
//! │ InMemoryConfigurationStore             │
//! │  - BTreeMap<id, Configuration>         │
//! │  - id counter under the same lock      │
//! └────────────────────────────────────────┘
//! ```

pub mod error;
pub mod memory;
pub mod models;
pub mod traits;

pub use error::{RepositoryError, RepositoryResult};
pub use memory::InMemoryConfigurationStore;
pub use models::Configuration;
pub use traits::ConfigurationStore;
