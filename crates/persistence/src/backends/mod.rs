//! Storage backend implementations.
//!
//! # Available Backends
//!
//! | Backend | Feature | Description |
//! |---------|---------|-------------|
//! | Memory | always | Process-local store with the same search semantics, for tests |
//! | Elasticsearch | `elasticsearch` (default) | Search engine index, one document per benchmark |
//!
//! # Example
//!
//! ```no_run
//! # #[cfg(feature = "elasticsearch")]
//! use benchstore_persistence::backends::elasticsearch::{
//!     ElasticsearchConfig, ElasticsearchStorage,
//! };
//!
//! # #[cfg(feature = "elasticsearch")]
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ElasticsearchConfig {
//!     hosts: vec!["http://localhost:9200".to_string()],
//!     index: "benchmarks".to_string(),
//!     ..Default::default()
//! };
//!
//! // Builds the client and makes sure the index exists
//! let storage = ElasticsearchStorage::connect(config).await?;
//! # Ok(())
//! # }
//! ```

pub mod memory;

#[cfg(feature = "elasticsearch")]
pub mod elasticsearch;
