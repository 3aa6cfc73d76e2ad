//! Elasticsearch backend implementation.
//!
//! Runs are stored flat: every benchmark of a run becomes one document that
//! repeats the run's machine info, commit info, timestamp and version. Reads
//! issue a single search per project (at most 1000 hits, newest first) and
//! regroup the hits into runs.
//!
//! # Index Structure
//!
//! All documents live in one index (default `benchmarks`). The mapping is
//! created on first use; an index that already exists is reused as is.
//!
//! # Example
//!
//! ```ignore
//! use benchstore_persistence::backends::elasticsearch::{
//!     ElasticsearchConfig, ElasticsearchStorage,
//! };
//! use benchstore_persistence::core::Backend;
//!
//! let config = ElasticsearchConfig {
//!     hosts: vec!["http://localhost:9200".to_string()],
//!     default_machine_id: Some("ci-01".to_string()),
//!     ..Default::default()
//! };
//! let storage = ElasticsearchStorage::new(config)?;
//! storage.initialize().await?;
//! ```

mod backend;
mod query_builder;
mod schema;
mod storage;

pub use backend::{ElasticsearchAuth, ElasticsearchConfig, ElasticsearchStorage, mask_host};
pub use query_builder::build_search_body;
pub use schema::create_index_mapping;
