//! Benchmark run persistence layer.
//!
//! This crate stores the results of benchmark runs in a document search engine
//! and reads them back grouped by run. A run is one execution of a benchmark
//! suite: machine info, commit info, a timestamp, a tool version and the
//! benchmarks it measured.
//!
//! # Features
//!
//! - **Flat storage**: one document per benchmark, carrying the run metadata
//! - **Run regrouping**: hits are grouped by `{commit_id}_{datetime}` and sorted oldest first
//! - **Project scoping**: every read selects a single project, optionally narrowed by id prefix
//!
//! # Backend Features
//!
//! ```toml
//! [dependencies]
//! benchstore-persistence = { version = "0.1", features = ["elasticsearch"] }
//! ```
//!
//! Available backend features:
//! - `elasticsearch` (default) - Elasticsearch index storage
//!
//! The in-memory backend is always available.
//!
//! # Architecture
//!
//! - [`types`] - Run, benchmark and document types
//! - [`error`] - Error types for all operations
//! - [`core`] - Storage traits
//! - [`search`] - Turning search hits back into runs
//! - [`backends`] - Backend implementations
//!
//! # Quick Start
//!
//! ```
//! use benchstore_persistence::backends::memory::MemoryStorage;
//! use benchstore_persistence::core::BenchmarkStorage;
//! use serde_json::json;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), benchstore_persistence::StorageError> {
//! let storage = MemoryStorage::new();
//!
//! for name in ["test_a", "test_b"] {
//!     let document = json!({
//!         "machine_info": {"node": "ci-01"},
//!         "commit_info": {"id": "abc123", "project": "demo", "dirty": false},
//!         "datetime": "2020-01-01T00:00:00.000000",
//!         "version": "3.2.3",
//!         "group": null,
//!         "name": name,
//!         "fullname": format!("tests/test_demo.py::{name}"),
//!         "param": null,
//!         "params": null,
//!         "stats": {
//!             "min": 0.1, "max": 0.2, "mean": 0.15, "stddev": 0.01, "rounds": 10,
//!             "median": 0.15, "iqr": 0.02, "q1": 0.14, "q3": 0.16, "iqr_outliers": 0,
//!             "stddev_outliers": 1, "outliers": "1;0", "ld15iqr": 0.1, "hd15iqr": 0.2,
//!             "iterations": 1
//!         },
//!         "options": {
//!             "disable_gc": false, "timer": "perf_counter", "min_rounds": 5,
//!             "max_time": 1.0, "min_time": 0.000005, "warmup": false
//!         }
//!     });
//!     storage.save(&document, &format!("0001_{name}")).await?;
//! }
//!
//! let runs = storage.load("demo", None).await?;
//! assert_eq!(runs.len(), 1);
//! assert_eq!(runs[0].0, "abc123_2020-01-01T00:00:00.000000");
//! assert_eq!(runs[0].1.benchmarks.len(), 2);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod backends;
pub mod core;
pub mod error;
pub mod search;
pub mod types;

// Re-export commonly used types at crate root
pub use error::{BackendError, SearchError, StorageError, StorageResult};
pub use types::{BenchmarkDocument, BenchmarkRecord, RunRecord};

// Re-export core traits
pub use core::{Backend, BackendKind, BenchmarkStorage};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name.
pub const NAME: &str = env!("CARGO_PKG_NAME");
