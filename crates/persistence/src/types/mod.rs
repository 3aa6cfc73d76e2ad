//! Core types for the persistence layer.
//!
//! - [`RunRecord`] - One execution of a benchmark suite with its benchmarks
//! - [`BenchmarkRecord`] - One measured function within a run
//! - [`BenchmarkDocument`] - The flat unit persisted per benchmark
//!
//! # Example
//!
//! ```
//! use benchstore_persistence::types::{run_key, RunRecord};
//! use serde_json::json;
//!
//! let run: RunRecord = serde_json::from_value(json!({
//!     "machine_info": {"node": "ci-01", "system": "Linux"},
//!     "commit_info": {"id": "abc123", "project": "demo", "dirty": false},
//!     "datetime": "2020-01-01T00:00:00.000000",
//!     "version": "3.2.3",
//!     "benchmarks": []
//! }))
//! .unwrap();
//!
//! assert_eq!(run.key(), "abc123_2020-01-01T00:00:00.000000");
//! assert_eq!(run.key(), run_key("abc123", "2020-01-01T00:00:00.000000"));
//! assert_eq!(run.machine_info.node(), Some("ci-01"));
//! assert_eq!(run.machine_info.python_version(), None);
//! ```

mod document;
mod run;

pub use document::BenchmarkDocument;
pub use run::{
    BenchmarkOptions, BenchmarkRecord, BenchmarkStats, CommitInfo, MachineInfo, RunRecord,
    run_key,
};
