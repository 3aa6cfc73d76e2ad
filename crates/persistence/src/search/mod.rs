//! Reshaping of flat search results into benchmark runs.
//!
//! The index holds one document per benchmark. Every backend answers a
//! project search with a list of hits in the engine's wire shape
//! (`{"_id": ..., "_source": {...}}`), newest first, capped at
//! [`MAX_SEARCH_RESULTS`]. This module turns that list into:
//!
//! - [`hits`] - typed [`BenchmarkDocument`](crate::types::BenchmarkDocument)s
//! - [`grouping`] - runs keyed by `{commit_id}_{datetime}`, oldest first

pub mod grouping;
pub mod hits;

pub use grouping::{
    RUN_DATETIME_FORMAT, RunEntry, group_by_commit_and_time, parse_run_datetime, runs_from_hits,
    sort_by_datetime,
};
pub use hits::{benchmarks_from_hits, documents_from_hits, hits_from_response};

/// Maximum number of hits requested per search. There is no pagination, so
/// anything past this is silently dropped.
pub const MAX_SEARCH_RESULTS: usize = 1000;

/// Field the engine sorts hits by.
pub const DATETIME_FIELD: &str = "datetime";

/// Field holding the project a document is filed under.
pub const PROJECT_FIELD: &str = "commit_info.project";
