//! Core benchmark storage trait.
//!
//! This module defines the [`BenchmarkStorage`] trait: saving benchmark
//! documents and reading them back grouped into runs.

use async_trait::async_trait;
use serde_json::Value;

use crate::error::StorageResult;
use crate::search::RunEntry;
use crate::types::{BenchmarkRecord, RunRecord};

/// Storage for benchmark runs.
///
/// Documents are stored flat, one per benchmark. Reads issue a single search
/// for a project and regroup the hits into runs keyed by
/// `{commit_id}_{datetime}`, oldest run first.
///
/// # Example
///
/// ```
/// use benchstore_persistence::backends::memory::MemoryStorage;
/// use benchstore_persistence::core::BenchmarkStorage;
/// use benchstore_persistence::types::RunRecord;
/// use serde_json::json;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let storage = MemoryStorage::new();
///
/// let run: RunRecord = serde_json::from_value(json!({
///     "machine_info": {"node": "ci-01"},
///     "commit_info": {"id": "abc123", "project": "demo", "dirty": false},
///     "datetime": "2020-01-01T00:00:00.000000",
///     "version": "3.2.3",
///     "benchmarks": []
/// }))
/// .unwrap();
///
/// storage.save_run(&run, "0001").await.unwrap();
/// assert!(storage.query("demo").await.unwrap().is_empty());
/// # }
/// ```
#[async_trait]
pub trait BenchmarkStorage: Send + Sync {
    /// Returns a human-readable name for this storage backend.
    fn backend_name(&self) -> &'static str;

    /// Returns where documents are stored, safe for display.
    fn location(&self) -> String;

    /// Machine id prepended to document ids by [`save_run`](Self::save_run).
    fn default_machine_id(&self) -> Option<&str> {
        None
    }

    /// Writes `document` verbatim under `id`.
    ///
    /// Saving an existing id replaces the document.
    ///
    /// # Errors
    ///
    /// * `StorageError::Backend` - Whatever the engine reported; not retried
    async fn save(&self, document: &Value, id: &str) -> StorageResult<()>;

    /// Loads the runs of `project`, oldest first.
    ///
    /// When `id_prefix` is given and non-empty, only documents whose id starts
    /// with it are considered. At most
    /// [`MAX_SEARCH_RESULTS`](crate::search::MAX_SEARCH_RESULTS) benchmark
    /// documents are read.
    ///
    /// # Errors
    ///
    /// * `StorageError::Backend` - The search failed
    /// * `StorageError::Search(InvalidTimestamp)` - A stored `datetime` does not parse
    /// * `StorageError::Search(MalformedHit)` - A document lacks required fields
    async fn load(&self, project: &str, id_prefix: Option<&str>) -> StorageResult<Vec<RunEntry>>;

    /// Returns the run keys of `project`, oldest first.
    async fn query(&self, project: &str) -> StorageResult<Vec<String>> {
        Ok(self
            .load(project, None)
            .await?
            .into_iter()
            .map(|(key, _)| key)
            .collect())
    }

    /// Returns every benchmark of `project` ungrouped, in the engine's order
    /// (newest first).
    async fn load_benchmarks(&self, project: &str) -> StorageResult<Vec<BenchmarkRecord>>;

    /// Saves a run as one document per benchmark and returns the ids used.
    ///
    /// Ids are `{save_name}_{fullname}`, prefixed with `{machine_id}_` when a
    /// default machine id is configured.
    async fn save_run(&self, run: &RunRecord, save_name: &str) -> StorageResult<Vec<String>> {
        let prefix = match self.default_machine_id() {
            Some(machine_id) => format!("{}_{}", machine_id, save_name),
            None => save_name.to_string(),
        };

        let mut ids = Vec::with_capacity(run.benchmarks.len());
        for document in run.documents() {
            let id = format!("{}_{}", prefix, document.benchmark.fullname);
            self.save(&serde_json::to_value(&document)?, &id).await?;
            ids.push(id);
        }

        tracing::info!(
            location = %self.location(),
            run = %run.key(),
            documents = ids.len(),
            "Saved benchmark data"
        );

        Ok(ids)
    }
}
