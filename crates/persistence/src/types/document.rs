//! The flat per-benchmark document stored in the search index.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::SearchError;

use super::run::{BenchmarkRecord, CommitInfo, MachineInfo, RunRecord, run_key};

/// A single benchmark together with the run-level fields of the run it
/// belongs to.
///
/// The index stores one of these per benchmark, so a run of N benchmarks
/// becomes N documents that share `machine_info`, `commit_info`, `datetime`
/// and `version`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[allow(missing_docs)]
pub struct BenchmarkDocument {
    pub machine_info: MachineInfo,
    pub commit_info: CommitInfo,
    pub datetime: String,
    pub version: String,
    /// Benchmark fields, stored at the top level of the document.
    #[serde(flatten)]
    pub benchmark: BenchmarkRecord,
}

impl BenchmarkDocument {
    /// Rebuilds a document from the `_source` of a search hit.
    pub fn from_source(id: &str, source: Value) -> Result<Self, SearchError> {
        serde_json::from_value(source).map_err(|e| SearchError::MalformedHit {
            id: id.to_string(),
            message: e.to_string(),
        })
    }

    /// Returns the key of the run this document belongs to.
    pub fn run_key(&self) -> String {
        run_key(&self.commit_info.id, &self.datetime)
    }

    /// Returns true if `run` carries the same run-level fields.
    pub fn same_run_info(&self, run: &RunRecord) -> bool {
        self.machine_info == run.machine_info
            && self.commit_info == run.commit_info
            && self.datetime == run.datetime
            && self.version == run.version
    }

    /// Splits the document into a run holding only this benchmark.
    pub fn into_run(self) -> RunRecord {
        RunRecord {
            machine_info: self.machine_info,
            commit_info: self.commit_info,
            datetime: self.datetime,
            version: self.version,
            benchmarks: vec![self.benchmark],
        }
    }
}

impl RunRecord {
    /// Flattens the run into one document per benchmark, in benchmark order.
    pub fn documents(&self) -> impl Iterator<Item = BenchmarkDocument> + '_ {
        self.benchmarks.iter().map(|benchmark| BenchmarkDocument {
            machine_info: self.machine_info.clone(),
            commit_info: self.commit_info.clone(),
            datetime: self.datetime.clone(),
            version: self.version.clone(),
            benchmark: benchmark.clone(),
        })
    }
}
