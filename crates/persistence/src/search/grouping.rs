//! Grouping benchmark documents into runs and ordering runs by time.

use std::collections::HashMap;

use chrono::NaiveDateTime;
use serde_json::Value;

use crate::error::{SearchError, StorageResult};
use crate::types::{BenchmarkDocument, RunRecord};

use super::hits::documents_from_hits;

/// Format of the `datetime` field written by the benchmark harness.
///
/// The fractional part is optional so that timestamps taken on a whole
/// second (which the harness writes without microseconds) still parse.
pub const RUN_DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// A run together with its key.
pub type RunEntry = (String, RunRecord);

/// Parses a run timestamp.
pub fn parse_run_datetime(value: &str) -> Result<NaiveDateTime, chrono::ParseError> {
    NaiveDateTime::parse_from_str(value, RUN_DATETIME_FORMAT)
}

/// Groups documents by `{commit_id}_{datetime}`.
///
/// Runs appear in the order their first document was seen, and benchmarks
/// keep the order of the documents. Two different runs that share a commit
/// id and a timestamp cannot be told apart and end up in one run; a warning
/// is logged when the documents being merged disagree on machine or version.
pub fn group_by_commit_and_time(
    documents: impl IntoIterator<Item = BenchmarkDocument>,
) -> Vec<RunEntry> {
    let mut runs: Vec<RunEntry> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();

    for doc in documents {
        let key = doc.run_key();
        match positions.get(&key) {
            Some(&pos) => {
                let run = &mut runs[pos].1;
                if !doc.same_run_info(run) {
                    tracing::warn!(
                        key = %key,
                        benchmark = %doc.benchmark.fullname,
                        "Benchmark merged into a run with different machine or version info; \
                         two runs share the same commit id and timestamp"
                    );
                }
                run.benchmarks.push(doc.benchmark);
            }
            None => {
                positions.insert(key.clone(), runs.len());
                runs.push((key, doc.into_run()));
            }
        }
    }

    runs
}

/// Sorts runs oldest first by their parsed `datetime`.
///
/// The sort is stable: runs with equal timestamps keep their relative order.
/// Any timestamp that does not parse fails the whole sort.
pub fn sort_by_datetime(runs: Vec<RunEntry>) -> Result<Vec<RunEntry>, SearchError> {
    let mut keyed = runs
        .into_iter()
        .map(|(key, run)| match parse_run_datetime(&run.datetime) {
            Ok(at) => Ok((at, key, run)),
            Err(e) => Err(SearchError::InvalidTimestamp {
                value: run.datetime.clone(),
                key,
                message: e.to_string(),
            }),
        })
        .collect::<Result<Vec<_>, _>>()?;

    keyed.sort_by_key(|(at, _, _)| *at);

    Ok(keyed.into_iter().map(|(_, key, run)| (key, run)).collect())
}

/// Parses, groups and sorts a list of search hits.
pub fn runs_from_hits(hits: &[Value]) -> StorageResult<Vec<RunEntry>> {
    let documents = documents_from_hits(hits)?;
    let runs = group_by_commit_and_time(documents);
    tracing::debug!(hits = hits.len(), runs = runs.len(), "Grouped search hits");
    Ok(sort_by_datetime(runs)?)
}
