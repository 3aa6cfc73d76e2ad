//! Assertion helpers for loaded runs.

use chrono::NaiveDateTime;

use benchstore_persistence::search::{RunEntry, parse_run_datetime};
use benchstore_persistence::types::RunRecord;

/// Asserts that runs are ordered oldest first.
pub fn assert_sorted_oldest_first(runs: &[RunEntry]) {
    let times: Vec<NaiveDateTime> = runs
        .iter()
        .map(|(key, run)| {
            parse_run_datetime(&run.datetime)
                .unwrap_or_else(|e| panic!("run {} has bad datetime: {}", key, e))
        })
        .collect();

    for pair in times.windows(2) {
        assert!(
            pair[0] <= pair[1],
            "Runs not sorted oldest first: {} after {}",
            pair[1],
            pair[0]
        );
    }
}

/// Asserts that every run is stored under `{commit_id}_{datetime}`.
pub fn assert_keys_match_runs(runs: &[RunEntry]) {
    for (key, run) in runs {
        assert_eq!(
            key,
            &format!("{}_{}", run.commit_info.id, run.datetime),
            "Run key mismatch"
        );
    }
}

/// Asserts that a loaded run has the same run info and benchmarks as `expected`,
/// ignoring benchmark order.
pub fn assert_same_run(loaded: &RunRecord, expected: &RunRecord) {
    assert_eq!(loaded.machine_info, expected.machine_info, "machine_info mismatch");
    assert_eq!(loaded.commit_info, expected.commit_info, "commit_info mismatch");
    assert_eq!(loaded.datetime, expected.datetime, "datetime mismatch");
    assert_eq!(loaded.version, expected.version, "version mismatch");

    let mut loaded_benchmarks = loaded.benchmarks.clone();
    let mut expected_benchmarks = expected.benchmarks.clone();
    loaded_benchmarks.sort_by(|a, b| a.fullname.cmp(&b.fullname));
    expected_benchmarks.sort_by(|a, b| a.fullname.cmp(&b.fullname));
    assert_eq!(loaded_benchmarks, expected_benchmarks, "benchmarks mismatch");
}
