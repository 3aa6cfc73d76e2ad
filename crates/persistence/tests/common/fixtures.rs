//! Test fixtures for persistence layer testing.
//!
//! Builders for benchmark runs shaped like the JSON the benchmark harness
//! writes.

use serde_json::{Map, Value, json};

use benchstore_persistence::core::BenchmarkStorage;
use benchstore_persistence::types::{BenchmarkRecord, RunRecord};

/// Default project used by fixtures.
pub const PROJECT: &str = "demo";

/// Builds a benchmark with plausible statistics around `mean`.
pub fn benchmark(name: &str, mean: f64) -> BenchmarkRecord {
    serde_json::from_value(json!({
        "group": null,
        "name": name,
        "fullname": format!("tests/test_perf.py::{}", name),
        "param": null,
        "params": null,
        "extra_info": {},
        "stats": {
            "min": mean * 0.9, "max": mean * 1.1, "mean": mean, "stddev": mean * 0.05,
            "rounds": 10, "median": mean, "iqr": mean * 0.04, "q1": mean * 0.98,
            "q3": mean * 1.02, "iqr_outliers": 0, "stddev_outliers": 1, "outliers": "1;0",
            "ld15iqr": mean * 0.9, "hd15iqr": mean * 1.1, "iterations": 1,
            "ops": 1.0 / mean, "total": mean * 10.0
        },
        "options": {
            "disable_gc": false, "timer": "perf_counter", "min_rounds": 5,
            "max_time": 1.0, "min_time": 0.000005, "warmup": false
        }
    }))
    .expect("Invalid benchmark fixture")
}

/// Builds a parametrized benchmark, e.g. `test_sort[100]`.
pub fn parametrized_benchmark(base: &str, size: u64, mean: f64) -> BenchmarkRecord {
    let mut record = benchmark(&format!("{}[{}]", base, size), mean);
    record.group = Some(base.to_string());
    record.param = Some(size.to_string());
    let mut params = Map::new();
    params.insert("size".to_string(), json!(size));
    record.params = Some(params);
    record
}

/// A benchmark run fixture for testing.
#[derive(Debug, Clone)]
pub struct RunFixture {
    /// Commit id.
    pub commit_id: String,
    /// Project name.
    pub project: String,
    /// Run timestamp.
    pub datetime: String,
    /// Host name recorded in machine info.
    pub node: String,
    /// Benchmarks in the run.
    pub benchmarks: Vec<BenchmarkRecord>,
}

impl RunFixture {
    /// Creates a run of project [`PROJECT`] with a single benchmark.
    pub fn new(commit_id: impl Into<String>, datetime: impl Into<String>) -> Self {
        Self {
            commit_id: commit_id.into(),
            project: PROJECT.to_string(),
            datetime: datetime.into(),
            node: "ci-01".to_string(),
            benchmarks: vec![benchmark("test_sum", 0.001)],
        }
    }

    /// Sets the project.
    pub fn with_project(mut self, project: impl Into<String>) -> Self {
        self.project = project.into();
        self
    }

    /// Sets the host name.
    pub fn with_node(mut self, node: impl Into<String>) -> Self {
        self.node = node.into();
        self
    }

    /// Replaces the benchmarks.
    pub fn with_benchmarks(mut self, benchmarks: Vec<BenchmarkRecord>) -> Self {
        self.benchmarks = benchmarks;
        self
    }

    /// Returns the key the run is expected to load under.
    pub fn key(&self) -> String {
        format!("{}_{}", self.commit_id, self.datetime)
    }

    /// Builds the run record.
    pub fn build(&self) -> RunRecord {
        serde_json::from_value(json!({
            "machine_info": {
                "node": self.node,
                "processor": "x86_64",
                "machine": "x86_64",
                "python_compiler": "GCC 12.2.0",
                "python_implementation": "CPython",
                "python_implementation_version": "3.12.1",
                "python_version": "3.12.1",
                "python_build": ["main", "Jan  1 2024 00:00:00"],
                "release": "6.1.0",
                "system": "Linux",
                "cpu": {"brand_raw": "Test CPU", "count": 4}
            },
            "commit_info": {
                "id": self.commit_id,
                "project": self.project,
                "dirty": false,
                "time": null,
                "author_time": null,
                "branch": "main"
            },
            "datetime": self.datetime,
            "version": "4.0.0",
            "benchmarks": self.benchmarks,
        }))
        .expect("Invalid run fixture")
    }

    /// Saves the run through `storage`, one document per benchmark.
    pub async fn save<S>(&self, storage: &S, save_name: &str) -> Vec<String>
    where
        S: BenchmarkStorage + ?Sized,
    {
        storage
            .save_run(&self.build(), save_name)
            .await
            .expect("Failed to save run")
    }
}

/// Builds a raw benchmark document as stored by the harness.
pub fn raw_document(commit_id: &str, project: &str, datetime: &str, name: &str) -> Value {
    json!({
        "machine_info": {"node": "ci-01", "system": "Linux"},
        "commit_info": {"id": commit_id, "project": project, "dirty": false},
        "datetime": datetime,
        "version": "4.0.0",
        "group": null,
        "name": name,
        "fullname": format!("tests/test_perf.py::{}", name),
        "param": null,
        "params": null,
        "stats": {
            "min": 0.001, "max": 0.002, "mean": 0.0015, "stddev": 0.0001, "rounds": 10,
            "median": 0.0015, "iqr": 0.0002, "q1": 0.0014, "q3": 0.0016, "iqr_outliers": 0,
            "stddev_outliers": 1, "outliers": "1;0", "ld15iqr": 0.001, "hd15iqr": 0.002,
            "iterations": 1
        },
        "options": {
            "disable_gc": false, "timer": "perf_counter", "min_rounds": 5,
            "max_time": 1.0, "min_time": 0.000005, "warmup": false
        }
    })
}
