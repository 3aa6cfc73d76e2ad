//! Benchmark run types.
//!
//! Field names follow the JSON written by the benchmark harness, which is also
//! the field layout of the search index. Stored documents are not validated on
//! save, so the nested objects (`machine_info`, `commit_info`, `stats`,
//! `options`) keep the stored JSON object as is and expose typed accessors on
//! top of it. A document with missing, extra, null or oddly typed fields still
//! loads, and saving it again writes the same JSON back.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Builds the key that identifies a run: `{commit_id}_{datetime}`.
pub fn run_key(commit_id: &str, datetime: &str) -> String {
    format!("{}_{}", commit_id, datetime)
}

/// Shared constructors and raw access for types wrapping a JSON object.
macro_rules! json_object {
    ($name:ident) => {
        impl $name {
            /// Returns the raw value of `key`.
            pub fn get(&self, key: &str) -> Option<&Value> {
                self.fields.get(key)
            }

            /// Sets `key`, replacing any previous value.
            pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
                self.fields.insert(key.into(), value.into());
            }

            /// Builder form of [`insert`](Self::insert).
            pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
                self.insert(key, value);
                self
            }

            /// Returns the stored fields.
            pub fn as_map(&self) -> &Map<String, Value> {
                &self.fields
            }
        }
    };
    ($name:ident, transparent) => {
        json_object!($name);

        impl From<Map<String, Value>> for $name {
            fn from(fields: Map<String, Value>) -> Self {
                Self { fields }
            }
        }
    };
}

/// Typed getters over the wrapped object; absent or mistyped values read as `None`.
macro_rules! accessors {
    ($($(#[$doc:meta])* $field:ident: $as:ident -> $ty:ty;)*) => {
        $(
            $(#[$doc])*
            pub fn $field(&self) -> Option<$ty> {
                self.fields.get(stringify!($field)).and_then(Value::$as)
            }
        )*
    };
}

/// Host and interpreter information for the machine that produced a run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MachineInfo {
    fields: Map<String, Value>,
}

json_object!(MachineInfo, transparent);

impl MachineInfo {
    accessors! {
        /// Network name of the host.
        node: as_str -> &str;
        /// Processor description.
        processor: as_str -> &str;
        /// Machine type (e.g. `x86_64`).
        machine: as_str -> &str;
        /// Compiler the interpreter was built with.
        python_compiler: as_str -> &str;
        /// Interpreter implementation (e.g. `CPython`).
        python_implementation: as_str -> &str;
        /// Version of the interpreter implementation.
        python_implementation_version: as_str -> &str;
        /// Language version.
        python_version: as_str -> &str;
        /// Operating system release.
        release: as_str -> &str;
        /// Operating system name.
        system: as_str -> &str;
    }

    /// Build number and date of the interpreter.
    ///
    /// The harness writes a list; the index maps the field as a single
    /// keyword, so a plain string is accepted too.
    pub fn python_build(&self) -> Vec<&str> {
        match self.fields.get("python_build") {
            Some(Value::String(build)) => vec![build.as_str()],
            Some(Value::Array(parts)) => parts.iter().filter_map(Value::as_str).collect(),
            _ => Vec::new(),
        }
    }
}

/// Version control information for the code under benchmark.
///
/// `id` and `project` are required: runs are keyed and filtered by them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CommitInfo {
    /// Commit identifier.
    pub id: String,

    /// Project the run is filed under.
    pub project: String,

    #[serde(flatten)]
    fields: Map<String, Value>,
}

json_object!(CommitInfo);

impl CommitInfo {
    /// Creates commit info with no further fields.
    pub fn new(id: impl Into<String>, project: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            project: project.into(),
            fields: Map::new(),
        }
    }

    /// Whether the working tree had uncommitted changes.
    pub fn dirty(&self) -> bool {
        self.fields
            .get("dirty")
            .and_then(Value::as_bool)
            .unwrap_or(false)
    }

    accessors! {
        /// Commit timestamp.
        time: as_str -> &str;
        /// Author timestamp.
        author_time: as_str -> &str;
        /// Branch the commit was on.
        branch: as_str -> &str;
    }
}

/// Timing statistics for one benchmark, in seconds.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BenchmarkStats {
    fields: Map<String, Value>,
}

json_object!(BenchmarkStats, transparent);

impl BenchmarkStats {
    accessors! {
        /// Fastest round.
        min: as_f64 -> f64;
        /// Slowest round.
        max: as_f64 -> f64;
        /// Mean round time.
        mean: as_f64 -> f64;
        /// Standard deviation of round times.
        stddev: as_f64 -> f64;
        /// Median round time.
        median: as_f64 -> f64;
        /// First quartile.
        q1: as_f64 -> f64;
        /// Third quartile.
        q3: as_f64 -> f64;
        /// Interquartile range.
        iqr: as_f64 -> f64;
        /// Lowest datum within 1.5 IQR of the first quartile.
        ld15iqr: as_f64 -> f64;
        /// Highest datum within 1.5 IQR of the third quartile.
        hd15iqr: as_f64 -> f64;
        /// Operations per second.
        ops: as_f64 -> f64;
        /// Sum of all round timings.
        total: as_f64 -> f64;
        /// Number of rounds.
        rounds: as_u64 -> u64;
        /// Iterations per round.
        iterations: as_u64 -> u64;
        /// Rounds outside 1.5 IQR.
        iqr_outliers: as_u64 -> u64;
        /// Rounds more than one standard deviation from the mean.
        stddev_outliers: as_u64 -> u64;
        /// Outlier counts formatted as `"{stddev};{iqr}"`.
        outliers: as_str -> &str;
    }

    /// Raw round timings, only present when the harness was asked to keep them.
    pub fn data(&self) -> Option<Vec<f64>> {
        self.fields
            .get("data")
            .and_then(Value::as_array)
            .map(|rounds| rounds.iter().filter_map(Value::as_f64).collect())
    }
}

/// Options the benchmark was configured with.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BenchmarkOptions {
    fields: Map<String, Value>,
}

json_object!(BenchmarkOptions, transparent);

impl BenchmarkOptions {
    accessors! {
        /// Whether garbage collection was disabled while timing.
        disable_gc: as_bool -> bool;
        /// Name of the timer function.
        timer: as_str -> &str;
        /// Minimum number of rounds.
        min_rounds: as_u64 -> u64;
        /// Time budget per benchmark.
        max_time: as_f64 -> f64;
        /// Minimum duration of a single round.
        min_time: as_f64 -> f64;
        /// Whether warmup rounds were run.
        warmup: as_bool -> bool;
    }
}

/// One measured function within a run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkRecord {
    /// Benchmark group, if one was assigned.
    #[serde(default)]
    pub group: Option<String>,

    /// Benchmark function name, including the parametrization suffix.
    pub name: String,

    /// Fully qualified name, unique within a run.
    pub fullname: String,

    /// Parametrization id.
    #[serde(default)]
    pub param: Option<String>,

    /// Parameter values by name.
    #[serde(default)]
    pub params: Option<Map<String, Value>>,

    /// Timing statistics.
    pub stats: BenchmarkStats,

    /// Options the benchmark ran with.
    pub options: BenchmarkOptions,

    /// Any other fields (e.g. `extra_info`), kept as stored.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One execution of a benchmark suite.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RunRecord {
    /// Machine the run was produced on.
    pub machine_info: MachineInfo,

    /// Commit the run measured.
    pub commit_info: CommitInfo,

    /// Run timestamp, `%Y-%m-%dT%H:%M:%S.%f`.
    pub datetime: String,

    /// Version of the harness that produced the run.
    pub version: String,

    /// Benchmarks measured in the run.
    #[serde(default)]
    pub benchmarks: Vec<BenchmarkRecord>,
}

impl RunRecord {
    /// Returns the key identifying this run.
    pub fn key(&self) -> String {
        run_key(&self.commit_info.id, &self.datetime)
    }

    /// Returns the project this run is filed under.
    pub fn project(&self) -> &str {
        &self.commit_info.project
    }
}
