//! Parsing of raw search hits.

use serde_json::Value;

use crate::error::{BackendError, SearchError, StorageError, StorageResult};
use crate::types::{BenchmarkDocument, BenchmarkRecord};

/// Takes the `hits.hits` array out of a search response body.
///
/// A successful response without that array is a query error, not an empty
/// result.
pub fn hits_from_response(mut body: Value) -> StorageResult<Vec<Value>> {
    match body.pointer_mut("/hits/hits").map(Value::take) {
        Some(Value::Array(hits)) => Ok(hits),
        _ => Err(StorageError::Backend(BackendError::QueryError {
            message: "Search response has no hits.hits array".to_string(),
        })),
    }
}

/// Parses hits into documents, keeping the engine's order.
pub fn documents_from_hits(hits: &[Value]) -> StorageResult<Vec<BenchmarkDocument>> {
    hits.iter().map(document_from_hit).collect()
}

/// Parses hits into bare benchmark records, keeping the engine's order.
pub fn benchmarks_from_hits(hits: &[Value]) -> StorageResult<Vec<BenchmarkRecord>> {
    hits.iter()
        .map(|hit| document_from_hit(hit).map(|doc| doc.benchmark))
        .collect()
}

fn document_from_hit(hit: &Value) -> StorageResult<BenchmarkDocument> {
    let id = hit.get("_id").and_then(|v| v.as_str()).unwrap_or_default();

    let source = hit
        .get("_source")
        .cloned()
        .ok_or_else(|| SearchError::MalformedHit {
            id: id.to_string(),
            message: "hit has no _source".to_string(),
        })?;

    Ok(BenchmarkDocument::from_source(id, source)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn hit(id: &str, name: &str) -> Value {
        json!({
            "_id": id,
            "_source": {
                "machine_info": {"node": "ci-01"},
                "commit_info": {"id": "abc123", "project": "demo", "dirty": false},
                "datetime": "2020-01-01T00:00:00.000000",
                "version": "3.2.3",
                "group": "sorting",
                "name": name,
                "fullname": format!("tests/test_sort.py::{name}"),
                "param": null,
                "params": null,
                "stats": {
                    "min": 1.0, "max": 1.0, "mean": 1.0, "stddev": 0.0, "rounds": 1,
                    "median": 1.0, "iqr": 0.0, "q1": 1.0, "q3": 1.0, "iqr_outliers": 0,
                    "stddev_outliers": 0, "outliers": "0;0", "ld15iqr": 1.0, "hd15iqr": 1.0,
                    "iterations": 1
                },
                "options": {
                    "disable_gc": true, "timer": "perf_counter", "min_rounds": 1,
                    "max_time": 1.0, "min_time": 0.1, "warmup": false
                }
            }
        })
    }

    #[test]
    fn test_benchmarks_keep_hit_order() {
        let hits = vec![hit("a", "test_b"), hit("b", "test_a")];
        let names: Vec<_> = benchmarks_from_hits(&hits)
            .unwrap()
            .into_iter()
            .map(|b| b.name)
            .collect();
        assert_eq!(names, vec!["test_b", "test_a"]);
    }

    #[test]
    fn test_hits_from_response() {
        let body = json!({"took": 1, "hits": {"total": {"value": 2}, "hits": [
            hit("a", "test_a"),
            hit("b", "test_b"),
        ]}});
        let hits = hits_from_response(body).unwrap();
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[1]["_id"], "b");

        let empty = json!({"hits": {"total": {"value": 0}, "hits": []}});
        assert!(hits_from_response(empty).unwrap().is_empty());
    }

    #[test]
    fn test_response_without_hits_is_query_error() {
        for body in [
            json!({"acknowledged": true}),
            json!({"hits": {"total": {"value": 0}}}),
            json!({"hits": {"hits": "nope"}}),
        ] {
            let err = hits_from_response(body).unwrap_err();
            assert!(matches!(
                err,
                StorageError::Backend(BackendError::QueryError { .. })
            ));
        }
    }

    #[test]
    fn test_hit_without_source() {
        let hits = vec![json!({"_id": "lonely"})];
        let err = documents_from_hits(&hits).unwrap_err();
        assert!(matches!(
            err,
            StorageError::Search(SearchError::MalformedHit { ref id, .. }) if id == "lonely"
        ));
    }
}
