//! Elasticsearch index mapping for benchmark documents.
//!
//! Identifiers (project, commit id, machine fields, names) are keywords so they
//! can be matched exactly; `datetime` is a date so hits can be sorted by it.

use elasticsearch::indices::IndicesCreateParts;
use serde_json::{Value, json};

use crate::error::{BackendError, StorageError, StorageResult};

use super::backend::{ElasticsearchConfig, ElasticsearchStorage};

/// Creates the index body for benchmark documents.
///
/// The configured document type name is recorded under `_meta.doc_type`.
pub fn create_index_mapping(config: &ElasticsearchConfig) -> Value {
    json!({
        "mappings": {
            "_meta": {
                "doc_type": config.doc_type
            },
            "properties": {
                "commit_info": {
                    "properties": {
                        "dirty": { "type": "boolean" },
                        "id": { "type": "keyword" },
                        "project": { "type": "keyword" }
                    }
                },
                "datetime": {
                    "type": "date",
                    "format": "strict_date_optional_time||epoch_millis"
                },
                "name": { "type": "keyword" },
                "fullname": { "type": "keyword" },
                "version": { "type": "keyword" },
                "machine_info": {
                    "properties": {
                        "machine": { "type": "keyword" },
                        "node": { "type": "keyword" },
                        "processor": { "type": "keyword" },
                        "python_build": { "type": "keyword" },
                        "python_compiler": { "type": "keyword" },
                        "python_implementation": { "type": "keyword" },
                        "python_implementation_version": { "type": "keyword" },
                        "python_version": { "type": "keyword" },
                        "release": { "type": "keyword" },
                        "system": { "type": "keyword" }
                    }
                },
                "options": {
                    "properties": {
                        "disable_gc": { "type": "boolean" },
                        "max_time": { "type": "double" },
                        "min_rounds": { "type": "long" },
                        "min_time": { "type": "double" },
                        "timer": { "type": "text" },
                        "warmup": { "type": "boolean" }
                    }
                },
                "stats": {
                    "properties": {
                        "hd15iqr": { "type": "double" },
                        "iqr": { "type": "double" },
                        "iqr_outliers": { "type": "long" },
                        "iterations": { "type": "long" },
                        "ld15iqr": { "type": "double" },
                        "max": { "type": "double" },
                        "mean": { "type": "double" },
                        "median": { "type": "double" },
                        "min": { "type": "double" },
                        "outliers": { "type": "text" },
                        "q1": { "type": "double" },
                        "q3": { "type": "double" },
                        "rounds": { "type": "long" },
                        "stddev": { "type": "double" },
                        "stddev_outliers": { "type": "long" }
                    }
                }
            }
        }
    })
}

/// Creates the benchmark index if it does not exist yet.
///
/// An index that already exists is left untouched, whatever its mapping.
pub async fn create_index(storage: &ElasticsearchStorage) -> StorageResult<()> {
    let index = storage.index();
    let mapping = create_index_mapping(storage.config());

    let response = storage
        .client()
        .indices()
        .create(IndicesCreateParts::Index(index))
        .body(mapping)
        .send()
        .await
        .map_err(|e| {
            StorageError::Backend(BackendError::Internal {
                backend_name: "elasticsearch".to_string(),
                message: format!("Failed to create index {}: {}", index, e),
                source: Some(Box::new(e)),
            })
        })?;

    let status = response.status_code();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        // 400 with "resource_already_exists_exception" is OK
        if body.contains("resource_already_exists_exception") {
            tracing::debug!(index = %index, "Elasticsearch index already exists");
            return Ok(());
        }
        return Err(StorageError::Backend(BackendError::Internal {
            backend_name: "elasticsearch".to_string(),
            message: format!(
                "Failed to create index {} (status {}): {}",
                index, status, body
            ),
            source: None,
        }));
    }

    tracing::info!(index = %index, "Created Elasticsearch index");
    Ok(())
}
