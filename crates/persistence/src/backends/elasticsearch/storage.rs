//! BenchmarkStorage implementation for Elasticsearch.

use async_trait::async_trait;
use elasticsearch::{IndexParts, SearchParts};
use serde_json::Value;

use crate::core::BenchmarkStorage;
use crate::error::{BackendError, StorageError, StorageResult};
use crate::search::{RunEntry, benchmarks_from_hits, hits_from_response, runs_from_hits};
use crate::types::BenchmarkRecord;

use super::backend::ElasticsearchStorage;
use super::query_builder::build_search_body;

fn internal_error(message: String) -> StorageError {
    StorageError::Backend(BackendError::Internal {
        backend_name: "elasticsearch".to_string(),
        message,
        source: None,
    })
}

impl ElasticsearchStorage {
    /// Runs the project search and returns the raw hits, newest first.
    async fn search_hits(
        &self,
        project: &str,
        id_prefix: Option<&str>,
    ) -> StorageResult<Vec<Value>> {
        let index = self.index();
        let body = build_search_body(project, id_prefix);

        let response = self
            .client()
            .search(SearchParts::Index(&[index]))
            .body(body)
            .send()
            .await?;

        let status = response.status_code();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(StorageError::Backend(BackendError::QueryError {
                message: format!("Search in {} failed (status {}): {}", index, status, body),
            }));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| internal_error(format!("Failed to parse search response: {}", e)))?;

        let hits = hits_from_response(body)?;

        tracing::debug!(
            index = %index,
            project = %project,
            hits = hits.len(),
            "Searched benchmark documents"
        );

        Ok(hits)
    }
}

#[async_trait]
impl BenchmarkStorage for ElasticsearchStorage {
    fn backend_name(&self) -> &'static str {
        "elasticsearch"
    }

    fn location(&self) -> String {
        ElasticsearchStorage::location(self)
    }

    fn default_machine_id(&self) -> Option<&str> {
        self.config().default_machine_id.as_deref()
    }

    async fn save(&self, document: &Value, id: &str) -> StorageResult<()> {
        let index = self.index();

        let response = self
            .client()
            .index(IndexParts::IndexId(index, id))
            .body(document)
            .send()
            .await?;

        let status = response.status_code();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(internal_error(format!(
                "Failed to index document {} (status {}): {}",
                id, status, body
            )));
        }

        tracing::debug!(index = %index, id = %id, "Indexed benchmark document");
        Ok(())
    }

    async fn load(&self, project: &str, id_prefix: Option<&str>) -> StorageResult<Vec<RunEntry>> {
        let hits = self.search_hits(project, id_prefix).await?;
        runs_from_hits(&hits)
    }

    async fn load_benchmarks(&self, project: &str) -> StorageResult<Vec<BenchmarkRecord>> {
        let hits = self.search_hits(project, None).await?;
        benchmarks_from_hits(&hits)
    }
}
