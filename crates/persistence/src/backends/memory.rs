//! In-memory storage backend.
//!
//! Keeps documents in a process-local map keyed by id and answers searches
//! the way the search index does: exact project match, optional id prefix,
//! newest first, at most [`MAX_SEARCH_RESULTS`] hits. Documents with equal
//! timestamps come back in the order their ids were first saved. Nothing is
//! persisted.

use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::RwLock;
use serde_json::{Value, json};

use crate::core::{Backend, BackendKind, BenchmarkStorage};
use crate::error::{BackendError, StorageResult};
use crate::search::{
    MAX_SEARCH_RESULTS, RunEntry, benchmarks_from_hits, parse_run_datetime, runs_from_hits,
};
use crate::types::BenchmarkRecord;

#[derive(Debug)]
struct StoredDocument {
    /// Position of the first save of this id.
    seq: u64,
    source: Value,
}

#[derive(Debug, Default)]
struct Documents {
    by_id: HashMap<String, StoredDocument>,
    next_seq: u64,
}

/// Benchmark storage held in memory.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    documents: RwLock<Documents>,
    default_machine_id: Option<String>,
}

impl MemoryStorage {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the machine id used to prefix document ids of saved runs.
    pub fn with_default_machine_id(mut self, machine_id: impl Into<String>) -> Self {
        self.default_machine_id = Some(machine_id.into());
        self
    }

    /// Returns the number of stored documents.
    pub fn len(&self) -> usize {
        self.documents.read().by_id.len()
    }

    /// Returns true if nothing has been saved.
    pub fn is_empty(&self) -> bool {
        self.documents.read().by_id.is_empty()
    }

    /// Returns the stored document with the given id.
    pub fn get(&self, id: &str) -> Option<Value> {
        self.documents
            .read()
            .by_id
            .get(id)
            .map(|doc| doc.source.clone())
    }

    /// Returns hits for `project` in search-engine shape, newest first.
    fn search(&self, project: &str, id_prefix: Option<&str>) -> Vec<Value> {
        let documents = self.documents.read();

        let mut matches: Vec<_> = documents
            .by_id
            .iter()
            .filter(|(_, doc)| {
                doc.source.pointer("/commit_info/project").and_then(|p| p.as_str())
                    == Some(project)
            })
            .filter(|(id, _)| match id_prefix {
                Some(prefix) if !prefix.is_empty() => id.starts_with(prefix),
                _ => true,
            })
            .map(|(id, doc)| {
                let at = doc
                    .source
                    .get("datetime")
                    .and_then(|d| d.as_str())
                    .and_then(|d| parse_run_datetime(d).ok());
                (at, doc.seq, id, &doc.source)
            })
            .collect();

        // Newest first, then save order; documents without a usable datetime go last.
        matches.sort_by(|a, b| b.0.cmp(&a.0).then(a.1.cmp(&b.1)));

        matches
            .into_iter()
            .take(MAX_SEARCH_RESULTS)
            .map(|(_, _, id, doc)| json!({ "_id": id, "_source": doc }))
            .collect()
    }
}

#[async_trait]
impl BenchmarkStorage for MemoryStorage {
    fn backend_name(&self) -> &'static str {
        "memory"
    }

    fn location(&self) -> String {
        "memory".to_string()
    }

    fn default_machine_id(&self) -> Option<&str> {
        self.default_machine_id.as_deref()
    }

    async fn save(&self, document: &Value, id: &str) -> StorageResult<()> {
        let mut documents = self.documents.write();
        let seq = match documents.by_id.get(id).map(|existing| existing.seq) {
            Some(seq) => seq,
            None => {
                documents.next_seq += 1;
                documents.next_seq
            }
        };
        documents.by_id.insert(
            id.to_string(),
            StoredDocument {
                seq,
                source: document.clone(),
            },
        );
        tracing::debug!(id = %id, "Stored document in memory");
        Ok(())
    }

    async fn load(&self, project: &str, id_prefix: Option<&str>) -> StorageResult<Vec<RunEntry>> {
        let hits = self.search(project, id_prefix);
        runs_from_hits(&hits)
    }

    async fn load_benchmarks(&self, project: &str) -> StorageResult<Vec<BenchmarkRecord>> {
        let hits = self.search(project, None);
        benchmarks_from_hits(&hits)
    }
}

#[async_trait]
impl Backend for MemoryStorage {
    fn kind(&self) -> BackendKind {
        BackendKind::Memory
    }

    fn name(&self) -> &'static str {
        "memory"
    }

    async fn health_check(&self) -> Result<(), BackendError> {
        Ok(())
    }

    async fn initialize(&self) -> Result<(), BackendError> {
        Ok(())
    }
}
