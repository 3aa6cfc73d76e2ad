//! Backend abstraction for storage engines.
//!
//! This module defines the [`Backend`] trait, which covers the lifecycle side
//! of a storage engine (provisioning and health) as opposed to the data
//! operations in [`BenchmarkStorage`](super::BenchmarkStorage).

use std::fmt::Debug;

use async_trait::async_trait;

use crate::error::BackendError;

/// Identifies the type of storage backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BackendKind {
    /// Process-local store, mainly for tests.
    Memory,
    /// Elasticsearch (search engine).
    Elasticsearch,
}

impl std::fmt::Display for BackendKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BackendKind::Memory => write!(f, "memory"),
            BackendKind::Elasticsearch => write!(f, "elasticsearch"),
        }
    }
}

/// A storage engine that benchmark documents can be written to.
///
/// # Example
///
/// ```ignore
/// use benchstore_persistence::core::Backend;
///
/// backend.initialize().await?;
/// backend.health_check().await?;
/// println!("using {}", backend.kind());
/// ```
#[async_trait]
pub trait Backend: Send + Sync + Debug {
    /// Returns the kind of backend.
    fn kind(&self) -> BackendKind;

    /// Returns a human-readable name for this backend.
    fn name(&self) -> &'static str;

    /// Checks if the backend is healthy and accepting requests.
    async fn health_check(&self) -> Result<(), BackendError>;

    /// Provisions the storage container (index, table, ...) if needed.
    ///
    /// Must be idempotent: calling it against an already provisioned backend
    /// succeeds.
    async fn initialize(&self) -> Result<(), BackendError>;
}
