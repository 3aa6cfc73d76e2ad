//! Core storage traits and abstractions.
//!
//! - [`Backend`] - Storage engine lifecycle (provisioning, health)
//! - [`BenchmarkStorage`] - Saving and loading benchmark runs
//!
//! Concrete engines implement both; see [`crate::backends`].

mod backend;
mod storage;

pub use backend::{Backend, BackendKind};
pub use storage::BenchmarkStorage;
