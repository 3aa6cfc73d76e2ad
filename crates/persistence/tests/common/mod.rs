//! Test infrastructure for the persistence layer.
//!
//! Fixtures for building benchmark runs and assertions shared by the backend
//! test suites.

#![allow(dead_code)]

pub mod assertions;
pub mod fixtures;

// Re-export commonly used items
pub use assertions::*;
pub use fixtures::*;
