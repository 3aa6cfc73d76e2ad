//! Subcommand implementations.
//!
//! Each command works against any [`BenchmarkStorage`] and writes its output
//! to the given writer, so the same code drives the real cluster and tests.

use std::io::Write;
use std::path::Path;

use anyhow::Context;
use benchstore_persistence::core::{Backend, BenchmarkStorage};
use benchstore_persistence::types::RunRecord;
use serde::Serialize;
use tracing::info;

/// A loaded run as printed by `show`.
#[derive(Debug, Serialize)]
struct RunOutput<'a> {
    key: &'a str,
    #[serde(flatten)]
    run: &'a RunRecord,
}

/// Provisions the index.
pub async fn init<S: Backend + ?Sized>(storage: &S, out: &mut impl Write) -> anyhow::Result<()> {
    storage.initialize().await?;
    writeln!(out, "Index ready ({})", storage.name())?;
    Ok(())
}

/// Checks that the backend is reachable and healthy.
pub async fn health<S: Backend + ?Sized>(storage: &S, out: &mut impl Write) -> anyhow::Result<()> {
    storage.health_check().await?;
    writeln!(out, "{}: ok", storage.kind())?;
    Ok(())
}

/// Returns the save name for a run file: the explicit name, or the file stem.
pub fn save_name(file: &Path, name: Option<&str>) -> anyhow::Result<String> {
    match name {
        Some(name) if !name.is_empty() => Ok(name.to_string()),
        _ => file
            .file_stem()
            .and_then(|s| s.to_str())
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .with_context(|| format!("Cannot derive a save name from {}", file.display())),
    }
}

/// Reads a run file and saves it, one document per benchmark.
pub async fn save<S: BenchmarkStorage + ?Sized>(
    storage: &S,
    file: &Path,
    name: Option<&str>,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let save_name = save_name(file, name)?;
    let contents = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;
    let run: RunRecord = serde_json::from_str(&contents)
        .with_context(|| format!("{} is not a benchmark run file", file.display()))?;

    if run.benchmarks.is_empty() {
        tracing::warn!(file = %file.display(), "Run file contains no benchmarks");
    }

    let ids = storage.save_run(&run, &save_name).await?;
    info!(
        run = %run.key(),
        project = %run.project(),
        documents = ids.len(),
        "Saved run"
    );
    for id in &ids {
        writeln!(out, "{}", id)?;
    }
    Ok(())
}

/// Prints the run keys of a project, oldest first.
pub async fn list<S: BenchmarkStorage + ?Sized>(
    storage: &S,
    project: &str,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    for key in storage.query(project).await? {
        writeln!(out, "{}", key)?;
    }
    Ok(())
}

/// Prints the runs of a project as a JSON array, oldest first.
pub async fn show<S: BenchmarkStorage + ?Sized>(
    storage: &S,
    project: &str,
    id_prefix: Option<&str>,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let runs = storage.load(project, id_prefix).await?;
    let output: Vec<_> = runs
        .iter()
        .map(|(key, run)| RunOutput { key, run })
        .collect();
    serde_json::to_writer_pretty(&mut *out, &output)?;
    writeln!(out)?;
    Ok(())
}

/// Prints every benchmark of a project as a JSON array, newest first.
pub async fn benchmarks<S: BenchmarkStorage + ?Sized>(
    storage: &S,
    project: &str,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let benchmarks = storage.load_benchmarks(project).await?;
    serde_json::to_writer_pretty(&mut *out, &benchmarks)?;
    writeln!(out)?;
    Ok(())
}
