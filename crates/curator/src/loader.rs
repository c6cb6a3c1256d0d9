//! Reading candidate pools, benchmark tables and configuration from disk.

use curator_core::Candidate;
use curator_error::{CuratorResult, InputError};
use curator_selection::{BenchmarkRecord, CuratorConfig};
use std::path::Path;
use tracing::{debug, instrument};

fn read(path: &Path) -> CuratorResult<String> {
    std::fs::read_to_string(path).map_err(|e| InputError::read(path, &e).into())
}

/// Load a JSON array of candidates and validate each one.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed, or a candidate
/// violates its invariants.
#[instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn load_candidates(path: impl AsRef<Path>) -> CuratorResult<Vec<Candidate>> {
    let path = path.as_ref();
    let contents = read(path)?;
    let candidates: Vec<Candidate> =
        serde_json::from_str(&contents).map_err(|e| InputError::parse(path, &e))?;
    for candidate in &candidates {
        candidate.validate()?;
    }
    debug!(count = candidates.len(), "Loaded candidates");
    Ok(candidates)
}

/// Load a JSON array of benchmark records.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
#[instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn load_benchmarks(path: impl AsRef<Path>) -> CuratorResult<Vec<BenchmarkRecord>> {
    let path = path.as_ref();
    let contents = read(path)?;
    let records: Vec<BenchmarkRecord> =
        serde_json::from_str(&contents).map_err(|e| InputError::parse(path, &e))?;
    debug!(count = records.len(), "Loaded benchmark records");
    Ok(records)
}

/// Load a single file when given, otherwise the layered configuration.
pub fn load_config(path: Option<&Path>) -> CuratorResult<CuratorConfig> {
    match path {
        Some(path) => CuratorConfig::from_file(path),
        None => CuratorConfig::load(),
    }
}
