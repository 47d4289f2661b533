//! Fixture file numbering.
//!
//! Fixtures are named `test_<N>.conf`. A new fixture takes the lowest number
//! not already present in the target directory, so gaps left by deleted
//! files are filled before the sequence grows.
//!
//! The default [`AllocationMode::Scan`] reads the directory once and writes
//! afterwards; two processes racing on the same directory can pick the same
//! name. [`AllocationMode::Exclusive`] instead creates candidates with
//! `create_new` until one succeeds.

use crate::error::{GenerateError, Result};
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

const PREFIX: &str = "test_";
const SUFFIX: &str = ".conf";

/// How a fixture file name is chosen and claimed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AllocationMode {
    /// Scan the directory, pick the lowest gap, then write.
    #[default]
    Scan,
    /// Claim `test_1.conf`, `test_2.conf`, ... with exclusive create.
    Exclusive,
}

/// The file name for fixture number `n`.
pub fn fixture_name(n: u64) -> String {
    format!("{PREFIX}{n}{SUFFIX}")
}

/// Extract `N` from a name of exactly the form `test_<digits>.conf`.
///
/// Numbers too large for a `u64` are treated as non-matching.
pub fn parse_fixture_number(file_name: &str) -> Option<u64> {
    let digits = file_name.strip_prefix(PREFIX)?.strip_suffix(SUFFIX)?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

/// The lowest fixture number missing from `existing`.
///
/// Walks the sorted numbers against `1, 2, 3, ...` and stops at the first
/// mismatch; if there is none, the next number after the run is returned.
pub fn lowest_free(mut existing: Vec<u64>) -> u64 {
    existing.sort_unstable();
    for (expected, found) in (1u64..).zip(&existing) {
        if *found != expected {
            return expected;
        }
    }
    existing.len() as u64 + 1
}

/// Collect the fixture numbers of regular files in `dir`.
pub fn existing_numbers(dir: &Path) -> Result<Vec<u64>> {
    let entries = fs::read_dir(dir).map_err(|e| GenerateError::io(dir, e))?;
    let mut numbers = Vec::new();

    for entry in entries {
        let entry = entry.map_err(|e| GenerateError::io(dir, e))?;
        let Some(n) = entry.file_name().to_str().and_then(parse_fixture_number) else {
            continue;
        };
        // Follows symlinks, so a link to a regular file counts.
        if fs::metadata(entry.path()).is_ok_and(|m| m.is_file()) {
            numbers.push(n);
        }
    }
    Ok(numbers)
}

/// Pick the next free fixture name in `dir` without creating it.
pub fn next_fixture_name(dir: &Path) -> Result<String> {
    let numbers = existing_numbers(dir)?;
    let name = fixture_name(lowest_free(numbers));
    debug!(dir = %dir.display(), %name, "allocated fixture name");
    Ok(name)
}

/// Write `contents` to a newly allocated fixture file in `dir`.
///
/// Returns the path written.
pub fn write_fixture(dir: &Path, contents: &str, mode: AllocationMode) -> Result<PathBuf> {
    match mode {
        AllocationMode::Scan => {
            let path = dir.join(next_fixture_name(dir)?);
            fs::write(&path, contents).map_err(|e| GenerateError::io(&path, e))?;
            Ok(path)
        }
        AllocationMode::Exclusive => claim_exclusive(dir, contents),
    }
}

fn claim_exclusive(dir: &Path, contents: &str) -> Result<PathBuf> {
    for n in 1u64.. {
        let path = dir.join(fixture_name(n));
        let file = match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::AlreadyExists => continue,
            Err(e) => return Err(GenerateError::io(&path, e)),
        };
        debug!(path = %path.display(), "claimed fixture file");
        fill_claimed(&path, file, contents)?;
        return Ok(path);
    }
    Err(GenerateError::io(
        dir,
        std::io::Error::other("fixture numbers exhausted"),
    ))
}

/// Write `contents` into a freshly claimed file, removing the file again if
/// the write fails so its number is not left taken by an empty fixture.
fn fill_claimed(path: &Path, mut out: impl Write, contents: &str) -> Result<()> {
    if let Err(e) = out.write_all(contents.as_bytes()).and_then(|()| out.flush()) {
        if let Err(cleanup) = fs::remove_file(path) {
            warn!(path = %path.display(), error = %cleanup, "failed to remove partial fixture");
        }
        return Err(GenerateError::io(path, e));
    }
    Ok(())
}
