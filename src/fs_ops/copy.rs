//! Flattening copy into a single destination directory.
//!
//! Targets are `dest/<basename(source)>`, so subdirectory structure on the
//! source side is deliberately discarded. What happens when two sources
//! flatten to the same name is governed by `CollisionPolicy`.
//!
//! Per-item failures (permission denied, vanished source, disk full, ...)
//! are logged and counted but never abort the batch. Only failure to create
//! the destination directory itself aborts the whole operation.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use tracing::{debug, info, warn};

use super::meta;
use crate::errors::GatherError;

/// What to do when two sources flatten to the same destination name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CollisionPolicy {
    /// Later sources replace earlier copies (plain `cp` semantics).
    #[default]
    Overwrite,
    /// Keep the first copy; later collisions are counted as skipped.
    Skip,
    /// Keep both by giving the later copy a unique suffixed name.
    Rename,
}

impl CollisionPolicy {
    /// Parse common string names (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "overwrite" | "replace" => Some(CollisionPolicy::Overwrite),
            "skip" | "keep" => Some(CollisionPolicy::Skip),
            "rename" | "unique" => Some(CollisionPolicy::Rename),
            _ => None,
        }
    }
}

/// Tallies for one copy batch. `copied + skipped + errors` equals the number
/// of sources attempted; `skipped` stays 0 under the default policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CopySummary {
    pub copied: usize,
    pub skipped: usize,
    pub errors: usize,
}

/// Copy `sources` into `dest`, flattening directory structure.
///
/// An empty `sources` performs no I/O at all (the destination is not even
/// created) and reports zero counts. Otherwise `dest` and any missing
/// ancestors are created first; failure there is the only error that aborts
/// the batch.
pub fn copy_flat(
    dest: &Path,
    sources: &[PathBuf],
    policy: CollisionPolicy,
) -> Result<CopySummary, GatherError> {
    let mut summary = CopySummary::default();
    if sources.is_empty() {
        debug!(dest = %dest.display(), "no sources to copy; leaving the filesystem untouched");
        return Ok(summary);
    }

    fs::create_dir_all(dest).map_err(|e| GatherError::DestinationUnavailable {
        path: dest.to_path_buf(),
        source: e,
    })?;

    for src in sources {
        let Some(name) = src.file_name() else {
            warn!(src = %src.display(), "source has no file name; counting as an error");
            summary.errors += 1;
            continue;
        };

        let mut target = dest.join(name);
        if target.exists() {
            match policy {
                CollisionPolicy::Overwrite => {}
                CollisionPolicy::Skip => {
                    info!(src = %src.display(), target = %target.display(), "name already taken; skipping");
                    summary.skipped += 1;
                    continue;
                }
                CollisionPolicy::Rename => {
                    target = unique_target(&target);
                }
            }
        }

        match copy_one(src, &target) {
            Ok(bytes) => {
                info!(src = %src.display(), target = %target.display(), bytes, "copied");
                summary.copied += 1;
            }
            Err(e) => {
                warn!(src = %src.display(), target = %target.display(), error = %e, "copy failed; continuing with remaining files");
                summary.errors += 1;
            }
        }
    }

    Ok(summary)
}

/// Copy one file's content, then transfer timestamps/permissions best-effort.
fn copy_one(src: &Path, target: &Path) -> io::Result<u64> {
    let src_meta = fs::metadata(src)?;
    let bytes = fs::copy(src, target)?;
    meta::preserve_metadata(target, &src_meta);
    Ok(bytes)
}

/// Produce a unique target name when the candidate already exists.
/// Retries with an attempt counter so repeated collisions on the same name
/// within one millisecond still get distinct names.
fn unique_target(candidate: &Path) -> PathBuf {
    let epoch = SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or_default();

    let pid = std::process::id();
    let stem = candidate
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("file");
    let ext = candidate
        .extension()
        .and_then(|s| s.to_str())
        .map(|e| format!(".{}", e))
        .unwrap_or_default();

    let mut attempt: u32 = 0;
    loop {
        let new_name = if attempt == 0 {
            format!("{}-{}-{}{}", stem, epoch, pid, ext)
        } else {
            format!("{}-{}-{}-{}{}", stem, epoch, pid, attempt, ext)
        };
        let target = candidate.with_file_name(new_name);
        if !target.exists() {
            return target;
        }
        attempt += 1;
    }
}
