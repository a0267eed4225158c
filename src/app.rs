//! Application orchestrator.
//! Initializes logging, runs the extension search, reports the matches, and
//! drives the flattening copy when a destination was given.

use anyhow::{Result, bail};
use tracing::{debug, error, info};

use flac_gather::cli::Args;
use flac_gather::errors::GatherError;
use flac_gather::fs_ops::{CollisionPolicy, copy_flat, find_by_extension, normalize_extension};
use flac_gather::output as out;

use crate::logging::init_tracing;

/// Run the CLI application.
pub fn run(args: Args) -> Result<()> {
    // Validate --collision before logging init so bad flags fail fast.
    let policy = match args.collision.as_deref() {
        Some(s) => match CollisionPolicy::parse(s) {
            Some(p) => p,
            None => {
                out::print_error(&format!(
                    "invalid collision policy '{s}'; expected overwrite, skip or rename"
                ));
                bail!("invalid collision policy '{s}'");
            }
        },
        None => CollisionPolicy::default(),
    };

    let level = match args.effective_log_level() {
        Ok(level) => level,
        Err(msg) => {
            out::print_error(&format!("{msg}; expected quiet, normal, info or debug"));
            bail!(msg);
        }
    };

    // Guard must be held until exit so buffered file logs are flushed.
    let _guard = init_tracing(&level, args.log_file.as_deref(), args.json)?;

    debug!("Starting flac_gather: {:?}", args);

    let found = match find_by_extension(&args.source, &args.extension) {
        Ok(found) => found,
        Err(e) => {
            match &e {
                GatherError::PathNotFound(path) => {
                    error!(code = e.code(), kind = "path_not_found", path = %path.display(), "Search failed")
                }
                GatherError::NotADirectory(path) => {
                    error!(code = e.code(), kind = "not_a_directory", path = %path.display(), "Search failed")
                }
                _ => error!(code = e.code(), error = %e, "Search failed"),
            }
            out::print_error(&e.to_string());
            return Err(e.into());
        }
    };

    let ext = normalize_extension(&args.extension);
    if found.is_empty() {
        out::print_user(&format!(
            "No .{} files found under '{}'",
            ext,
            args.source.display()
        ));
        return Ok(());
    }

    out::print_info(&format!("Found {} .{} file(s):", found.len(), ext));
    for path in &found {
        out::print_user(&path.display().to_string());
    }
    info!(count = found.len(), root = %args.source.display(), "Search completed");

    // List-only mode when no destination was given.
    let Some(dest) = args.dest.as_deref() else {
        return Ok(());
    };

    let summary = match copy_flat(dest, &found, policy) {
        Ok(summary) => summary,
        Err(e) => {
            if let GatherError::DestinationUnavailable { path, source } = &e {
                error!(code = e.code(), kind = "destination_unavailable", path = %path.display(), error = %source, "Copy aborted");
            } else {
                error!(code = e.code(), error = %e, "Copy aborted");
            }
            out::print_error(&e.to_string());
            return Err(e.into());
        }
    };

    out::print_summary(&summary);
    info!(
        copied = summary.copied,
        skipped = summary.skipped,
        errors = summary.errors,
        dest = %dest.display(),
        "Copy completed"
    );

    if args.strict && summary.errors > 0 {
        bail!(
            "{} of {} file(s) failed to copy",
            summary.errors,
            found.len()
        );
    }
    Ok(())
}
