//! Core library for `flac_gather`.
//!
//! Two operations, composed linearly: a recursive extension search and a
//! flattening copy into a single destination directory. Everything runs
//! synchronously on the calling thread; the only state is the counters
//! accumulated during one copy batch.

pub mod cli;
pub mod errors;
pub mod fs_ops;
pub mod output;

pub use cli::LogLevel;
pub use errors::GatherError;
pub use fs_ops::{CollisionPolicy, CopySummary, copy_flat, find_by_extension};
