//! Filesystem operations: recursive search and flattening copy.

mod copy;
mod find;
mod meta;

pub use copy::{CollisionPolicy, CopySummary, copy_flat};
pub use find::{find_by_extension, normalize_extension};
