//! Filesystem primitives that differ between Unix and Windows.

pub mod permissions;
pub mod symlink;
