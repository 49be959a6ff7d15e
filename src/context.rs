//! Service context bundling all port trait objects.

use crate::adapters::live::{LiveEnvironment, LiveFileSystem};
use crate::ports::environment::Environment;
use crate::ports::filesystem::FileSystem;

/// Bundles all port trait objects into a single context.
///
/// Commands receive the context instead of touching the process directly,
/// so tests can swap in fixed environments and in-memory filesystems.
pub struct ServiceContext {
    /// Environment variables (release version).
    pub env: Box<dyn Environment>,
    /// Filesystem for writing `--output` files.
    pub fs: Box<dyn FileSystem>,
}

impl ServiceContext {
    /// Creates a live context backed by the process environment and real disk.
    #[must_use]
    pub fn live() -> Self {
        Self { env: Box::new(LiveEnvironment), fs: Box::new(LiveFileSystem) }
    }
}
