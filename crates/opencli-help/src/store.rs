//! Read-only access to local resources (manifest, scripts, config).
//!
//! The engine only ever needs two questions answered about a path, so it
//! asks them through [`ResourceStore`] rather than touching `std::fs`
//! directly. Tests swap in an in-memory store.

use std::io;
use std::path::Path;

pub trait ResourceStore {
    /// Read the whole resource as UTF-8 text.
    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    fn exists(&self, path: &Path) -> bool;
}

/// The real file system.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl ResourceStore for LocalFs {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn exists(&self, path: &Path) -> bool {
        path.is_file()
    }
}
