//! Report storage primitive.
//!
//! Reports are persisted through a [`ReportStorage`] held by the fit context,
//! so callers can redirect writes (e.g. to memory in tests). Writes replace
//! the whole destination.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

/// Whole-file write primitive.
pub trait ReportStorage: Send + Sync {
    /// Write `text` to `path`, replacing any previous content.
    fn write(&self, path: &Path, text: &str) -> io::Result<()>;
}

/// Writes UTF-8 text to the filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileStorage;

impl ReportStorage for FileStorage {
    fn write(&self, path: &Path, text: &str) -> io::Result<()> {
        fs::write(path, text)
    }
}

/// Keeps written reports in memory, keyed by path.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    files: Mutex<HashMap<PathBuf, String>>,
}

impl MemoryStorage {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Content last written to `path`.
    pub fn read(&self, path: &Path) -> Option<String> {
        self.files
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(path)
            .cloned()
    }
}

impl ReportStorage for MemoryStorage {
    fn write(&self, path: &Path, text: &str) -> io::Result<()> {
        self.files
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(path.to_path_buf(), text.to_string());
        Ok(())
    }
}
