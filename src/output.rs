//! Destinations for generated files

use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use thiserror::Error;

/// Errors that can occur when writing generated files
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("failed to prepare output directory {path}: {source}")]
    PrepareDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid output directory pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Where generated files go
pub trait FileSink {
    /// Create `dir` if needed and remove the files directly inside it,
    /// except those listed in `keep`
    fn prepare_dir(&mut self, dir: &Path, keep: &HashSet<PathBuf>) -> Result<(), OutputError>;

    /// Current content of `path`, or `None` if it cannot be read
    fn read(&self, path: &Path) -> Option<String>;

    fn write(&mut self, path: &Path, content: &str) -> Result<(), OutputError>;
}

/// Writes to the local filesystem
#[derive(Debug, Clone, Copy, Default)]
pub struct FsSink;

impl FileSink for FsSink {
    fn prepare_dir(&mut self, dir: &Path, keep: &HashSet<PathBuf>) -> Result<(), OutputError> {
        fs::create_dir_all(dir).map_err(|source| OutputError::PrepareDir {
            path: dir.to_path_buf(),
            source,
        })?;

        let pattern = Path::new(&glob::Pattern::escape(&dir.to_string_lossy())).join("*");
        for entry in glob::glob(&pattern.to_string_lossy())? {
            let path = match entry {
                Ok(path) => path,
                Err(err) => {
                    debug!(path:? = err.path(); "Skipping unreadable entry");
                    continue;
                }
            };
            if !path.is_file() || keep.contains(&path) {
                continue;
            }
            fs::remove_file(&path).map_err(|source| OutputError::PrepareDir {
                path: path.clone(),
                source,
            })?;
            debug!(path:? = path; "Removed stale file");
        }
        Ok(())
    }

    fn read(&self, path: &Path) -> Option<String> {
        match fs::read_to_string(path) {
            Ok(content) => Some(content),
            Err(err) => {
                debug!(path:? = path, error:% = err; "No existing content");
                None
            }
        }
    }

    fn write(&mut self, path: &Path, content: &str) -> Result<(), OutputError> {
        fs::write(path, content).map_err(|source| OutputError::Write {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Keeps files in memory; useful for dry runs and tests
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    files: BTreeMap<PathBuf, String>,
    writes: usize,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, path: impl AsRef<Path>) -> Option<&str> {
        self.files.get(path.as_ref()).map(String::as_str)
    }

    /// All stored paths in sorted order
    pub fn paths(&self) -> impl Iterator<Item = &Path> {
        self.files.keys().map(PathBuf::as_path)
    }

    /// Number of writes performed since creation
    pub fn writes(&self) -> usize {
        self.writes
    }

    /// Seed a file as if it already existed
    pub fn insert(&mut self, path: impl Into<PathBuf>, content: impl Into<String>) {
        self.files.insert(path.into(), content.into());
    }
}

impl FileSink for MemorySink {
    fn prepare_dir(&mut self, dir: &Path, keep: &HashSet<PathBuf>) -> Result<(), OutputError> {
        self.files
            .retain(|path, _| path.parent() != Some(dir) || keep.contains(path));
        Ok(())
    }

    fn read(&self, path: &Path) -> Option<String> {
        self.files.get(path).cloned()
    }

    fn write(&mut self, path: &Path, content: &str) -> Result<(), OutputError> {
        self.files.insert(path.to_path_buf(), content.to_string());
        self.writes += 1;
        Ok(())
    }
}
