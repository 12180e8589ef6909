//! # Output Sinks
//!
//! Destinations for generated files. Generators produce bytes; a sink
//! decides where they go, so nothing upstream touches the filesystem.

use crate::error::{SceneIoError, SceneIoResult};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Receives complete output files addressed by relative path.
pub trait OutputSink {
    /// Stores `contents` at `path`, replacing anything already there.
    fn write(&mut self, path: &Path, contents: &[u8]) -> SceneIoResult<()>;
}

/// Writes files below a root directory, creating missing directories.
///
/// # Example
///
/// ```rust,no_run
/// use scene_io::sink::{DirectorySink, OutputSink};
/// use std::path::Path;
///
/// let mut sink = DirectorySink::new(".");
/// sink.write(Path::new("scenes/dense/out.csv"), b"x0\n")?;
/// # Ok::<(), scene_io::SceneIoError>(())
/// ```
#[derive(Debug, Clone)]
pub struct DirectorySink {
    root: PathBuf,
}

impl DirectorySink {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Absolute or root-relative location of `path`.
    pub fn resolve(&self, path: &Path) -> PathBuf {
        self.root.join(path)
    }
}

impl OutputSink for DirectorySink {
    fn write(&mut self, path: &Path, contents: &[u8]) -> SceneIoResult<()> {
        let target = self.resolve(path);
        let write_error = |source| SceneIoError::Write {
            path: target.clone(),
            source,
        };

        if let Some(parent) = target.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(write_error)?;
        }
        fs::write(&target, contents).map_err(write_error)?;
        log::debug!("Wrote {} bytes to {}", contents.len(), target.display());
        Ok(())
    }
}

/// Keeps written files in memory.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    files: BTreeMap<PathBuf, Vec<u8>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Contents written to `path`, if any.
    pub fn get(&self, path: &Path) -> Option<&[u8]> {
        self.files.get(path).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

impl OutputSink for MemorySink {
    fn write(&mut self, path: &Path, contents: &[u8]) -> SceneIoResult<()> {
        self.files.insert(path.to_path_buf(), contents.to_vec());
        Ok(())
    }
}
