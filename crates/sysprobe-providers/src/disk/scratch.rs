//! Self-removing scratch paths
//!
//! Benchmarks leave nothing behind, including when they fail halfway.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::constants::BENCH_FILE_EXTENSION;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScratchKind {
    Dir,
    File,
}

/// A scratch directory or file removed on [`ScratchPath::remove`] or drop
#[derive(Debug)]
pub struct ScratchPath {
    path: PathBuf,
    kind: ScratchKind,
    removed: bool,
}

impl ScratchPath {
    /// Create a fresh scratch directory under `parent`
    ///
    /// The name is `prefix` plus a random suffix, so concurrent runs in the
    /// same parent never share a directory.
    pub fn create_dir_in(parent: &Path, prefix: &str) -> io::Result<Self> {
        let dir = tempfile::Builder::new().prefix(prefix).tempdir_in(parent)?;
        Ok(Self {
            path: dir.keep(),
            kind: ScratchKind::Dir,
            removed: false,
        })
    }

    /// Create a fresh scratch file under `parent` and return its open handle
    pub fn create_file_in(parent: &Path, prefix: &str) -> io::Result<(Self, fs::File)> {
        let (file, path) = tempfile::Builder::new()
            .prefix(prefix)
            .tempfile_in(parent)?
            .keep()?;
        Ok((
            Self {
                path,
                kind: ScratchKind::File,
                removed: false,
            },
            file,
        ))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Path of the `index`-th benchmark file inside a scratch directory
    pub fn bench_file(&self, index: u32) -> PathBuf {
        self.path.join(format!("{index}.{BENCH_FILE_EXTENSION}"))
    }

    /// Remove the scratch path, reporting failures
    pub fn remove(mut self) -> io::Result<()> {
        self.removed = true;
        remove_path(&self.path, self.kind)
    }
}

impl Drop for ScratchPath {
    fn drop(&mut self) {
        if self.removed {
            return;
        }
        if let Err(e) = remove_path(&self.path, self.kind) {
            warn!(path = %self.path.display(), error = %e, "Failed to remove scratch path");
        }
    }
}

fn remove_path(path: &Path, kind: ScratchKind) -> io::Result<()> {
    let result = match kind {
        ScratchKind::Dir => fs::remove_dir_all(path),
        ScratchKind::File => fs::remove_file(path),
    };
    match result {
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        other => other,
    }
}
