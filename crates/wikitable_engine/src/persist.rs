use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("output directory {path} missing or not writable: {message}")]
    OutputDir { path: PathBuf, message: String },
    #[error("could not write file {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// A directory that CSV files are written into.
#[derive(Debug, Clone)]
pub struct OutputDir {
    dir: PathBuf,
}

impl OutputDir {
    /// Creates the directory if missing and probes it for writability.
    pub fn create(dir: impl Into<PathBuf>) -> Result<Self, PersistError> {
        let dir = dir.into();
        let fail = |message: String| PersistError::OutputDir {
            path: dir.clone(),
            message,
        };

        if dir.exists() {
            let meta = fs::metadata(&dir).map_err(|e| fail(e.to_string()))?;
            if !meta.is_dir() {
                return Err(fail("path is not a directory".into()));
            }
        } else {
            fs::create_dir_all(&dir).map_err(|e| fail(e.to_string()))?;
        }
        NamedTempFile::new_in(&dir).map_err(|e| fail(e.to_string()))?;

        Ok(Self { dir })
    }

    pub fn path(&self) -> &Path {
        &self.dir
    }

    /// Writes `{dir}/{filename}` through a temp file and rename, so a failed
    /// write never leaves a truncated file behind. Existing files are replaced.
    pub fn write(&self, filename: &str, contents: &[u8]) -> Result<PathBuf, PersistError> {
        let target = self.dir.join(filename);
        let fail = |source: io::Error| PersistError::Write {
            path: target.clone(),
            source,
        };

        let mut tmp = NamedTempFile::new_in(&self.dir).map_err(fail)?;
        tmp.write_all(contents).map_err(fail)?;
        tmp.flush().map_err(fail)?;
        tmp.as_file_mut().sync_all().map_err(fail)?;

        if target.exists() {
            fs::remove_file(&target).map_err(fail)?;
        }
        tmp.persist(&target).map_err(|e| fail(e.error))?;
        Ok(target)
    }
}
