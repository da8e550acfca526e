//! Filesystem abstractions used for loading diagnostics and persisting reports.

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{A11yReportError, Result};

/// Abstraction over filesystem access for testability.
#[cfg_attr(test, mockall::automock)]
pub trait FileSystem {
    /// Read a file into a string.
    ///
    /// Failures surface as [`A11yReportError::InputUnavailable`].
    fn read_to_string(&self, path: &Path) -> Result<String>;
    /// Replace `path` with `contents` so readers never see a partial file.
    fn write_atomic(&self, path: &Path, contents: &str) -> Result<()>;
}

/// Default filesystem implementation backed by `std::fs`.
#[derive(Debug, Default, Clone)]
pub struct StdFileSystem;

impl StdFileSystem {
    /// Create a new standard filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for StdFileSystem {
    fn read_to_string(&self, path: &Path) -> Result<String> {
        std::fs::read_to_string(path).map_err(|err| A11yReportError::unavailable(path, err))
    }

    fn write_atomic(&self, path: &Path, contents: &str) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let tmp_path = temp_sibling(path);
        let result = (|| {
            let mut file = std::fs::File::create(&tmp_path)?;
            file.write_all(contents.as_bytes())?;
            file.sync_all()?;
            std::fs::rename(&tmp_path, path)
        })();
        if let Err(err) = result {
            let _ = std::fs::remove_file(&tmp_path);
            return Err(err.into());
        }
        Ok(())
    }
}

fn temp_sibling(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|name| name.to_os_string())
        .unwrap_or_else(|| "report".into());
    name.push(format!(".{}.tmp", std::process::id()));
    path.with_file_name(name)
}
