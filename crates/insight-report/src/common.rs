//! Shared helpers for the writers.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ReportError, Result};

/// What to do when the destination already holds records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WriteMode {
    /// Overwrite the destination.
    #[default]
    Replace,
    /// Keep existing records and add the new ones after them.
    Append,
}

/// Rejects an empty destination path.
pub(crate) fn validate_path(path: impl Into<PathBuf>) -> Result<PathBuf> {
    let path = path.into();
    if path.as_os_str().is_empty() {
        return Err(ReportError::config("output path is empty"));
    }
    Ok(path)
}

/// Ensure a parent directory exists for a file path.
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|e| ReportError::io(parent, e))?;
    }
    Ok(())
}

/// True when `path` exists and holds at least one byte.
pub(crate) fn has_content(path: &Path) -> bool {
    fs::metadata(path).is_ok_and(|meta| meta.len() > 0)
}
