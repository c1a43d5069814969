//! Writes the rendered page to a persisted temporary file.

use std::io::{self, Write};
use std::path::PathBuf;

use tempfile::Builder;

/// Errors that can occur while writing the output file.
#[derive(Debug, thiserror::Error)]
pub enum WriteError {
    #[error("failed to create temp file: {0}")]
    Create(io::Error),

    #[error("failed to write page: {0}")]
    Write(io::Error),

    #[error("failed to persist temp file: {0}")]
    Persist(#[from] tempfile::PersistError),
}

/// Write `bytes` to a uniquely named `mdpeek-*.html` file in the system
/// temp directory and return its path.
///
/// The file is fully written, persisted, and closed before the path is
/// returned, so a previewer can never observe a partial page. The file is
/// not removed on exit; retention is the caller's choice.
pub fn write_html(bytes: &[u8]) -> Result<PathBuf, WriteError> {
    let mut file = Builder::new()
        .prefix("mdpeek-")
        .suffix(".html")
        .tempfile()
        .map_err(WriteError::Create)?;

    file.write_all(bytes).map_err(WriteError::Write)?;
    file.flush().map_err(WriteError::Write)?;

    let (handle, path) = file.keep()?;
    drop(handle);

    tracing::debug!(path = %path.display(), bytes = bytes.len(), "wrote preview file");
    Ok(path)
}
