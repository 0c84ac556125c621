use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::SourceError;

/// Reads a whole text file into memory for lexing.
pub fn read_source(path: impl AsRef<Path>) -> Result<String, SourceError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| SourceError {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = text.len(), "read source");
    Ok(text)
}
