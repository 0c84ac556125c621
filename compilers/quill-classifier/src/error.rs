use std::io;
use std::path::PathBuf;

use quill_parser::{ParseError, ProfileError, SourceError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to encode profile catalog: {0}")]
    Encode(String),
    #[error("corrupt profile catalog: {0}")]
    Corrupt(String),
    #[error("cannot access catalog {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

#[derive(Debug, Error)]
pub enum ClassifyError {
    #[error("no author profiles to compare against")]
    NoProfiles,
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Source(#[from] SourceError),
    #[error(transparent)]
    Profile(#[from] ProfileError),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}
