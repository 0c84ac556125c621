use std::io;
use std::path::PathBuf;

use quill_protocol::{Metric, Token};
use thiserror::Error;

/// The parser was asked to consume a token other than its lookahead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("expected {expected} but found {found}")]
    Mismatch { expected: Token, found: Token },
}

/// A character source could not be opened or read.
#[derive(Debug, Error)]
#[error("cannot read {}: {source}", .path.display())]
pub struct SourceError {
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}

/// A profile record is not a label followed by exactly five numbers.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProfileFormatError {
    #[error("missing author label on line 1")]
    MissingLabel,
    #[error("author label must fit on one line")]
    MultiLineLabel,
    #[error("{metric} is not a finite number")]
    NonFiniteStatistic { metric: Metric },
    #[error("line {line}: missing value for {metric}")]
    MissingStatistic { line: usize, metric: Metric },
    #[error("line {line}: {text:?} is not a valid value for {metric}")]
    InvalidStatistic { line: usize, metric: Metric, text: String },
    #[error("line {line}: unexpected content after the five statistics")]
    TrailingContent { line: usize },
}

#[derive(Debug, Error)]
pub enum ProfileError {
    #[error(transparent)]
    Source(#[from] SourceError),
    #[error("malformed profile {}: {source}", .path.display())]
    Format {
        path: PathBuf,
        #[source]
        source: ProfileFormatError,
    },
}
