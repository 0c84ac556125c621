//! Nearest-profile authorship classification.
//!
//! The `parallel` feature computes profile distances with rayon; its
//! ordering test only runs under `cargo test --features parallel`.

pub mod catalog;
pub mod classifier;
pub mod error;

pub use catalog::{decode_catalog, encode_catalog, load_catalog, store_catalog};
pub use classifier::{weighted_distance, AuthorClassifier, Candidate};
pub use error::{CatalogError, ClassifyError};

use std::path::Path;

use quill_parser::{load_profiles, read_source};

/// Names the author of the text at `query` by comparing it against the
/// profile records at `profiles`, using the reference weights.
///
/// Any unreadable or malformed input is fatal.
pub fn find_author<P: AsRef<Path>>(
    query: impl AsRef<Path>,
    profiles: impl IntoIterator<Item = P>,
) -> Result<String, ClassifyError> {
    let profiles = load_profiles(profiles)?;
    let classifier = AuthorClassifier::with_reference_weights(profiles)?;

    let text = read_source(query)?;
    let winner = classifier.classify_text(&text)?;
    Ok(winner.label().to_string())
}
