//! Stylometric statistics over a parsed [`Document`].
//!
//! Every metric is a document-wide aggregate over word tokens, never an
//! average of per-sentence averages. A zero divisor yields NaN, which is a
//! legitimate value for an empty document.

pub mod tally;

pub use tally::{Occurrence, WordTally};

use quill_parser::Document;
use quill_protocol::StyleMetrics;

#[inline]
fn ratio(numerator: usize, denominator: usize) -> f64 {
    numerator as f64 / denominator as f64
}

/// Read-only statistics view of a document.
pub struct DocumentStatistics<'a> {
    document: &'a Document,
    tally: WordTally,
}

impl<'a> DocumentStatistics<'a> {
    pub fn new(document: &'a Document) -> Self {
        Self {
            document,
            tally: WordTally::of(document),
        }
    }

    pub fn document(&self) -> &'a Document {
        self.document
    }

    pub fn tally(&self) -> &WordTally {
        &self.tally
    }

    pub fn average_word_length(&self) -> f64 {
        ratio(self.tally.characters, self.tally.words)
    }

    pub fn type_token_ratio(&self) -> f64 {
        ratio(self.tally.distinct, self.tally.words)
    }

    pub fn hapax_legomenon_ratio(&self) -> f64 {
        ratio(self.tally.hapax, self.tally.words)
    }

    pub fn average_words_per_sentence(&self) -> f64 {
        ratio(self.tally.words, self.tally.sentences)
    }

    /// Phrases per sentence.
    pub fn sentence_complexity(&self) -> f64 {
        ratio(self.tally.phrases, self.tally.sentences)
    }

    pub fn metrics(&self) -> StyleMetrics {
        StyleMetrics {
            average_word_length: self.average_word_length(),
            type_token_ratio: self.type_token_ratio(),
            hapax_legomenon_ratio: self.hapax_legomenon_ratio(),
            average_words_per_sentence: self.average_words_per_sentence(),
            sentence_complexity: self.sentence_complexity(),
        }
    }
}

/// Shorthand for `DocumentStatistics::new(document).metrics()`.
pub fn compute(document: &Document) -> StyleMetrics {
    DocumentStatistics::new(document).metrics()
}
