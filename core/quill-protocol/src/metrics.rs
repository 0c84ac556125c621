use rkyv::{Archive, Deserialize, Serialize};
use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

/// The five stylometric metrics, in their fixed persisted order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[repr(u8)]
pub enum Metric {
    AverageWordLength = 0,
    TypeTokenRatio = 1,
    HapaxLegomenonRatio = 2,
    AverageWordsPerSentence = 3,
    SentenceComplexity = 4,
}

impl Metric {
    pub const COUNT: usize = 5;

    /// All metrics in persisted order.
    pub const ALL: [Metric; Metric::COUNT] = [
        Metric::AverageWordLength,
        Metric::TypeTokenRatio,
        Metric::HapaxLegomenonRatio,
        Metric::AverageWordsPerSentence,
        Metric::SentenceComplexity,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn label(self) -> &'static str {
        match self {
            Metric::AverageWordLength => "Average word length",
            Metric::TypeTokenRatio => "Type-token ratio",
            Metric::HapaxLegomenonRatio => "Hapax legomenon ratio",
            Metric::AverageWordsPerSentence => "Average words per sentence",
            Metric::SentenceComplexity => "Sentence complexity",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A document's stylometric fingerprint.
///
/// Ratios over an empty document are NaN rather than an error.
#[derive(Debug, Clone, Copy, PartialEq, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct StyleMetrics {
    pub average_word_length: f64,
    pub type_token_ratio: f64,
    pub hapax_legomenon_ratio: f64,
    pub average_words_per_sentence: f64,
    pub sentence_complexity: f64,
}

impl StyleMetrics {
    pub fn from_array(values: [f64; Metric::COUNT]) -> Self {
        Self {
            average_word_length: values[0],
            type_token_ratio: values[1],
            hapax_legomenon_ratio: values[2],
            average_words_per_sentence: values[3],
            sentence_complexity: values[4],
        }
    }

    pub fn to_array(&self) -> [f64; Metric::COUNT] {
        [
            self.average_word_length,
            self.type_token_ratio,
            self.hapax_legomenon_ratio,
            self.average_words_per_sentence,
            self.sentence_complexity,
        ]
    }

    pub fn get(&self, metric: Metric) -> f64 {
        match metric {
            Metric::AverageWordLength => self.average_word_length,
            Metric::TypeTokenRatio => self.type_token_ratio,
            Metric::HapaxLegomenonRatio => self.hapax_legomenon_ratio,
            Metric::AverageWordsPerSentence => self.average_words_per_sentence,
            Metric::SentenceComplexity => self.sentence_complexity,
        }
    }

    /// Iterates `(metric, value)` pairs in persisted order.
    pub fn iter(&self) -> impl Iterator<Item = (Metric, f64)> + '_ {
        Metric::ALL.into_iter().map(move |m| (m, self.get(m)))
    }
}

impl From<[f64; Metric::COUNT]> for StyleMetrics {
    fn from(values: [f64; Metric::COUNT]) -> Self {
        Self::from_array(values)
    }
}

impl From<StyleMetrics> for [f64; Metric::COUNT] {
    fn from(m: StyleMetrics) -> Self {
        m.to_array()
    }
}

/// Per-metric weights for the classifier distance.
///
/// The defaults roughly equalise each metric's typical scale so that no
/// single metric dominates.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MetricWeights {
    pub average_word_length: f64,
    pub type_token_ratio: f64,
    pub hapax_legomenon_ratio: f64,
    pub average_words_per_sentence: f64,
    pub sentence_complexity: f64,
}

impl MetricWeights {
    pub const REFERENCE: Self = Self {
        average_word_length: 11.0,
        type_token_ratio: 33.0,
        hapax_legomenon_ratio: 50.0,
        average_words_per_sentence: 0.4,
        sentence_complexity: 4.0,
    };

    /// Every metric weighted equally.
    pub fn uniform(weight: f64) -> Self {
        Self {
            average_word_length: weight,
            type_token_ratio: weight,
            hapax_legomenon_ratio: weight,
            average_words_per_sentence: weight,
            sentence_complexity: weight,
        }
    }

    pub fn get(&self, metric: Metric) -> f64 {
        match metric {
            Metric::AverageWordLength => self.average_word_length,
            Metric::TypeTokenRatio => self.type_token_ratio,
            Metric::HapaxLegomenonRatio => self.hapax_legomenon_ratio,
            Metric::AverageWordsPerSentence => self.average_words_per_sentence,
            Metric::SentenceComplexity => self.sentence_complexity,
        }
    }
}

impl Default for MetricWeights {
    fn default() -> Self {
        Self::REFERENCE
    }
}
