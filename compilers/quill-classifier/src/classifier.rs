use std::cmp::Ordering;

use quill_parser::Document;
use quill_protocol::{AuthorProfile, Metric, MetricWeights, ProfileCatalog, StyleMetrics};
use tracing::{debug, trace};

use crate::error::ClassifyError;

/// Weighted L1 distance between two fingerprints.
pub fn weighted_distance(weights: &MetricWeights, query: &StyleMetrics, reference: &StyleMetrics) -> f64 {
    Metric::ALL
        .iter()
        .map(|&m| weights.get(m) * (query.get(m) - reference.get(m)).abs())
        .sum()
}

/// A profile together with its distance from the query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate<'a> {
    /// Position of the profile in the classifier's list.
    pub index: usize,
    pub profile: &'a AuthorProfile,
    pub distance: f64,
}

impl<'a> Candidate<'a> {
    pub fn label(&self) -> &'a str {
        &self.profile.label
    }
}

// NaN sorts after every number
fn by_distance(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b)
        .unwrap_or_else(|| a.is_nan().cmp(&b.is_nan()))
}

/// Nearest-neighbour authorship classifier over an ordered profile list.
#[derive(Debug, Clone)]
pub struct AuthorClassifier {
    profiles: Vec<AuthorProfile>,
    weights: MetricWeights,
}

impl AuthorClassifier {
    pub fn new(profiles: Vec<AuthorProfile>, weights: MetricWeights) -> Result<Self, ClassifyError> {
        if profiles.is_empty() {
            return Err(ClassifyError::NoProfiles);
        }
        Ok(Self { profiles, weights })
    }

    pub fn with_reference_weights(profiles: Vec<AuthorProfile>) -> Result<Self, ClassifyError> {
        Self::new(profiles, MetricWeights::REFERENCE)
    }

    pub fn from_catalog(catalog: ProfileCatalog, weights: MetricWeights) -> Result<Self, ClassifyError> {
        Self::new(catalog.profiles, weights)
    }

    pub fn profiles(&self) -> &[AuthorProfile] {
        &self.profiles
    }

    pub fn weights(&self) -> &MetricWeights {
        &self.weights
    }

    /// Distance from `query` to every profile, in profile order.
    pub fn distances(&self, query: &StyleMetrics) -> Vec<f64> {
        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            self.profiles
                .par_iter()
                .map(|p| weighted_distance(&self.weights, query, &p.metrics))
                .collect()
        }
        #[cfg(not(feature = "parallel"))]
        {
            self.profiles
                .iter()
                .map(|p| weighted_distance(&self.weights, query, &p.metrics))
                .collect()
        }
    }

    /// The closest profile. Ties go to the earliest profile.
    ///
    /// A NaN distance never beats a number, even when it belongs to the
    /// first profile: the first non-NaN distance replaces a NaN best. NaN
    /// only wins when every distance is NaN, and then the first profile is
    /// returned. The result is always the head of [`AuthorClassifier::rank`].
    pub fn classify(&self, query: &StyleMetrics) -> Candidate<'_> {
        let distances = self.distances(query);

        let mut best = 0;
        for (index, &distance) in distances.iter().enumerate() {
            trace!(label = %self.profiles[index].label, distance, "candidate");
            let current = distances[best];
            if distance < current || (current.is_nan() && !distance.is_nan()) {
                best = index;
            }
        }

        let winner = self.candidate(best, distances[best]);
        debug!(label = %winner.label(), distance = winner.distance, "closest author");
        winner
    }

    /// Every profile ordered by distance; equal distances keep profile order.
    pub fn rank(&self, query: &StyleMetrics) -> Vec<Candidate<'_>> {
        let mut ranked: Vec<Candidate<'_>> = self
            .distances(query)
            .into_iter()
            .enumerate()
            .map(|(index, distance)| self.candidate(index, distance))
            .collect();
        ranked.sort_by(|a, b| by_distance(a.distance, b.distance));
        ranked
    }

    pub fn classify_document(&self, document: &Document) -> Candidate<'_> {
        self.classify(&quill_stats::compute(document))
    }

    pub fn classify_text(&self, text: &str) -> Result<Candidate<'_>, ClassifyError> {
        let document = Document::from_text(text)?;
        Ok(self.classify_document(&document))
    }

    fn candidate(&self, index: usize, distance: f64) -> Candidate<'_> {
        Candidate {
            index,
            profile: &self.profiles[index],
            distance,
        }
    }
}
