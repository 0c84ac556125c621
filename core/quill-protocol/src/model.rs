use rkyv::{Archive, Deserialize, Serialize};
use crate::metrics::StyleMetrics;
use alloc::string::String;
use alloc::vec::Vec;

#[cfg(feature = "serde")]
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

/// A precomputed reference fingerprint for one author.
#[derive(Debug, Clone, PartialEq, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct AuthorProfile {
    pub label: String,
    pub metrics: StyleMetrics,
}

impl AuthorProfile {
    pub fn new(label: impl Into<String>, metrics: StyleMetrics) -> Self {
        Self { label: label.into(), metrics }
    }
}

/// Ordered collection of author profiles, compiled into a single archive.
///
/// Order is significant: the classifier resolves ties in favour of the
/// earlier profile.
#[derive(Debug, Clone, Default, PartialEq, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct ProfileCatalog {
    pub profiles: Vec<AuthorProfile>,
}

impl ProfileCatalog {
    pub fn new(profiles: Vec<AuthorProfile>) -> Self {
        Self { profiles }
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.profiles.iter().map(|p| p.label.as_str())
    }
}

impl From<Vec<AuthorProfile>> for ProfileCatalog {
    fn from(profiles: Vec<AuthorProfile>) -> Self {
        Self::new(profiles)
    }
}
