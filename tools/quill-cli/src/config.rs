//! Optional `quill.toml` configuration.
//!
//! ```toml
//! profiles = ["profiles/jane.austen.stats", "profiles/mark.twain.stats"]
//! catalog = "authors.catalog"
//!
//! [weights]
//! average_words_per_sentence = 0.5
//! ```
//!
//! Relative paths are resolved against the directory holding the file.
//! Weights that are not mentioned keep their reference values.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use quill_protocol::MetricWeights;
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct QuillConfig {
    pub profiles: Vec<PathBuf>,
    pub catalog: Option<PathBuf>,
    pub weights: MetricWeights,
}

impl QuillConfig {
    /// Reads the config at `path`, or the defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let config = Self::parse(&text)
            .with_context(|| format!("invalid config {}", path.display()))?;

        let base = path.parent().unwrap_or_else(|| Path::new(""));
        Ok(config.resolve(base))
    }

    pub fn parse(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    fn resolve(mut self, base: &Path) -> Self {
        for profile in &mut self.profiles {
            *profile = base.join(&*profile);
        }
        self.catalog = self.catalog.map(|c| base.join(c));
        self
    }
}
