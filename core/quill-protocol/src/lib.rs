#![no_std] // Shared by native tools and the wasm binding

extern crate alloc;

// Enable std if the feature is active (for tests/tools)
#[cfg(feature = "std")]
extern crate std;

pub mod charclass;
pub mod metrics;
pub mod token;

// Re-export core types for convenience
pub use charclass::CharClass;
pub use metrics::{Metric, MetricWeights, StyleMetrics};
pub use token::{Token, TokenKind, END_OF_INPUT_TEXT};

pub mod model;
pub use model::*;
