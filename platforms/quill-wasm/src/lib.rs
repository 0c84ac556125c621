use wasm_bindgen::prelude::*;
use quill_classifier::{decode_catalog, AuthorClassifier, ClassifyError};
use quill_parser::{Document, ParseError};
use quill_protocol::{MetricWeights, StyleMetrics};
use quill_stats::DocumentStatistics;
use serde::Serialize;

#[wasm_bindgen]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

/// The structured response sent back to JavaScript
#[derive(Debug, Serialize)]
pub struct AnalysisReport {
    pub sentences: usize,
    pub phrases: usize,
    pub words: usize,
    pub metrics: StyleMetrics,
}

pub fn analyze_text(input: &str) -> Result<AnalysisReport, ParseError> {
    let document = Document::from_text(input)?;
    let stats = DocumentStatistics::new(&document);
    let tally = stats.tally();

    Ok(AnalysisReport {
        sentences: tally.sentences,
        phrases: tally.phrases,
        words: tally.words,
        metrics: stats.metrics(),
    })
}

fn to_js(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// The engine instance running in the browser, built from a compiled
/// catalog fetched by JS.
#[wasm_bindgen]
pub struct QuillEngine {
    classifier: AuthorClassifier,
}

impl QuillEngine {
    pub fn from_catalog_bytes(data: &[u8]) -> Result<Self, ClassifyError> {
        let catalog = decode_catalog(data)?;
        let classifier = AuthorClassifier::from_catalog(catalog, MetricWeights::REFERENCE)?;
        Ok(Self { classifier })
    }

    pub fn closest_author(&self, input: &str) -> Result<String, ClassifyError> {
        let winner = self.classifier.classify_text(input)?;
        Ok(winner.label().to_string())
    }
}

#[wasm_bindgen]
impl QuillEngine {
    #[wasm_bindgen(constructor)]
    pub fn new(data: Vec<u8>) -> Result<QuillEngine, JsValue> {
        Self::from_catalog_bytes(&data).map_err(to_js)
    }

    /// Text -> Document -> statistics, as a plain JS object.
    pub fn analyze(&self, input: &str) -> Result<JsValue, JsValue> {
        let report = analyze_text(input).map_err(to_js)?;
        serde_wasm_bindgen::to_value(&report).map_err(JsValue::from)
    }

    pub fn identify(&self, input: &str) -> Result<String, JsValue> {
        self.closest_author(input).map_err(to_js)
    }

    #[wasm_bindgen(getter)]
    pub fn authors(&self) -> Vec<JsValue> {
        self.classifier
            .profiles()
            .iter()
            .map(|p| JsValue::from_str(&p.label))
            .collect()
    }
}
