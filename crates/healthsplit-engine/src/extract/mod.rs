//! Per-category row extraction.
//!
//! The scanner only groups lines; turning a group into rows is the job of a
//! [`CategoryExtractor`]. Lines an extractor cannot use are dropped without
//! error.

mod lines;
mod storage;

pub use lines::LineExtractor;
pub use storage::StorageExtractor;

use healthsplit_types::{Category, LineBatch, ReportMetadata, Row};
use std::collections::BTreeMap;
use tracing::warn;

/// Turns the content lines of one section into table rows
pub trait CategoryExtractor: Send + Sync {
    /// Category this extractor handles
    fn category(&self) -> Category;

    /// Extract rows, tagging each with `metadata`
    fn extract(&self, lines: &[String], metadata: &ReportMetadata) -> Vec<Row>;

    fn extract_batch(&self, batch: &LineBatch) -> Vec<Row> {
        self.extract(&batch.lines, &batch.metadata)
    }
}

/// Extractor lookup keyed by category
pub struct ExtractorRegistry {
    extractors: BTreeMap<Category, Box<dyn CategoryExtractor>>,
}

impl Default for ExtractorRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ExtractorRegistry {
    /// Registry with the built-in extractor for every category
    pub fn new() -> Self {
        let mut registry = Self {
            extractors: BTreeMap::new(),
        };
        registry.register(Box::new(StorageExtractor));
        for category in [
            Category::Services,
            Category::Critical,
            Category::Pending,
            Category::Ssh,
        ] {
            registry.register(Box::new(LineExtractor::new(category)));
        }
        registry
    }

    /// Install an extractor, replacing any previous one for its category
    pub fn register(&mut self, extractor: Box<dyn CategoryExtractor>) {
        self.extractors.insert(extractor.category(), extractor);
    }

    pub fn get(&self, category: Category) -> Option<&dyn CategoryExtractor> {
        self.extractors.get(&category).map(|e| &**e)
    }

    /// Run the matching extractor over a batch
    pub fn extract(&self, batch: &LineBatch) -> Vec<Row> {
        match self.get(batch.category) {
            Some(extractor) => extractor.extract_batch(batch),
            None => {
                warn!(category = %batch.category, "no extractor registered, dropping batch");
                Vec::new()
            }
        }
    }
}
