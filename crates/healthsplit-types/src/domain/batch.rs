use super::{Category, ReportMetadata};
use serde::{Deserialize, Serialize};

/// Consecutive content lines of one section, with the metadata in effect
/// when the section was closed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineBatch {
    pub category: Category,
    pub lines: Vec<String>,
    pub metadata: ReportMetadata,
}

impl LineBatch {
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
