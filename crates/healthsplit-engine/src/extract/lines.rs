use super::CategoryExtractor;
use healthsplit_types::{Category, ReportMetadata, Row};

/// Prefixes of lines that are report chrome rather than data
const SKIPPED_PREFIXES: [&str; 2] = ["---", "0 loaded units"];

/// One row per content line.
///
/// Used for failed services, critical logs, pending updates and failed SSH
/// attempts. Separator lines (`--- ... ---`) and systemd's
/// `0 loaded units listed.` footer are skipped.
#[derive(Debug, Clone, Copy)]
pub struct LineExtractor {
    category: Category,
}

impl LineExtractor {
    pub fn new(category: Category) -> Self {
        Self { category }
    }

    fn keep(line: &str) -> bool {
        !SKIPPED_PREFIXES.iter().any(|p| line.starts_with(p))
    }
}

impl CategoryExtractor for LineExtractor {
    fn category(&self) -> Category {
        self.category
    }

    fn extract(&self, lines: &[String], metadata: &ReportMetadata) -> Vec<Row> {
        lines
            .iter()
            .filter(|line| Self::keep(line))
            .map(|line| Row::line(metadata.clone(), line.as_str()))
            .collect()
    }
}
