use super::CategoryExtractor;
use healthsplit_types::{Category, ReportMetadata, Row, StorageFields};

/// Minimum whitespace-separated columns of a `df -h` line
const STORAGE_COLUMNS: usize = 6;

/// Splits `df -h` output into storage rows.
///
/// Tokens past the sixth are ignored, so a mount point containing spaces
/// keeps only its first word. Lines with fewer than six tokens are dropped.
#[derive(Debug, Clone, Copy, Default)]
pub struct StorageExtractor;

impl StorageExtractor {
    fn parse_line(line: &str) -> Option<StorageFields> {
        // A repeated header inside the section is not data
        if line.starts_with(Category::Storage.header_prefix()) {
            return None;
        }

        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() < STORAGE_COLUMNS {
            return None;
        }

        Some(StorageFields {
            filesystem: tokens[0].to_string(),
            size: tokens[1].to_string(),
            used: tokens[2].to_string(),
            avail: tokens[3].to_string(),
            use_percent: tokens[4].to_string(),
            mounted_on: tokens[5].to_string(),
        })
    }
}

impl CategoryExtractor for StorageExtractor {
    fn category(&self) -> Category {
        Category::Storage
    }

    fn extract(&self, lines: &[String], metadata: &ReportMetadata) -> Vec<Row> {
        lines
            .iter()
            .filter_map(|line| Self::parse_line(line))
            .map(|fields| Row::storage(metadata.clone(), fields))
            .collect()
    }
}
