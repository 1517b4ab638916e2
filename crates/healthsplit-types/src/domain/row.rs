use super::ReportMetadata;
use serde::{Deserialize, Serialize};

/// One `df -h` style line split into its six columns
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageFields {
    pub filesystem: String,
    pub size: String,
    pub used: String,
    pub avail: String,
    pub use_percent: String,
    pub mounted_on: String,
}

/// Category-specific part of a row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RowFields {
    /// Storage table row
    Storage(StorageFields),
    /// Single-value row used by services, critical logs, pending updates and SSH attempts
    Line { value: String },
}

/// A table row: metadata tag plus the extracted fields
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    pub metadata: ReportMetadata,
    pub fields: RowFields,
}

impl Row {
    pub fn storage(metadata: ReportMetadata, fields: StorageFields) -> Self {
        Self {
            metadata,
            fields: RowFields::Storage(fields),
        }
    }

    pub fn line(metadata: ReportMetadata, value: impl Into<String>) -> Self {
        Self {
            metadata,
            fields: RowFields::Line {
                value: value.into(),
            },
        }
    }

    /// Cell values in column order: `Id, Hostname, Date`, then the fields
    pub fn values(&self) -> Vec<&str> {
        let mut values = vec![
            self.metadata.id.as_str(),
            self.metadata.hostname.as_str(),
            self.metadata.date.as_str(),
        ];

        match &self.fields {
            RowFields::Storage(s) => values.extend([
                s.filesystem.as_str(),
                s.size.as_str(),
                s.used.as_str(),
                s.avail.as_str(),
                s.use_percent.as_str(),
                s.mounted_on.as_str(),
            ]),
            RowFields::Line { value } => values.push(value.as_str()),
        }

        values
    }
}
