use serde::{Deserialize, Serialize};
use std::fmt;

/// Placeholder for metadata fields that have not been seen yet
pub const UNKNOWN_FIELD: &str = "N/A";

/// Which field of [`ReportMetadata`] a metadata line carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetadataField {
    Hostname,
    Date,
    Id,
}

impl MetadataField {
    /// Literal line prefix that introduces this field.
    ///
    /// `--- UUID` has no trailing colon: report variants write both
    /// `--- UUID: x` and `--- UUID x: y`, and the value is always taken
    /// after the first colon on the line.
    pub fn prefix(self) -> &'static str {
        match self {
            MetadataField::Hostname => "--- Host:",
            MetadataField::Date => "--- Date:",
            MetadataField::Id => "--- UUID",
        }
    }
}

impl fmt::Display for MetadataField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetadataField::Hostname => write!(f, "hostname"),
            MetadataField::Date => write!(f, "date"),
            MetadataField::Id => write!(f, "id"),
        }
    }
}

/// Host context attached to every row: hostname, collection date and host id
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReportMetadata {
    pub hostname: String,
    pub date: String,
    pub id: String,
}

impl Default for ReportMetadata {
    fn default() -> Self {
        Self {
            hostname: UNKNOWN_FIELD.to_string(),
            date: UNKNOWN_FIELD.to_string(),
            id: UNKNOWN_FIELD.to_string(),
        }
    }
}

impl ReportMetadata {
    pub fn new(
        hostname: impl Into<String>,
        date: impl Into<String>,
        id: impl Into<String>,
    ) -> Self {
        Self {
            hostname: hostname.into(),
            date: date.into(),
            id: id.into(),
        }
    }

    /// Overwrite a single field; the other two are left untouched
    pub fn set(&mut self, field: MetadataField, value: &str) {
        let slot = match field {
            MetadataField::Hostname => &mut self.hostname,
            MetadataField::Date => &mut self.date,
            MetadataField::Id => &mut self.id,
        };
        slot.clear();
        slot.push_str(value);
    }

    /// True once every field has been set from the report
    pub fn is_complete(&self) -> bool {
        [&self.hostname, &self.date, &self.id]
            .iter()
            .all(|v| v.as_str() != UNKNOWN_FIELD)
    }
}

impl fmt::Display for ReportMetadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} @ {} ({})", self.hostname, self.date, self.id)
    }
}
