use healthsplit_types::{Category, MetadataField};

/// Metadata prefixes, checked before any section header
const METADATA_FIELDS: [MetadataField; 3] = [
    MetadataField::Hostname,
    MetadataField::Date,
    MetadataField::Id,
];

/// Structural role of a single report line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// Empty after trimming
    Blank,
    /// `--- Host:`, `--- Date:` or `--- UUID` line.
    /// `value` is `None` when the line carries no usable token.
    Metadata {
        field: MetadataField,
        value: Option<&'a str>,
    },
    /// Line that opens a category section
    SectionHeader(Category),
    /// Anything else, trimmed
    Content(&'a str),
}

/// Classify one report line.
///
/// Pure function of the line text. Surrounding whitespace is ignored.
pub fn classify_line(line: &str) -> LineKind<'_> {
    let line = line.trim();
    if line.is_empty() {
        return LineKind::Blank;
    }

    for field in METADATA_FIELDS {
        if line.starts_with(field.prefix()) {
            return LineKind::Metadata {
                field,
                value: metadata_value(line),
            };
        }
    }

    for category in Category::ALL {
        if line.starts_with(category.header_prefix()) {
            return LineKind::SectionHeader(category);
        }
    }

    LineKind::Content(line)
}

/// First whitespace-delimited token after the first `:` on the line
fn metadata_value(line: &str) -> Option<&str> {
    line.split_once(':')
        .and_then(|(_, rest)| rest.split_whitespace().next())
}
