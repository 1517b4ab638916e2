use crate::extract::ExtractorRegistry;
use healthsplit_types::{Category, LineBatch, Row};
use serde::Serialize;

/// File date used when a table has no rows
pub const NO_DATE: &str = "NO-Date";

/// Append-only rows of one category, in batch flush order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Table {
    pub category: Category,
    pub rows: Vec<Row>,
}

impl Table {
    pub fn new(category: Category) -> Self {
        Self {
            category,
            rows: Vec::new(),
        }
    }

    pub fn columns(&self) -> Vec<&'static str> {
        self.category.columns()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Date of the first row, or [`NO_DATE`] for an empty table
    pub fn file_date(&self) -> &str {
        self.rows
            .first()
            .map(|row| row.metadata.date.as_str())
            .unwrap_or(NO_DATE)
    }

    pub fn extend(&mut self, rows: impl IntoIterator<Item = Row>) {
        self.rows.extend(rows);
    }
}

/// One table per category, always all five
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportTables {
    tables: Vec<Table>,
}

impl Default for ReportTables {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportTables {
    pub fn new() -> Self {
        Self {
            tables: Category::ALL.into_iter().map(Table::new).collect(),
        }
    }

    pub fn get(&self, category: Category) -> &Table {
        &self.tables[Self::slot(category)]
    }

    /// Extract a batch's rows and append them to its category's table.
    /// Returns the number of rows added.
    pub fn absorb(&mut self, batch: &LineBatch, registry: &ExtractorRegistry) -> usize {
        let rows = registry.extract(batch);
        let added = rows.len();
        self.tables[Self::slot(batch.category)].extend(rows);
        added
    }

    /// Tables in category order
    pub fn iter(&self) -> impl Iterator<Item = &Table> {
        self.tables.iter()
    }

    pub fn total_rows(&self) -> usize {
        self.tables.iter().map(Table::len).sum()
    }

    fn slot(category: Category) -> usize {
        match category {
            Category::Storage => 0,
            Category::Services => 1,
            Category::Critical => 2,
            Category::Pending => 3,
            Category::Ssh => 4,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use healthsplit_types::ReportMetadata;

    fn batch(category: Category, date: &str, lines: &[&str]) -> LineBatch {
        LineBatch {
            category,
            lines: lines.iter().map(|l| l.to_string()).collect(),
            metadata: ReportMetadata::new("web01", date, "abc"),
        }
    }

    #[test]
    fn test_new_tables_are_empty() {
        let tables = ReportTables::new();
        assert_eq!(tables.iter().count(), Category::ALL.len());
        for category in Category::ALL {
            let table = tables.get(category);
            assert_eq!(table.category, category);
            assert!(table.is_empty());
            assert_eq!(table.file_date(), NO_DATE);
        }
    }

    #[test]
    fn test_absorb_appends_in_flush_order() {
        let registry = ExtractorRegistry::new();
        let mut tables = ReportTables::new();

        let added = tables.absorb(
            &batch(Category::Services, "2025-01-01", &["a.service", "b.service"]),
            &registry,
        );
        assert_eq!(added, 2);
        tables.absorb(&batch(Category::Services, "2025-01-02", &["c.service"]), &registry);
        tables.absorb(&batch(Category::Ssh, "2025-01-02", &["Failed password for root"]), &registry);

        let services: Vec<&str> = tables
            .get(Category::Services)
            .rows
            .iter()
            .map(|r| r.values()[3])
            .collect();
        assert_eq!(services, vec!["a.service", "b.service", "c.service"]);
        assert_eq!(tables.get(Category::Services).file_date(), "2025-01-01");
        assert_eq!(tables.get(Category::Ssh).len(), 1);
        assert_eq!(tables.total_rows(), 4);
    }
}
