use crate::config::Config;
use crate::output::console::{SplitSummary, WrittenTable, print_split_summary};
use crate::output::write_table_file;
use crate::types::{OutputFormat, TableFormat};
use anyhow::{Context, Result};
use healthsplit_types::Category;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// `split` flags; unset values fall back to the config file
#[derive(Debug, Clone, Default)]
pub struct SplitOptions {
    pub output_dir: Option<PathBuf>,
    pub output_format: Option<TableFormat>,
    pub categories: Vec<Category>,
    pub skip_empty: bool,
}

pub fn handle(
    input: &Path,
    options: SplitOptions,
    config: &Config,
    format: OutputFormat,
) -> Result<()> {
    let output_dir = options
        .output_dir
        .or_else(|| config.output_dir.clone())
        .unwrap_or_else(|| PathBuf::from("."));
    let table_format = options
        .output_format
        .or(config.output_format)
        .unwrap_or_default();
    let skip_empty = options.skip_empty || config.skip_empty;

    let report = healthsplit_engine::split_file(input)?;
    info!(
        input = %input.display(),
        rows = report.tables.total_rows(),
        batches = report.stats.batches,
        "report split"
    );
    if report.stats.header_lines == 0 {
        warn!(input = %input.display(), "no section headers found, every table is empty");
    }

    std::fs::create_dir_all(&output_dir).with_context(|| {
        format!("Failed to create output directory: {}", output_dir.display())
    })?;

    let mut written = Vec::new();
    for table in report.tables.iter() {
        if !options.categories.is_empty() && !options.categories.contains(&table.category) {
            continue;
        }

        let file = if skip_empty && table.is_empty() {
            None
        } else {
            let path = write_table_file(
                &output_dir,
                config.file_stem(table.category),
                table,
                table_format,
            )?;
            info!(
                category = %table.category,
                rows = table.len(),
                path = %path.display(),
                "wrote table"
            );
            Some(path)
        };

        written.push(WrittenTable {
            category: table.category,
            rows: table.len(),
            file,
        });
    }

    let summary = SplitSummary {
        input: input.to_path_buf(),
        tables: written,
        stats: report.stats,
    };
    print_split_summary(&summary, format)
}
