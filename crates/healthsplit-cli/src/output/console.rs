use crate::types::OutputFormat;
use anyhow::Result;
use healthsplit_engine::ScanStats;
use healthsplit_types::{Category, LineBatch, ReportMetadata};
use is_terminal::IsTerminal;
use owo_colors::OwoColorize;
use serde::Serialize;
use std::fmt::Write;
use std::path::{Path, PathBuf};

/// One category's outcome of a `split` run
#[derive(Debug, Clone, Serialize)]
pub struct WrittenTable {
    pub category: Category,
    pub rows: usize,
    /// `None` when the table was skipped
    pub file: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SplitSummary {
    pub input: PathBuf,
    pub tables: Vec<WrittenTable>,
    pub stats: ScanStats,
}

#[derive(Debug, Clone)]
pub struct Inspection<'a> {
    pub input: PathBuf,
    pub batches: &'a [LineBatch],
    pub stats: ScanStats,
}

#[derive(Debug, Serialize)]
struct BatchView<'a> {
    category: Category,
    line_count: usize,
    metadata: &'a ReportMetadata,
    #[serde(skip_serializing_if = "Option::is_none")]
    lines: Option<&'a [String]>,
}

#[derive(Debug, Serialize)]
struct InspectionView<'a> {
    input: &'a Path,
    batches: Vec<BatchView<'a>>,
    stats: ScanStats,
}

/// JSON form of an inspection; batch content is included only with `show_lines`
pub fn inspection_json(inspection: &Inspection<'_>, show_lines: bool) -> Result<serde_json::Value> {
    let view = InspectionView {
        input: &inspection.input,
        batches: inspection
            .batches
            .iter()
            .map(|batch| BatchView {
                category: batch.category,
                line_count: batch.len(),
                metadata: &batch.metadata,
                lines: show_lines.then_some(batch.lines.as_slice()),
            })
            .collect(),
        stats: inspection.stats,
    };
    Ok(serde_json::to_value(view)?)
}

fn use_color() -> bool {
    std::io::stdout().is_terminal()
}

fn count(n: usize, one: &str, many: &str) -> String {
    format!("{} {}", n, if n == 1 { one } else { many })
}

pub fn print_split_summary(summary: &SplitSummary, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(summary)?),
        OutputFormat::Plain => print!("{}", render_split_summary(summary, use_color())),
    }
    Ok(())
}

pub fn render_split_summary(summary: &SplitSummary, color: bool) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Split report: {}", summary.input.display());

    for table in &summary.tables {
        let name = format!("{:<9}", table.category.as_str());
        let rows = format!("{:<8}", count(table.rows, "row", "rows"));
        let file = match &table.file {
            Some(path) => path.display().to_string(),
            None => "(skipped)".to_string(),
        };

        if color {
            let rows = if table.rows > 0 {
                rows.green().to_string()
            } else {
                rows.dimmed().to_string()
            };
            let _ = writeln!(out, "  {}  {}  {}", name.bold(), rows, file);
        } else {
            let _ = writeln!(out, "  {}  {}  {}", name, rows, file);
        }
    }

    let stats = &summary.stats;
    let _ = writeln!(
        out,
        "Scanned {}: {}, {} before the first section discarded",
        count(stats.lines, "line", "lines"),
        count(stats.batches, "batch", "batches"),
        count(stats.discarded_lines, "line", "lines"),
    );
    out
}

pub fn print_inspection(
    inspection: &Inspection<'_>,
    show_lines: bool,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Json => println!(
            "{}",
            serde_json::to_string_pretty(&inspection_json(inspection, show_lines)?)?
        ),
        OutputFormat::Plain => print!(
            "{}",
            render_inspection(inspection, show_lines, use_color())
        ),
    }
    Ok(())
}

pub fn render_inspection(inspection: &Inspection<'_>, show_lines: bool, color: bool) -> String {
    let mut out = String::new();

    for (index, batch) in inspection.batches.iter().enumerate() {
        let label = format!("#{:<3} {:<9}", index + 1, batch.category.as_str());
        let label = if color {
            label.cyan().to_string()
        } else {
            label
        };
        let _ = writeln!(
            out,
            "{} {:<9} host={} date={} id={}",
            label,
            count(batch.len(), "line", "lines"),
            batch.metadata.hostname,
            batch.metadata.date,
            batch.metadata.id
        );

        if show_lines {
            for line in &batch.lines {
                let _ = writeln!(out, "      {}", line);
            }
        }
    }

    let stats = &inspection.stats;
    let _ = writeln!(
        out,
        "{}: {} metadata, {} headers, {} content, {} blank, {} discarded",
        count(stats.lines, "line", "lines"),
        stats.metadata_lines,
        stats.header_lines,
        stats.content_lines,
        stats.blank_lines,
        stats.discarded_lines
    );
    if stats.incomplete_batches > 0 {
        let _ = writeln!(
            out,
            "{} tagged before hostname, date and id were all known",
            count(stats.incomplete_batches, "batch", "batches")
        );
    }
    out
}
