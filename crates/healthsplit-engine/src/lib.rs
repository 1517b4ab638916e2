// Engine - splits a concatenated multi-host health report into per-category tables.
// Pipeline: raw lines -> classify -> scanner batches -> extractors -> tables.
// The scanner never touches IO; the reader helpers below feed it.

pub mod classify;
pub mod error;
pub mod extract;
pub mod scanner;
pub mod table;

pub use classify::{LineKind, classify_line};
pub use error::{Error, Result};
pub use extract::{CategoryExtractor, ExtractorRegistry, LineExtractor, StorageExtractor};
pub use scanner::{Batches, ScanState, ScanStats, SectionScanner, scan_lines};
pub use table::{NO_DATE, ReportTables, Table};

use healthsplit_types::LineBatch;
use serde::Serialize;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::debug;

/// Tables produced from one report, plus scan counters
#[derive(Debug, Clone, Serialize)]
pub struct SplitReport {
    pub tables: ReportTables,
    pub stats: ScanStats,
}

// Façade API - CLI should go through these instead of driving the scanner by hand

/// Split an in-memory report
pub fn split_lines<I>(lines: I) -> SplitReport
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let registry = ExtractorRegistry::new();
    let mut tables = ReportTables::new();
    let mut batches = scan_lines(lines);
    for batch in batches.by_ref() {
        tables.absorb(&batch, &registry);
    }
    SplitReport {
        tables,
        stats: batches.stats(),
    }
}

/// Stream a report and hand every flushed batch to `on_batch`, in flush order.
///
/// Invalid UTF-8 is replaced rather than rejected.
pub fn scan_reader<R, F>(mut reader: R, mut on_batch: F) -> Result<ScanStats>
where
    R: BufRead,
    F: FnMut(LineBatch),
{
    let mut scanner = SectionScanner::new();
    let mut buf = Vec::new();

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        let line = String::from_utf8_lossy(&buf);
        if let Some(batch) = scanner.feed(&line) {
            on_batch(batch);
        }
    }

    let (last, stats) = scanner.finish();
    if let Some(batch) = last {
        on_batch(batch);
    }

    debug!(
        lines = stats.lines,
        batches = stats.batches,
        discarded = stats.discarded_lines,
        "scan finished"
    );
    Ok(stats)
}

/// Split a report read from `reader` using the given extractors
pub fn split_reader_with<R: BufRead>(reader: R, registry: &ExtractorRegistry) -> Result<SplitReport> {
    let mut tables = ReportTables::new();
    let stats = scan_reader(reader, |batch| {
        tables.absorb(&batch, registry);
    })?;
    Ok(SplitReport { tables, stats })
}

/// Split a report read from `reader` using the built-in extractors
pub fn split_reader<R: BufRead>(reader: R) -> Result<SplitReport> {
    split_reader_with(reader, &ExtractorRegistry::new())
}

/// Open a report file for scanning
pub fn open_report(path: &Path) -> Result<BufReader<File>> {
    match File::open(path) {
        Ok(file) => Ok(BufReader::new(file)),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            Err(Error::InputNotFound(path.to_path_buf()))
        }
        Err(err) => Err(Error::Io(err)),
    }
}

/// Split a report file using the built-in extractors
pub fn split_file(path: &Path) -> Result<SplitReport> {
    split_reader(open_report(path)?)
}
