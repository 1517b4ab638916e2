//! Section-segmenting scanner.
//!
//! Reports from many hosts are concatenated with no delimiter between them.
//! The scanner walks the lines once, tracks the metadata seen so far and the
//! section currently open, and hands out one [`LineBatch`] per section.
//!
//! Two ways to drive it:
//! - push: [`SectionScanner::feed`] one line at a time, then
//!   [`SectionScanner::finish`]
//! - pull: [`scan_lines`] wraps any line iterator into a [`Batches`] iterator

use crate::classify::{LineKind, classify_line};
use healthsplit_types::{Category, LineBatch, ReportMetadata};
use serde::Serialize;
use std::iter::FusedIterator;
use tracing::{debug, trace};

/// Which section, if any, content lines currently belong to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScanState {
    /// No section header seen yet; content is discarded at the next flush
    #[default]
    NoSection,
    InSection(Category),
}

impl ScanState {
    pub fn category(self) -> Option<Category> {
        match self {
            ScanState::NoSection => None,
            ScanState::InSection(category) => Some(category),
        }
    }
}

/// Line counters collected during one scan
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ScanStats {
    pub lines: usize,
    pub blank_lines: usize,
    pub metadata_lines: usize,
    pub header_lines: usize,
    pub content_lines: usize,
    /// Content lines dropped because no section was open
    pub discarded_lines: usize,
    pub batches: usize,
    /// Batches flushed while hostname, date or id was still unset
    pub incomplete_batches: usize,
}

/// Single-pass state machine over report lines.
///
/// One instance per input stream: `finish` consumes the scanner so state
/// from one report can never leak into the next.
#[derive(Debug, Default)]
pub struct SectionScanner {
    state: ScanState,
    metadata: ReportMetadata,
    pending: Vec<String>,
    stats: ScanStats,
}

impl SectionScanner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stats(&self) -> &ScanStats {
        &self.stats
    }

    /// Apply one raw line. Returns the batch closed by this line, if any.
    pub fn feed(&mut self, line: &str) -> Option<LineBatch> {
        self.stats.lines += 1;

        let kind = classify_line(line);
        trace!(?kind, "classified line");

        match kind {
            LineKind::Blank => {
                self.stats.blank_lines += 1;
                None
            }
            LineKind::Metadata { field, value } => {
                self.stats.metadata_lines += 1;
                match value {
                    Some(value) => self.metadata.set(field, value),
                    None => debug!(%field, "metadata line without a value, keeping previous"),
                }
                None
            }
            LineKind::SectionHeader(category) => {
                self.stats.header_lines += 1;
                let batch = self.flush();
                self.state = ScanState::InSection(category);
                batch
            }
            LineKind::Content(text) => {
                self.stats.content_lines += 1;
                self.pending.push(text.to_string());
                None
            }
        }
    }

    /// Close the stream: flush the last section and return final counters
    pub fn finish(mut self) -> (Option<LineBatch>, ScanStats) {
        let batch = self.flush();
        (batch, self.stats)
    }

    fn flush(&mut self) -> Option<LineBatch> {
        if self.pending.is_empty() {
            return None;
        }

        let lines = std::mem::take(&mut self.pending);
        let Some(category) = self.state.category() else {
            self.stats.discarded_lines += lines.len();
            debug!(
                count = lines.len(),
                "discarding content lines seen before any section header"
            );
            return None;
        };

        self.stats.batches += 1;
        if !self.metadata.is_complete() {
            self.stats.incomplete_batches += 1;
            debug!(%category, metadata = %self.metadata, "batch tagged with incomplete metadata");
        }
        debug!(
            %category,
            lines = lines.len(),
            host = %self.metadata.hostname,
            "flushing batch"
        );
        Some(LineBatch {
            category,
            lines,
            metadata: self.metadata.clone(),
        })
    }
}

/// Pull-style adapter: yields batches in flush order
pub struct Batches<I> {
    lines: I,
    scanner: Option<SectionScanner>,
    stats: ScanStats,
}

impl<I> Batches<I> {
    /// Counters so far; final once the iterator is exhausted
    pub fn stats(&self) -> ScanStats {
        match &self.scanner {
            Some(scanner) => *scanner.stats(),
            None => self.stats,
        }
    }
}

impl<I, S> Iterator for Batches<I>
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
    type Item = LineBatch;

    fn next(&mut self) -> Option<LineBatch> {
        let scanner = self.scanner.as_mut()?;
        for line in self.lines.by_ref() {
            if let Some(batch) = scanner.feed(line.as_ref()) {
                return Some(batch);
            }
        }

        let (batch, stats) = self.scanner.take()?.finish();
        self.stats = stats;
        batch
    }
}

impl<I, S> FusedIterator for Batches<I>
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
}

/// Scan an in-memory sequence of lines
pub fn scan_lines<I>(lines: I) -> Batches<I::IntoIter>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    Batches {
        lines: lines.into_iter(),
        scanner: Some(SectionScanner::new()),
        stats: ScanStats::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn batches(input: &str) -> Vec<LineBatch> {
        scan_lines(input.lines()).collect()
    }

    #[test]
    fn test_initial_state() {
        let scanner = SectionScanner::new();
        assert_eq!(scanner.state, ScanState::NoSection);
        assert_eq!(scanner.stats(), &ScanStats::default());
    }

    #[test]
    fn test_header_switches_state_without_emitting() {
        let mut scanner = SectionScanner::new();
        assert_eq!(scanner.feed("--- FAILED SERVICES ---"), None);
        assert_eq!(scanner.state, ScanState::InSection(Category::Services));
        assert_eq!(scanner.state.category(), Some(Category::Services));
    }

    #[test]
    fn test_push_interface_emits_on_next_header() {
        let mut scanner = SectionScanner::new();
        scanner.feed("--- Host: web01");
        scanner.feed("--- FAILED SERVICES ---");
        assert_eq!(scanner.feed("nginx.service"), None);

        let batch = scanner
            .feed("--- CRITICAL LOGS ---")
            .expect("header should close the services section");
        assert_eq!(batch.category, Category::Services);
        assert_eq!(batch.lines, vec!["nginx.service"]);
        assert_eq!(batch.metadata.hostname, "web01");

        scanner.feed("kernel: Out of memory");
        let (last, stats) = scanner.finish();
        let last = last.expect("final flush");
        assert_eq!(last.category, Category::Critical);
        assert_eq!(stats.batches, 2);
        assert_eq!(stats.header_lines, 2);
    }

    #[test]
    fn test_metadata_snapshot_taken_at_flush() {
        let input = "\
--- Host: web01
--- FAILED SERVICES ---
nginx.service
--- Date: 2025-01-02
cron.service
";
        let out = batches(input);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].lines, vec!["nginx.service", "cron.service"]);
        assert_eq!(out[0].metadata.hostname, "web01");
        assert_eq!(out[0].metadata.date, "2025-01-02");
        assert_eq!(out[0].metadata.id, "N/A");
    }

    #[test]
    fn test_content_before_first_header_is_discarded() {
        let input = "\
system health report v2
generated by cron
--- Host: web01
--- PENDING UPDATES ---
openssl 3.0.13
";
        let mut iter = scan_lines(input.lines());
        let out: Vec<_> = iter.by_ref().collect();

        assert_eq!(out.len(), 1);
        assert_eq!(out[0].category, Category::Pending);
        assert_eq!(out[0].lines, vec!["openssl 3.0.13"]);

        let stats = iter.stats();
        assert_eq!(stats.discarded_lines, 2);
        assert_eq!(stats.content_lines, 3);
        assert_eq!(stats.batches, 1);
    }

    #[test]
    fn test_only_preamble_yields_nothing() {
        let out = batches("loose line\nanother loose line\n");
        assert!(out.is_empty());
    }

    #[test]
    fn test_header_at_end_of_stream_emits_nothing() {
        let out = batches("--- Host: web01\n--- FAILED SERVICES ---\n");
        assert!(out.is_empty());
    }

    #[test]
    fn test_repeated_header_emits_no_empty_batch() {
        let input = "\
--- FAILED SERVICES ---
--- FAILED SERVICES ---
nginx.service
";
        let out = batches(input);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].lines, vec!["nginx.service"]);
    }

    #[test]
    fn test_blank_lines_are_ignored() {
        let input = "\n--- FAILED SERVICES ---\n\n   \nnginx.service\n\n";
        let mut iter = scan_lines(input.lines());
        let out: Vec<_> = iter.by_ref().collect();

        assert_eq!(out.len(), 1);
        assert_eq!(out[0].lines, vec!["nginx.service"]);
        assert_eq!(iter.stats().blank_lines, 4);
    }

    #[test]
    fn test_malformed_metadata_keeps_previous_value() {
        let input = "\
--- Host: web01
--- Host:
--- CRITICAL LOGS ---
disk failure
";
        let out = batches(input);
        assert_eq!(out[0].metadata.hostname, "web01");
    }

    #[test]
    fn test_metadata_carries_across_hosts_field_by_field() {
        let input = "\
--- Host: web01
--- Date: 2025-01-01
--- UUID: aaa
--- FAILED SERVICES ---
nginx.service
--- CRITICAL LOGS ---
--- Host: db01
--- UUID: bbb
disk failure
";
        let out = batches(input);
        assert_eq!(out.len(), 2);
        assert_eq!(
            out[0].metadata,
            ReportMetadata::new("web01", "2025-01-01", "aaa")
        );
        // Date was never repeated for db01, so the previous value sticks
        assert_eq!(
            out[1].metadata,
            ReportMetadata::new("db01", "2025-01-01", "bbb")
        );
    }

    #[test]
    fn test_metadata_before_next_header_applies_to_open_section() {
        let input = "\
--- Host: web01
--- FAILED SERVICES ---
nginx.service
--- Host: db01
--- FAILED SERVICES ---
postgresql.service
";
        let out = batches(input);
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].metadata.hostname, "db01");
        assert_eq!(out[1].metadata.hostname, "db01");
    }

    #[test]
    fn test_incomplete_metadata_is_counted() {
        let input = "\
--- FAILED SERVICES ---
orphan.service
--- CRITICAL LOGS ---
kernel: Out of memory
--- Host: web01
--- Date: 2025-01-01
--- UUID: aaa
";
        let mut iter = scan_lines(input.lines());
        let out: Vec<LineBatch> = iter.by_ref().collect();

        assert_eq!(out.len(), 2);
        assert_eq!(out[0].metadata, ReportMetadata::default());
        assert!(out[1].metadata.is_complete());
        assert_eq!(iter.stats().batches, 2);
        assert_eq!(iter.stats().incomplete_batches, 1);
    }

    #[test]
    fn test_iterator_is_fused() {
        let mut iter = scan_lines(["--- FAILED SERVICES ---", "nginx.service"]);
        assert!(iter.next().is_some());
        assert!(iter.next().is_none());
        assert!(iter.next().is_none());
    }
}
