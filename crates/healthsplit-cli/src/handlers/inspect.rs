use crate::output::console::{Inspection, print_inspection};
use crate::types::OutputFormat;
use anyhow::Result;
use std::path::Path;

pub fn handle(input: &Path, show_lines: bool, format: OutputFormat) -> Result<()> {
    let reader = healthsplit_engine::open_report(input)?;

    let mut batches = Vec::new();
    let stats = healthsplit_engine::scan_reader(reader, |batch| batches.push(batch))?;

    let inspection = Inspection {
        input: input.to_path_buf(),
        batches: &batches,
        stats,
    };
    print_inspection(&inspection, show_lines, format)
}
