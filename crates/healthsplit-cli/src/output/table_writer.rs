use super::text::render_text;
use crate::types::TableFormat;
use anyhow::{Context, Result};
use healthsplit_engine::Table;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// `{stem}_output_{date}.{ext}`, with path separators in the date replaced
pub fn output_file_name(stem: &str, table: &Table, format: TableFormat) -> String {
    let date = table.file_date().replace(['/', '\\'], "-");
    format!("{}_output_{}.{}", stem, date, format.extension())
}

/// Encode a table into `writer`
pub fn write_table<W: Write>(mut writer: W, table: &Table, format: TableFormat) -> Result<()> {
    match format {
        TableFormat::Csv => write_delimited(writer, table, b','),
        TableFormat::Tsv => write_delimited(writer, table, b'\t'),
        TableFormat::Text => {
            writer.write_all(render_text(table).as_bytes())?;
            writer.flush()?;
            Ok(())
        }
        TableFormat::Json => write_json(writer, table),
    }
}

/// Write a table into `dir`, returning the path of the new file
pub fn write_table_file(
    dir: &Path,
    stem: &str,
    table: &Table,
    format: TableFormat,
) -> Result<PathBuf> {
    let path = dir.join(output_file_name(stem, table, format));
    let file = File::create(&path)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    write_table(BufWriter::new(file), table, format)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(path)
}

fn write_delimited<W: Write>(writer: W, table: &Table, delimiter: u8) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(writer);

    wtr.write_record(table.columns())?;
    for row in &table.rows {
        wtr.write_record(row.values())?;
    }

    wtr.flush()?;
    Ok(())
}

fn write_json<W: Write>(mut writer: W, table: &Table) -> Result<()> {
    let columns = table.columns();
    let records: Vec<serde_json::Map<String, serde_json::Value>> = table
        .rows
        .iter()
        .map(|row| {
            columns
                .iter()
                .zip(row.values())
                .map(|(column, value)| (column.to_string(), value.into()))
                .collect()
        })
        .collect();

    serde_json::to_writer_pretty(&mut writer, &records)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use healthsplit_types::{Category, ReportMetadata, Row, StorageFields};

    fn storage_table() -> Table {
        let mut table = Table::new(Category::Storage);
        table.extend([Row::storage(
            ReportMetadata::new("web01", "2025-01-01", "abc-123"),
            StorageFields {
                filesystem: "/dev/sda1".to_string(),
                size: "100G".to_string(),
                used: "40G".to_string(),
                avail: "60G".to_string(),
                use_percent: "40%".to_string(),
                mounted_on: "/".to_string(),
            },
        )]);
        table
    }

    fn render(table: &Table, format: TableFormat) -> String {
        let mut buf = Vec::new();
        write_table(&mut buf, table, format).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_output_file_name() {
        let table = storage_table();
        assert_eq!(
            output_file_name("disk_storage", &table, TableFormat::Text),
            "disk_storage_output_2025-01-01.txt"
        );

        let empty = Table::new(Category::Services);
        assert_eq!(
            output_file_name("failed_services", &empty, TableFormat::Csv),
            "failed_services_output_NO-Date.csv"
        );
    }

    #[test]
    fn test_output_file_name_sanitizes_date() {
        let mut table = Table::new(Category::Pending);
        table.extend([Row::line(
            ReportMetadata::new("web01", "11/06/2025", "abc"),
            "openssl",
        )]);
        assert_eq!(
            output_file_name("pending_updates", &table, TableFormat::Json),
            "pending_updates_output_11-06-2025.json"
        );
    }

    #[test]
    fn test_csv() {
        insta::assert_snapshot!(render(&storage_table(), TableFormat::Csv), @r"
        Id,Hostname,Date,Filesystem,Size,Used,Avail,Use%,Mounted on
        abc-123,web01,2025-01-01,/dev/sda1,100G,40G,60G,40%,/
        ");
    }

    #[test]
    fn test_tsv_quotes_nothing_for_plain_values() {
        let out = render(&storage_table(), TableFormat::Tsv);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(
            lines[0],
            "Id\tHostname\tDate\tFilesystem\tSize\tUsed\tAvail\tUse%\tMounted on"
        );
        assert_eq!(lines[1], "abc-123\tweb01\t2025-01-01\t/dev/sda1\t100G\t40G\t60G\t40%\t/");
    }

    #[test]
    fn test_csv_quotes_values_with_commas() {
        let mut table = Table::new(Category::Critical);
        table.extend([Row::line(
            ReportMetadata::new("web01", "2025-01-01", "abc"),
            "kernel: I/O error, dev sda",
        )]);

        let out = render(&table, TableFormat::Csv);
        assert!(out.ends_with("abc,web01,2025-01-01,\"kernel: I/O error, dev sda\"\n"));
    }

    #[test]
    fn test_json() {
        let out = render(&storage_table(), TableFormat::Json);
        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();

        assert_eq!(parsed.as_array().map(Vec::len), Some(1));
        assert_eq!(parsed[0]["Id"], "abc-123");
        assert_eq!(parsed[0]["Use%"], "40%");
        assert_eq!(parsed[0]["Mounted on"], "/");
    }

    #[test]
    fn test_empty_table_writes_header_only() {
        let empty = Table::new(Category::Ssh);
        assert_eq!(
            render(&empty, TableFormat::Csv),
            "Id,Hostname,Date,Failed SSH Attempt\n"
        );
        assert_eq!(render(&empty, TableFormat::Json).trim(), "[]");
    }

    #[test]
    fn test_write_table_file() {
        let dir = tempfile::tempdir().unwrap();
        let path =
            write_table_file(dir.path(), "disk_storage", &storage_table(), TableFormat::Csv)
                .unwrap();

        assert_eq!(path, dir.path().join("disk_storage_output_2025-01-01.csv"));
        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), 2);
    }
}
