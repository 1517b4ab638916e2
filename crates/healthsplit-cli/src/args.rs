use crate::types::{LogLevel, OutputFormat, TableFormat};
use clap::{Parser, Subcommand};
use healthsplit_types::Category;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "healthsplit")]
#[command(about = "Split concatenated system health reports into per-category tables", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, help = "Config file (defaults to the user config directory)")]
    pub config: Option<PathBuf>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write one table file per report category
    Split {
        input: PathBuf,

        #[arg(long)]
        output_dir: Option<PathBuf>,

        #[arg(long)]
        output_format: Option<TableFormat>,

        #[arg(
            long = "category",
            value_name = "CATEGORY",
            help = "Only write these categories (storage, services, critical, pending, ssh)"
        )]
        categories: Vec<Category>,

        #[arg(long, help = "Do not write files for categories without rows")]
        skip_empty: bool,
    },

    /// Show how a report is segmented into sections
    Inspect {
        input: PathBuf,

        #[arg(long, help = "Print the content lines of every batch")]
        lines: bool,
    },
}
