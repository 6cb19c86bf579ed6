use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::model::Sex;

#[derive(Debug, Parser)]
#[command(name = "liftscope", version)]
#[command(about = "Explore best-score distributions of OpenIPF powerlifting results")]
pub struct Cli {
    #[command(flatten)]
    pub data: DataArgs,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, Args)]
pub struct DataArgs {
    #[arg(
        long,
        global = true,
        default_value = "openipf.csv",
        value_name = "FILE",
        help = "Results dataset (.csv, .tsv, optionally .gz)"
    )]
    pub data: PathBuf,

    #[arg(long, global = true, default_value = "FFForce", help = "Federation to keep")]
    pub federation: String,

    #[arg(long, global = true, default_value = "M", help = "Sex to show first (M|F)")]
    pub sex: Sex,

    #[arg(
        long = "class",
        global = true,
        default_value = "93",
        value_name = "CLASS",
        help = "Weight class to show first, e.g. 93 or 84+"
    )]
    pub weight_class: String,

    #[arg(long, global = true, default_value_t = 30, help = "Histogram bin count")]
    pub bins: usize,

    #[arg(long, global = true, default_value = "GL Points", help = "Score axis label")]
    pub score_label: String,

    #[arg(long, global = true, default_value = "Name", value_name = "COLUMN")]
    pub name_column: String,

    #[arg(long, global = true, default_value = "Sex", value_name = "COLUMN")]
    pub sex_column: String,

    #[arg(long, global = true, default_value = "WeightClassKg", value_name = "COLUMN")]
    pub class_column: String,

    #[arg(long, global = true, default_value = "Federation", value_name = "COLUMN")]
    pub federation_column: String,

    #[arg(long, global = true, default_value = "Goodlift", value_name = "COLUMN")]
    pub score_column: String,

    #[arg(
        long,
        global = true,
        value_parser = parse_delimiter,
        help = "Field delimiter; one ASCII character or 'tab'"
    )]
    pub delimiter: Option<u8>,

    #[arg(long, global = true, value_name = "FILE", help = "Write logs to this file")]
    pub log_file: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    #[command(about = "Interactive terminal session (default)")]
    Explore {
        #[arg(
            long,
            default_value = ".",
            value_name = "DIR",
            help = "Directory for Ctrl-S plot exports"
        )]
        export_dir: PathBuf,
    },
    #[command(about = "Render one filter and optional search without a terminal UI")]
    Report {
        #[arg(long, help = "Athlete name to search (accent-insensitive substring)")]
        name: Option<String>,

        #[arg(long, value_name = "FILE", help = "Write the plot as SVG")]
        svg: Option<PathBuf>,

        #[arg(long, value_name = "FILE", help = "Write the plot data as JSON")]
        json: Option<PathBuf>,
    },
}

pub fn parse_delimiter(raw: &str) -> Result<u8, String> {
    match raw {
        "tab" | "\\t" | "\t" => Ok(b'\t'),
        _ => {
            let bytes = raw.as_bytes();
            if bytes.len() == 1 && bytes[0].is_ascii() {
                Ok(bytes[0])
            } else {
                Err(format!("invalid delimiter '{raw}' (use one ASCII character or 'tab')"))
            }
        }
    }
}
