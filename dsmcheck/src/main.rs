//! dsmcheck CLI - Validate DSM node lists and matrices
//!
//! ```bash
//! dsmcheck nodes plant.nodes.csv                        # Validate node lists
//! dsmcheck matrix plant_DSM.csv                         # Validate binary matrices
//! dsmcheck dsm --nodes plant.nodes.csv --matrix plant_DSM.csv
//! dsmcheck --format json -d , matrix a.csv b.csv        # JSON reports
//! dsmcheck -d auto nodes export.csv                     # Detect the delimiter
//! ```
//!
//! Exit status is 0 when every file is valid and 1 otherwise.

use clap::{Parser, Subcommand, ValueEnum};
use dsmcheck::{check_file, sniff_delimiter, CsvKind, ValidationOptions, ValidationReport};
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "dsmcheck")]
#[command(about = "Validate DSM node lists and binary matrices stored as CSV", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Field delimiter: a single character, `tab`, or `auto` to detect it per file
    #[arg(
        short,
        long,
        global = true,
        env = "DSMCHECK_DELIMITER",
        default_value = ";",
        value_parser = parse_delimiter
    )]
    delimiter: Delimiter,

    /// Report format
    #[arg(long, global = true, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Log level used when RUST_LOG is unset
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate node list files (header with a unique, non-empty `name` column)
    Nodes {
        /// Node CSV files
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },

    /// Validate matrix files (square, only 0 and 1)
    Matrix {
        /// Matrix CSV files
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },

    /// Validate a node list and its matrix together
    Dsm {
        /// Node CSV file
        #[arg(long)]
        nodes: PathBuf,

        /// Matrix CSV file
        #[arg(long)]
        matrix: PathBuf,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Delimiter {
    Fixed(char),
    Auto,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn parse_delimiter(raw: &str) -> Result<Delimiter, String> {
    match raw {
        "auto" => Ok(Delimiter::Auto),
        "tab" | "\\t" => Ok(Delimiter::Fixed('\t')),
        _ => {
            let mut chars = raw.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Ok(Delimiter::Fixed(c)),
                _ => Err(format!("expected a single character, `tab` or `auto`, got '{}'", raw)),
            }
        }
    }
}

fn main() {
    // Load .env file (if present)
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    let targets: Vec<(CsvKind, PathBuf)> = match cli.command {
        Commands::Nodes { files } => files.into_iter().map(|f| (CsvKind::Nodes, f)).collect(),
        Commands::Matrix { files } => files.into_iter().map(|f| (CsvKind::Matrix, f)).collect(),
        Commands::Dsm { nodes, matrix } => vec![(CsvKind::Nodes, nodes), (CsvKind::Matrix, matrix)],
    };

    match run(&targets, cli.delimiter, cli.format) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("❌ Error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Logs go to stderr; RUST_LOG overrides `--log-level`.
fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

/// Validate every target, print the reports and tell whether all passed.
fn run(
    targets: &[(CsvKind, PathBuf)],
    delimiter: Delimiter,
    format: OutputFormat,
) -> Result<bool, Box<dyn std::error::Error>> {
    let mut reports = Vec::with_capacity(targets.len());

    for (kind, path) in targets {
        let separator = match delimiter {
            Delimiter::Fixed(c) => c,
            Delimiter::Auto => sniff_delimiter(path)?,
        };
        let options = ValidationOptions::default().with_delimiter(separator);
        reports.push(check_file(path, *kind, &options)?);
    }

    match format {
        OutputFormat::Text => reports.iter().for_each(print_report),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&reports)?),
    }

    Ok(reports.iter().all(|r| r.valid))
}

fn print_report(report: &ValidationReport) {
    match &report.error {
        None => println!("✅ {} ({}): valid", report.file, report.kind),
        Some(error) => println!("❌ {} ({}): {}", report.file, report.kind, error),
    }
}
