//! labelgen - CLI tool to convert product CSV files into barcode label PDFs.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use labelgen_core::{
    convert_csv_to_pdf, parser, validation, LabelRecord, Symbology, OUTPUT_FILENAME,
};

/// Convert a Name/Barcode CSV into a printable label PDF (one label per page).
#[derive(Parser, Debug)]
#[command(name = "labelgen")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input CSV file path
    #[arg(short, long)]
    input: PathBuf,

    /// Output PDF file path
    #[arg(short, long, default_value = OUTPUT_FILENAME)]
    output: PathBuf,

    /// Barcode symbology channel
    #[arg(short, long, value_enum, default_value = "ean13")]
    symbology: SymbologyArg,

    /// Validate only, don't generate output
    #[arg(long)]
    validate: bool,

    /// Output parsed label records as JSON
    #[arg(long)]
    debug: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

/// CLI-facing symbology selector.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum SymbologyArg {
    /// EAN-13 (numeric values)
    Ean13,
    /// Code 128 set B (printable ASCII values)
    Code128,
}

impl From<SymbologyArg> for Symbology {
    fn from(arg: SymbologyArg) -> Self {
        match arg {
            SymbologyArg::Ean13 => Symbology::Ean13,
            SymbologyArg::Code128 => Symbology::Code128,
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let symbology = Symbology::from(args.symbology);

    info!("Processing: {} ({})", args.input.display(), symbology);

    // Read the input file
    let rows = parser::read_rows(&args.input)
        .with_context(|| format!("Failed to read {}", args.input.display()))?;

    info!("Parsed {} row(s)", rows.len());

    // Validate; every applicable message is reported before bailing
    let messages = validation::validate_rows(&rows);
    for message in &messages {
        error!("{}", message);
    }
    if !messages.is_empty() {
        anyhow::bail!("Validation failed");
    }

    // Debug output
    if args.debug {
        let records: Vec<LabelRecord> = rows[1..].iter().map(|row| LabelRecord::from_row(row)).collect();
        let json = serde_json::to_string_pretty(&records)?;
        println!("{}", json);
        return Ok(());
    }

    // Validate-only mode
    if args.validate {
        info!("Validation passed");
        return Ok(());
    }

    // Generate; nothing is written unless the whole run succeeds
    let pdf = convert_csv_to_pdf(&args.input, symbology)?;

    std::fs::write(&args.output, &pdf)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;

    info!("Generated: {}", args.output.display());

    Ok(())
}
