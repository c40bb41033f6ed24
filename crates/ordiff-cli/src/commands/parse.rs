//! Parse command - extract line items from a single document.

use std::fs;
use std::path::PathBuf;

use clap::Args;
use console::style;

use ordiff_core::models::order::{Document, LineItem};

use super::{load_config, load_document};

/// Arguments for the parse command.
#[derive(Args)]
pub struct ParseArgs {
    /// Input file (PDF, layout-preserved text, or JSON)
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV output
    Csv,
}

pub fn run(args: ParseArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;
    let rows = load_document(&args.input, &config)?;

    let output = match args.format {
        OutputFormat::Json => serde_json::to_string_pretty(&Document::new(rows))?,
        OutputFormat::Csv => format_csv(&rows)?,
    };

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    Ok(())
}

fn format_csv(rows: &[LineItem]) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record([
        "codice",
        "codice_fornitore",
        "descrizione",
        "unita_misura",
        "quantita",
        "prezzo_unitario",
        "importo",
    ])?;

    for row in rows {
        wtr.write_record([
            row.code.clone(),
            row.supplier_code.clone(),
            row.description.clone(),
            row.unit_of_measure.clone().unwrap_or_default(),
            row.quantity.map(|v| v.to_string()).unwrap_or_default(),
            row.unit_price.map(|v| v.to_string()).unwrap_or_default(),
            row.line_total.map(|v| v.to_string()).unwrap_or_default(),
        ])?;
    }

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}
