//! Compare command - diff an order against its confirmation.

use std::fs;
use std::path::PathBuf;

use clap::Args;
use console::style;

use ordiff_core::compare::OrderComparator;
use ordiff_core::models::report::DifferenceReport;

use super::{load_config, load_document};

/// Arguments for the compare command.
#[derive(Args)]
pub struct CompareArgs {
    /// Original order (PDF, layout-preserved text, or JSON)
    #[arg(required = true)]
    original: PathBuf,

    /// Supplier confirmation (PDF, layout-preserved text, or JSON)
    #[arg(required = true)]
    confirmation: PathBuf,

    /// Relative tolerance for the unit-of-measure mismatch note
    #[arg(short, long)]
    tolerance: Option<f64>,

    /// Absolute epsilon for field comparison (default: exact equality)
    #[arg(long, conflicts_with = "exact")]
    epsilon: Option<f64>,

    /// Compare fields exactly, ignoring any configured epsilon
    #[arg(long)]
    exact: bool,

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
    /// Plain text summary
    Text,
}

pub fn run(args: CompareArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let mut config = load_config(config_path)?;
    if let Some(tolerance) = args.tolerance {
        config.compare.tolerance = tolerance;
    }
    if let Some(epsilon) = args.epsilon {
        config.compare.epsilon = Some(epsilon);
    }
    if args.exact {
        config.compare.epsilon = None;
    }

    let original = load_document(&args.original, &config)?;
    let confirmation = load_document(&args.confirmation, &config)?;

    let report = OrderComparator::from_config(&config.compare).compare(&original, &confirmation);

    let output = match args.format {
        OutputFormat::Json => serde_json::to_string_pretty(&report)?,
        OutputFormat::Text => format_text(&report),
    };

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Report written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    Ok(())
}

fn format_text(report: &DifferenceReport) -> String {
    if report.is_empty() {
        return format!("{} Documents match: no discrepancies found\n", style("✓").green());
    }

    let mut output = String::new();

    if !report.differences.is_empty() {
        output.push_str(&format!(
            "{} Differing lines ({}):\n",
            style("ℹ").blue(),
            report.differences.len()
        ));
        for diff in &report.differences {
            output.push_str(&format!("  {}\n", diff.code));
            if let Some((o, c)) = diff.quantity {
                output.push_str(&format!("    quantita:        {} -> {}\n", o, c));
            }
            if let Some((o, c)) = diff.unit_price {
                output.push_str(&format!("    prezzo_unitario: {} -> {}\n", o, c));
            }
            if let Some((o, c)) = diff.line_total {
                output.push_str(&format!("    totale_riga:     {} -> {}\n", o, c));
            }
            for note in &diff.notes {
                output.push_str(&format!("    {} {}\n", style("nota:").yellow(), note));
            }
        }
    }

    if !report.missing_in_confirmation.is_empty() {
        output.push_str(&format!(
            "{} Missing in confirmation ({}):\n",
            style("ℹ").blue(),
            report.missing_in_confirmation.len()
        ));
        for row in &report.missing_in_confirmation {
            output.push_str(&format!("  {} {}\n", row.code, row.description));
        }
    }

    if !report.extra_in_confirmation.is_empty() {
        output.push_str(&format!(
            "{} Extra in confirmation ({}):\n",
            style("ℹ").blue(),
            report.extra_in_confirmation.len()
        ));
        for row in &report.extra_in_confirmation {
            output.push_str(&format!("  {} {}\n", row.code, row.description));
        }
    }

    output
}
