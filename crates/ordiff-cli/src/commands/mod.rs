//! CLI subcommands and shared input loading.

pub mod compare;
pub mod config;
pub mod parse;

use std::fs;
use std::path::Path;

use tracing::{debug, info};

use ordiff_core::extract::TableScanner;
use ordiff_core::models::config::OrdiffConfig;
use ordiff_core::models::order::{Document, LineItem};

/// Load configuration from the given path, or defaults when absent.
pub fn load_config(config_path: Option<&str>) -> anyhow::Result<OrdiffConfig> {
    match config_path {
        Some(path) => {
            debug!("loading config from {}", path);
            Ok(OrdiffConfig::from_file(Path::new(path))?)
        }
        None => Ok(OrdiffConfig::default()),
    }
}

/// Load one document's line items from a PDF, a layout-preserved text file,
/// or an already-parsed `{"righe": [...]}` JSON file.
pub fn load_document(input: &Path, config: &OrdiffConfig) -> anyhow::Result<Vec<LineItem>> {
    if !input.exists() {
        anyhow::bail!("Input file not found: {}", input.display());
    }

    let extension = input
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    let rows = match extension.as_str() {
        "json" => {
            let content = fs::read_to_string(input)?;
            let document: Document = serde_json::from_str(&content)?;
            document.rows
        }
        "pdf" => {
            let text = ordiff_core::convert(input)?;
            TableScanner::with_layout(config.layout.clone()).scan(&text)
        }
        _ => {
            // Anything else is treated as layout-preserved plain text.
            let text = fs::read_to_string(input)?;
            TableScanner::with_layout(config.layout.clone()).scan(&text)
        }
    };

    info!("Loaded {} line items from {}", rows.len(), input.display());
    Ok(rows)
}
