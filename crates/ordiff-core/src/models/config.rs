//! Configuration structures for extraction and comparison.

use serde::{Deserialize, Serialize};

/// Main configuration for the ordiff pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OrdiffConfig {
    /// Table layout markers for extraction.
    pub layout: TableLayout,

    /// Comparison thresholds.
    pub compare: CompareConfig,
}

/// Markers identifying the item table inside the layout-preserved text.
///
/// These are tied to one document layout convention; scanning a different
/// supplier's format means swapping the markers, not the scanner.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TableLayout {
    /// Substrings that must all appear on the header line opening the table.
    pub header_markers: Vec<String>,

    /// Substring opening the totals section; nothing after it is scanned.
    pub terminator: String,
}

impl Default for TableLayout {
    fn default() -> Self {
        Self {
            header_markers: vec![
                "Codice Fornitore".to_string(),
                "Descrizione".to_string(),
            ],
            terminator: "Totale Merce".to_string(),
        }
    }
}

/// Comparison thresholds.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CompareConfig {
    /// Relative-difference threshold on line totals below which differing
    /// quantities are flagged as a possible unit-of-measure mismatch.
    pub tolerance: f64,

    /// Optional absolute epsilon for field-level comparison. `None` means
    /// exact equality, matching the printed values.
    pub epsilon: Option<f64>,
}

impl Default for CompareConfig {
    fn default() -> Self {
        Self {
            tolerance: 0.05,
            epsilon: None,
        }
    }
}

impl OrdiffConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<(), std::io::Error> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))?;
        std::fs::write(path, content)
    }
}
