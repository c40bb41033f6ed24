//! Difference report models produced by the comparator.

use serde::{Deserialize, Serialize};

use super::order::LineItem;

/// Per-field discrepancies for one code present in both documents.
///
/// Each discrepant field carries the `(original, confirmation)` value pair;
/// a field key is absent when the two sides agree (or either side has no
/// value). The record is only emitted when at least one field differs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Discrepancy {
    /// Article code the discrepancies refer to.
    #[serde(rename = "codice")]
    pub code: String,

    /// Quantity pair, when the two sides disagree.
    #[serde(rename = "quantita", default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<(f64, f64)>,

    /// Unit price pair, when the two sides disagree.
    #[serde(rename = "prezzo_unitario", default, skip_serializing_if = "Option::is_none")]
    pub unit_price: Option<(f64, f64)>,

    /// Line total pair, when the two sides disagree.
    #[serde(rename = "totale_riga", default, skip_serializing_if = "Option::is_none")]
    pub line_total: Option<(f64, f64)>,

    /// Informational notes, e.g. the unit-of-measure mismatch flag. Notes
    /// never suppress the raw field discrepancies above.
    #[serde(rename = "nota", default, skip_serializing_if = "Vec::is_empty")]
    pub notes: Vec<String>,
}

impl Discrepancy {
    /// Create an empty discrepancy record for a code.
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            ..Default::default()
        }
    }

    /// Whether any field actually differs. A bare code with notes only is
    /// not worth reporting.
    pub fn has_differences(&self) -> bool {
        self.quantity.is_some() || self.unit_price.is_some() || self.line_total.is_some()
    }
}

/// Structured result of comparing an original order against its
/// confirmation. Built once per comparison call and never mutated after.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DifferenceReport {
    /// Codes present in both documents with at least one discrepant field.
    #[serde(rename = "differenze")]
    pub differences: Vec<Discrepancy>,

    /// Original line items whose code never appears in the confirmation.
    #[serde(rename = "righe_mancanti_nella_conferma")]
    pub missing_in_confirmation: Vec<LineItem>,

    /// Confirmation line items whose code never appears in the original.
    #[serde(rename = "righe_extra_nella_conferma")]
    pub extra_in_confirmation: Vec<LineItem>,
}

impl DifferenceReport {
    /// True when the two documents matched exactly.
    pub fn is_empty(&self) -> bool {
        self.differences.is_empty()
            && self.missing_in_confirmation.is_empty()
            && self.extra_in_confirmation.is_empty()
    }
}
