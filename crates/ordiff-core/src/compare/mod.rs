//! Keyed comparison of two parsed order documents.

use indexmap::IndexMap;
use tracing::debug;

use crate::models::config::CompareConfig;
use crate::models::order::LineItem;
use crate::models::report::{DifferenceReport, Discrepancy};

/// Note attached when quantities disagree but line totals nearly agree.
const UNIT_MISMATCH_NOTE: &str = "Possibile differenza unità di misura (pezzi vs cartoni).";

/// Compares an original order against a supplier confirmation.
///
/// The comparison is a pure function of the two sequences: items are joined
/// on their trimmed code (last write wins on duplicates), the numeric fields
/// of matched pairs are compared one by one, and unmatched items land in the
/// missing/extra lists. Output order follows each side's own insertion
/// order.
pub struct OrderComparator {
    tolerance: f64,
    epsilon: Option<f64>,
}

impl OrderComparator {
    /// Comparator with the default tolerance (0.05) and exact field
    /// equality.
    pub fn new() -> Self {
        Self {
            tolerance: 0.05,
            epsilon: None,
        }
    }

    /// Comparator configured from a [`CompareConfig`].
    pub fn from_config(config: &CompareConfig) -> Self {
        Self {
            tolerance: config.tolerance,
            epsilon: config.epsilon,
        }
    }

    /// Set the relative-difference threshold for the unit-of-measure
    /// mismatch note. The tolerance never suppresses field discrepancies.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Set an absolute epsilon for field comparison. `None` compares
    /// exactly, which is the faithful reading of values printed on paper;
    /// an epsilon absorbs formatting artifacts at the caller's discretion.
    pub fn with_epsilon(mut self, epsilon: Option<f64>) -> Self {
        self.epsilon = epsilon;
        self
    }

    fn field_differs(&self, original: f64, confirmation: f64) -> bool {
        match self.epsilon {
            Some(epsilon) => (original - confirmation).abs() > epsilon,
            None => original != confirmation,
        }
    }

    /// Value pair for one field, when both sides have a value and they
    /// disagree.
    fn value_pair(&self, original: Option<f64>, confirmation: Option<f64>) -> Option<(f64, f64)> {
        match (original, confirmation) {
            (Some(o), Some(c)) if self.field_differs(o, c) => Some((o, c)),
            _ => None,
        }
    }

    /// Compare two record sequences and build the difference report.
    pub fn compare(&self, original: &[LineItem], confirmation: &[LineItem]) -> DifferenceReport {
        let original_index = index_by_code(original);
        let confirmation_index = index_by_code(confirmation);

        let mut report = DifferenceReport::default();

        for (code, o_line) in &original_index {
            let Some(c_line) = confirmation_index.get(code) else {
                report.missing_in_confirmation.push((*o_line).clone());
                continue;
            };

            let mut discrepancy = Discrepancy::new(code.clone());
            discrepancy.quantity = self.value_pair(o_line.quantity, c_line.quantity);
            discrepancy.unit_price = self.value_pair(o_line.unit_price, c_line.unit_price);
            discrepancy.line_total = self.value_pair(o_line.line_total, c_line.line_total);

            // Quantities that disagree while line totals nearly agree are
            // the telltale signature of a unit conversion (pieces counted as
            // cartons), not a true quantity error. Heuristic only: it never
            // blocks the raw discrepancies recorded above.
            if discrepancy.quantity.is_some() {
                if let (Some(o_total), Some(c_total)) = (o_line.line_total, c_line.line_total) {
                    if o_total != 0.0 {
                        let rel_diff = (o_total - c_total).abs() / o_total;
                        if rel_diff < self.tolerance {
                            discrepancy.notes.push(UNIT_MISMATCH_NOTE.to_string());
                        }
                    }
                }
            }

            if discrepancy.has_differences() {
                report.differences.push(discrepancy);
            }
        }

        for (code, c_line) in &confirmation_index {
            if !original_index.contains_key(code) {
                report.extra_in_confirmation.push((*c_line).clone());
            }
        }

        debug!(
            "compared {} vs {} items: {} differing, {} missing, {} extra",
            original_index.len(),
            confirmation_index.len(),
            report.differences.len(),
            report.missing_in_confirmation.len(),
            report.extra_in_confirmation.len()
        );

        report
    }
}

impl Default for OrderComparator {
    fn default() -> Self {
        Self::new()
    }
}

/// Compare with the default tolerance and exact field equality.
pub fn compare_orders(original: &[LineItem], confirmation: &[LineItem]) -> DifferenceReport {
    OrderComparator::new().compare(original, confirmation)
}

/// Index a sequence by trimmed code. Items with an empty code cannot be
/// joined and are excluded; on duplicate codes the later item wins while
/// keeping the first insertion position, so output order stays stable.
fn index_by_code(items: &[LineItem]) -> IndexMap<String, &LineItem> {
    let mut index = IndexMap::new();
    for item in items {
        let code = item.code.trim();
        if code.is_empty() {
            continue;
        }
        index.insert(code.to_string(), item);
    }
    index
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn item(
        code: &str,
        quantity: Option<f64>,
        unit_price: Option<f64>,
        line_total: Option<f64>,
    ) -> LineItem {
        LineItem {
            code: code.to_string(),
            quantity,
            unit_price,
            line_total,
            ..Default::default()
        }
    }

    #[test]
    fn test_identical_documents_yield_empty_report() {
        let rows = vec![
            item("0001", Some(5.0), Some(2.0), Some(10.0)),
            item("0002", Some(3.0), None, None),
        ];

        let report = compare_orders(&rows, &rows);
        assert_eq!(report, DifferenceReport::default());
        assert!(report.is_empty());
    }

    #[test]
    fn test_end_to_end_scenario() {
        let original = vec![
            item("0001", Some(5.0), Some(2.0), Some(10.0)),
            item("0002", Some(3.0), None, None),
        ];
        let confirmation = vec![
            item("0001", Some(5.0), Some(2.5), Some(12.5)),
            item("0003", Some(1.0), None, None),
        ];

        let report = compare_orders(&original, &confirmation);

        assert_eq!(report.differences.len(), 1);
        let diff = &report.differences[0];
        assert_eq!(diff.code, "0001");
        assert_eq!(diff.quantity, None);
        assert_eq!(diff.unit_price, Some((2.0, 2.5)));
        assert_eq!(diff.line_total, Some((10.0, 12.5)));
        // Quantities match, so no unit-mismatch note.
        assert!(diff.notes.is_empty());

        assert_eq!(report.missing_in_confirmation, vec![original[1].clone()]);
        assert_eq!(report.extra_in_confirmation, vec![confirmation[1].clone()]);
    }

    #[test]
    fn test_unit_mismatch_note() {
        let original = vec![item("0001", Some(10.0), None, Some(100.0))];
        let confirmation = vec![item("0001", Some(1.0), None, Some(98.0))];

        let report = compare_orders(&original, &confirmation);

        let diff = &report.differences[0];
        assert_eq!(diff.quantity, Some((10.0, 1.0)));
        // Relative total difference 0.02 < 0.05.
        assert_eq!(diff.notes, vec![UNIT_MISMATCH_NOTE.to_string()]);
    }

    #[test]
    fn test_no_note_when_totals_diverge() {
        let original = vec![item("0001", Some(10.0), None, Some(100.0))];
        let confirmation = vec![item("0001", Some(1.0), None, Some(10.0))];

        let report = compare_orders(&original, &confirmation);
        assert!(report.differences[0].notes.is_empty());
    }

    #[test]
    fn test_no_note_when_original_total_is_zero() {
        let original = vec![item("0001", Some(10.0), None, Some(0.0))];
        let confirmation = vec![item("0001", Some(1.0), None, Some(0.0))];

        let report = compare_orders(&original, &confirmation);
        assert_eq!(report.differences[0].quantity, Some((10.0, 1.0)));
        assert!(report.differences[0].notes.is_empty());
    }

    #[test]
    fn test_last_write_wins_on_duplicate_codes() {
        let original = vec![
            item("0001", Some(1.0), None, None),
            item("0001", Some(7.0), None, None),
        ];
        let confirmation = vec![item("0001", Some(7.0), None, None)];

        let report = compare_orders(&original, &confirmation);
        assert!(report.is_empty());
    }

    #[test]
    fn test_empty_or_blank_codes_never_participate() {
        let original = vec![
            item("", Some(1.0), None, None),
            item("   ", Some(2.0), None, None),
        ];
        let confirmation = vec![item("", Some(9.0), None, None)];

        let report = compare_orders(&original, &confirmation);
        assert!(report.is_empty());
    }

    #[test]
    fn test_absent_fields_are_never_discrepant() {
        let original = vec![item("0001", Some(5.0), None, Some(10.0))];
        let confirmation = vec![item("0001", Some(5.0), Some(2.0), None)];

        let report = compare_orders(&original, &confirmation);
        assert!(report.is_empty());
    }

    #[test]
    fn test_code_is_trimmed_before_joining() {
        let original = vec![item(" 0001 ", Some(5.0), None, None)];
        let confirmation = vec![item("0001", Some(5.0), None, None)];

        let report = compare_orders(&original, &confirmation);
        assert!(report.is_empty());
    }

    #[test]
    fn test_epsilon_absorbs_formatting_noise() {
        let original = vec![item("0001", Some(10.0), Some(1.005), None)];
        let confirmation = vec![item("0001", Some(10.0), Some(1.0), None)];

        let exact = OrderComparator::new().compare(&original, &confirmation);
        assert_eq!(exact.differences.len(), 1);

        let lenient = OrderComparator::new()
            .with_epsilon(Some(0.01))
            .compare(&original, &confirmation);
        assert!(lenient.is_empty());
    }

    #[test]
    fn test_output_order_follows_insertion_order() {
        let original = vec![
            item("0003", Some(1.0), None, None),
            item("0001", Some(1.0), None, None),
            item("0002", Some(1.0), None, None),
        ];
        let confirmation: Vec<LineItem> = Vec::new();

        let report = compare_orders(&original, &confirmation);
        let codes: Vec<&str> = report
            .missing_in_confirmation
            .iter()
            .map(|i| i.code.as_str())
            .collect();
        assert_eq!(codes, vec!["0003", "0001", "0002"]);
    }
}
