//! Fixed-arity-suffix row decomposition.

use tracing::trace;

use super::RowDecoder;
use super::numeric::parse_decimal_comma;
use crate::models::order::LineItem;

/// Number of trailing fixed-position tokens in a data row: unit of measure,
/// quantity, unit price, discount, line total, tax.
const SUFFIX_LEN: usize = 6;

/// Row decoder anchored to the end of the line.
///
/// The description column varies in word count per row, but the trailing
/// unit/numeric columns are fixed in count and position, so the last six
/// tokens are assigned by position and whatever sits between the supplier
/// code and that suffix becomes the description.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedSuffixDecoder;

impl FixedSuffixDecoder {
    /// Create the default decoder.
    pub fn new() -> Self {
        Self
    }
}

impl RowDecoder for FixedSuffixDecoder {
    fn decode(&self, line: &str) -> Option<LineItem> {
        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.len() < 2 + SUFFIX_LEN {
            trace!("dropping malformed row with {} tokens: {}", parts.len(), line);
            return None;
        }

        let code = parts[0];
        let supplier_code = parts[1];
        let remainder = &parts[2..];

        // Suffix order: UM, quantity, unit price, discount, line total, tax.
        // Discount and tax are not needed for comparison.
        let suffix = &remainder[remainder.len() - SUFFIX_LEN..];
        let quantity = parse_decimal_comma(suffix[1]);
        let unit_price = parse_decimal_comma(suffix[2]);
        let line_total = parse_decimal_comma(suffix[4]);

        // The numeric core is all-or-nothing: a row with any unparseable
        // numeric field is dropped, never partially emitted.
        let (Some(quantity), Some(unit_price), Some(line_total)) =
            (quantity, unit_price, line_total)
        else {
            trace!("dropping row with invalid numeric fields: {}", line);
            return None;
        };

        let description = remainder[..remainder.len() - SUFFIX_LEN].join(" ");

        Some(LineItem {
            code: code.to_string(),
            supplier_code: supplier_code.to_string(),
            description,
            unit_of_measure: Some(suffix[0].to_string()),
            quantity: Some(quantity),
            unit_price: Some(unit_price),
            line_total: Some(line_total),
        })
    }
}
