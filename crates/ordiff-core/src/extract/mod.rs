//! Line-item table extraction from layout-preserved text.

mod fixed_suffix;
mod numeric;
mod scanner;

pub use fixed_suffix::FixedSuffixDecoder;
pub use numeric::parse_decimal_comma;
pub use scanner::{TableScanner, extract};

use crate::models::order::LineItem;

/// Strategy for turning one matched table line into a [`LineItem`].
///
/// The scanner only decides which lines belong to the item table; how a
/// line splits into fields is a layout convention, so it lives behind this
/// trait and alternate layouts can swap the decomposition without touching
/// the scanning state machine.
pub trait RowDecoder {
    /// Decode a single trimmed table line. `None` means the row is
    /// malformed and is silently dropped.
    fn decode(&self, line: &str) -> Option<LineItem>;
}
