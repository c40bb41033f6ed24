//! Numeric normalization for European-formatted amounts.

/// Parse a number written with `.` as thousands separator and `,` as
/// decimal separator, as found in European PDF exports ("1.234,56").
pub fn parse_decimal_comma(token: &str) -> Option<f64> {
    token.replace('.', "").replace(',', ".").parse().ok()
}
