//! Core library for purchase-order / supplier-confirmation comparison.
//!
//! This crate provides:
//! - document-to-text conversion via the external `pdftotext` tool
//! - line-item table extraction from layout-preserved text
//! - a keyed, field-by-field comparison of two extracted documents

pub mod compare;
pub mod convert;
pub mod error;
pub mod extract;
pub mod models;

pub use compare::{OrderComparator, compare_orders};
pub use convert::convert;
pub use error::{ConvertError, OrdiffError, Result};
pub use extract::{FixedSuffixDecoder, RowDecoder, TableScanner, extract};
pub use models::config::{CompareConfig, OrdiffConfig, TableLayout};
pub use models::order::{Document, LineItem};
pub use models::report::{DifferenceReport, Discrepancy};
