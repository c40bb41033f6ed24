//! Order document models.
//!
//! Field names on the wire are the stable Italian keys used by every
//! producer and consumer of these records (`codice`, `quantita`, ...); the
//! line total is written as `importo` but `totale_riga` is accepted on
//! input, since both spellings exist among producers.

use serde::{Deserialize, Deserializer, Serialize};

/// A single product row parsed from an order or confirmation document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Four-digit article code; the join key between two documents.
    /// Uniqueness is assumed, not enforced. May be empty, in which case the
    /// item can never be matched and the comparator drops it.
    #[serde(rename = "codice", default)]
    pub code: String,

    /// Supplier's internal code for the article. Descriptive only, never
    /// compared.
    #[serde(rename = "codice_fornitore", default)]
    pub supplier_code: String,

    /// Article description. Often empty: multi-line descriptions in the
    /// source document do not align with the numeric row and are lost.
    #[serde(rename = "descrizione", default)]
    pub description: String,

    /// Unit of measure, e.g. "PZ".
    #[serde(rename = "unita_misura", default, skip_serializing_if = "Option::is_none")]
    pub unit_of_measure: Option<String>,

    /// Quantity ordered or confirmed.
    #[serde(rename = "quantita", default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<f64>,

    /// Unit price.
    #[serde(rename = "prezzo_unitario", default, skip_serializing_if = "Option::is_none")]
    pub unit_price: Option<f64>,

    /// Line total (quantity times unit price, as printed on the document).
    #[serde(
        rename = "importo",
        alias = "totale_riga",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub line_total: Option<f64>,
}

/// One side of a comparison: an ordered sequence of line items.
///
/// The raw sequence preserves source-row order and duplicates; deduplication
/// by code happens only inside the comparator.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Ordered line items. An absent or null `righe` key deserializes to an
    /// empty sequence, never an error.
    #[serde(rename = "righe", default, deserialize_with = "rows_or_empty")]
    pub rows: Vec<LineItem>,
}

impl Document {
    /// Wrap a sequence of line items.
    pub fn new(rows: Vec<LineItem>) -> Self {
        Self { rows }
    }
}

fn rows_or_empty<'de, D>(deserializer: D) -> Result<Vec<LineItem>, D::Error>
where
    D: Deserializer<'de>,
{
    let rows = Option::<Vec<LineItem>>::deserialize(deserializer)?;
    Ok(rows.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_accepts_both_total_spellings() {
        let a: LineItem =
            serde_json::from_str(r#"{"codice": "0001", "importo": 10.0}"#).unwrap();
        let b: LineItem =
            serde_json::from_str(r#"{"codice": "0001", "totale_riga": 10.0}"#).unwrap();

        assert_eq!(a.line_total, Some(10.0));
        assert_eq!(b.line_total, Some(10.0));
    }

    #[test]
    fn test_total_serializes_as_importo() {
        let item = LineItem {
            code: "0001".to_string(),
            line_total: Some(10.0),
            ..Default::default()
        };

        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["importo"], 10.0);
        assert!(json.get("totale_riga").is_none());
    }

    #[test]
    fn test_record_without_code_still_deserializes() {
        let doc: Document = serde_json::from_str(r#"{"righe": [{"quantita": 5.0}]}"#).unwrap();

        assert_eq!(doc.rows.len(), 1);
        assert_eq!(doc.rows[0].code, "");
        assert_eq!(doc.rows[0].quantity, Some(5.0));
    }

    #[test]
    fn test_missing_or_null_righe_is_empty() {
        let absent: Document = serde_json::from_str("{}").unwrap();
        let null: Document = serde_json::from_str(r#"{"righe": null}"#).unwrap();

        assert!(absent.rows.is_empty());
        assert!(null.rows.is_empty());
    }

    #[test]
    fn test_document_round_trip() {
        let doc = Document::new(vec![LineItem {
            code: "0001".to_string(),
            supplier_code: "AB12".to_string(),
            description: "Vite M4".to_string(),
            unit_of_measure: Some("PZ".to_string()),
            quantity: Some(10.0),
            unit_price: Some(2.5),
            line_total: Some(25.0),
        }]);

        let json = serde_json::to_string(&doc).unwrap();
        let back: Document = serde_json::from_str(&json).unwrap();
        assert_eq!(back, doc);
    }
}
