//! Line-based table scanner.

use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

use super::{FixedSuffixDecoder, RowDecoder};
use crate::models::config::TableLayout;
use crate::models::order::LineItem;

lazy_static! {
    /// Data rows start with a four-digit article code followed by a
    /// non-digit boundary.
    static ref ROW_START: Regex = Regex::new(r"^\d{4}\b").unwrap();
}

/// Scanner position within the document text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    /// Before the table header line; everything is discarded.
    SeekingHeader,
    /// Inside the item table; candidate rows are decoded.
    InTable,
    /// Past the totals marker; nothing else is considered.
    Terminal,
}

/// Extracts line items from one document's layout-preserved text.
///
/// The scan is a three-state automaton over the text split into lines:
/// lines before the header markers are preamble, lines after the terminator
/// are totals, and in between only lines matching the row pattern are
/// handed to the [`RowDecoder`]. Row-level failures are silent skips; the
/// scan itself cannot fail.
pub struct TableScanner<D = FixedSuffixDecoder> {
    layout: TableLayout,
    decoder: D,
}

impl TableScanner<FixedSuffixDecoder> {
    /// Scanner with the default layout markers and row decoder.
    pub fn new() -> Self {
        Self::with_layout(TableLayout::default())
    }

    /// Scanner with custom layout markers and the default row decoder.
    pub fn with_layout(layout: TableLayout) -> Self {
        Self {
            layout,
            decoder: FixedSuffixDecoder::new(),
        }
    }
}

impl Default for TableScanner<FixedSuffixDecoder> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: RowDecoder> TableScanner<D> {
    /// Scanner with a custom row decomposition strategy.
    pub fn with_decoder(layout: TableLayout, decoder: D) -> Self {
        Self { layout, decoder }
    }

    /// Scan the full text of one document and return its line items in
    /// source-row order.
    pub fn scan(&self, text: &str) -> Vec<LineItem> {
        let mut items = Vec::new();
        let mut state = ScanState::SeekingHeader;

        for line in text.lines() {
            match state {
                ScanState::SeekingHeader => {
                    // An empty marker list matches no line at all, not
                    // every line.
                    let markers = &self.layout.header_markers;
                    let is_header = !markers.is_empty()
                        && markers.iter().all(|marker| line.contains(marker.as_str()));
                    if is_header {
                        state = ScanState::InTable;
                    }
                }
                ScanState::InTable => {
                    if line.contains(&self.layout.terminator) {
                        state = ScanState::Terminal;
                        continue;
                    }

                    let stripped = line.trim();
                    if stripped.is_empty() || !ROW_START.is_match(stripped) {
                        // Continuation text, page furniture or noise.
                        continue;
                    }

                    if let Some(item) = self.decoder.decode(stripped) {
                        items.push(item);
                    }
                }
                ScanState::Terminal => break,
            }
        }

        debug!("extracted {} line items", items.len());
        items
    }
}

/// Extract line items using the default layout markers and row decoder.
pub fn extract(text: &str) -> Vec<LineItem> {
    TableScanner::new().scan(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const SAMPLE: &str = "\
Spett.le Fornitore S.r.l.
Via Roma 1, 20100 Milano
Ordine n. 357 del 28/11/2025

Codice   Codice Fornitore   Descrizione                UM   Quantità   Prezzo   Sconto   Importo   IVA

0001     AB123              Vite testa esagonale M4    PZ   10,00      2,50     0,00     25,00     22
         che prosegue su riga successiva
0002     CD456              Dado M4                    PZ   100,00     0,10     0,00     10,00     22

Totale Merce                                                                    35,00
0003     EF789              Riga fantasma              PZ   1,00       1,00     0,00     1,00      22
";

    #[test]
    fn test_scan_sample_document() {
        let items = extract(SAMPLE);

        let codes: Vec<&str> = items.iter().map(|i| i.code.as_str()).collect();
        assert_eq!(codes, vec!["0001", "0002"]);
        assert_eq!(items[0].description, "Vite testa esagonale M4");
        assert_eq!(items[1].quantity, Some(100.0));
    }

    #[test]
    fn test_nothing_after_terminator() {
        let items = extract(SAMPLE);
        assert!(items.iter().all(|i| i.code != "0003"));
    }

    #[test]
    fn test_no_header_yields_nothing() {
        let text = "0001 AB123 Vite PZ 10,00 2,50 0,00 25,00 22\n";
        assert!(extract(text).is_empty());
    }

    #[test]
    fn test_row_pattern_requires_exactly_four_digit_prefix() {
        let text = "\
Codice Fornitore Descrizione
12345 AB123 Cinque cifre PZ 1,00 1,00 0,00 1,00 22
001A  AB123 Tre cifre    PZ 1,00 1,00 0,00 1,00 22
0001x AB123 Suffisso     PZ 1,00 1,00 0,00 1,00 22
0002  AB123 Valida       PZ 1,00 1,00 0,00 1,00 22
";
        let items = extract(text);
        let codes: Vec<&str> = items.iter().map(|i| i.code.as_str()).collect();
        assert_eq!(codes, vec!["0002"]);
    }

    #[test]
    fn test_short_row_after_valid_prefix_is_dropped() {
        let text = "\
Codice Fornitore Descrizione
0001 AB123 PZ 1,00 2,00 0,00
";
        assert!(extract(text).is_empty());
    }

    #[test]
    fn test_empty_header_markers_never_open_the_table() {
        let layout = TableLayout {
            header_markers: Vec::new(),
            terminator: "Totale Merce".to_string(),
        };
        let text = "0001 AB123 Vite PZ 10,00 2,50 0,00 25,00 22\n";

        assert!(TableScanner::with_layout(layout).scan(text).is_empty());
    }

    #[test]
    fn test_custom_layout_markers() {
        let layout = TableLayout {
            header_markers: vec!["Supplier Code".to_string(), "Description".to_string()],
            terminator: "Grand Total".to_string(),
        };
        let text = "\
Supplier Code  Description
0001 AB123 Hex bolt M4 PZ 10,00 2,50 0,00 25,00 22
Grand Total 25,00
";
        let items = TableScanner::with_layout(layout).scan(text);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].description, "Hex bolt M4");
    }
}
