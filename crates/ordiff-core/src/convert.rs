//! Document-to-text conversion via the external `pdftotext` tool.

use std::path::Path;
use std::process::Command;

use tracing::debug;

use crate::error::{ConvertError, Result};

/// Name of the external conversion binary (provided by Poppler).
const PDFTOTEXT: &str = "pdftotext";

/// Convert a PDF document into layout-preserved text.
///
/// Blocks for the duration of the external process. The `-layout` option
/// preserves the visual alignment of columns, which is what makes the
/// whitespace-based row decomposition downstream possible.
///
/// Any failure here is fatal for the document: the caller aborts instead of
/// attempting partial extraction.
pub fn convert(path: &Path) -> Result<String> {
    debug!("running {} -layout {}", PDFTOTEXT, path.display());

    let output = Command::new(PDFTOTEXT)
        .arg("-layout")
        .arg(path)
        .arg("-")
        .output()
        .map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => ConvertError::MissingBinary,
            _ => ConvertError::Spawn(e.to_string()),
        })?;

    if !output.status.success() {
        return Err(ConvertError::Failed {
            status: output.status.code().unwrap_or(-1),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
        .into());
    }

    String::from_utf8(output.stdout).map_err(|_| ConvertError::InvalidUtf8.into())
}
