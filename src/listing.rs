//! Listing-file access and the logical-text formats.
//!
//! A listing line is the assembler's raw output: line number, address and
//! object-byte columns followed by the original source text. The domain
//! layer only ever sees the logical source text, through [`LogicalText`].

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::Settings;
use crate::domain::error::{DocError, DocResult};
use crate::domain::LogicalText;

/// A loaded listing file: ordered raw lines, 0-based line numbers.
#[derive(Debug, Clone)]
pub struct Listing {
    pub path: PathBuf,
    pub lines: Vec<String>,
}

impl Listing {
    pub fn load(path: &Path) -> DocResult<Listing> {
        if !path.exists() {
            return Err(DocError::FileNotFound(path.to_path_buf()));
        }
        let content = fs::read_to_string(path).map_err(|e| DocError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;
        let lines: Vec<String> = content.lines().map(str::to_string).collect();
        debug!("loaded {} lines from {}", lines.len(), path.display());
        Ok(Listing {
            path: path.to_path_buf(),
            lines,
        })
    }
}

/// Fixed-column listing format: everything left of `source_column` (counted
/// in chars) is metadata and is stripped. Lines that end before the source
/// column yield an empty logical text.
#[derive(Debug, Clone, Copy)]
pub struct ColumnFormat {
    pub source_column: usize,
}

impl LogicalText for ColumnFormat {
    fn logical_text<'a>(&self, raw: &'a str) -> &'a str {
        match raw.char_indices().nth(self.source_column) {
            Some((offset, _)) => &raw[offset..],
            None => "",
        }
    }
}

/// Plain assembler source without metadata columns.
#[derive(Debug, Clone, Copy)]
pub struct PlainFormat;

impl LogicalText for PlainFormat {
    fn logical_text<'a>(&self, raw: &'a str) -> &'a str {
        raw
    }
}

/// Pick the logical-text format for a source file by extension: listing
/// files get the configured column strip, plain sources pass through.
pub fn format_for(path: &Path, settings: &Settings) -> Box<dyn LogicalText> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();
    match ext.as_str() {
        "lst" | "list" | "rep" | "report" => Box::new(ColumnFormat {
            source_column: settings.source_column,
        }),
        _ => Box::new(PlainFormat),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_listing_line_when_stripping_then_metadata_is_removed() {
        let format = ColumnFormat { source_column: 8 };
        assert_eq!(format.logical_text("12  0801lda #$00 ; load"), "lda #$00 ; load");
    }

    #[test]
    fn given_short_line_when_stripping_then_yields_empty() {
        let format = ColumnFormat { source_column: 24 };
        assert_eq!(format.logical_text("12  0801"), "");
        assert_eq!(format.logical_text(""), "");
    }

    #[test]
    fn given_plain_source_when_stripping_then_line_passes_through() {
        assert_eq!(PlainFormat.logical_text("label: rts"), "label: rts");
    }
}
