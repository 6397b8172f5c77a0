//! Exported-labels file reading, definition-line resolution, and label-kind
//! classification.
//!
//! The exports file carries one dotted label path per line, in declaration
//! order; that order drives the child ordering of the whole hierarchy.

use std::fmt;
use std::fs;
use std::path::Path;

use tracing::debug;

use crate::domain::error::{DocError, DocResult};
use crate::domain::LogicalText;
use crate::listing::Listing;

/// What an exported label names in the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelKind {
    Code,
    Data,
    Constant,
}

impl LabelKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            LabelKind::Code => "code",
            LabelKind::Data => "data",
            LabelKind::Constant => "constant",
        }
    }
}

impl fmt::Display for LabelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An exported label resolved against the listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Export {
    /// Dotted namespace path, e.g. `text.layer2.print_string`
    pub path: String,
    /// 0-based defining line in the listing, `None` if unresolved
    pub line: Option<usize>,
    pub kind: LabelKind,
}

/// Directives that mark a label as data rather than code.
const DATA_DIRECTIVES: &[&str] = &[
    "!byte", "!by", "!word", "!wo", "!text", "!tx", "!pet", "!scr", "!fill", "!hex", ".byte",
    ".word", ".text", ".ascii", ".db", ".dw", ".ds", ".fill",
];

/// Read exported label paths in declaration order.
///
/// One label per line; blank lines and `;` comment lines are skipped; only
/// the first whitespace-separated token counts.
pub fn read_export_names(path: &Path) -> DocResult<Vec<String>> {
    if !path.exists() {
        return Err(DocError::FileNotFound(path.to_path_buf()));
    }
    let content = fs::read_to_string(path).map_err(|e| DocError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;

    let mut names = Vec::new();
    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with(';') {
            continue;
        }
        if let Some(name) = trimmed.split_whitespace().next() {
            names.push(name.to_string());
        }
    }
    if names.is_empty() {
        return Err(DocError::EmptyExports(path.to_path_buf()));
    }
    Ok(names)
}

/// Resolve each exported label to its defining line and classify it.
///
/// Unresolvable labels keep `line == None`; they still show up in the
/// hierarchy, just without a description.
pub fn resolve_exports(
    names: &[String],
    listing: &Listing,
    format: &dyn LogicalText,
) -> Vec<Export> {
    names
        .iter()
        .map(|name| {
            let line = find_definition(name, &listing.lines, format);
            let kind = line
                .map(|idx| classify(name, format.logical_text(&listing.lines[idx])))
                .unwrap_or(LabelKind::Code);
            debug!("resolved {} -> line {:?} ({})", name, line, kind);
            Export {
                path: name.clone(),
                line,
                kind,
            }
        })
        .collect()
}

/// Find the line defining `name`: first a line starting with the full
/// dotted path, then one starting with the final path segment (the local
/// label form emitted inside a zone).
fn find_definition(name: &str, lines: &[String], format: &dyn LogicalText) -> Option<usize> {
    if let Some(idx) = find_label(name, lines, format) {
        return Some(idx);
    }
    let last = name.rsplit('.').next()?;
    if last != name {
        return find_label(last, lines, format);
    }
    None
}

/// A defining line starts at column 0 with the label, followed by end of
/// line, `:`, `=`, or whitespace.
fn find_label(label: &str, lines: &[String], format: &dyn LogicalText) -> Option<usize> {
    lines.iter().position(|raw| {
        let text = format.logical_text(raw);
        match text.strip_prefix(label) {
            Some(rest) => rest
                .chars()
                .next()
                .map_or(true, |c| c == ':' || c == '=' || c.is_whitespace()),
            None => false,
        }
    })
}

/// Classify by what follows the label on its defining line.
fn classify(label: &str, text: &str) -> LabelKind {
    let last = label.rsplit('.').next().unwrap_or(label);
    let rest = text
        .strip_prefix(label)
        .or_else(|| text.strip_prefix(last))
        .unwrap_or(text);

    let mut rest = rest.trim_start();
    if let Some(after) = rest.strip_prefix(':') {
        rest = after.trim_start();
    }
    if rest.starts_with('=') {
        return LabelKind::Constant;
    }

    let first = rest.split_whitespace().next().unwrap_or("");
    let lowered = first.to_ascii_lowercase();
    if DATA_DIRECTIVES.contains(&lowered.as_str()) {
        LabelKind::Data
    } else {
        LabelKind::Code
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listing::PlainFormat;
    use rstest::rstest;
    use std::path::PathBuf;

    fn listing(raw: &[&str]) -> Listing {
        Listing {
            path: PathBuf::from("test.asm"),
            lines: raw.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn given_full_path_label_when_resolving_then_finds_defining_line() {
        let listing = listing(&["; doc", "text.print:", "  rts"]);
        let names = vec!["text.print".to_string()];
        let exports = resolve_exports(&names, &listing, &PlainFormat);
        assert_eq!(exports[0].line, Some(1));
        assert_eq!(exports[0].kind, LabelKind::Code);
    }

    #[test]
    fn given_local_label_when_resolving_then_falls_back_to_last_segment() {
        let listing = listing(&["!zone text", "print:", "  rts"]);
        let names = vec!["text.print".to_string()];
        let exports = resolve_exports(&names, &listing, &PlainFormat);
        assert_eq!(exports[0].line, Some(1));
    }

    #[test]
    fn given_unknown_label_when_resolving_then_line_stays_sentinel() {
        let listing = listing(&["  rts"]);
        let names = vec!["missing".to_string()];
        let exports = resolve_exports(&names, &listing, &PlainFormat);
        assert_eq!(exports[0].line, None);
    }

    #[test]
    fn given_prefix_of_longer_label_when_resolving_then_does_not_match() {
        let listing = listing(&["printer: rts", "print: rts"]);
        let names = vec!["print".to_string()];
        let exports = resolve_exports(&names, &listing, &PlainFormat);
        assert_eq!(exports[0].line, Some(1));
    }

    #[rstest]
    #[case("color = $d020", LabelKind::Constant)]
    #[case("table: !byte 1, 2, 3", LabelKind::Data)]
    #[case("msg !text \"hi\"", LabelKind::Data)]
    #[case("start: lda #0", LabelKind::Code)]
    #[case("loop", LabelKind::Code)]
    fn given_defining_line_when_classifying_then_kind_matches(
        #[case] line: &str,
        #[case] expected: LabelKind,
    ) {
        let label = line.split([':', ' ', '=']).next().unwrap();
        assert_eq!(classify(label, line), expected);
    }
}
