//! Comment association: find the comment block above a label line.

use regex::Regex;

use crate::domain::LogicalText;

/// Maximum blank lines tolerated between a label and its comment block.
/// A third blank line cancels description lookup entirely.
const MAX_BLANK_GAP: usize = 2;

/// Scans upward from a label line for the contiguous `;` comment block.
pub struct DescriptionExtractor<'a> {
    lines: &'a [String],
    format: &'a dyn LogicalText,
    comment: Regex,
}

impl<'a> DescriptionExtractor<'a> {
    pub fn new(lines: &'a [String], format: &'a dyn LogicalText) -> Self {
        Self {
            lines,
            format,
            comment: Regex::new(r"^\s*;(.*)$").expect("valid comment pattern"),
        }
    }

    /// Extract the comment block associated with `line`.
    ///
    /// Returns `None` when there is no source line to scan from (sentinel
    /// line number), when the blank gap above the label exceeds
    /// [`MAX_BLANK_GAP`], or when the scan runs off the top of the file
    /// without reaching a non-blank line. Returns `Some("")` when the scan
    /// ran but captured zero comment lines; callers distinguish the two.
    pub fn extract(&self, line: Option<usize>) -> Option<String> {
        let target = line?;
        if target == 0 || target > self.lines.len() {
            return None;
        }

        // Skip at most MAX_BLANK_GAP blank lines directly above the label.
        let mut pos = target;
        loop {
            if pos == 0 {
                return None;
            }
            pos -= 1;
            if !self.is_blank(pos) {
                break;
            }
            if target - pos > MAX_BLANK_GAP {
                return None;
            }
        }

        // Reverse scan of the contiguous comment block. Blank lines inside
        // the block end it, same as ordinary code.
        let mut collected: Vec<&str> = Vec::new();
        loop {
            let text = self.format.logical_text(&self.lines[pos]);
            match self.comment.captures(text) {
                Some(caps) => collected.push(caps.get(1).map_or("", |m| m.as_str())),
                None => break,
            }
            if pos == 0 {
                break;
            }
            pos -= 1;
        }

        collected.reverse();
        Some(collected.join("\n"))
    }

    fn is_blank(&self, pos: usize) -> bool {
        self.format
            .logical_text(&self.lines[pos])
            .trim()
            .is_empty()
    }
}
