//! Comment-association boundary conditions, exercised through the
//! fixed-column listing format.

use asmdoc::domain::{build_hierarchy, set_descriptions, DescriptionExtractor};
use asmdoc::listing::ColumnFormat;

const COL: usize = 24;

/// Build listing lines with a fixed-width metadata prefix.
fn listing(src: &[&str]) -> Vec<String> {
    src.iter()
        .enumerate()
        .map(|(i, s)| format!("{:>5}  {:04x}{:13}{}", i + 1, 0x0801 + i * 2, "", s))
        .collect()
}

#[test]
fn given_comment_behind_two_blank_lines_when_extracting_then_found() {
    let lines = listing(&["; the doc", "", "", "label:"]);
    let format = ColumnFormat { source_column: COL };
    let extractor = DescriptionExtractor::new(&lines, &format);
    assert_eq!(extractor.extract(Some(3)), Some(" the doc".to_string()));
}

#[test]
fn given_comment_behind_three_blank_lines_when_extracting_then_absent() {
    let lines = listing(&["; the doc", "", "", "", "label:"]);
    let format = ColumnFormat { source_column: COL };
    let extractor = DescriptionExtractor::new(&lines, &format);
    assert_eq!(extractor.extract(Some(4)), None);
}

#[test]
fn given_comment_block_with_code_above_when_extracting_then_only_contiguous_block() {
    let lines = listing(&["  lda #0", "; first", "; second", "label:"]);
    let format = ColumnFormat { source_column: COL };
    let extractor = DescriptionExtractor::new(&lines, &format);
    assert_eq!(
        extractor.extract(Some(3)),
        Some(" first\n second".to_string()),
        "block ends at the non-comment line, in top-to-bottom order"
    );
}

#[test]
fn given_blank_inside_comment_block_when_extracting_then_block_is_cut() {
    let lines = listing(&["; far away", "", "; near", "label:"]);
    let format = ColumnFormat { source_column: COL };
    let extractor = DescriptionExtractor::new(&lines, &format);
    assert_eq!(
        extractor.extract(Some(3)),
        Some(" near".to_string()),
        "blank lines inside the block are not skipped"
    );
}

#[test]
fn given_metadata_only_blank_lines_when_extracting_then_treated_as_blank() {
    // A blank source line still carries line number and address columns in
    // the raw listing; blankness must be judged on the logical text.
    let mut lines = listing(&["; doc", "", "label:"]);
    lines[1] = format!("{:>5}  {:04x}", 2, 0x0803);
    let format = ColumnFormat { source_column: COL };
    let extractor = DescriptionExtractor::new(&lines, &format);
    assert_eq!(extractor.extract(Some(2)), Some(" doc".to_string()));
}

#[test]
fn given_described_tree_when_rerunning_then_results_are_identical() {
    let lines = listing(&["; doc", "a.b:", "  rts", "a.c:"]);
    let format = ColumnFormat { source_column: COL };

    let mut first = build_hierarchy(vec![("a.b", Some(1)), ("a.c", Some(3))]);
    set_descriptions(&mut first, &lines, &format);
    let mut second = first.clone();
    set_descriptions(&mut second, &lines, &format);

    assert_eq!(first, second);
    assert_eq!(first.get("a.b").unwrap().description.as_deref(), Some(" doc"));
    assert_eq!(first.get("a.c").unwrap().description.as_deref(), Some(""));
    assert_eq!(first.get("a").unwrap().description, None);
}
