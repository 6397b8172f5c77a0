//! Glue: build the hierarchy from exported labels and attach descriptions.

use tracing::debug;

use crate::domain::describe::DescriptionExtractor;
use crate::domain::hierarchy::HierarchyNode;
use crate::domain::LogicalText;

/// Build the namespace hierarchy from `(dotted path, line)` pairs supplied
/// in export declaration order. Child slots keep first-seen order, which is
/// user-visible in the final documentation.
pub fn build_hierarchy<'a, I>(labels: I) -> HierarchyNode
where
    I: IntoIterator<Item = (&'a str, Option<usize>)>,
{
    let mut root = HierarchyNode::new();
    for (path, line) in labels {
        debug!("inserting label {} (line {:?})", path, line);
        root.insert(path, line);
    }
    root
}

/// Attach a description to every node that owns a source line.
///
/// Nodes with the sentinel line keep `description == None`; nodes whose
/// scan found no comment get `Some("")`. Re-running over an unmodified tree
/// and line set yields identical results.
pub fn set_descriptions(root: &mut HierarchyNode, lines: &[String], format: &dyn LogicalText) {
    let extractor = DescriptionExtractor::new(lines, format);
    fill(root, &extractor);
}

fn fill(node: &mut HierarchyNode, extractor: &DescriptionExtractor<'_>) {
    for (_, child) in node.children_mut() {
        child.description = extractor.extract(child.line);
        fill(child, extractor);
    }
}
