//! Namespace hierarchy built from dotted label paths.

/// One node in the namespace hierarchy.
///
/// `line` is the 0-based listing line of the label that created this node,
/// or `None` for nodes that only exist as namespace groupings, i.e. an
/// intermediate path segment that was never exported on its own (`text` in
/// `text.layer2.print_string` when only the deep label is exported).
///
/// `description` stays `None` until descriptions are attached. After that it
/// is `Some(text)` for a found comment block, `Some("")` when the scan ran
/// but found nothing, and still `None` for sentinel-line nodes where no scan
/// was attempted. Downstream rendering relies on this three-way distinction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HierarchyNode {
    pub line: Option<usize>,
    pub description: Option<String>,
    children: Vec<(String, HierarchyNode)>,
}

impl HierarchyNode {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a dotted label path, creating intermediate nodes as needed.
    ///
    /// Intermediate nodes keep the sentinel (`None`) line. Re-inserting an
    /// existing segment never reorders its child slot; inserting the same
    /// full path twice lets the last line number win.
    ///
    /// Paths with empty segments (leading/trailing dots) are a caller
    /// contract violation and are not validated here.
    pub fn insert(&mut self, path: &str, line: Option<usize>) {
        match path.split_once('.') {
            Some((head, rest)) => self.child_mut(head).insert(rest, line),
            None => {
                let node = self.child_mut(path);
                if line.is_some() {
                    node.line = line;
                }
            }
        }
    }

    /// Look up a node by dotted path. Any missing segment yields `None`,
    /// never a partial result.
    pub fn get(&self, path: &str) -> Option<&HierarchyNode> {
        match path.split_once('.') {
            Some((head, rest)) => self.child(head)?.get(rest),
            None => self.child(path),
        }
    }

    /// Direct child by segment name.
    pub fn child(&self, segment: &str) -> Option<&HierarchyNode> {
        self.children
            .iter()
            .find(|(s, _)| s == segment)
            .map(|(_, n)| n)
    }

    fn child_mut(&mut self, segment: &str) -> &mut HierarchyNode {
        match self.children.iter().position(|(s, _)| s == segment) {
            Some(i) => &mut self.children[i].1,
            None => {
                self.children
                    .push((segment.to_string(), HierarchyNode::default()));
                &mut self.children.last_mut().expect("just pushed").1
            }
        }
    }

    /// Children in insertion order.
    pub fn children(&self) -> impl DoubleEndedIterator<Item = (&str, &HierarchyNode)> {
        self.children.iter().map(|(s, n)| (s.as_str(), n))
    }

    pub(crate) fn children_mut(
        &mut self,
    ) -> impl Iterator<Item = (&str, &mut HierarchyNode)> {
        self.children.iter_mut().map(|(s, n)| (s.as_str(), n))
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of nodes below (and including) this one.
    pub fn size(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(|(_, child)| child.size())
            .sum::<usize>()
    }

    /// Depth of the subtree rooted here; a childless node has depth 1.
    pub fn depth(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(|(_, child)| child.depth())
            .max()
            .unwrap_or(0)
    }
}
