//! Pre-order traversal with enter/leave events and fully-qualified labels.
//!
//! This is the sole mechanism by which rendering learns nesting structure
//! and ordering: every node is visited exactly once, children in insertion
//! order, and every `Enter` is paired with exactly one `Leave` for the same
//! label after all descendants have been emitted.

use crate::domain::hierarchy::HierarchyNode;

/// Traversal event carrying the fully-qualified dotted label.
#[derive(Debug)]
pub enum WalkEvent<'a> {
    Enter {
        label: String,
        node: &'a HierarchyNode,
    },
    Leave {
        label: String,
        node: &'a HierarchyNode,
    },
}

impl WalkEvent<'_> {
    pub fn label(&self) -> &str {
        match self {
            WalkEvent::Enter { label, .. } | WalkEvent::Leave { label, .. } => label,
        }
    }
}

/// Lazy depth-first walker over a hierarchy.
///
/// The root node itself emits no events; traversal starts at its children.
pub struct Walker<'a> {
    stack: Vec<Frame<'a>>,
}

struct Frame<'a> {
    label: String,
    node: &'a HierarchyNode,
    entered: bool,
}

impl<'a> Walker<'a> {
    pub fn new(root: &'a HierarchyNode) -> Self {
        let mut stack = Vec::new();
        // Push in reverse order for left-to-right traversal
        for (segment, child) in root.children().rev() {
            stack.push(Frame {
                label: segment.to_string(),
                node: child,
                entered: false,
            });
        }
        Self { stack }
    }
}

impl<'a> Iterator for Walker<'a> {
    type Item = WalkEvent<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let frame = self.stack.pop()?;
        if frame.entered {
            return Some(WalkEvent::Leave {
                label: frame.label,
                node: frame.node,
            });
        }

        let label = frame.label;
        let node = frame.node;
        self.stack.push(Frame {
            label: label.clone(),
            node,
            entered: true,
        });
        for (segment, child) in node.children().rev() {
            self.stack.push(Frame {
                label: format!("{}.{}", label, segment),
                node: child,
                entered: false,
            });
        }
        Some(WalkEvent::Enter { label, node })
    }
}

/// Callback-style adapter over [`Walker`] for collaborators that prefer
/// enter/leave injection over iteration.
pub fn visit<'a, E, L>(root: &'a HierarchyNode, mut enter: E, mut leave: L)
where
    E: FnMut(&str, &'a HierarchyNode),
    L: FnMut(&str, &'a HierarchyNode),
{
    for event in Walker::new(root) {
        match event {
            WalkEvent::Enter { label, node } => enter(&label, node),
            WalkEvent::Leave { label, node } => leave(&label, node),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> HierarchyNode {
        let mut root = HierarchyNode::new();
        root.insert("a.b.c", Some(10));
        root.insert("a.b.d", Some(20));
        root.insert("a.e", Some(30));
        root
    }

    #[test]
    fn given_tree_when_walking_then_enter_order_is_preorder() {
        let root = sample();
        let entered: Vec<String> = Walker::new(&root)
            .filter_map(|e| match e {
                WalkEvent::Enter { label, .. } => Some(label),
                WalkEvent::Leave { .. } => None,
            })
            .collect();
        assert_eq!(entered, vec!["a", "a.b", "a.b.c", "a.b.d", "a.e"]);
    }

    #[test]
    fn given_tree_when_walking_then_every_enter_has_matching_leave() {
        let root = sample();
        let mut open: Vec<String> = Vec::new();
        for event in Walker::new(&root) {
            match event {
                WalkEvent::Enter { label, .. } => open.push(label),
                WalkEvent::Leave { label, .. } => {
                    assert_eq!(open.pop().as_deref(), Some(label.as_str()));
                }
            }
        }
        assert!(open.is_empty(), "unbalanced events: {:?}", open);
    }
}
