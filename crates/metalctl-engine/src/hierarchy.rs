//! Parent/child flattening for indented table output.
//!
//! Entities reference their parent by id. [`flatten`] groups such a flat list
//! into roots followed by their direct children, each child carrying a
//! tree-drawing prefix:
//!
//! ```text
//! tenant-super
//! ├─╴child-a
//! └─╴child-b
//! internet
//! orphan
//! ```
//!
//! Entities without a parent are the roots, in input order. Every other
//! entity attaches to the first root carrying its parent id; if there is none
//! it is promoted and appended to the roots, so later entities may attach to
//! it. Grouping is one level deep, which keeps parent cycles from looping and
//! emits every input element exactly once.

use metalctl_types::Network;
use std::collections::HashMap;

/// An entity that may reference a parent entity by id.
pub trait Hierarchical {
    fn node_id(&self) -> &str;
    fn parent_id(&self) -> Option<&str>;
}

impl Hierarchical for Network {
    fn node_id(&self) -> &str {
        &self.id
    }

    fn parent_id(&self) -> Option<&str> {
        self.parent_network.as_deref().filter(|p| !p.is_empty())
    }
}

/// Connector drawn in front of a child row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreePrefix {
    Branch,
    Last,
}

impl TreePrefix {
    /// Connector for the child at `index` among `len` siblings.
    pub fn for_child(index: usize, len: usize) -> Self {
        if index + 1 >= len {
            TreePrefix::Last
        } else {
            TreePrefix::Branch
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TreePrefix::Branch => "├─╴",
            TreePrefix::Last => "└─╴",
        }
    }
}

/// One flattened output row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlatRow<'a, T> {
    pub item: &'a T,
    /// 0 for roots.
    pub depth: usize,
    /// Tree drawing to put in front of the id cell, empty for roots.
    pub prefix: String,
}

impl<T: Hierarchical> FlatRow<'_, T> {
    /// The id cell with its tree prefix.
    pub fn label(&self) -> String {
        format!("{}{}", self.prefix, self.item.node_id())
    }
}

#[derive(Default)]
struct Roots<'a> {
    /// (root index, child indices) in emit order.
    groups: Vec<(usize, Vec<usize>)>,
    /// First group carrying an id.
    by_id: HashMap<&'a str, usize>,
}

impl<'a> Roots<'a> {
    fn push(&mut self, id: &'a str, index: usize) {
        self.by_id.entry(id).or_insert(self.groups.len());
        self.groups.push((index, Vec::new()));
    }
}

/// Flattens `items` into roots followed by their children, keeping input
/// order within both.
pub fn flatten<T: Hierarchical>(items: &[T]) -> Vec<FlatRow<'_, T>> {
    let mut roots = Roots::default();
    for (i, item) in items.iter().enumerate() {
        if item.parent_id().is_none() {
            roots.push(item.node_id(), i);
        }
    }

    for (i, item) in items.iter().enumerate() {
        let Some(parent) = item.parent_id() else {
            continue;
        };
        match roots.by_id.get(parent) {
            Some(&g) => roots.groups[g].1.push(i),
            None => {
                tracing::debug!(id = item.node_id(), parent, "parent not among roots, promoting");
                roots.push(item.node_id(), i);
            }
        }
    }

    let mut rows = Vec::with_capacity(items.len());
    for (root, children) in roots.groups {
        rows.push(FlatRow {
            item: &items[root],
            depth: 0,
            prefix: String::new(),
        });
        let count = children.len();
        rows.extend(children.into_iter().enumerate().map(|(i, child)| FlatRow {
            item: &items[child],
            depth: 1,
            prefix: TreePrefix::for_child(i, count).as_str().to_string(),
        }));
    }
    rows
}

/// Number of lines of the tallest cell.
pub fn max_line_count<S: AsRef<str>>(cells: &[S]) -> usize {
    cells
        .iter()
        .map(|c| c.as_ref().split('\n').count())
        .max()
        .unwrap_or(1)
}

/// Extends the id cell with `│` continuation lines up to `lines` lines so the
/// tree guide stays connected next to multi-line cells.
pub fn pad_multiline(id: &str, lines: usize) -> String {
    let mut padded = id.to_string();
    for _ in 1..lines {
        padded.push_str("\n│");
    }
    padded
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Node {
        id: &'static str,
        parent: Option<&'static str>,
    }

    impl Hierarchical for Node {
        fn node_id(&self) -> &str {
            self.id
        }

        fn parent_id(&self) -> Option<&str> {
            self.parent
        }
    }

    fn node(id: &'static str, parent: Option<&'static str>) -> Node {
        Node { id, parent }
    }

    fn labels(nodes: &[Node]) -> Vec<String> {
        flatten(nodes).iter().map(|r| r.label()).collect()
    }

    #[test]
    fn test_missing_parent_is_promoted() {
        let nodes = [node("n1", None), node("n2", Some("n1")), node("n3", Some("missing"))];
        assert_eq!(labels(&nodes), vec!["n1", "└─╴n2", "n3"]);
    }

    #[test]
    fn test_children_keep_input_order() {
        let nodes = [
            node("c2", Some("p")),
            node("p", None),
            node("c1", Some("p")),
            node("c3", Some("p")),
        ];
        assert_eq!(labels(&nodes), vec!["p", "├─╴c2", "├─╴c1", "└─╴c3"]);
    }

    #[test]
    fn test_grandchildren_are_promoted_after_roots() {
        let nodes = [
            node("n3", Some("missing")),
            node("n1", None),
            node("n2", Some("n1")),
            node("n4", Some("n2")),
        ];
        let rows = flatten(&nodes);
        let rendered: Vec<String> = rows.iter().map(|r| r.label()).collect();
        assert_eq!(rendered, vec!["n1", "└─╴n2", "n3", "n4"]);
        let depths: Vec<usize> = rows.iter().map(|r| r.depth).collect();
        assert_eq!(depths, vec![0, 1, 0, 0]);
    }

    #[test]
    fn test_children_attach_to_promoted_roots() {
        let nodes = [node("a", Some("missing")), node("b", Some("a"))];
        assert_eq!(labels(&nodes), vec!["a", "└─╴b"]);
    }

    #[test]
    fn test_self_parent_is_promoted() {
        let nodes = [node("r", None), node("a", Some("a")), node("b", Some("r"))];
        assert_eq!(labels(&nodes), vec!["r", "└─╴b", "a"]);
    }

    #[test]
    fn test_cycle_terminates_and_keeps_everything() {
        let nodes = [
            node("x", None),
            node("a", Some("b")),
            node("b", Some("c")),
            node("c", Some("a")),
        ];
        assert_eq!(labels(&nodes), vec!["x", "a", "└─╴c", "b"]);
    }

    #[test]
    fn test_duplicate_ids_attach_to_first() {
        let nodes = [node("p", None), node("p", None), node("c", Some("p"))];
        assert_eq!(labels(&nodes), vec!["p", "└─╴c", "p"]);
    }

    #[test]
    fn test_multiline_padding() {
        assert_eq!(max_line_count(&["a", "b\nc\nd", ""]), 3);
        assert_eq!(pad_multiline("net", 3), "net\n│\n│");
        assert_eq!(pad_multiline("net", 1), "net");
        assert_eq!(max_line_count::<&str>(&[]), 1);
    }

    #[test]
    fn test_network_parent_reference() {
        let network = Network {
            id: "child".to_string(),
            parent_network: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(network.parent_id(), None);
    }
}
