use crate::hash::hash_str;
use crate::node::IndexNode;

/// Outcome of a search, with the number of nodes it compared against.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Probe {
    pub position: Option<usize>,
    pub comparisons: usize,
}

/// Search `nodes` for `name`, starting at the root in position 0.
///
/// A node matches only when both its hash and its text equal the query.
/// Otherwise the search descends left when the query hash is smaller and
/// right when it is greater or equal, until it reaches an absent link.
pub fn probe<S: AsRef<str>>(nodes: &[IndexNode<S>], name: &str) -> Probe {
    let key = hash_str(name);
    let mut comparisons = 0;
    let mut position = 0;

    // A well-formed tree never needs more steps than it has nodes.
    while position < nodes.len() && comparisons < nodes.len() {
        let node = &nodes[position];
        comparisons += 1;
        if node.hash == key && node.text.as_ref() == name {
            return Probe {
                position: Some(position),
                comparisons,
            };
        }
        let next = if key < node.hash { node.left } else { node.right };
        match next.get() {
            Some(child) => position = child,
            None => break,
        }
    }

    Probe {
        position: None,
        comparisons,
    }
}

/// Position of `name` in `nodes`, if present.
pub fn lookup<S: AsRef<str>>(nodes: &[IndexNode<S>], name: &str) -> Option<usize> {
    probe(nodes, name).position
}

/// A finished symbol index: the flattened tree, root first.
///
/// Tables are produced by [`IndexBuilder`](crate::IndexBuilder) and are
/// read-only afterwards.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IndexTable {
    nodes: Vec<IndexNode>,
}

impl IndexTable {
    pub(crate) fn from_nodes(nodes: Vec<IndexNode>) -> Self {
        Self { nodes }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn nodes(&self) -> &[IndexNode] {
        &self.nodes
    }

    pub fn root(&self) -> Option<&IndexNode> {
        self.nodes.first()
    }

    pub fn get(&self, position: usize) -> Option<&IndexNode> {
        self.nodes.get(position)
    }

    pub fn iter(&self) -> impl Iterator<Item = &IndexNode> {
        self.nodes.iter()
    }

    pub fn find(&self, name: &str) -> Option<usize> {
        lookup(&self.nodes, name)
    }

    pub fn probe(&self, name: &str) -> Probe {
        probe(&self.nodes, name)
    }

    /// Worst-case number of comparisons needed to find any stored symbol.
    pub fn max_depth(&self) -> usize {
        self.nodes
            .iter()
            .map(|node| self.probe(node.text()).comparisons)
            .max()
            .unwrap_or(0)
    }

    pub fn into_nodes(self) -> Vec<IndexNode> {
        self.nodes
    }
}

impl std::ops::Index<usize> for IndexTable {
    type Output = IndexNode;

    fn index(&self, position: usize) -> &Self::Output {
        &self.nodes[position]
    }
}

impl<'a> IntoIterator for &'a IndexTable {
    type Item = &'a IndexNode;
    type IntoIter = std::slice::Iter<'a, IndexNode>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}

/// Plain listing, one node per line: position, hash, links and text.
impl std::fmt::Display for IndexTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (position, node) in self.nodes.iter().enumerate() {
            writeln!(
                f,
                "[{position}] {:#06x} left={} right={} {:?}",
                node.hash,
                node.left.raw(),
                node.right.raw(),
                node.text
            )?;
        }
        Ok(())
    }
}
