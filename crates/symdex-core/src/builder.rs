use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use crate::error::IndexError;
use crate::hash::hash_str;
use crate::node::{IndexNode, Link, MAX_SYMBOLS};
use crate::table::IndexTable;
use crate::verify::verify;

/// Collects a vocabulary and turns it into a verified [`IndexTable`].
///
/// ```
/// use symdex_core::IndexBuilder;
///
/// let table = IndexBuilder::from_iter(["new", "class", "to_s"]).build().unwrap();
/// assert_eq!(table.root().unwrap().text(), "new");
/// assert_eq!(table.find("class"), Some(2));
/// ```
#[derive(Clone, Debug, Default)]
pub struct IndexBuilder {
    symbols: Vec<String>,
}

impl IndexBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, symbol: impl Into<String>) -> &mut Self {
        self.symbols.push(symbol.into());
        self
    }

    pub fn symbols(&self) -> &[String] {
        &self.symbols
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Build the table and check that every symbol can be found in it.
    pub fn build(&self) -> Result<IndexTable, IndexError> {
        let table = self.build_unverified()?;
        verify(&table, &self.symbols)?;
        Ok(table)
    }

    /// Build the table without the final search pass.
    pub fn build_unverified(&self) -> Result<IndexTable, IndexError> {
        let sorted = check_collisions(&self.symbols)?;
        let mut nodes = Vec::with_capacity(sorted.len());
        place(&sorted, &mut nodes)?;
        let table = IndexTable::from_nodes(nodes);
        tracing::debug!(
            nodes = table.len(),
            depth = table.max_depth(),
            "built symbol index"
        );
        Ok(table)
    }
}

impl<S: Into<String>> Extend<S> for IndexBuilder {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        self.symbols.extend(iter.into_iter().map(Into::into));
    }
}

impl<S: Into<String>> FromIterator<S> for IndexBuilder {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut builder = Self::new();
        builder.extend(iter);
        builder
    }
}

/// Hash the whole vocabulary up front and reject it if any two symbols
/// share a hash. On success, returns `(hash, symbol)` pairs in ascending
/// hash order.
pub fn check_collisions<S: AsRef<str>>(symbols: &[S]) -> Result<Vec<(u16, &str)>, IndexError> {
    if symbols.len() > MAX_SYMBOLS {
        return Err(IndexError::TooManySymbols {
            count: symbols.len(),
            max: MAX_SYMBOLS,
        });
    }

    let mut by_hash: BTreeMap<u16, &str> = BTreeMap::new();
    for symbol in symbols {
        let symbol = symbol.as_ref();
        let hash = hash_str(symbol);
        match by_hash.entry(hash) {
            Entry::Vacant(slot) => {
                slot.insert(symbol);
            }
            Entry::Occupied(existing) if *existing.get() == symbol => {
                return Err(IndexError::DuplicateSymbol {
                    symbol: symbol.to_string(),
                });
            }
            Entry::Occupied(existing) => {
                return Err(IndexError::HashCollision {
                    first: existing.get().to_string(),
                    second: symbol.to_string(),
                    hash,
                });
            }
        }
    }

    Ok(by_hash.into_iter().collect())
}

/// Append the subtree for `sorted` to `nodes` in pre-order and return the
/// link to its root.
///
/// The middle element (`len / 2`) becomes the local root, the prefix the left
/// branch and the suffix the right branch, so sibling subtrees differ in size
/// by at most one.
fn place(sorted: &[(u16, &str)], nodes: &mut Vec<IndexNode>) -> Result<Link, IndexError> {
    if sorted.is_empty() {
        return Ok(Link::ABSENT);
    }

    let mid = sorted.len() / 2;
    let (hash, text) = sorted[mid];
    let position = nodes.len();
    let link = Link::to(position)?;
    nodes.push(IndexNode::leaf(hash, text.to_string()));

    let left = place(&sorted[..mid], nodes)?;
    let right = place(&sorted[mid + 1..], nodes)?;
    let node = &mut nodes[position];
    node.left = left;
    node.right = right;

    Ok(link)
}
