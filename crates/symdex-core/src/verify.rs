use crate::error::IndexError;
use crate::hash::hash_str;
use crate::table::IndexTable;

/// Summary of a successful verification pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VerifyReport {
    /// Number of symbols searched for.
    pub symbols: usize,
    /// Most comparisons any single search needed.
    pub max_depth: usize,
}

/// Search `table` for every symbol and fail on the first one that does not
/// resolve to a node holding exactly that text.
///
/// A symbol whose hash leads to a node holding some other text is reported
/// as [`IndexError::Misresolved`]; one whose hash leads nowhere is
/// [`IndexError::Missing`].
pub fn verify<S: AsRef<str>>(
    table: &IndexTable,
    symbols: &[S],
) -> Result<VerifyReport, IndexError> {
    let mut max_depth = 0;
    for symbol in symbols {
        let symbol = symbol.as_ref();
        let probe = table.probe(symbol);
        if probe.position.is_none() {
            return Err(unresolved(table, symbol));
        }
        max_depth = max_depth.max(probe.comparisons);
    }

    if table.len() != symbols.len() {
        return Err(IndexError::NodeCountMismatch {
            nodes: table.len(),
            symbols: symbols.len(),
        });
    }

    tracing::info!(
        symbols = symbols.len(),
        max_depth,
        "verified symbol index"
    );
    Ok(VerifyReport {
        symbols: symbols.len(),
        max_depth,
    })
}

/// Classify a failed search by walking the hash path alone.
fn unresolved(table: &IndexTable, symbol: &str) -> IndexError {
    let key = hash_str(symbol);
    let nodes = table.nodes();
    let mut position = 0;
    for _ in 0..nodes.len() {
        let Some(node) = nodes.get(position) else {
            break;
        };
        if node.hash == key {
            return IndexError::Misresolved {
                symbol: symbol.to_string(),
                position,
                found: node.text().to_string(),
            };
        }
        let next = if key < node.hash { node.left } else { node.right };
        match next.get() {
            Some(child) => position = child,
            None => break,
        }
    }
    IndexError::Missing {
        symbol: symbol.to_string(),
    }
}
