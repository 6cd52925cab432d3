/// Fatal conditions raised while generating a symbol index.
///
/// None of these are recoverable: a table is only handed out once every
/// check has passed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IndexError {
    /// Two distinct symbols share a hash value.
    #[error("hash collision: '{first}' and '{second}' both hash to {hash:#06x}")]
    HashCollision {
        first: String,
        second: String,
        hash: u16,
    },
    /// The same symbol was listed more than once.
    #[error("duplicate symbol '{symbol}'")]
    DuplicateSymbol { symbol: String },
    /// The vocabulary does not fit in the 8-bit link field.
    #[error("too many symbols: {count} exceeds the table capacity of {max}")]
    TooManySymbols { count: usize, max: usize },
    /// A symbol could not be found by searching the finished table.
    #[error("verification failed: symbol '{symbol}' is not reachable in the index")]
    Missing { symbol: String },
    /// A search resolved a symbol to the wrong node.
    #[error(
        "verification failed: symbol '{symbol}' resolved to position {position} holding '{found}'"
    )]
    Misresolved {
        symbol: String,
        position: usize,
        found: String,
    },
    /// The table does not hold exactly one node per symbol.
    #[error("verification failed: table holds {nodes} nodes for {symbols} symbols")]
    NodeCountMismatch { nodes: usize, symbols: usize },
}
