//! Static symbol indexes for embedded language runtimes.
//!
//! The index is generated at build time (see `cargo xtask sym-index`) and
//! embedded as a `static` array of [`IndexNode`]s; [`lookup`] resolves a name
//! against it without hashing tables or allocation.

pub use symdex_core::*;

#[cfg(feature = "emit")]
pub use symdex_emit as emit;

#[cfg(feature = "vocab")]
pub use symdex_vocab as vocab;

pub mod prelude {
    pub use symdex_core::{IndexBuilder, IndexError, IndexNode, IndexTable, hash_str, lookup};

    #[cfg(feature = "emit")]
    pub use symdex_emit::{Config, Format, render};

    #[cfg(feature = "vocab")]
    pub use symdex_vocab::Vocabulary;
}
