//! Build-time construction of static symbol indexes.
//!
//! A vocabulary of symbol names is hashed, checked for collisions and laid
//! out as a binary search tree over the hashes, flattened into one array.
//! Children are referenced by their position in that array; position 0 holds
//! the root and doubles as the "no child" link. The runtime side only needs
//! [`hash`] and [`lookup`] to walk a table embedded as static data.

mod builder;
mod error;
mod hash;
mod node;
mod table;
mod verify;

pub use builder::{IndexBuilder, check_collisions};
pub use error::IndexError;
pub use hash::{HASH_MULTIPLIER, hash, hash_str};
pub use node::{IndexNode, Link, MAX_SYMBOLS};
pub use table::{IndexTable, Probe, lookup, probe};
pub use verify::{VerifyReport, verify};
