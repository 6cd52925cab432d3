//! Symbol vocabularies fed to the index builder.

mod builtin;
mod error;
mod vocabulary;

pub use builtin::{BUILTIN_SYMBOLS, CONSTRUCTOR_SYMBOL, builtin_symbols};
pub use error::VocabError;
pub use vocabulary::Vocabulary;
