//! Textual emission of a finished symbol index as static data.

mod config;
mod error;
mod escape;
mod render;

pub use config::{Config, Format};
pub use error::EmitError;
pub use render::{GENERATED_BY, render};
