//! Configuration for emission.

/// Target syntax for the emitted table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Format {
    /// `static const struct SYM_INDEX name[] = { ... };`
    #[default]
    C,
    /// `pub static NAME: [symdex::IndexNode<&str>; N] = [ ... ];`
    Rust,
}

impl Format {
    pub fn default_name(self) -> &'static str {
        match self {
            Format::C => "base_index",
            Format::Rust => "BASE_INDEX",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Format::C => "c",
            Format::Rust => "rust",
        }
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Configuration options for emission.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Config {
    /// Output syntax.
    pub format: Format,
    /// Name of the emitted array. Defaults to [`Format::default_name`].
    pub name: Option<String>,
}

impl Config {
    /// Create a new config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_format(mut self, format: Format) -> Self {
        self.format = format;
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// The array name actually emitted.
    pub fn table_name(&self) -> &str {
        self.name
            .as_deref()
            .unwrap_or_else(|| self.format.default_name())
    }
}
