use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum VocabError {
    #[error("failed to read vocabulary file '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid YAML vocabulary: {0}")]
    Yaml(#[from] serde_yaml::Error),
    /// An entry held the empty string.
    #[error("vocabulary entry {index} is empty")]
    EmptyName { index: usize },
}
