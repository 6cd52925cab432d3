#[derive(Debug, thiserror::Error)]
pub enum EmitError {
    /// The array name is not a valid identifier in the target syntax.
    #[error("'{0}' is not a valid table name")]
    InvalidName(String),
    #[error("failed to render symbol index: {0}")]
    Template(#[from] tera::Error),
}
