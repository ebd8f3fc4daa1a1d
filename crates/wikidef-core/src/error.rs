#[derive(Debug, thiserror::Error)]
pub enum NormalizeError {
    #[error("No definition found")]
    NotFound,

    /// The selected locale branch is not a list of part-of-speech groups
    #[error(transparent)]
    Shape(#[from] serde_json::Error),
}
