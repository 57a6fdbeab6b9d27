use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClassifyError {
    #[error("No content provided: Please enter some content to fact-check.")]
    EmptyInput,

    #[error("Unsupported image: {0} (expected JPEG, PNG or GIF)")]
    UnsupportedImage(String),

    #[error("A fact-check is already in progress")]
    Busy,

    #[error("Fact-check cancelled")]
    Cancelled,

    #[error("Classification backend failed: {0}")]
    Backend(String),
}
