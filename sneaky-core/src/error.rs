pub type Result<T> = std::result::Result<T, Error>;

#[derive(PartialEq, Eq, Clone, Debug, thiserror::Error)]
pub enum Error {
    #[error("Encode error: {0}")]
    Encode(String),

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Worker task failed: {0}")]
    Worker(String),

    #[error("No tokio runtime available to run the codec task")]
    NoRuntime,
}

impl Error {
    /// True for failures reported by the codec itself, in either direction.
    pub fn is_codec_failure(&self) -> bool {
        matches!(self, Error::Encode(_) | Error::Decode(_))
    }
}
