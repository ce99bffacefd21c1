pub type KenBurnsResult<T> = Result<T, KenBurnsError>;

#[derive(thiserror::Error, Debug)]
pub enum KenBurnsError {
    #[error("download error: {0}")]
    Download(String),

    #[error("unreadable image error: {0}")]
    UnreadableImage(String),

    #[error("invalid spec error: {0}")]
    InvalidSpec(String),

    #[error("invalid parameter error: {0}")]
    InvalidParameter(String),

    #[error("encode error: {0}")]
    Encode(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl KenBurnsError {
    pub fn download(msg: impl Into<String>) -> Self {
        Self::Download(msg.into())
    }

    pub fn unreadable_image(msg: impl Into<String>) -> Self {
        Self::UnreadableImage(msg.into())
    }

    pub fn invalid_spec(msg: impl Into<String>) -> Self {
        Self::InvalidSpec(msg.into())
    }

    pub fn invalid_parameter(msg: impl Into<String>) -> Self {
        Self::InvalidParameter(msg.into())
    }

    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }
}
