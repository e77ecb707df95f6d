use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("unknown operating system: {0}")]
    UnknownOS(String),

    #[error("invalid release URL: {0}")]
    InvalidReleaseUrl(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
