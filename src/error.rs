use thiserror::Error;

#[derive(Error, Debug)]
pub enum G2Error {
    #[error("failed to read shape document: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid shape document: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid color {0:?}")]
    InvalidColor(String),
    #[error("cannot allocate a {width}x{height} pixmap")]
    Pixmap { width: u32, height: u32 },
}

pub type G2Result<T> = Result<T, G2Error>;
