use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("texture region not found: {0}")]
    RegionMissing(String),

    #[error("config I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config parse error: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
