use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResolverError {
    #[error("Overlay error: {0}")]
    Overlay(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ResolverError>;
