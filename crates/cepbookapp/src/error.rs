use thiserror::Error;

/// Failures reported by the lookup service boundary.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolutionError {
    #[error("No address found for postal code {0}")]
    NotFound(String),

    #[error("Lookup service unreachable: {0}")]
    Unreachable(String),

    #[error("Unexpected lookup response: {0}")]
    BadResponse(String),
}

#[derive(Error, Debug)]
pub enum CepError {
    #[error("Invalid postal code: {0}")]
    InvalidInput(String),

    #[error(transparent)]
    Resolution(#[from] ResolutionError),

    #[error("Persistence error: {0}")]
    Persistence(String),

    #[error("Corrupt stored data: {0}")]
    CorruptState(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, CepError>;
