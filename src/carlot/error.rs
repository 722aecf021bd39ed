use crate::model::ListingId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CarlotError {
    #[error("Car not found: {0}")]
    ListingNotFound(ListingId),

    #[error("Car not found: no listing id given")]
    MissingId,

    #[error("Car not found: invalid listing id {0}")]
    InvalidId(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Api Error: {0}")]
    Api(String),
}

impl CarlotError {
    /// True for the errors a user sees as "Car not found".
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            CarlotError::ListingNotFound(_) | CarlotError::MissingId | CarlotError::InvalidId(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, CarlotError>;
