use thiserror::Error;

#[derive(Error, Debug)]
pub enum ZclError {
    /* mapped errors */
    #[error(transparent)]
    ParseIntError(#[from] std::num::ParseIntError),

    #[error(transparent)]
    SerdeJson(#[from] serde_json::Error),

    #[error("Invalid ieee address: {0:?}")]
    InvalidIeeeAddress(String),
}

pub type ZclResult<T> = Result<T, ZclError>;
