use thiserror::Error;

#[derive(Error, Debug)]
pub enum HueError {
    /* mapped errors */
    #[error(transparent)]
    SerdeJson(#[from] serde_json::Error),

    #[error(transparent)]
    ZclError(#[from] zcl::error::ZclError),

    #[error("Light request must be a json object, found: {0}")]
    RequestNotObject(String),
}

pub type HueResult<T> = Result<T, HueError>;
