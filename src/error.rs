use thiserror::Error;

use crate::backend::Lookup;

#[derive(Error, Debug)]
pub enum ApiError {
    /* mapped errors */
    #[error(transparent)]
    SerdeJson(#[from] serde_json::Error),

    #[error(transparent)]
    IOError(#[from] std::io::Error),

    #[error(transparent)]
    ConfigError(#[from] config::ConfigError),

    #[error(transparent)]
    SetLoggerError(#[from] log::SetLoggerError),

    #[error(transparent)]
    HueError(#[from] hue::error::HueError),

    #[error(transparent)]
    ZclError(#[from] zcl::error::ZclError),

    /* request errors */
    #[error("Light not found: {0}")]
    LightNotFound(Lookup),

    #[error("Group not found: {0}")]
    GroupNotFound(Lookup),

    #[error("Invalid light request: {0}")]
    InvalidRequest(String),

    /* transport errors */
    #[error("Failed to send {command} to {dest}: {reason}")]
    SendFailed {
        dest: String,
        command: String,
        reason: String,
    },

    #[error("Invalid replay event: {0}")]
    InvalidEvent(String),
}

pub type ApiResult<T> = Result<T, ApiError>;
