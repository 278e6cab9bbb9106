use crate::short_date::ShortDateError;
use reqwest::StatusCode;
use serde_json::Value;
use thiserror::Error;

/// Failure modes of a [`Session`](crate::Session) operation. Nothing is
/// retried or recovered internally; every failure reaches the caller as-is.
#[derive(Error, Debug)]
pub enum SessionError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("invalid response, status code: {status} - data: {body}")]
    Response { status: StatusCode, body: Value },
    #[error("malformed payload: {0}")]
    MalformedPayload(#[from] serde_json::Error),
    #[error("login failed: {0}")]
    Login(String),
    #[error(transparent)]
    ShortDate(#[from] ShortDateError),
}
