use crate::error::SessionError;
use reqwest::{Response, StatusCode};
use serde_json::Value;

/// Consumes the response body and returns the decoded JSON payload of a 200
/// response. Any other status fails with [`SessionError::Response`] carrying
/// the decoded error body; a body that is not JSON fails with
/// [`SessionError::MalformedPayload`] regardless of the status.
pub(crate) async fn validate(response: Response) -> Result<Value, SessionError> {
    let status = response.status();
    let body = response.text().await?;
    let payload: Value = serde_json::from_str(&body)?;

    if status == StatusCode::OK {
        Ok(payload)
    } else {
        Err(SessionError::Response { status, body: payload })
    }
}
