//! Transport glue shared by the auth and data modules.
//!
//! A send failure (DNS, refused connection, timeout) is a different condition
//! from an HTTP error status and maps to `RdpError::Transport`; only once a
//! response exists do we classify its status.

use crate::core::RdpError;

/// Dispatch a request, mapping transport failures to [`RdpError::Transport`].
pub(crate) async fn send(req: reqwest::RequestBuilder) -> Result<reqwest::Response, RdpError> {
    req.send().await.map_err(RdpError::Transport)
}

fn reason_phrase(status: reqwest::StatusCode) -> String {
    status.canonical_reason().unwrap_or_default().to_string()
}

/// Consume a non-success token-endpoint response into an
/// [`RdpError::Authentication`].
pub(crate) async fn auth_failure(resp: reqwest::Response) -> RdpError {
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    RdpError::Authentication {
        status: status.as_u16(),
        reason: reason_phrase(status),
        body,
    }
}

/// Consume a non-success data-endpoint response into an [`RdpError::Request`].
pub(crate) async fn request_failure(resp: reqwest::Response) -> RdpError {
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    RdpError::Request {
        status: status.as_u16(),
        reason: reason_phrase(status),
        body,
    }
}
