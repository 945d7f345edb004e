//! Shared response handling for the HTTP clients.

use slidecast_error::{ProviderError, ProviderErrorKind};

/// Map a transport failure.
pub(crate) fn request_failed(e: reqwest::Error) -> ProviderError {
    tracing::error!("Request failed: {}", e);
    ProviderError::new(ProviderErrorKind::ApiRequest(e.to_string()))
}

/// Map a body that did not decode.
pub(crate) fn invalid_response(e: impl std::fmt::Display) -> ProviderError {
    tracing::error!("Failed to parse response: {}", e);
    ProviderError::new(ProviderErrorKind::InvalidResponse(e.to_string()))
}

/// Pass successful responses through; turn anything else into `HttpStatus`.
pub(crate) async fn check_status(
    response: reqwest::Response,
) -> Result<reqwest::Response, ProviderError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let message = response
        .text()
        .await
        .ok()
        .filter(|body| !body.trim().is_empty())
        .unwrap_or_else(|| status.canonical_reason().unwrap_or("unknown").to_string());
    tracing::error!(status = status.as_u16(), "Service returned error");
    Err(ProviderError::new(ProviderErrorKind::HttpStatus {
        status_code: status.as_u16(),
        message,
    }))
}
