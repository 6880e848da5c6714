use crate::backend::{ApiRequest, ApiResponse, Backend};
use crate::error::{PasteError, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

/// Sends the request and turns any non-2xx status into [`PasteError::Http`].
pub fn send<B: Backend>(backend: &B, request: &ApiRequest) -> Result<ApiResponse> {
    let response = backend.execute(request)?;
    if !response.is_success() {
        log::debug!(
            "{} {} returned {}: {}",
            request.method,
            request.path(),
            response.status,
            response.body
        );
        return Err(PasteError::Http {
            status: response.status,
            body: response.body,
        });
    }
    Ok(response)
}

/// Like [`send`], then decodes the body as `T`.
pub fn send_json<B: Backend, T: DeserializeOwned>(backend: &B, request: &ApiRequest) -> Result<T> {
    let response = send(backend, request)?;
    serde_json::from_str(&response.body).map_err(|e| PasteError::Decode {
        message: e.to_string(),
        body: Some(response.body),
    })
}

pub fn json_body<T: Serialize>(value: &T) -> Result<Value> {
    Ok(serde_json::to_value(value)?)
}

/// Adds the 0-based `page` and `size` query parameters.
pub fn paged(request: ApiRequest, page: u32, size: u32) -> ApiRequest {
    request.with_query("page", page).with_query("size", size)
}

pub fn require_non_blank(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(PasteError::Validation(format!("{} must not be empty", field)));
    }
    Ok(())
}
