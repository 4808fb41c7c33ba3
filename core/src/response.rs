//! Response reconciliation: raw HTTP response to payload, nothing, or error.
//!
//! # Design
//! The backend is inconsistent across endpoints: sometimes 200 with a JSON
//! echo, sometimes 204, sometimes 200 with an empty or non-JSON body. This
//! module absorbs all of it so downstream code only ever sees a parsed
//! value, `None`, or an `ApiError` — never a raw response.

use serde_json::Value;

use crate::error::ApiError;
use crate::http::HttpResponse;

/// Success-range check, shared with the client's delete path.
pub(crate) fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Reduce a response to its payload.
///
/// Non-success statuses fail with `ApiError::Http` carrying whatever body
/// text was read, even when empty. A 204 never touches the body. Empty,
/// whitespace-only, and non-JSON success bodies all resolve to `Ok(None)`:
/// the backend answers some mutations with junk bodies, and treating those
/// as failures would turn working operations into errors.
pub fn reconcile(response: HttpResponse) -> Result<Option<Value>, ApiError> {
    if !is_success(response.status) {
        return Err(ApiError::Http {
            status: response.status,
            body: response.body,
        });
    }

    if response.status == 204 {
        return Ok(None);
    }

    if response.body.trim().is_empty() {
        return Ok(None);
    }

    Ok(serde_json::from_str(&response.body).ok())
}
