//! Stateless request builder and response parser for the employee API.
//!
//! # Design
//! `EmployeeClient` holds only the collection URL and carries no state
//! between calls. Every CRUD operation is a `build_*` / `parse_*` pair; the
//! `transport` module (or any other executor) performs the round-trip in
//! between. Create and update payloads deliberately duplicate each field
//! under every key variant the backend is known to honor — which spelling
//! sticks depends on how the remote dataset was provisioned, and sending
//! all of them guarantees the field lands.

use log::{debug, warn};
use serde_json::{json, Value};
use url::form_urlencoded;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::response::{is_success, reconcile};
use crate::types::{normalize, Employee, EmployeeForm, Scalar};

/// Stateless request builder / response parser for the employee API.
///
/// `base_url` is the collection URL itself: list is `GET <base>`, item
/// operations append `/<id>`.
#[derive(Debug, Clone)]
pub struct EmployeeClient {
    base_url: String,
}

impl EmployeeClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // -----------------------------------------------------------------------
    // Build requests
    // -----------------------------------------------------------------------

    /// List request, optionally filtered by name. Blank terms mean no
    /// filter; non-blank terms are trimmed and URL-encoded into the `Name`
    /// query parameter.
    pub fn build_list(&self, search: Option<&str>) -> HttpRequest {
        let path = match trimmed(search) {
            Some(term) => {
                let query: String = form_urlencoded::Serializer::new(String::new())
                    .append_pair("Name", term)
                    .finish();
                format!("{}?{}", self.base_url, query)
            }
            None => self.base_url.clone(),
        };
        debug!("list {path}");
        HttpRequest {
            method: HttpMethod::Get,
            path,
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_get(&self, id: &Scalar) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/{id}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_create(&self, form: &EmployeeForm) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(&duplicated_payload(form))
            .map_err(|e| ApiError::Serialization(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: self.base_url.clone(),
            headers: json_headers(),
            body: Some(body),
        })
    }

    pub fn build_update(&self, id: &Scalar, form: &EmployeeForm) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(&duplicated_payload(form))
            .map_err(|e| ApiError::Serialization(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Put,
            path: format!("{}/{id}", self.base_url),
            headers: json_headers(),
            body: Some(body),
        })
    }

    /// Delete request. The id is validated before anything is built: absent
    /// ids, blank renderings, and the literal texts `"undefined"` /
    /// `"null"` (careless string coercion upstream produces both) are
    /// rejected locally instead of being sent as a malformed request path.
    pub fn build_delete(&self, id: Option<&Scalar>) -> Result<HttpRequest, ApiError> {
        let id = validate_delete_id(id)?;
        Ok(HttpRequest {
            method: HttpMethod::Delete,
            path: format!("{}/{id}", self.base_url),
            headers: json_headers(),
            body: None,
        })
    }

    // -----------------------------------------------------------------------
    // Parse responses
    // -----------------------------------------------------------------------

    /// Parse a list response. Payloads that are absent or not an array
    /// yield an empty list rather than an error. When a search term is
    /// given, results are additionally re-filtered locally with a
    /// case-insensitive substring match on `name` — the server's own `Name`
    /// filter is not trusted to match local intent (it has been observed
    /// doing exact and prefix matching depending on the dataset).
    pub fn parse_list(
        &self,
        response: HttpResponse,
        search: Option<&str>,
    ) -> Result<Vec<Employee>, ApiError> {
        let employees = match reconcile(response)? {
            Some(Value::Array(items)) => items.iter().map(normalize).collect(),
            Some(other) => {
                warn!("list payload is not an array: {other}");
                Vec::new()
            }
            None => Vec::new(),
        };
        Ok(match trimmed(search) {
            Some(term) => filter_by_name(employees, term),
            None => employees,
        })
    }

    /// Parse a single-record response. A failing status propagates as
    /// `Http`; an absent payload normalizes to the blank record.
    pub fn parse_get(&self, response: HttpResponse) -> Result<Employee, ApiError> {
        let payload = reconcile(response)?;
        Ok(normalize(&payload.unwrap_or(Value::Null)))
    }

    /// Parse a create response. `None` means the backend acknowledged the
    /// create without echoing the record — the caller reloads the list to
    /// observe the assigned id.
    pub fn parse_create(&self, response: HttpResponse) -> Result<Option<Employee>, ApiError> {
        Ok(reconcile(response)?.map(|value| normalize(&value)))
    }

    /// Parse an update response. Same no-body caveat as `parse_create`.
    pub fn parse_update(&self, response: HttpResponse) -> Result<Option<Employee>, ApiError> {
        Ok(reconcile(response)?.map(|value| normalize(&value)))
    }

    /// Parse a delete response. 404 is its own error so callers can phrase
    /// "already deleted"; any success status counts as deleted regardless
    /// of body (200 with junk text is the common case).
    pub fn parse_delete(&self, response: HttpResponse, id: &str) -> Result<(), ApiError> {
        if response.status == 404 {
            return Err(ApiError::NotFound { id: id.to_string() });
        }
        if !is_success(response.status) {
            return Err(ApiError::Http {
                status: response.status,
                body: response.body,
            });
        }
        Ok(())
    }
}

/// Case-insensitive substring filter on the canonical name.
pub fn filter_by_name(employees: Vec<Employee>, term: &str) -> Vec<Employee> {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return employees;
    }
    employees
        .into_iter()
        .filter(|e| e.name.to_lowercase().contains(&needle))
        .collect()
}

fn trimmed(search: Option<&str>) -> Option<&str> {
    search.map(str::trim).filter(|t| !t.is_empty())
}

fn validate_delete_id(id: Option<&Scalar>) -> Result<String, ApiError> {
    let text = id.map(Scalar::to_string).unwrap_or_default();
    let text = text.trim();
    if text.is_empty() || text == "undefined" || text == "null" {
        warn!("refusing delete with invalid id {text:?}");
        return Err(ApiError::Validation(format!("invalid employee id: {text:?}")));
    }
    Ok(text.to_string())
}

/// Compatibility shim: emit every key variant the backend is known to honor,
/// simultaneously.
fn duplicated_payload(form: &EmployeeForm) -> Value {
    json!({
        "name": form.name,
        "Name": form.name,
        "age": form.age,
        "Edad": form.age,
        "position": form.position,
        "Puesto": form.position,
        "phone": form.phone,
        "Telefono": form.phone,
    })
}

fn json_headers() -> Vec<(String, String)> {
    vec![("content-type".to_string(), "application/json".to_string())]
}
