//! End-to-end CRUD operations against the remote employee resource.
//!
//! # Design
//! `EmployeeApi` wires the stateless builder/parser to a `Transport`. Each
//! operation is one independent round-trip; there is no local cache and no
//! retry — the remote resource is the sole source of truth, and callers
//! reload the list after every mutation.

use crate::client::EmployeeClient;
use crate::error::ApiError;
use crate::transport::{Transport, UreqTransport};
use crate::types::{Employee, EmployeeForm, Scalar};

/// Default hosted endpoint, used when no override is configured.
pub const DEFAULT_BASE_URL: &str = "https://retoolapi.dev/Vv50y8/recuperacion";

/// Environment variable overriding the endpoint.
pub const BASE_URL_ENV: &str = "EMPLOYEE_API_URL";

/// High-level client: builds requests, executes them, parses responses.
#[derive(Debug, Clone)]
pub struct EmployeeApi<T = UreqTransport> {
    client: EmployeeClient,
    transport: T,
}

impl EmployeeApi<UreqTransport> {
    /// Client against an explicit endpoint.
    pub fn new(base_url: &str) -> Self {
        Self::with_transport(base_url, UreqTransport)
    }

    /// Client against the endpoint from `EMPLOYEE_API_URL`, falling back to
    /// the hosted default.
    pub fn from_env() -> Self {
        let base_url =
            std::env::var(BASE_URL_ENV).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::new(&base_url)
    }
}

impl<T: Transport> EmployeeApi<T> {
    pub fn with_transport(base_url: &str, transport: T) -> Self {
        Self {
            client: EmployeeClient::new(base_url),
            transport,
        }
    }

    pub fn base_url(&self) -> &str {
        self.client.base_url()
    }

    /// Fetch employees, optionally filtered by name. The server-side `Name`
    /// filter is applied when a term is given, and the results are
    /// re-filtered locally (case-insensitive substring) as well.
    pub fn list(&self, search: Option<&str>) -> Result<Vec<Employee>, ApiError> {
        let request = self.client.build_list(search);
        let response = self.transport.execute(&request)?;
        self.client.parse_list(response, search)
    }

    /// Fetch one employee by id.
    pub fn get(&self, id: &Scalar) -> Result<Employee, ApiError> {
        let request = self.client.build_get(id);
        let response = self.transport.execute(&request)?;
        self.client.parse_get(response)
    }

    /// Create an employee. `Ok(None)` means the backend acknowledged the
    /// create without echoing the record; reload the list to observe the
    /// assigned id.
    pub fn create(&self, form: &EmployeeForm) -> Result<Option<Employee>, ApiError> {
        let request = self.client.build_create(form)?;
        let response = self.transport.execute(&request)?;
        self.client.parse_create(response)
    }

    /// Update the employee with `id`. Same no-body caveat as `create`.
    pub fn update(&self, id: &Scalar, form: &EmployeeForm) -> Result<Option<Employee>, ApiError> {
        let request = self.client.build_update(id, form)?;
        let response = self.transport.execute(&request)?;
        self.client.parse_update(response)
    }

    /// Delete the employee with `id`. The id is validated locally before any
    /// request is issued; a 404 surfaces as `NotFound`.
    pub fn delete(&self, id: Option<&Scalar>) -> Result<(), ApiError> {
        let request = self.client.build_delete(id)?;
        let response = self.transport.execute(&request)?;
        let id_text = id.map(Scalar::to_string).unwrap_or_default();
        self.client.parse_delete(response, id_text.trim())
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::http::{HttpRequest, HttpResponse};

    /// Answers every request with the same canned response.
    struct Canned {
        status: u16,
        body: &'static str,
    }

    impl Transport for Canned {
        fn execute(&self, _request: &HttpRequest) -> Result<HttpResponse, ApiError> {
            Ok(HttpResponse {
                status: self.status,
                headers: Vec::new(),
                body: self.body.to_string(),
            })
        }
    }

    /// Fails the test if any request reaches the wire.
    struct Unreachable;

    impl Transport for Unreachable {
        fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError> {
            panic!("no request should have been issued, got {}", request.path);
        }
    }

    /// Records request paths and answers 204.
    struct Recording(RefCell<Vec<String>>);

    impl Transport for Recording {
        fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError> {
            self.0.borrow_mut().push(request.path.clone());
            Ok(HttpResponse {
                status: 204,
                headers: Vec::new(),
                body: String::new(),
            })
        }
    }

    /// Simulates a dead network.
    struct Offline;

    impl Transport for Offline {
        fn execute(&self, _request: &HttpRequest) -> Result<HttpResponse, ApiError> {
            Err(ApiError::Network("connection refused".to_string()))
        }
    }

    fn form() -> EmployeeForm {
        EmployeeForm {
            name: "Ana".to_string(),
            age: 30,
            position: "Dev".to_string(),
            phone: "+1".to_string(),
        }
    }

    #[test]
    fn delete_with_invalid_id_never_reaches_the_transport() {
        let api = EmployeeApi::with_transport("http://test/employees", Unreachable);
        for id in [None, Some(Scalar::from("")), Some(Scalar::from("undefined"))] {
            let err = api.delete(id.as_ref()).unwrap_err();
            assert!(matches!(err, ApiError::Validation(_)), "id {id:?}");
        }
    }

    #[test]
    fn delete_with_zero_id_issues_the_request() {
        let transport = Recording(RefCell::new(Vec::new()));
        let api = EmployeeApi::with_transport("http://test/employees", transport);
        api.delete(Some(&Scalar::from(0u64))).unwrap();
        assert_eq!(api.transport.0.borrow().as_slice(), ["http://test/employees/0"]);
    }

    #[test]
    fn delete_on_missing_record_is_not_found() {
        let api = EmployeeApi::with_transport("http://test/employees", Canned { status: 404, body: "" });
        let err = api.delete(Some(&Scalar::from(7u64))).unwrap_err();
        match err {
            ApiError::NotFound { id } => assert_eq!(id, "7"),
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn list_refilters_whatever_the_server_returned() {
        let body = r#"[{"name":"Ana"},{"name":"Anabel"},{"name":"Beto"}]"#;
        let api = EmployeeApi::with_transport("http://test/employees", Canned { status: 200, body });
        let employees = api.list(Some("ana")).unwrap();
        assert_eq!(employees.len(), 2);
    }

    #[test]
    fn create_without_an_echo_is_success_with_no_record() {
        let api = EmployeeApi::with_transport("http://test/employees", Canned { status: 200, body: "" });
        assert!(api.create(&form()).unwrap().is_none());
    }

    #[test]
    fn update_answered_with_no_content_is_success() {
        let api = EmployeeApi::with_transport("http://test/employees", Canned { status: 204, body: "" });
        let echoed = api.update(&Scalar::from(7u64), &form()).unwrap();
        assert!(echoed.is_none());
    }

    #[test]
    fn transport_failures_surface_as_network_errors() {
        let api = EmployeeApi::with_transport("http://test/employees", Offline);
        let err = api.list(None).unwrap_err();
        assert!(matches!(err, ApiError::Network(_)));
        assert!(err.to_string().contains("check your network"));
    }

    #[test]
    fn from_env_prefers_the_override() {
        std::env::set_var(BASE_URL_ENV, "http://localhost:9999/employees");
        let api = EmployeeApi::from_env();
        assert_eq!(api.base_url(), "http://localhost:9999/employees");
        std::env::remove_var(BASE_URL_ENV);
    }
}
