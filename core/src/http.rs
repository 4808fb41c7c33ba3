//! HTTP transport types shared by the request builders and the executor.
//!
//! # Design
//! Requests and responses are plain owned data. `EmployeeClient` builds
//! `HttpRequest` values and parses `HttpResponse` values without touching the
//! network; only the `transport` module performs I/O. Keeping the two halves
//! apart makes every status/body edge case of the remote resource
//! reproducible in unit tests with hand-built responses.

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

/// An HTTP request described as plain data.
///
/// Built by `EmployeeClient::build_*` methods and handed to a `Transport`
/// for execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// An HTTP response described as plain data.
///
/// The executor materializes the body into `body` exactly once. The remote
/// resource's bodies are single-read streams, so nothing downstream may go
/// back to the wire for a second look.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}
