//! API client core for the hosted employee directory.
//!
//! # Overview
//! The remote resource is a third-party REST endpoint with observably
//! inconsistent behavior: field keys change casing and language between
//! datasets (`id`/`Id`, `name`/`Nombre`, ...), and mutating endpoints answer
//! with any of 200-plus-echo, 204, or 200 with an empty or non-JSON body.
//! This crate absorbs those inconsistencies in two layers:
//!
//! - `response::reconcile` reduces every response to a parsed payload,
//!   `None`, or an `ApiError`;
//! - `types::normalize` folds every known key alias into one canonical
//!   `Employee` shape, exactly once.
//!
//! # Design
//! - `EmployeeClient` is stateless and network-free: `build_*` produces an
//!   `HttpRequest`, `parse_*` consumes an `HttpResponse`.
//! - `EmployeeApi` pairs the client with a `Transport` (ureq in production,
//!   scripted fakes in tests) for end-to-end operations.
//! - The remote resource is the sole source of truth: no cache, no retry,
//!   callers reload the list after every mutation.

pub mod api;
pub mod client;
pub mod error;
pub mod http;
pub mod response;
pub mod transport;
pub mod types;

pub use api::{EmployeeApi, BASE_URL_ENV, DEFAULT_BASE_URL};
pub use client::{filter_by_name, EmployeeClient};
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use response::reconcile;
pub use transport::{Transport, UreqTransport};
pub use types::{normalize, Employee, EmployeeForm, Scalar};
