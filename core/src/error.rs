//! Error taxonomy for the employee API client.
//!
//! # Design
//! Four failure categories reach the caller: a non-success status (`Http`),
//! a delete aimed at a record the backend no longer has (`NotFound`), a
//! locally rejected input (`Validation`), and a transport that died before
//! producing any response (`Network`). Unparsable or absent success bodies
//! are deliberately NOT errors — the backend answers some mutations with
//! empty or non-JSON bodies, and the reconciler resolves those to "no
//! payload" instead.

use std::fmt;

/// Errors surfaced by `EmployeeClient` and `EmployeeApi`.
#[derive(Debug)]
pub enum ApiError {
    /// The server returned a non-success status. Carries the numeric status
    /// and whatever diagnostic text could be read (possibly empty).
    Http { status: u16, body: String },

    /// A delete targeted an id the server does not know. Kept separate from
    /// `Http` so callers can phrase "already deleted" instead of a generic
    /// failure.
    NotFound { id: String },

    /// A local pre-flight check failed before any request was issued.
    Validation(String),

    /// The transport failed before any response was received.
    Network(String),

    /// The request payload could not be serialized to JSON.
    Serialization(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Http { status, body } => write!(f, "HTTP {status}: {body}"),
            ApiError::NotFound { id } => write!(f, "employee {id} not found"),
            ApiError::Validation(msg) => write!(f, "{msg}"),
            ApiError::Network(msg) => {
                write!(f, "connection failed ({msg}); check your network and retry")
            }
            ApiError::Serialization(msg) => write!(f, "serialization failed: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {}
