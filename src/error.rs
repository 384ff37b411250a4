//! Error types for the Retain.cc client.
//!
//! This module contains the single error enum used across the crate and the
//! conversions from the underlying crates' errors (`reqwest`, `serde_json`,
//! etc.). Transport failures and dispatcher failures stay distinct: the
//! client never retries, logs, or swallows any of them.

use reqwest;
use reqwest_middleware;
use serde_json;
use thiserror::Error;

/// Errors surfaced by [`crate::Retaincc`] operations.
#[derive(Error, Debug)]
pub enum Error {
    /// The requested verb is outside the supported set (GET, POST, PUT,
    /// DELETE). Raised before any network I/O happens.
    #[error("unsupported HTTP method: {0}")]
    UnsupportedMethod(reqwest::Method),

    /// A failure reported by the dispatcher itself, optionally carrying the
    /// partially decoded result the remote service returned.
    #[error("request error: {message}")]
    Request {
        message: String,
        result: Option<serde_json::Value>,
    },

    /// Required configuration was absent when constructing from the
    /// environment.
    #[error("missing configuration: {0}")]
    MissingConfig(String),

    /// Transport or body-decode failure from the HTTP client. A non-JSON
    /// response body lands here as a decode error.
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    /// Failure surfaced through the middleware stack (timeouts arrive here).
    #[error("HTTP middleware error: {0}")]
    HttpMiddleware(#[from] reqwest_middleware::Error),

    /// Request parameters could not be serialized to JSON.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
