//! Shared HTTP client and request dispatch for the Retain.cc API.
//!
//! This module provides:
//! - Construction of the long-lived HTTP client (timeout, tracing middleware)
//! - The single dispatch routine used by every endpoint wrapper

use http::Extensions;
use reqwest::{Method, Request, Response};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware, Result as MiddlewareResult};
use reqwest_tracing::{
    ReqwestOtelSpanBackend, TracingMiddleware, default_on_request_end, reqwest_otel_span,
};
use serde_json::Value;
use tracing::Span;

use crate::config::Config;
use crate::error::Error;

/// `User-Agent` sent on every request.
pub const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

// Tracing backend so outbound requests show up as spans in the embedding
// application's subscriber.
struct RequestSpan;

impl ReqwestOtelSpanBackend for RequestSpan {
    fn on_request_start(req: &Request, _extension: &mut Extensions) -> Span {
        reqwest_otel_span!(
            name = "retain-api-request",
            req,
            request_body = req
                .body()
                .and_then(|b| b.as_bytes())
                .map(String::from_utf8_lossy)
                .as_deref(),
        )
    }

    fn on_request_end(
        span: &Span,
        outcome: &MiddlewareResult<Response>,
        _extension: &mut Extensions,
    ) {
        default_on_request_end(span, outcome);
    }
}

/// Authenticated transport to the Retain.cc API.
///
/// Holds the [`Config`] and one reusable HTTP client. The client is built
/// once here and shared across calls; it is cheaply clonable and safe for
/// concurrent use, so the transport adds no synchronization of its own.
#[derive(Clone)]
pub struct Transport {
    config: Config,
    http: ClientWithMiddleware,
}

impl Transport {
    /// Builds the shared client with the configured timeout and the tracing
    /// middleware attached.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Http`] if the underlying client cannot be
    /// constructed.
    pub fn new(config: Config) -> Result<Self, Error> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .build()?;
        let http = ClientBuilder::new(client)
            .with(TracingMiddleware::<RequestSpan>::new())
            .build();
        Ok(Self { config, http })
    }

    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Makes one authenticated request and decodes the response as JSON.
    ///
    /// `params` is serialized as the JSON request body for every verb,
    /// GET and DELETE included; the service expects a body rather than a
    /// query string. Basic auth, the `User-Agent`, and the JSON content-type
    /// header are attached to every request. Response status codes are not
    /// inspected: whatever body comes back is decoded as JSON and returned
    /// verbatim.
    ///
    /// # Errors
    ///
    /// * [`Error::UnsupportedMethod`] for a verb outside GET, POST, PUT,
    ///   DELETE — no network call is issued.
    /// * [`Error::Serialization`] if `params` cannot be serialized.
    /// * [`Error::HttpMiddleware`] for transport failures (timeouts included).
    /// * [`Error::Http`] if the response body is not valid JSON.
    pub async fn call(&self, method: Method, url: &str, params: &Value) -> Result<Value, Error> {
        let request_builder = if method == Method::GET {
            self.http.get(url)
        } else if method == Method::POST {
            self.http.post(url)
        } else if method == Method::PUT {
            self.http.put(url)
        } else if method == Method::DELETE {
            self.http.delete(url)
        } else {
            return Err(Error::UnsupportedMethod(method));
        };

        let body = serde_json::to_vec(params)?;

        let response = request_builder
            .basic_auth(self.config.app_id(), Some(self.config.api_key()))
            .header("User-Agent", USER_AGENT)
            .header("content-type", "application/json")
            .body(body)
            .send()
            .await?;

        let json_value = response.json().await?;
        Ok(json_value)
    }
}
