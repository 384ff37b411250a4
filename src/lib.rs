//! Client library for the Retain.cc user and company tracking API.
//!
//! All of the API requests are built, and the API responses are decoded here.
//! The implementation is organized into:
//!
//! - `error`: error types and conversions
//! - `config`: credentials, endpoint, and timeout configuration
//! - `http`: the shared HTTP transport and request dispatch
//! - `api`: per-resource endpoint operations (users, companies)
//!
//! The main entry point is [`Retaincc`], one instance per set of
//! credentials:
//!
//! ```no_run
//! use retaincc::{Config, Retaincc, UserParams};
//!
//! # async fn run() -> Result<(), retaincc::Error> {
//! let client = Retaincc::new(Config::new("app-id", "api-key"))?;
//! let user = client
//!     .create_user(&UserParams {
//!         user_id: Some("7902".to_string()),
//!         email: Some("ben@retain.cc".to_string()),
//!         name: Some("Somebody".to_string()),
//!         ..Default::default()
//!     })
//!     .await?;
//! println!("{user}");
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod http;

use serde_json::Value;

use crate::api::{companies, users};
use crate::http::Transport;

// Commonly used types, re-exported at the crate root
pub use crate::api::companies::CompanyParams;
pub use crate::api::users::{UserIdentity, UserParams};
pub use crate::config::Config;
pub use crate::error::Error;
pub use crate::http::Method;

/// Retain.cc API client.
///
/// Holds the configuration and one long-lived HTTP client; every operation
/// is a stateless, independent round trip. Nothing is cached, retried, or
/// validated locally — the remote service is the source of truth, and its
/// JSON responses are returned verbatim.
#[derive(Clone)]
pub struct Retaincc {
    transport: Transport,
}

impl Retaincc {
    /// Builds a client and its shared HTTP transport from `config`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Http`] if the underlying HTTP client cannot be
    /// constructed.
    pub fn new(config: Config) -> Result<Self, Error> {
        Ok(Self {
            transport: Transport::new(config)?,
        })
    }

    // Thin delegating methods forwarding to the implementations in `api::*`
    // so the per-resource modules stay self-contained.

    /// Creates a user. See [`UserParams`] for the accepted fields.
    ///
    /// # Errors
    ///
    /// Propagates any [`Error`] from the transport.
    pub async fn create_user(&self, params: &UserParams) -> Result<Value, Error> {
        users::create_user(&self.transport, params).await
    }

    /// Fetches the user identified by email or `user_id`.
    ///
    /// # Errors
    ///
    /// Propagates any [`Error`] from the transport.
    pub async fn get_user(&self, identity: &UserIdentity) -> Result<Value, Error> {
        users::get_user(&self.transport, identity).await
    }

    /// Updates a user with whichever fields are set in `params`.
    ///
    /// # Errors
    ///
    /// Propagates any [`Error`] from the transport.
    pub async fn update_user(&self, params: &UserParams) -> Result<Value, Error> {
        users::update_user(&self.transport, params).await
    }

    /// Deletes the user identified by email or `user_id`.
    ///
    /// # Errors
    ///
    /// Propagates any [`Error`] from the transport.
    pub async fn delete_user(&self, identity: &UserIdentity) -> Result<Value, Error> {
        users::delete_user(&self.transport, identity).await
    }

    /// Creates a company. See [`CompanyParams`] for the accepted fields.
    ///
    /// # Errors
    ///
    /// Propagates any [`Error`] from the transport.
    pub async fn create_company(&self, params: &CompanyParams) -> Result<Value, Error> {
        companies::create_company(&self.transport, params).await
    }

    /// Updates a company with whichever fields are set in `params`.
    ///
    /// # Errors
    ///
    /// Propagates any [`Error`] from the transport.
    pub async fn update_company(&self, params: &CompanyParams) -> Result<Value, Error> {
        companies::update_company(&self.transport, params).await
    }

    /// Makes a raw authenticated call against an absolute `url`, for
    /// endpoints this crate has no wrapper for. `params` becomes the JSON
    /// request body regardless of verb.
    ///
    /// # Errors
    ///
    /// See [`Transport::call`].
    pub async fn request(&self, method: Method, url: &str, params: &Value) -> Result<Value, Error> {
        self.transport.call(method, url, params).await
    }
}
