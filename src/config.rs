//! Client configuration: credentials, endpoint, and timeout.
//!
//! All configuration lives in an explicit [`Config`] value owned by one
//! client instance. There is no process-wide state, so two clients with
//! different credentials can coexist and tests never leak configuration
//! into each other.

use std::env;
use std::time::Duration;

use crate::error::Error;

/// Production API host.
pub const DEFAULT_API_HOST: &str = "https://app.retain.cc";

/// Requests that take longer than this fail rather than hang.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Credentials and endpoint settings for a [`crate::Retaincc`] client.
///
/// Construct with [`Config::new`], then override defaults with the consuming
/// setters:
///
/// ```no_run
/// use retaincc::Config;
///
/// let config = Config::new("app-id", "api-key").api_version(2);
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    app_id: String,
    api_key: String,
    api_version: u32,
    api_host: String,
    timeout: Duration,
}

impl Config {
    /// Creates a configuration for the production API with the default
    /// version and timeout.
    pub fn new(app_id: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            app_id: app_id.into(),
            api_key: api_key.into(),
            api_version: 1,
            api_host: DEFAULT_API_HOST.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Reads configuration from the environment.
    ///
    /// `RETAINCC_APP_ID` and `RETAINCC_API_KEY` are required;
    /// `RETAINCC_API_VERSION` and `RETAINCC_TIMEOUT_SECS` override the
    /// defaults when set and parseable.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingConfig`] when a required variable is unset.
    pub fn from_env() -> Result<Self, Error> {
        let app_id = env::var("RETAINCC_APP_ID")
            .map_err(|_| Error::MissingConfig("RETAINCC_APP_ID must be set".to_string()))?;
        let api_key = env::var("RETAINCC_API_KEY")
            .map_err(|_| Error::MissingConfig("RETAINCC_API_KEY must be set".to_string()))?;

        let mut config = Self::new(app_id, api_key);
        if let Some(version) = env::var("RETAINCC_API_VERSION")
            .ok()
            .and_then(|v| v.parse().ok())
        {
            config = config.api_version(version);
        }
        if let Some(secs) = env::var("RETAINCC_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
        {
            config = config.timeout(Duration::from_secs(secs));
        }
        Ok(config)
    }

    /// Overrides the API version. The version is part of the base path, so
    /// changing it changes every request URL.
    #[must_use]
    pub fn api_version(mut self, version: u32) -> Self {
        self.api_version = version;
        self
    }

    /// Overrides the API host, e.g. to point at a mock server. A trailing
    /// slash is stripped.
    #[must_use]
    pub fn api_host(mut self, host: impl Into<String>) -> Self {
        self.api_host = host.into().trim_end_matches('/').to_string();
        self
    }

    /// Overrides the request timeout.
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// The versioned base path all endpoint URLs are built on, of shape
    /// `https://<host>/api/v<version>/`.
    #[must_use]
    pub fn endpoint(&self) -> String {
        format!("{}/api/v{}/", self.api_host, self.api_version)
    }

    #[must_use]
    pub fn app_id(&self) -> &str {
        &self.app_id
    }

    #[must_use]
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        self.timeout
    }
}
