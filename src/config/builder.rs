//! Type-safe builder for `ClientConfig` using the typestate pattern
//!
//! The endpoint is the only required field; `build()` only exists once it is
//! set.

use anyhow::{Result, anyhow};
use std::marker::PhantomData;
use url::Url;

use super::types::ClientConfig;
use crate::utils::{DEFAULT_ENDPOINT, DEFAULT_USER_AGENT};

/// Parse and check an endpoint string.
///
/// # Errors
///
/// Returns an error if the string is not an absolute `http` or `https` URL.
fn validate_endpoint(endpoint: &str) -> Result<Url> {
    let url = Url::parse(endpoint).map_err(|e| anyhow!("Invalid endpoint '{endpoint}': {e}"))?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(anyhow!(
            "Invalid endpoint '{endpoint}': unsupported scheme '{other}'"
        )),
    }
}

// Type states for the builder
pub struct WithEndpoint;

pub struct ClientConfigBuilder<State = ()> {
    pub(crate) endpoint: Option<String>,
    pub(crate) user_agent: String,
    pub(crate) request_timeout_secs: Option<u64>,
    pub(crate) clear_on_dispatch: bool,
    pub(crate) surface_errors: bool,
    pub(crate) ansi: bool,
    pub(crate) _phantom: PhantomData<State>,
}

impl Default for ClientConfigBuilder<()> {
    fn default() -> Self {
        Self {
            endpoint: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            request_timeout_secs: None,
            clear_on_dispatch: true,
            surface_errors: false,
            ansi: true,
            _phantom: PhantomData,
        }
    }
}

impl ClientConfig {
    #[must_use]
    pub fn builder() -> ClientConfigBuilder<()> {
        ClientConfigBuilder::default()
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            request_timeout_secs: None,
            clear_on_dispatch: true,
            surface_errors: false,
            ansi: true,
        }
    }
}

impl ClientConfigBuilder<()> {
    pub fn endpoint(self, endpoint: impl Into<String>) -> ClientConfigBuilder<WithEndpoint> {
        ClientConfigBuilder {
            endpoint: Some(endpoint.into()),
            user_agent: self.user_agent,
            request_timeout_secs: self.request_timeout_secs,
            clear_on_dispatch: self.clear_on_dispatch,
            surface_errors: self.surface_errors,
            ansi: self.ansi,
            _phantom: PhantomData,
        }
    }
}

impl ClientConfigBuilder<WithEndpoint> {
    /// Validate and produce the final configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint is not a valid `http`/`https` URL,
    /// if the user agent is empty, or if a zero-second timeout was requested.
    pub fn build(self) -> Result<ClientConfig> {
        let endpoint = self
            .endpoint
            .ok_or_else(|| anyhow!("endpoint is required"))?;
        let url = validate_endpoint(endpoint.trim())?;

        if self.user_agent.trim().is_empty() {
            return Err(anyhow!("user agent must not be empty"));
        }

        if self.request_timeout_secs == Some(0) {
            return Err(anyhow!(
                "request timeout must be at least one second; omit it to wait indefinitely"
            ));
        }

        Ok(ClientConfig {
            endpoint: url.to_string(),
            user_agent: self.user_agent,
            request_timeout_secs: self.request_timeout_secs,
            clear_on_dispatch: self.clear_on_dispatch,
            surface_errors: self.surface_errors,
            ansi: self.ansi,
        })
    }
}
