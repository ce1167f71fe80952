//! Builder methods available for all states

use super::builder::ClientConfigBuilder;

impl<State> ClientConfigBuilder<State> {
    #[must_use]
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Abort requests that take longer than `secs` seconds.
    ///
    /// Off by default. A timed-out request fails its cycle as a transport
    /// error and the next queued query proceeds.
    #[must_use]
    pub fn request_timeout_secs(mut self, secs: Option<u64>) -> Self {
        self.request_timeout_secs = secs;
        self
    }

    #[must_use]
    pub fn clear_on_dispatch(mut self, clear: bool) -> Self {
        self.clear_on_dispatch = clear;
        self
    }

    #[must_use]
    pub fn surface_errors(mut self, surface: bool) -> Self {
        self.surface_errors = surface;
        self
    }

    #[must_use]
    pub fn ansi(mut self, ansi: bool) -> Self {
        self.ansi = ansi;
        self
    }
}
