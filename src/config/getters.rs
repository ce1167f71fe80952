//! Getter methods for `ClientConfig`

use std::time::Duration;

use super::types::ClientConfig;

impl ClientConfig {
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    #[must_use]
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    #[must_use]
    pub fn request_timeout_secs(&self) -> Option<u64> {
        self.request_timeout_secs
    }

    #[must_use]
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }

    #[must_use]
    pub fn clear_on_dispatch(&self) -> bool {
        self.clear_on_dispatch
    }

    #[must_use]
    pub fn surface_errors(&self) -> bool {
        self.surface_errors
    }

    #[must_use]
    pub fn ansi(&self) -> bool {
        self.ansi
    }
}
