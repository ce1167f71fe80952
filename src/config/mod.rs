//! Configuration module for the search client
//!
//! This module provides the `ClientConfig` struct and its type-safe builder
//! for configuring the backend endpoint, request behaviour and rendering.

// Sub-modules
pub mod builder;
pub mod getters;
pub mod methods;
pub mod types;

// Re-exports for public API
pub use builder::{ClientConfigBuilder, WithEndpoint};
pub use types::ClientConfig;
