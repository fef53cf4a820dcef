//! Gateway state - built once at startup and shared across all handlers.

use crate::client::{BlogApiClient, ClientError};
use crate::config::GatewayConfig;

/// Shared gateway state.
#[derive(Clone)]
pub struct GatewayState {
    pub api: BlogApiClient,
}

impl GatewayState {
    pub fn new(config: &GatewayConfig) -> Result<Self, ClientError> {
        let api = BlogApiClient::new(&config.backend_url, config.backend_timeout)?;
        tracing::info!(backend = %config.backend_url, "Posts API client ready");
        Ok(Self { api })
    }
}
