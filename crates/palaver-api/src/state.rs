//! Application state wiring configuration and the gateway together.
//!
//! `AppState` holds the loaded client config and the concrete HTTP gateway
//! used by the chat loop and the display commands.

use std::path::PathBuf;
use std::sync::Arc;

use palaver_infra::config::{load_client_config, resolve_data_dir};
use palaver_infra::http::HttpAgentGateway;
use palaver_types::config::ClientConfig;

/// Shared application state for CLI commands.
pub struct AppState {
    pub config: ClientConfig,
    pub gateway: Arc<HttpAgentGateway>,
    pub data_dir: PathBuf,
}

impl AppState {
    /// Initialize the application state: resolve the data directory, load
    /// config.toml, and build the gateway for the configured endpoint.
    pub async fn init() -> anyhow::Result<Self> {
        let data_dir = resolve_data_dir();
        let config = load_client_config(&data_dir).await;
        let gateway = Arc::new(HttpAgentGateway::new(&config.endpoint));

        Ok(Self {
            config,
            gateway,
            data_dir,
        })
    }
}
