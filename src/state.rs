use crate::backend::BackendClient;
use crate::config::Config;

/// Shared application state. Read-only once built; the assistant panel a
/// user sees lives in their browser, not here.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub backend: BackendClient,
}

impl AppState {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let backend = BackendClient::new(&config.backend)?;
        Ok(Self::with_backend(config, backend))
    }

    pub fn with_backend(config: Config, backend: BackendClient) -> Self {
        Self { config, backend }
    }
}
