use crate::config::AppConfig;
use crate::profiles::repo::{InMemoryProfileRepository, ProfileRepository};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub profiles: Arc<dyn ProfileRepository>,
}

impl AppState {
    pub fn init() -> anyhow::Result<Self> {
        let config = Arc::new(AppConfig::from_env()?);
        tracing::debug!(meals = config.meal_splits.len(), "config loaded");

        // Profiles live in process memory; a database-backed repository plugs in via from_parts.
        let profiles = Arc::new(InMemoryProfileRepository::new()) as Arc<dyn ProfileRepository>;

        Ok(Self { config, profiles })
    }

    pub fn from_parts(config: Arc<AppConfig>, profiles: Arc<dyn ProfileRepository>) -> Self {
        Self { config, profiles }
    }

    pub fn fake() -> Self {
        let config = Arc::new(AppConfig::default());
        let profiles = Arc::new(InMemoryProfileRepository::new()) as Arc<dyn ProfileRepository>;
        Self { config, profiles }
    }
}
