pub mod app;
pub mod config;
pub mod domain;
pub mod infra;

use crate::config::AppConfig;
use crate::infra::store::StoreHandle;

#[derive(Clone)]
pub struct AppState {
    pub store: StoreHandle,
    pub config: AppConfig,
}

impl AppState {
    pub fn new(store: StoreHandle, config: AppConfig) -> Self {
        Self { store, config }
    }

    /// State over the seed dataset, the way the page boots.
    pub fn with_fixture(config: AppConfig) -> Self {
        Self::new(StoreHandle::new(infra::fixture::seed()), config)
    }
}
