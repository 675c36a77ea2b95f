use std::sync::Arc;

use mondo_core::loader::{load_regional_data, load_search_data};
use mondo_core::model::{RegionalData, SearchItem};

use super::config::Config;
use crate::error::AppError;

pub struct AppState {
    pub config: Config,
}

impl AppState {
    pub fn new(config: Config) -> Arc<Self> {
        Arc::new(Self { config })
    }

    /// Regional data as currently on disk. Missing or broken files yield
    /// empty data.
    pub async fn regional_data(&self) -> Result<RegionalData, AppError> {
        let path = self.config.data_file.clone();
        Ok(tokio::task::spawn_blocking(move || load_regional_data(path)).await?)
    }

    pub async fn search_data(&self) -> Result<Vec<SearchItem>, AppError> {
        let path = self.config.data_file.clone();
        Ok(tokio::task::spawn_blocking(move || load_search_data(path)).await?)
    }
}
