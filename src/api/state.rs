use std::sync::Arc;
use std::time::Duration;

use crate::{
    config::Config,
    error::AppResult,
    services::{
        cache::DetailCache,
        providers::{MovieProvider, OmdbClient},
        recommend::PipelineSettings,
    },
};

/// Shared application state
///
/// The provider is held behind the [`MovieProvider`] trait so tests can swap
/// in a stub; the detail cache is the only state that outlives a request.
#[derive(Clone)]
pub struct AppState {
    pub provider: Arc<dyn MovieProvider>,
    pub cache: Arc<DetailCache>,
    pub settings: PipelineSettings,
}

impl AppState {
    /// Builds production state backed by the OMDb client
    pub fn new(config: &Config) -> AppResult<Self> {
        let provider = Arc::new(OmdbClient::new(config)?);
        let cache = Arc::new(DetailCache::new(
            config.cache_capacity,
            config.cache_ttl_secs.map(Duration::from_secs),
        ));

        Ok(Self::with_provider(
            provider,
            cache,
            PipelineSettings {
                search_pages: config.search_pages,
                fetch_concurrency: config.fetch_concurrency,
            },
        ))
    }

    /// Builds state around an arbitrary provider (used by tests)
    pub fn with_provider(
        provider: Arc<dyn MovieProvider>,
        cache: Arc<DetailCache>,
        settings: PipelineSettings,
    ) -> Self {
        Self {
            provider,
            cache,
            settings,
        }
    }
}
