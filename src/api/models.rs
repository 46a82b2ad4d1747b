use std::sync::Arc;

use crate::config::ApiKey;
use crate::fetcher::ArticleFetcher;

/// Shared, read-only state handed to every handler.
#[derive(Debug, Clone)]
pub struct AppState {
    pub fetcher: Arc<ArticleFetcher>,
    pub api_key: Arc<ApiKey>,
}

impl AppState {
    pub fn new(fetcher: ArticleFetcher, api_key: ApiKey) -> Self {
        Self {
            fetcher: Arc::new(fetcher),
            api_key: Arc::new(api_key),
        }
    }
}
