use std::time::Duration;

use reqwest::{Client, Response};
use serde::de::DeserializeOwned;

use crate::config::ApiKey;
use crate::data_models::{ArticlesPayload, Pagination, SearchCursor, SearchResult, UpstreamError};
use crate::error::SearchError;

pub const PAGE_SIZE: u32 = 20;
const SORT_BY: &str = "publishedAt";

/// Runs one search against the news API `/everything` endpoint.
///
/// Holds only immutable settings, so a single instance is shared across all
/// requests. Every call makes exactly one upstream request and never retries.
#[derive(Debug, Clone)]
pub struct ArticleFetcher {
    http_client: Client,
    base_url: String,
    language: String,
    page_size: u32,
}

impl ArticleFetcher {
    pub fn new(
        base_url: impl Into<String>,
        language: impl Into<String>,
        timeout: Duration,
    ) -> Result<ArticleFetcher, reqwest::Error> {
        let http_client = Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(http_client, base_url, language))
    }

    pub fn with_client(
        http_client: Client,
        base_url: impl Into<String>,
        language: impl Into<String>,
    ) -> ArticleFetcher {
        ArticleFetcher {
            http_client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            language: language.into(),
            page_size: PAGE_SIZE,
        }
    }

    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn endpoint(&self) -> String {
        format!("{}/everything", self.base_url)
    }

    pub async fn fetch(
        &self,
        cursor: &SearchCursor,
        api_key: &ApiKey,
    ) -> Result<SearchResult, SearchError> {
        // upstream pages start at 1
        let requested_page = cursor.requested_page.max(1);
        log::info!(
            "searching news API: keyword={:?} page={}",
            cursor.keyword,
            requested_page
        );

        let page_size = self.page_size.to_string();
        let page = requested_page.to_string();

        let response = self
            .http_client
            .get(self.endpoint())
            .query(&[
                ("q", cursor.keyword.as_str()),
                ("pageSize", page_size.as_str()),
                ("page", page.as_str()),
                ("apiKey", api_key.expose()),
                ("sortBy", SORT_BY),
                ("language", self.language.as_str()),
            ])
            .send()
            .await
            .map_err(|e| {
                // the request url carries the key, keep it out of the log
                let e = e.without_url();
                log::error!("news API request failed: {:#}", e);
                SearchError::UpstreamUnreachable(e)
            })?;

        let status = response.status();
        log::debug!("news API responded with {status}");

        if !status.is_success() {
            let upstream_error: UpstreamError = decode_body(response).await?;
            log::warn!(
                "news API rejected search: status={} code={} message={}",
                status,
                upstream_error.code,
                upstream_error.message
            );
            return Err(SearchError::UpstreamRejected(upstream_error.message));
        }

        let payload: ArticlesPayload = decode_body(response).await?;
        let pagination = Pagination::compute(
            requested_page,
            payload.total_results,
            self.page_size,
        );

        log::info!(
            "news API returned {} of {} results, page {}/{}",
            payload.articles.len(),
            payload.total_results,
            pagination.current_page,
            pagination.total_pages
        );

        Ok(SearchResult::new(cursor.keyword.clone(), payload, pagination))
    }
}

/// Reads the whole body and decodes it. The response is consumed either way,
/// so the connection is released on every path out of here.
async fn decode_body<T: DeserializeOwned>(response: Response) -> Result<T, SearchError> {
    let body = response.bytes().await.map_err(|e| {
        let e = e.without_url();
        log::error!("failed to read news API response body: {:#}", e);
        SearchError::UpstreamUnreachable(e)
    })?;

    serde_json::from_slice(&body).map_err(|e| {
        log::error!("failed to decode news API response: {e}");
        SearchError::UpstreamProtocolError(e.to_string())
    })
}
