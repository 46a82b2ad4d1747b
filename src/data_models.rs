use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Minimal state needed to run or advance a search. Rebuilt from the query
/// string on every request and never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchCursor {
    pub keyword: String,
    pub requested_page: u32,
}

impl SearchCursor {
    pub fn new(keyword: impl Into<String>, requested_page: u32) -> SearchCursor {
        SearchCursor {
            keyword: keyword.into(),
            requested_page: requested_page.max(1),
        }
    }
}

/// Upstream ids are sometimes strings and sometimes numbers.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum SourceId {
    Text(String),
    Number(serde_json::Number),
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Source {
    #[serde(default)]
    pub id: Option<SourceId>,
    #[serde(default, deserialize_with = "nullable_string")]
    pub name: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub source: Source,
    #[serde(default, deserialize_with = "nullable_string")]
    pub author: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub title: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub description: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub url: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub url_to_image: String,
    pub published_at: DateTime<Utc>,
    #[serde(default, deserialize_with = "nullable_string")]
    pub content: String,
}

impl Article {
    /// Publish date as shown on the results page, e.g. `March 5, 2024`.
    pub fn format_published_date(&self) -> String {
        self.published_at.format("%B %-d, %Y").to_string()
    }
}

/// Success body of the upstream `/everything` endpoint.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ArticlesPayload {
    pub status: String,
    pub total_results: u32,
    #[serde(default)]
    pub articles: Vec<Article>,
}

/// Error body the upstream sends with a non-success status.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct UpstreamError {
    pub status: String,
    pub code: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub current_page: u32,
    pub next_page: u32,
    pub total_pages: u32,
}

impl Pagination {
    /// `total_pages` rounds up, so 45 results at 20 per page is 3 pages.
    /// A next page is only offered while the requested page is before the last one.
    pub fn compute(requested_page: u32, total_results: u32, page_size: u32) -> Pagination {
        let current_page = requested_page.max(1);
        let total_pages = total_results.div_ceil(page_size.max(1));
        let next_page = if current_page < total_pages {
            current_page + 1
        } else {
            current_page
        };

        Pagination {
            current_page,
            next_page,
            total_pages,
        }
    }
}

/// Everything the results page needs. Built once per request.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    pub keyword: String,
    pub articles: Vec<Article>,
    pub total_results: u32,
    pub current_page: u32,
    pub next_page: u32,
    pub total_pages: u32,
}

impl SearchResult {
    pub fn new(keyword: String, payload: ArticlesPayload, pagination: Pagination) -> SearchResult {
        SearchResult {
            keyword,
            articles: payload.articles,
            total_results: payload.total_results,
            current_page: pagination.current_page,
            next_page: pagination.next_page,
            total_pages: pagination.total_pages,
        }
    }

    pub fn is_last_page(&self) -> bool {
        self.current_page >= self.total_pages
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn previous_page(&self) -> Option<u32> {
        self.has_previous().then(|| self.current_page - 1)
    }
}

fn nullable_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
