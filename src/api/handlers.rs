use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Html,
};
use std::collections::HashMap;
use std::time::Instant;

use crate::render;
use crate::search_request;

use super::models::AppState;

pub async fn index_handler() -> Html<String> {
    Html(render::index_page())
}

pub async fn search_handler(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Html<String>, (StatusCode, String)> {
    let start = Instant::now();

    let cursor = search_request::parse(&params).map_err(|e| {
        log::info!("rejected search request: {e}");
        (e.status_code(), e.user_message())
    })?;

    let result = state
        .fetcher
        .fetch(&cursor, &state.api_key)
        .await
        .map_err(|e| (e.status_code(), e.user_message()))?;

    let html = render::search_page(&result);

    log::info!(
        "served search {:?} page {} in {}ms",
        result.keyword,
        result.current_page,
        start.elapsed().as_millis()
    );

    Ok(Html(html))
}
