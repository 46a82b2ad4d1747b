//! HTML for the index and results pages. Pure functions over the search
//! types, no I/O.

use reqwest::Url;

use crate::data_models::{Article, SearchResult};

pub fn index_page() -> String {
    layout("", "")
}

pub fn search_page(result: &SearchResult) -> String {
    let summary = if result.total_results == 0 {
        format!(
            "<p class=\"result-count\">No results found for <strong>{}</strong>.</p>",
            html_escape(&result.keyword)
        )
    } else {
        format!(
            "<p class=\"result-count\">About <strong>{}</strong> results were found. \
             You are on page <strong>{}</strong> of <strong>{}</strong>.</p>",
            result.total_results, result.current_page, result.total_pages
        )
    };

    let articles: String = if result.articles.is_empty() && result.total_results > 0 {
        "<li class=\"no-more-results\">No more results for this search.</li>".to_string()
    } else {
        result.articles.iter().map(render_article).collect()
    };

    let body = format!(
        "<section class=\"container\">{summary}<ul class=\"search-results\">{articles}</ul>{}</section>",
        render_pagination(result)
    );

    layout(&result.keyword, &body)
}

fn render_article(article: &Article) -> String {
    let image = match safe_url(&article.url_to_image) {
        "#" => String::new(),
        src => format!(
            "<img class=\"article-image\" src=\"{}\" alt=\"\">",
            html_escape(src)
        ),
    };

    format!(
        "<li class=\"news-article\">\
         <div><a target=\"_blank\" rel=\"noreferrer noopener\" href=\"{url}\">\
         <h3 class=\"title\">{title}</h3></a>\
         <p class=\"description\">{description}</p>\
         <div class=\"metadata\"><p class=\"source\">{source}</p>\
         <time class=\"published-date\">{date}</time></div></div>{image}</li>",
        url = html_escape(safe_url(&article.url)),
        title = html_escape(&article.title),
        description = html_escape(&article.description),
        source = html_escape(&article.source.name),
        date = article.format_published_date(),
    )
}

fn render_pagination(result: &SearchResult) -> String {
    let mut links = String::new();

    if let Some(previous) = result.previous_page() {
        links.push_str(&format!(
            "<a href=\"{}\" class=\"button previous-page\">Previous</a>",
            html_escape(&search_href(&result.keyword, previous))
        ));
    }
    if !result.is_last_page() {
        links.push_str(&format!(
            "<a href=\"{}\" class=\"button next-page\">Next</a>",
            html_escape(&search_href(&result.keyword, result.next_page))
        ));
    }

    if links.is_empty() {
        links
    } else {
        format!("<div class=\"pagination\">{links}</div>")
    }
}

fn layout(keyword: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\
         <html lang=\"en\"><head><meta charset=\"UTF-8\">\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\
         <title>News App</title>\
         <link rel=\"stylesheet\" href=\"/assets/style.css\"></head>\
         <body><main><header><a class=\"logo\" href=\"/\">News Demo</a>\
         <form action=\"/search\" method=\"GET\">\
         <input autofocus class=\"search-input\" value=\"{}\" placeholder=\"Enter a news topic\" \
         type=\"search\" name=\"q\"></form></header>{body}</main></body></html>",
        html_escape(keyword)
    )
}

/// Relative link to a results page with the keyword form-encoded.
pub fn search_href(keyword: &str, page: u32) -> String {
    let page = page.to_string();
    let params = [("q", keyword), ("page", page.as_str())];
    match Url::parse_with_params("http://localhost/search", &params) {
        Ok(url) => format!("/search?{}", url.query().unwrap_or_default()),
        Err(_) => format!("/search?page={page}"),
    }
}

/// Only absolute http(s) URLs from upstream make it into an attribute.
fn safe_url(raw: &str) -> &str {
    match Url::parse(raw) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => raw,
        _ => "#",
    }
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
