//! Client for the newsapi.org `everything` endpoint.

use std::num::NonZeroU32;

use reqwest::{StatusCode, Url};
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use thiserror::Error;
use time::OffsetDateTime;

pub const DEFAULT_ENDPOINT: &str = "https://newsapi.org/v2/everything";

/// Number of articles requested per page.
pub const PAGE_SIZE: u32 = 20;

/// The keyword and page requested by the visitor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub keyword: String,
    pub page: NonZeroU32,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct ArticleSource {
    /// Passed through as sent; newsapi uses a slug string or `null`.
    #[serde(default)]
    pub id: Value,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
}

impl ArticleSource {
    pub fn id_text(&self) -> Option<String> {
        match &self.id {
            Value::Null => None,
            Value::String(id) => Some(id.clone()),
            other => Some(other.to_string()),
        }
    }
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    #[serde(default)]
    pub source: ArticleSource,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub author: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub url: String,
    #[serde(rename = "urlToImage", default, deserialize_with = "null_as_empty")]
    pub image_url: String,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub published_at: Option<OffsetDateTime>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub content: String,
}

impl Article {
    /// Publish date as `<Month> <day> <year>`, e.g. `March 5 2021`. Empty when upstream sent none.
    pub fn format_published_date(&self) -> String {
        self.published_at
            .map(|published_at| {
                let date = published_at.date();
                format!("{} {} {}", date.month(), date.day(), date.year())
            })
            .unwrap_or_default()
    }

    /// The description, or the content snippet when upstream left the description blank.
    pub fn summary(&self) -> &str {
        if self.description.is_empty() {
            &self.content
        } else {
            &self.description
        }
    }
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub total_results: u64,
    #[serde(default)]
    pub articles: Vec<Article>,
}

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("upstream request failed: {0}")]
    Request(#[source] reqwest::Error),
    #[error("upstream responded with {0}")]
    Status(StatusCode),
    #[error("upstream response could not be decoded: {0}")]
    Decode(#[source] reqwest::Error),
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Builds the upstream request URL for `query`.
pub fn search_url(endpoint: &Url, api_key: &str, query: &SearchQuery) -> Url {
    let mut url = endpoint.clone();
    url.query_pairs_mut()
        .append_pair("q", &query.keyword)
        .append_pair("pageSize", &PAGE_SIZE.to_string())
        .append_pair("page", &query.page.to_string())
        .append_pair("apiKey", api_key)
        .append_pair("sortBy", "publishedAt")
        .append_pair("language", "en");
    url
}

/// Performs the upstream search. Anything but a `200 OK` with a decodable body is an error.
///
/// URLs are stripped from transport errors so the API key never reaches the logs.
pub async fn search(client: &reqwest::Client, url: Url) -> Result<SearchResult, SearchError> {
    let resp = client
        .get(url)
        .send()
        .await
        .map_err(|err| SearchError::Request(err.without_url()))?;

    if resp.status() != StatusCode::OK {
        return Err(SearchError::Status(resp.status()));
    }

    resp.json::<SearchResult>()
        .await
        .map_err(|err| SearchError::Decode(err.without_url()))
}

#[cfg(test)]
mod tests {
    use time::macros::datetime;

    use super::*;

    fn query(keyword: &str, page: u32) -> SearchQuery {
        SearchQuery {
            keyword: keyword.to_string(),
            page: NonZeroU32::new(page).unwrap(),
        }
    }

    #[test]
    fn search_url_escapes_keyword_and_embeds_paging() {
        let endpoint = Url::parse(DEFAULT_ENDPOINT).unwrap();
        let url = search_url(&endpoint, "secret", &query("rust & go/wasm", 3));
        assert_eq!(
            url.as_str(),
            "https://newsapi.org/v2/everything?q=rust+%26+go%2Fwasm&pageSize=20&page=3&apiKey=secret&sortBy=publishedAt&language=en"
        );
    }

    #[test]
    fn search_url_keeps_empty_keyword() {
        let endpoint = Url::parse("http://127.0.0.1:9000/v2/everything").unwrap();
        let url = search_url(&endpoint, "k", &query("", 1));
        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert_eq!(pairs[0], ("q".to_string(), String::new()));
        assert_eq!(pairs[1], ("pageSize".to_string(), "20".to_string()));
        assert_eq!(pairs[2], ("page".to_string(), "1".to_string()));
    }

    #[test]
    fn published_date_uses_month_name() {
        let article: Article = serde_json::from_value(serde_json::json!({
            "source": {"id": null, "name": "Example"},
            "title": "Title",
            "publishedAt": "2021-03-05T08:30:00Z",
        }))
        .unwrap();
        assert_eq!(article.published_at, Some(datetime!(2021-03-05 08:30 UTC)));
        assert_eq!(article.format_published_date(), "March 5 2021");
    }

    #[test]
    fn null_fields_decode_as_empty_strings() {
        let result: SearchResult = serde_json::from_value(serde_json::json!({
            "status": "ok",
            "totalResults": 45,
            "articles": [{
                "source": {"id": "bbc-news", "name": "BBC News"},
                "author": null,
                "title": "Headline",
                "description": null,
                "url": "https://example.com/a",
                "urlToImage": null,
                "publishedAt": "2024-12-31T23:59:59+02:00",
                "content": null
            }]
        }))
        .unwrap();

        assert_eq!(result.total_results, 45);
        let article = &result.articles[0];
        assert_eq!(article.source.id_text().as_deref(), Some("bbc-news"));
        assert_eq!(article.source.name, "BBC News");
        assert_eq!(article.author, "");
        assert_eq!(article.image_url, "");
        assert_eq!(article.format_published_date(), "December 31 2024");
    }

    #[test]
    fn missing_or_null_publish_date_decodes_without_date() {
        for raw in [
            serde_json::json!({"title": "x"}),
            serde_json::json!({"title": "x", "publishedAt": null}),
        ] {
            let article: Article = serde_json::from_value(raw).unwrap();
            assert_eq!(article.published_at, None);
            assert_eq!(article.format_published_date(), "");
        }
    }

    #[test]
    fn malformed_publish_date_fails_to_decode() {
        let result = serde_json::from_value::<Article>(
            serde_json::json!({"title": "x", "publishedAt": "yesterday"}),
        );
        assert!(result.is_err());
    }

    #[test]
    fn source_id_accepts_any_json_value() {
        let source: ArticleSource =
            serde_json::from_value(serde_json::json!({"id": 7, "name": "Numbered"})).unwrap();
        assert_eq!(source.id_text().as_deref(), Some("7"));

        let source: ArticleSource =
            serde_json::from_value(serde_json::json!({"id": null, "name": "Anon"})).unwrap();
        assert_eq!(source.id_text(), None);

        let source: ArticleSource = serde_json::from_value(serde_json::json!({"name": "Bare"})).unwrap();
        assert_eq!(source.id_text(), None);
    }

    #[test]
    fn summary_falls_back_to_content() {
        let article: Article = serde_json::from_value(serde_json::json!({
            "description": null,
            "content": "First lines of the story",
        }))
        .unwrap();
        assert_eq!(article.summary(), "First lines of the story");
    }
}
