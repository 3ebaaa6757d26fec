use std::num::{NonZeroU32, ParseIntError};

use axum::extract::{rejection::QueryRejection, Query, State};
use axum::response::Response;
use maud::Markup;

use crate::{
    components,
    err_responses::{ErrorResponse, MapErrorResponse},
    news::{self, SearchQuery, SearchResult, PAGE_SIZE},
};

pub struct SearchParams {
    q: String,
    page: String,
}

impl SearchParams {
    /// Repeated keys keep their first value; missing ones fall back to `q=""` and `page=1`.
    fn from_pairs(pairs: &[(String, String)]) -> Self {
        let first = |key: &str| {
            pairs
                .iter()
                .find(|(name, _)| name == key)
                .map(|(_, value)| value.clone())
        };

        Self {
            q: first("q").unwrap_or_default(),
            page: first("page").unwrap_or_else(|| String::from("1")),
        }
    }

    /// An empty `page` counts as the first page; zero and non-numeric values are rejected.
    fn into_query(self) -> Result<SearchQuery, ParseIntError> {
        let page = match self.page.as_str() {
            "" => NonZeroU32::MIN,
            raw => raw.parse()?,
        };
        Ok(SearchQuery {
            keyword: self.q,
            page,
        })
    }
}

pub fn total_pages(total_results: u64) -> u64 {
    total_results.div_ceil(u64::from(PAGE_SIZE))
}

/// Everything the results page needs to render.
pub struct PageContext {
    pub query: SearchQuery,
    pub total_pages: u64,
    pub result: SearchResult,
}

impl PageContext {
    pub fn new(query: SearchQuery, result: SearchResult) -> Self {
        Self {
            total_pages: total_pages(result.total_results),
            query,
            result,
        }
    }

    pub fn current_page(&self) -> u32 {
        self.query.page.get()
    }

    pub fn is_last_page(&self) -> bool {
        u64::from(self.current_page()) >= self.total_pages
    }

    pub fn previous_page(&self) -> Option<u32> {
        match self.current_page() {
            1 => None,
            page => Some(page - 1),
        }
    }

    pub fn next_page(&self) -> Option<u32> {
        if self.is_last_page() {
            None
        } else {
            self.current_page().checked_add(1)
        }
    }
}

pub async fn search(
    State(state): State<crate::AppState>,
    pairs: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Markup, Response> {
    let Query(pairs) = pairs.map_err_response(ErrorResponse::Message("Internal server error"))?;
    let query = SearchParams::from_pairs(&pairs)
        .into_query()
        .map_err_response(ErrorResponse::Message("Unexpected server error"))?;

    let url = news::search_url(&state.config.endpoint, &state.config.api_key, &query);
    let result = news::search(&state.http_client, url)
        .await
        .map_err_response(ErrorResponse::InternalServerError)?;

    tracing::debug!(
        keyword = %query.keyword,
        page = query.page.get(),
        status = %result.status,
        total_results = result.total_results,
        "search completed"
    );

    Ok(components::results_page(&PageContext::new(query, result)))
}
