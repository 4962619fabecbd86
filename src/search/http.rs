//! `reqwest` transport for [`SearchController`](super::SearchController).

use crate::dto::api::AdvocatesResponse;
use crate::search::{ADVOCATES_PATH, AdvocateSource, SearchError, SearchResult};

/// Fetches listings from a running directory server.
#[derive(Clone, Debug)]
pub struct HttpAdvocateSource {
    client: reqwest::Client,
    base_url: String,
}

impl HttpAdvocateSource {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    /// Absolute listing URL for an encoded query string.
    pub fn url_for(&self, query: &str) -> String {
        if query.is_empty() {
            format!("{}{ADVOCATES_PATH}", self.base_url)
        } else {
            format!("{}{ADVOCATES_PATH}?{query}", self.base_url)
        }
    }
}

impl AdvocateSource for HttpAdvocateSource {
    async fn fetch_advocates(&self, query: &str) -> SearchResult<AdvocatesResponse> {
        let url = self.url_for(query);
        log::debug!("GET {url}");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| SearchError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::Status(status.as_u16()));
        }

        response
            .json::<AdvocatesResponse>()
            .await
            .map_err(|e| SearchError::Transport(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_for_joins_base_path_and_query() {
        let source = HttpAdvocateSource::new("http://localhost:8080/");
        assert_eq!(source.url_for(""), "http://localhost:8080/api/advocates");
        assert_eq!(
            source.url_for("search=jane&page=2"),
            "http://localhost:8080/api/advocates?search=jane&page=2"
        );
    }
}
