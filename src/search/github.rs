//! GitHub user search over HTTP.

use super::client::{ResultItem, SearchClient, SearchPage};
use super::config::Config;
use super::error::{Result, SearchError};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use serde::Deserialize;
use tracing::debug;

/// GitHub serves at most this many results per search; pages past it
/// answer 422.
pub const SEARCH_RESULT_LIMIT: usize = 1000;

#[derive(Debug, Deserialize)]
struct RawResponse {
    total_count: Option<usize>,
    items: Option<Vec<ResultItem>>,
    message: Option<String>,
}

/// Searches GitHub users through the REST search API.
///
/// ```rust,no_run
/// use bubbletea_usersearch::search::{Config, GithubClient, SearchClient};
///
/// # async fn run() -> bubbletea_usersearch::search::Result<()> {
/// let client = GithubClient::new(&Config::default())?;
/// let page = client.search("rust", 1, 10).await?;
/// println!("{} users", page.total_count);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct GithubClient {
    client: reqwest::Client,
    endpoint: String,
}

impl GithubClient {
    /// Builds a client from `config`'s endpoint, user agent and timeout.
    pub fn new(config: &Config) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/vnd.github+json"));

        let mut builder = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .default_headers(headers);
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            endpoint: config.endpoint.clone(),
        })
    }

    /// The URL queried by [`search`](SearchClient::search).
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl SearchClient for GithubClient {
    async fn search(&self, query: &str, page: usize, per_page: usize) -> Result<SearchPage> {
        debug!(query, page, per_page, "requesting user search");

        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("q", query.to_string()),
                ("page", page.to_string()),
                ("per_page", per_page.to_string()),
            ])
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await?;
        parse_response(status, &body)
    }
}

/// Turns a search response into a page of results.
///
/// The reported total is capped at [`SEARCH_RESULT_LIMIT`] so the last page
/// stays reachable.
///
/// GitHub answers rate-limited requests with a body that has a `message`
/// but no `items`; that is reported as [`SearchError::Unusable`] when the
/// status is a success and as [`SearchError::Status`] otherwise.
pub(crate) fn parse_response(status: u16, body: &str) -> Result<SearchPage> {
    let raw: Option<RawResponse> = serde_json::from_str(body).ok();

    if !(200..300).contains(&status) {
        let message = raw.and_then(|r| r.message).unwrap_or_default();
        return Err(SearchError::Status { status, message });
    }

    let raw = raw.ok_or_else(|| SearchError::Unusable("response is not valid JSON".to_string()))?;
    match raw.items {
        Some(items) => Ok(SearchPage {
            total_count: raw
                .total_count
                .unwrap_or(items.len())
                .min(SEARCH_RESULT_LIMIT),
            items,
        }),
        None => Err(SearchError::Unusable(
            raw.message.unwrap_or_else(|| "response has no items".to_string()),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BODY: &str = r#"{
        "total_count": 2,
        "incomplete_results": false,
        "items": [
            {
                "login": "octocat",
                "id": 583231,
                "avatar_url": "https://avatars.githubusercontent.com/u/583231?v=4",
                "html_url": "https://github.com/octocat",
                "type": "User",
                "score": 1.0
            },
            {
                "login": "octo-org",
                "id": 6811672,
                "avatar_url": "https://avatars.githubusercontent.com/u/6811672?v=4",
                "html_url": "https://github.com/octo-org",
                "type": "Organization",
                "score": 1.0
            }
        ]
    }"#;

    #[test]
    fn test_parse_success() {
        let page = parse_response(200, BODY).unwrap();
        assert_eq!(page.total_count, 2);
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.items[0].login, "octocat");
        assert_eq!(page.items[0].id, 583231);
        assert_eq!(page.items[1].html_url, "https://github.com/octo-org");
    }

    #[test]
    fn test_total_is_capped_at_reachable_results() {
        let body = r#"{"total_count": 2384311, "items": []}"#;
        let page = parse_response(200, body).unwrap();
        assert_eq!(page.total_count, SEARCH_RESULT_LIMIT);
        assert_eq!(crate::pager::window::page_count(page.total_count, 10), 100);
    }

    #[test]
    fn test_parse_rate_limited() {
        let body = r#"{"message":"API rate limit exceeded","documentation_url":"https://docs.github.com"}"#;
        match parse_response(403, body) {
            Err(SearchError::Status { status, message }) => {
                assert_eq!(status, 403);
                assert_eq!(message, "API rate limit exceeded");
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn test_parse_missing_items() {
        let body = r#"{"message":"Validation Failed"}"#;
        assert!(matches!(parse_response(200, body), Err(SearchError::Unusable(m)) if m == "Validation Failed"));
    }

    #[test]
    fn test_parse_malformed() {
        assert!(matches!(parse_response(200, "<html>"), Err(SearchError::Unusable(_))));
        assert!(matches!(
            parse_response(502, "<html>"),
            Err(SearchError::Status { status: 502, .. })
        ));
    }

    #[test]
    fn test_client_uses_configured_endpoint() {
        let config = Config::default().with_endpoint("http://localhost:9/search");
        let client = GithubClient::new(&config).unwrap();
        assert_eq!(client.endpoint(), "http://localhost:9/search");
    }
}
