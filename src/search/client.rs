//! The remote search collaborator and the records it returns.

use super::error::Result;
use async_trait::async_trait;
use serde::Deserialize;

/// One user returned by a search.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ResultItem {
    /// Stable identifier.
    pub id: u64,
    /// Display name.
    pub login: String,
    /// Avatar image URL.
    pub avatar_url: String,
    /// Profile page URL.
    pub html_url: String,
}

/// One page of search results.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchPage {
    /// Items on this page, in display order.
    pub items: Vec<ResultItem>,
    /// Number of matching items across all pages.
    pub total_count: usize,
}

/// A user directory that can be searched by keyword.
///
/// Implementations fail with [`SearchError::Unusable`](super::SearchError::Unusable)
/// when the service answers without an item list.
///
/// ```rust
/// use async_trait::async_trait;
/// use bubbletea_usersearch::search::{ResultItem, SearchClient, SearchPage, Result};
///
/// struct Fixed(Vec<ResultItem>);
///
/// #[async_trait]
/// impl SearchClient for Fixed {
///     async fn search(&self, _query: &str, page: usize, per_page: usize) -> Result<SearchPage> {
///         let items = self.0.iter().skip((page - 1) * per_page).take(per_page).cloned().collect();
///         Ok(SearchPage { items, total_count: self.0.len() })
///     }
/// }
/// ```
#[async_trait]
pub trait SearchClient: Send + Sync {
    /// Fetches page `page` (1-based) of the users matching `query`,
    /// `per_page` at a time.
    async fn search(&self, query: &str, page: usize, per_page: usize) -> Result<SearchPage>;
}

/// A client that fails every search with the same reason.
///
/// Stands in when the real client cannot be built, so the screen still runs
/// and shows the error placeholder instead of results.
#[derive(Debug, Clone)]
pub struct Unavailable {
    reason: String,
}

impl Unavailable {
    /// A client failing with `reason`.
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

#[async_trait]
impl SearchClient for Unavailable {
    async fn search(&self, _query: &str, _page: usize, _per_page: usize) -> Result<SearchPage> {
        Err(super::SearchError::Unusable(self.reason.clone()))
    }
}
