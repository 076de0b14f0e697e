//! Keyword search over a remote user directory.
//!
//! - [`SearchClient`]: the remote collaborator, with [`GithubClient`] as the
//!   production implementation
//! - [`Model`]: the search screen, which owns the keyword and current page,
//!   renders results and rebuilds the pager after every response
//! - [`Query`]: the keyword input line
//! - [`Config`]: page size and client settings, loadable from TOML
//!
//! ## Flow
//!
//! 1. `enter` in the input calls [`Model::submit`], which resets the page to 1
//!    and returns a fetch command.
//! 2. The runtime awaits the command and feeds the resulting
//!    [`SearchResultMsg`] back into [`Model::update`].
//! 3. The results are rendered and a new pager is booted with the total
//!    count; its change callback produces a [`PageChangeMsg`].
//! 4. A page change reaches [`Model::on_page_change`], which fetches again.

mod client;
mod config;
mod controller;
mod error;
mod github;
mod query;

pub use client::{ResultItem, SearchClient, SearchPage, Unavailable};
pub use config::{Config, CONFIG_ENV, DEFAULT_ENDPOINT};
pub use controller::{Focus, Model, PageChangeMsg, SearchKeyMap, SearchResultMsg};
pub use error::{Result, SearchError};
pub use github::{GithubClient, SEARCH_RESULT_LIMIT};
pub use query::{Query, QueryKeyMap};
