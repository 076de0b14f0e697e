#![warn(missing_docs)]

//! # bubbletea-usersearch
//!
//! Keyword search over a remote user directory for [bubbletea-rs](https://github.com/joshka/bubbletea-rs)
//! applications, with a windowed pager for browsing the results.
//!
//! ## Overview
//!
//! The crate is split into three components that follow the Elm Architecture
//! used by bubbletea-rs (`update()` and `view()` driven by messages and
//! commands):
//!
//! - [`pager`]: a reusable pager that shows up to nine page numbers around
//!   the current page plus first/prev/next/last shortcuts, clamps navigation
//!   into range and reports page changes through a callback
//! - [`results`]: stateless rendering of a page of users, or of a single
//!   "too many requests" placeholder when the search service failed
//! - [`search`]: the search screen, which owns the keyword and the current
//!   page, talks to a [`search::SearchClient`], and rebuilds the pager after
//!   every response
//!
//! ## Using the pager on its own
//!
//! ```rust
//! use bubbletea_usersearch::pager::{self, Config, ControlKind};
//!
//! let mut pager = pager::boot(Config::new().with_total_amount(95).with_current_page(10));
//! assert_eq!(pager.visible_pages(), (2..=10).collect::<Vec<_>>());
//!
//! pager.press(ControlKind::Prev);
//! assert_eq!(pager.current_page(), 9);
//! ```
//!
//! ## Running the search screen
//!
//! [`search::Model`] implements `bubbletea_rs::Model`, so it can be handed to
//! a program directly. Its `init()` reads settings from the file named by
//! `USERSEARCH_CONFIG` and searches GitHub users.
//!
//! ```rust,no_run
//! use bubbletea_rs::Program;
//! use bubbletea_usersearch::search::Model as SearchScreen;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let program = Program::<SearchScreen>::builder().alt_screen(true).build()?;
//!     program.run().await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Logging
//!
//! Fetches, page changes and pager boots are reported through `tracing` at
//! debug level and search failures at warn level. The crate never installs a
//! subscriber.

pub mod key;
pub mod pager;
pub mod results;
pub mod search;

use bubbletea_rs::Cmd;

/// Components that can take and give up keyboard focus.
///
/// A focused component reacts to key messages in its `update()` and may
/// highlight itself in its `view()`; a blurred one ignores keys.
///
/// ```rust
/// use bubbletea_usersearch::prelude::*;
///
/// fn toggle<T: Component>(component: &mut T) {
///     if component.focused() {
///         component.blur();
///     } else {
///         let _ = component.focus();
///     }
/// }
///
/// let mut query = Query::new();
/// toggle(&mut query);
/// assert!(query.focused());
/// ```
pub trait Component {
    /// Gives the component focus. May return a command to run.
    fn focus(&mut self) -> Option<Cmd>;

    /// Takes focus away from the component.
    fn blur(&mut self);

    /// Whether the component currently has focus.
    fn focused(&self) -> bool;
}

pub use key::{Binding, KeyMap, KeyPress};
pub use pager::Model as Pager;
pub use results::{Block, TOO_MANY_REQUESTS};
pub use search::Model as SearchScreen;

/// Common imports.
///
/// ```rust
/// use bubbletea_usersearch::prelude::*;
///
/// let pager = Pager::boot(PagerConfig::new().with_total_amount(25));
/// assert_eq!(pager.page_count(), 3);
/// ```
pub mod prelude {
    pub use crate::key::{Binding, KeyMap, KeyPress};
    pub use crate::pager::{
        Config as PagerConfig, Control, ControlKind, Model as Pager, OnChange, PagerKeyMap,
    };
    pub use crate::results::{Block, TOO_MANY_REQUESTS};
    pub use crate::search::{
        Config as SearchConfig, Focus, GithubClient, Model as SearchScreen, PageChangeMsg, Query,
        ResultItem, SearchClient, SearchError, SearchPage, SearchResultMsg,
    };
    pub use crate::Component;
}
