//! The search screen: keyword input, results and pager.

use super::client::{SearchClient, SearchPage, Unavailable};
use super::config::Config;
use super::error::Result;
use super::github::GithubClient;
use super::query::Query;
use crate::key::{self, Binding, KeyMap};
use crate::pager;
use crate::results::{self, Block};
use crate::Component;
use bubbletea_rs::{Cmd, KeyMsg, Model as BubbleTeaModel, Msg, WindowSizeMsg};
use crossterm::event::{KeyCode, KeyModifiers};
use lipgloss_extras::prelude::*;
use std::sync::Arc;
use tracing::{debug, warn};

/// Delivered when a search request completes, successfully or not.
#[derive(Debug)]
pub struct SearchResultMsg {
    /// Keyword the request was made for.
    pub keyword: String,
    /// Page the request was made for.
    pub page: usize,
    /// What the collaborator answered.
    pub outcome: Result<SearchPage>,
}

/// Produced by the pager's change callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageChangeMsg {
    /// The page the user navigated to.
    pub page: usize,
}

/// Which part of the screen receives keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// The keyword input.
    Query,
    /// The pager.
    Pager,
}

/// Screen-level key bindings.
#[derive(Debug, Clone)]
pub struct SearchKeyMap {
    /// Submit the keyword.
    pub submit: Binding,
    /// Move focus between the input and the pager.
    pub switch_focus: Binding,
    /// Quit the program.
    pub quit: Binding,
}

impl Default for SearchKeyMap {
    fn default() -> Self {
        Self {
            submit: Binding::new(vec![KeyCode::Enter]).with_help("enter", "search"),
            switch_focus: Binding::new(vec![KeyCode::Tab, KeyCode::BackTab])
                .with_help("tab", "switch focus"),
            quit: Binding::new(vec![(KeyCode::Char('c'), KeyModifiers::CONTROL)])
                .with_help("ctrl+c", "quit"),
        }
    }
}

impl KeyMap for SearchKeyMap {
    fn short_help(&self) -> Vec<&Binding> {
        vec![&self.submit, &self.switch_focus, &self.quit]
    }

    fn full_help(&self) -> Vec<Vec<&Binding>> {
        vec![vec![&self.submit, &self.switch_focus, &self.quit]]
    }
}

/// The search screen.
///
/// Owns the keyword, the current page and the page size. Submitting a
/// keyword fetches page 1; a page change from the pager fetches that page
/// for the stored keyword. Every completed request replaces the results and
/// boots a fresh pager with the new total.
///
/// Requests are never cancelled or de-duplicated. Responses are applied in
/// the order they arrive, so a slow response for an older page can replace
/// a newer one.
///
/// # Examples
///
/// ```rust
/// use async_trait::async_trait;
/// use bubbletea_usersearch::search::{Config, Model, Result, SearchClient, SearchPage};
/// use std::sync::Arc;
///
/// struct Nobody;
///
/// #[async_trait]
/// impl SearchClient for Nobody {
///     async fn search(&self, _: &str, _: usize, _: usize) -> Result<SearchPage> {
///         Ok(SearchPage::default())
///     }
/// }
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let mut screen = Model::new(Arc::new(Nobody), &Config::default());
/// let cmd = screen.submit("rust");
/// assert_eq!(screen.current_page(), 1);
///
/// // The runtime would normally await the command and call `update`.
/// if let Some(msg) = cmd.await {
///     screen.update(msg);
/// }
/// assert_eq!(screen.pager().page_count(), 0);
/// # }
/// ```
pub struct Model {
    client: Arc<dyn SearchClient>,
    keyword: String,
    current_page: usize,
    page_size: usize,
    in_flight: usize,
    focus: Focus,
    width: usize,

    query: Query,
    pager: pager::Model,
    results: Vec<Block>,

    /// Screen-level key bindings.
    pub keymap: SearchKeyMap,
    /// Styles for the result blocks.
    pub result_styles: results::Styles,
    /// Style of the status line.
    pub status_style: Style,
}

impl Model {
    /// A screen searching through `client`, `config.page_size` results per
    /// page. The keyword input starts focused.
    pub fn new(client: Arc<dyn SearchClient>, config: &Config) -> Self {
        let page_size = config.page_size.max(1);
        let mut query = Query::new();
        query.focus();

        Self {
            client,
            keyword: String::new(),
            current_page: 1,
            page_size,
            in_flight: 0,
            focus: Focus::Query,
            width: 0,
            query,
            pager: pager::boot(pager::Config::new().with_page_size(page_size)),
            results: Vec::new(),
            keymap: SearchKeyMap::default(),
            result_styles: results::Styles::default(),
            status_style: Style::new().foreground(AdaptiveColor {
                Light: "#A49FA5",
                Dark: "#777777",
            }),
        }
    }

    /// A screen backed by GitHub user search.
    ///
    /// If the HTTP client cannot be built, every search fails and shows the
    /// error placeholder.
    pub fn from_config(config: &Config) -> Self {
        let client: Arc<dyn SearchClient> = match GithubClient::new(config) {
            Ok(client) => Arc::new(client),
            Err(err) => {
                warn!(error = %err, "search client unavailable");
                Arc::new(Unavailable::new(err.to_string()))
            }
        };
        Self::new(client, config)
    }

    /// The last submitted keyword.
    ///
    /// Empty until the first submit. Typing in the input does not change it;
    /// only [`submit`](Model::submit) does.
    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    /// The page last requested by the user.
    ///
    /// This can differ from the pager's page while a request is in flight,
    /// and it is kept when a request fails.
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Results per page.
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Whether any request is still outstanding.
    pub fn loading(&self) -> bool {
        self.in_flight > 0
    }

    /// The rendered result blocks.
    pub fn results(&self) -> &[Block] {
        &self.results
    }

    /// The current pager.
    pub fn pager(&self) -> &pager::Model {
        &self.pager
    }

    /// The keyword input.
    pub fn query(&self) -> &Query {
        &self.query
    }

    /// Which part of the screen receives keys.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Starts a new search: back to page 1 and fetch it.
    pub fn submit(&mut self, keyword: impl Into<String>) -> Cmd {
        self.keyword = keyword.into();
        self.current_page = 1;
        debug!(keyword = %self.keyword, "search submitted");
        self.fetch(self.keyword.clone(), 1)
    }

    /// Moves to `page` and fetches it, unless it is already the current page.
    pub fn on_page_change(&mut self, page: usize) -> Option<Cmd> {
        if page == self.current_page {
            return None;
        }
        self.current_page = page;
        debug!(page, "page changed");
        Some(self.fetch(self.keyword.clone(), page))
    }

    /// Requests one page of results. The command resolves to a
    /// [`SearchResultMsg`].
    pub fn fetch(&mut self, keyword: String, page: usize) -> Cmd {
        self.in_flight += 1;
        let client = Arc::clone(&self.client);
        let per_page = self.page_size;
        debug!(keyword = %keyword, page, per_page, "fetching results");

        Box::pin(async move {
            let outcome = client.search(&keyword, page, per_page).await;
            Some(Box::new(SearchResultMsg {
                keyword,
                page,
                outcome,
            }) as Msg)
        })
    }

    /// Applies a completed request: renders its items and boots a new pager.
    ///
    /// Failures render the error placeholder and a pager with no pages; the
    /// keyword and current page stay as the user left them.
    pub fn apply_result(&mut self, msg: SearchResultMsg) {
        self.in_flight = self.in_flight.saturating_sub(1);

        let total_amount = match msg.outcome {
            Ok(page) => {
                debug!(
                    keyword = %msg.keyword,
                    page = msg.page,
                    items = page.items.len(),
                    total = page.total_count,
                    "results received"
                );
                self.results = results::render(Some(page.items.as_slice()));
                page.total_count
            }
            Err(err) => {
                warn!(error = %err, keyword = %msg.keyword, page = msg.page, "search failed");
                self.results = results::render(None);
                0
            }
        };

        self.pager = pager::boot(
            pager::Config::new()
                .with_page_size(self.page_size)
                .with_current_page(self.current_page)
                .with_total_amount(total_amount)
                .with_on_change(|page| Box::new(PageChangeMsg { page }) as Msg),
        );
        if self.focus == Focus::Pager {
            self.pager.focus();
        }
    }

    /// Moves key focus to `focus`.
    pub fn set_focus(&mut self, focus: Focus) {
        self.focus = focus;
        match focus {
            Focus::Query => {
                self.pager.blur();
                self.query.focus();
            }
            Focus::Pager => {
                self.query.blur();
                self.pager.focus();
            }
        }
    }

    /// Handles keys, pager changes, completed searches and resizes.
    pub fn update(&mut self, msg: Msg) -> Option<Cmd> {
        let msg = match msg.downcast::<SearchResultMsg>() {
            Ok(result) => {
                self.apply_result(*result);
                return None;
            }
            Err(msg) => msg,
        };

        if let Some(change) = msg.downcast_ref::<PageChangeMsg>() {
            return self.on_page_change(change.page);
        }

        if let Some(size) = msg.downcast_ref::<WindowSizeMsg>() {
            self.width = size.width as usize;
            return None;
        }

        let key_msg = msg.downcast_ref::<KeyMsg>()?;

        if self.keymap.quit.matches(key_msg) {
            return Some(bubbletea_rs::quit());
        }

        if self.keymap.switch_focus.matches(key_msg) {
            self.set_focus(match self.focus {
                Focus::Query => Focus::Pager,
                Focus::Pager => Focus::Query,
            });
            return None;
        }

        match self.focus {
            Focus::Query => {
                if self.keymap.submit.matches(key_msg) {
                    let keyword = self.query.value();
                    if keyword.trim().is_empty() {
                        return None;
                    }
                    return Some(self.submit(keyword));
                }
                self.query.update(&msg)
            }
            Focus::Pager => self.pager.update(&msg),
        }
    }

    /// Renders the input, status line, results, pager and help.
    pub fn view(&self) -> String {
        let mut sections = vec![self.query.view()];

        let status = if self.loading() {
            "Searching…".to_string()
        } else if self.keyword.is_empty() {
            "Type a keyword and press enter.".to_string()
        } else if matches!(self.results.as_slice(), [Block::Error(_)]) {
            format!("Search for \"{}\" failed.", self.keyword)
        } else {
            format!(
                "{} users for \"{}\" · page {} of {}",
                self.pager.total_amount(),
                self.keyword,
                self.pager.current_page(),
                self.pager.page_count()
            )
        };
        sections.push(self.status_style.render(&status));

        if !self.keyword.is_empty() {
            sections.push(results::view(&self.results, &self.result_styles, self.width));
            sections.push(self.pager.view());
        }

        let mut help = self.keymap.short_help();
        if self.focus == Focus::Pager {
            help.extend(self.pager.keymap.short_help());
        }
        sections.push(key::short_help_view(&help));

        sections.join("\n\n")
    }
}

impl BubbleTeaModel for Model {
    fn init() -> (Self, Option<Cmd>) {
        let config = Config::from_env().unwrap_or_else(|err| {
            warn!(error = %err, "falling back to default search settings");
            Config::default()
        });
        (Self::from_config(&config), None)
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        self.update(msg)
    }

    fn view(&self) -> String {
        self.view()
    }
}
