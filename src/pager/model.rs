//! The pager model: state, control dispatch, and rendering.

use super::keys::PagerKeyMap;
use super::style::{Labels, Styles};
use super::window::{self, page_count};
use crate::Component;
use bubbletea_rs::{Cmd, KeyMsg, Msg};
use crossterm::event::KeyCode;
use std::fmt;
use std::ops::RangeInclusive;
use tracing::debug;

/// Callback invoked with the new page after a validated page change.
///
/// The message it returns is handed back to the program as a command, which
/// is how the owner of the pager learns about the change.
pub type OnChange = Box<dyn Fn(usize) -> Msg + Send>;

/// Settings used to [`boot`](Model::boot) a pager.
///
/// Unset fields keep their defaults: 10 items per page, page 1, no items and
/// no change callback.
///
/// ```rust
/// use bubbletea_usersearch::pager::Config;
///
/// let config = Config::new().with_total_amount(95).with_current_page(5);
/// assert_eq!(config.page_size, 10);
/// assert_eq!(config.current_page, 5);
/// assert_eq!(config.total_amount, 95);
/// ```
pub struct Config {
    /// Items per page. Values below 1 are raised to 1.
    pub page_size: usize,
    /// Page to start on, 1-based.
    pub current_page: usize,
    /// Total number of items across all pages.
    pub total_amount: usize,
    /// Called after every validated page change.
    pub on_change: Option<OnChange>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            page_size: 10,
            current_page: 1,
            total_amount: 0,
            on_change: None,
        }
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("page_size", &self.page_size)
            .field("current_page", &self.current_page)
            .field("total_amount", &self.total_amount)
            .field("on_change", &self.on_change.is_some())
            .finish()
    }
}

impl Config {
    /// Default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the page size.
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Sets the starting page.
    pub fn with_current_page(mut self, current_page: usize) -> Self {
        self.current_page = current_page;
        self
    }

    /// Sets the total item count.
    pub fn with_total_amount(mut self, total_amount: usize) -> Self {
        self.total_amount = total_amount;
        self
    }

    /// Sets the change callback.
    pub fn with_on_change<F>(mut self, on_change: F) -> Self
    where
        F: Fn(usize) -> Msg + Send + 'static,
    {
        self.on_change = Some(Box::new(on_change));
        self
    }
}

/// What a control does when pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlKind {
    /// Go to page 1.
    First,
    /// Go to the page before the current one.
    Prev,
    /// Go to this page.
    Page(usize),
    /// Go to the page after the current one.
    Next,
    /// Go to the last page.
    Last,
}

/// One rendered control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Control {
    /// What pressing it does.
    pub kind: ControlKind,
    /// Whether this is the highlighted current page.
    pub active: bool,
}

/// A windowed pager.
///
/// Holds the current page, page size and total item count, renders a
/// window of at most nine numbered controls between first/prev and
/// next/last shortcuts, and reports page changes through the
/// [`OnChange`] callback.
///
/// The pager does not re-render after a page change. Its owner is expected
/// to fetch the new page and [`boot`](Model::boot) a fresh pager, so the
/// controls keep showing the page that was booted until then.
///
/// # Examples
///
/// ```rust
/// use bubbletea_usersearch::pager::{Config, ControlKind, Model};
///
/// let mut pager = Model::boot(Config::new().with_total_amount(95).with_current_page(10));
/// assert_eq!(pager.page_count(), 10);
/// assert_eq!(pager.window(), 2..=10);
///
/// pager.press(ControlKind::First);
/// assert_eq!(pager.current_page(), 1);
/// ```
pub struct Model {
    page_size: usize,
    current_page: usize,
    total_amount: usize,
    on_change: Option<OnChange>,
    controls: Vec<Control>,
    focus: bool,

    /// Key bindings.
    pub keymap: PagerKeyMap,
    /// Control styles.
    pub styles: Styles,
    /// Shortcut labels.
    pub labels: Labels,
}

impl fmt::Debug for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Model")
            .field("page_size", &self.page_size)
            .field("current_page", &self.current_page)
            .field("total_amount", &self.total_amount)
            .field("page_count", &self.page_count())
            .field("on_change", &self.on_change.is_some())
            .field("controls", &self.controls)
            .field("focus", &self.focus)
            .finish()
    }
}

impl Default for Model {
    fn default() -> Self {
        Self::boot(Config::default())
    }
}

impl Model {
    /// Builds a pager from `config` and renders its controls.
    ///
    /// A starting page outside `1..=page_count` is moved inside it without
    /// invoking the callback.
    pub fn boot(config: Config) -> Self {
        let page_size = config.page_size.max(1);
        let count = page_count(config.total_amount, page_size);
        let current_page = config.current_page.clamp(1, count.max(1));

        let mut model = Self {
            page_size,
            current_page,
            total_amount: config.total_amount,
            on_change: config.on_change,
            controls: Vec::new(),
            focus: false,
            keymap: PagerKeyMap::default(),
            styles: Styles::default(),
            labels: Labels::default(),
        };
        model.render();

        debug!(
            current_page = model.current_page,
            page_count = count,
            total_amount = model.total_amount,
            "pager booted"
        );
        model
    }

    /// Items per page.
    ///
    /// Always at least 1; a configured size of 0 is raised at boot.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bubbletea_usersearch::pager::{Config, Model};
    ///
    /// assert_eq!(Model::boot(Config::new()).page_size(), 10);
    /// assert_eq!(Model::boot(Config::new().with_page_size(0)).page_size(), 1);
    /// ```
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// The current page, 1-based.
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Total number of items across all pages, as given at boot.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bubbletea_usersearch::pager::{Config, Model};
    ///
    /// let pager = Model::boot(Config::new().with_total_amount(95));
    /// assert_eq!(pager.total_amount(), 95);
    /// assert_eq!(pager.page_count(), 10);
    /// ```
    pub fn total_amount(&self) -> usize {
        self.total_amount
    }

    /// Number of pages, derived from the total amount and page size.
    pub fn page_count(&self) -> usize {
        page_count(self.total_amount, self.page_size)
    }

    /// The range of page numbers currently worth showing.
    pub fn window(&self) -> RangeInclusive<usize> {
        window::window(self.current_page, self.page_count())
    }

    /// The controls produced by the last [`render`](Model::render), left to
    /// right.
    pub fn controls(&self) -> &[Control] {
        &self.controls
    }

    /// Page numbers of the rendered numbered controls.
    pub fn visible_pages(&self) -> Vec<usize> {
        self.controls
            .iter()
            .filter_map(|c| match c.kind {
                ControlKind::Page(n) => Some(n),
                _ => None,
            })
            .collect()
    }

    /// Rebuilds the controls from the current state.
    pub fn render(&mut self) {
        let current = self.current_page;

        let mut controls = Vec::with_capacity(window::WIDTH + 4);
        controls.push(Control {
            kind: ControlKind::First,
            active: false,
        });
        controls.push(Control {
            kind: ControlKind::Prev,
            active: false,
        });
        controls.extend(self.window().map(|page| Control {
            kind: ControlKind::Page(page),
            active: page == current,
        }));
        controls.push(Control {
            kind: ControlKind::Next,
            active: false,
        });
        controls.push(Control {
            kind: ControlKind::Last,
            active: false,
        });

        self.controls = controls;
    }

    /// The page a control leads to from the current state, before clamping.
    pub fn target(&self, kind: ControlKind) -> usize {
        match kind {
            ControlKind::First => 1,
            ControlKind::Prev => self.current_page.saturating_sub(1),
            ControlKind::Page(page) => page,
            ControlKind::Next => self.current_page.saturating_add(1),
            ControlKind::Last => self.page_count(),
        }
    }

    /// Presses a control.
    pub fn press(&mut self, kind: ControlKind) -> Option<Cmd> {
        self.set_current_page(self.target(kind))
    }

    /// Moves to `page`, clamped to `1..=page_count`, and invokes the change
    /// callback with the resulting page.
    ///
    /// Does nothing when there are no pages. The controls are not rebuilt;
    /// call [`render`](Model::render) or boot a new pager for that.
    ///
    /// # Arguments
    ///
    /// * `page` - The requested page, 1-based. Out-of-range values are
    ///   clamped rather than rejected.
    ///
    /// # Returns
    ///
    /// The callback's message wrapped in a ready command, or `None` when
    /// there are no pages or no callback is set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bubbletea_usersearch::pager::{Config, Model};
    ///
    /// let mut pager = Model::boot(Config::new().with_total_amount(25));
    /// pager.set_current_page(99);
    /// assert_eq!(pager.current_page(), 3);
    /// ```
    pub fn set_current_page(&mut self, page: usize) -> Option<Cmd> {
        let count = self.page_count();
        if count == 0 {
            return None;
        }

        let page = page.clamp(1, count);
        self.current_page = page;
        debug!(page, "pager page changed");

        let on_change = self.on_change.as_ref()?;
        let msg = on_change(page);
        let cmd: Cmd = Box::pin(async move { Some(msg) });
        Some(cmd)
    }

    /// Handles key presses while focused.
    pub fn update(&mut self, msg: &Msg) -> Option<Cmd> {
        if !self.focus {
            return None;
        }
        let key_msg = msg.downcast_ref::<KeyMsg>()?;

        if self.keymap.first.matches(key_msg) {
            self.press(ControlKind::First)
        } else if self.keymap.prev.matches(key_msg) {
            self.press(ControlKind::Prev)
        } else if self.keymap.next.matches(key_msg) {
            self.press(ControlKind::Next)
        } else if self.keymap.last.matches(key_msg) {
            self.press(ControlKind::Last)
        } else if self.keymap.jump.matches(key_msg) {
            let KeyCode::Char(c) = key_msg.key else {
                return None;
            };
            let nth = c.to_digit(10)? as usize;
            let page = *self.visible_pages().get(nth.checked_sub(1)?)?;
            self.press(ControlKind::Page(page))
        } else {
            None
        }
    }

    /// Renders the controls on one line.
    pub fn view(&self) -> String {
        let line = self
            .controls
            .iter()
            .map(|c| self.control_view(c))
            .collect::<Vec<_>>()
            .join(" ");
        self.styles.container.render(&line)
    }

    fn control_view(&self, control: &Control) -> String {
        match control.kind {
            ControlKind::Page(page) => {
                let label = format!(" {page} ");
                if !control.active {
                    self.styles.page.render(&label)
                } else if self.focus {
                    self.styles.active.render(&label)
                } else {
                    self.styles.active_blurred.render(&label)
                }
            }
            ControlKind::First => self.styles.shortcut.render(&self.labels.first),
            ControlKind::Prev => self.styles.shortcut.render(&self.labels.prev),
            ControlKind::Next => self.styles.shortcut.render(&self.labels.next),
            ControlKind::Last => self.styles.shortcut.render(&self.labels.last),
        }
    }
}

impl Component for Model {
    fn focus(&mut self) -> Option<Cmd> {
        self.focus = true;
        None
    }

    fn blur(&mut self) {
        self.focus = false;
    }

    fn focused(&self) -> bool {
        self.focus
    }
}
