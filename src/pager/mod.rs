//! A windowed pager with first/prev/next/last shortcuts.
//!
//! The pager owns only pagination state: page size, current page and total
//! item count. From those it derives the page count and a sliding window of at
//! most nine page numbers around the current page (see [`window`]). Pressing a
//! control clamps the target into range, updates the current page and invokes
//! the [`OnChange`] callback. It never fetches or displays the items
//! themselves.
//!
//! ## Lifecycle
//!
//! A pager is created with [`boot`] and replaced wholesale by the next
//! `boot`; there is no teardown. Between boots it stays usable, but its
//! controls keep showing the booted page.
//!
//! ```rust
//! use bubbletea_usersearch::pager::{self, Config, ControlKind};
//! use bubbletea_rs::Msg;
//!
//! struct PageChanged(usize);
//!
//! let mut pager = pager::boot(
//!     Config::new()
//!         .with_total_amount(95)
//!         .with_current_page(3)
//!         .with_on_change(|page| Box::new(PageChanged(page)) as Msg),
//! );
//!
//! assert_eq!(pager.visible_pages(), (1..=9).collect::<Vec<_>>());
//!
//! // The returned command resolves to the callback's message.
//! let cmd = pager.press(ControlKind::Last);
//! assert!(cmd.is_some());
//! assert_eq!(pager.current_page(), 10);
//! ```

mod keys;
mod model;
mod style;
pub mod window;

pub use keys::PagerKeyMap;
pub use model::{Config, Control, ControlKind, Model, OnChange};
pub use style::{Labels, Styles};

/// Builds a new pager. Same as [`Model::boot`].
pub fn boot(config: Config) -> Model {
    Model::boot(config)
}
