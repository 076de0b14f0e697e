//! Rendering of search results.
//!
//! [`render`] turns a page of [`ResultItem`]s, or the absence of one, into
//! display [`Block`]s; [`view`] turns blocks into styled text. Neither keeps
//! any state, so the same input always produces the same output.
//!
//! ```rust
//! use bubbletea_usersearch::results::{render, Block, TOO_MANY_REQUESTS};
//! use bubbletea_usersearch::search::ResultItem;
//!
//! let items = vec![ResultItem {
//!     id: 1,
//!     login: "octocat".to_string(),
//!     avatar_url: "https://avatars.example/1".to_string(),
//!     html_url: "https://github.com/octocat".to_string(),
//! }];
//!
//! let blocks = render(Some(items.as_slice()));
//! assert!(matches!(&blocks[0], Block::User { name, .. } if name == "octocat"));
//!
//! assert_eq!(render(None), vec![Block::Error(TOO_MANY_REQUESTS.to_string())]);
//! ```

use crate::search::ResultItem;
use lipgloss_extras::prelude::*;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Placeholder shown instead of results when the search service gave no
/// usable answer.
pub const TOO_MANY_REQUESTS: &str = "Too many requests, please try again.";

/// Marks text cut short to fit the width.
pub const ELLIPSIS: &str = "…";

/// One displayed block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// A user.
    User {
        /// Display name.
        name: String,
        /// Avatar image URL.
        avatar_url: String,
        /// Profile link.
        profile_url: String,
    },
    /// An error message shown in place of the results.
    Error(String),
}

impl From<&ResultItem> for Block {
    fn from(item: &ResultItem) -> Self {
        Block::User {
            name: item.login.clone(),
            avatar_url: item.avatar_url.clone(),
            profile_url: item.html_url.clone(),
        }
    }
}

/// Builds the blocks for a page of results.
///
/// `None` means the service returned no usable item list and yields the
/// single [`TOO_MANY_REQUESTS`] block.
pub fn render(items: Option<&[ResultItem]>) -> Vec<Block> {
    match items {
        Some(items) => items.iter().map(Block::from).collect(),
        None => vec![Block::Error(TOO_MANY_REQUESTS.to_string())],
    }
}

/// Styles for result blocks.
#[derive(Debug, Clone)]
pub struct Styles {
    /// The user's display name.
    pub name: Style,
    /// The profile link.
    pub link: Style,
    /// The avatar URL.
    pub avatar: Style,
    /// The error placeholder.
    pub error: Style,
    /// Shown when a search matched nobody.
    pub empty: Style,
}

impl Default for Styles {
    fn default() -> Self {
        let subdued = AdaptiveColor {
            Light: "#9B9B9B",
            Dark: "#5C5C5C",
        };

        Self {
            name: Style::new()
                .foreground(AdaptiveColor {
                    Light: "#1a1a1a",
                    Dark: "#dddddd",
                })
                .bold(true),
            link: Style::new()
                .foreground(AdaptiveColor {
                    Light: "#04B575",
                    Dark: "#ECFD65",
                })
                .underline(true),
            avatar: Style::new().foreground(subdued.clone()),
            error: Style::new().foreground(Color::from("196")).bold(true),
            empty: Style::new().foreground(subdued),
        }
    }
}

/// Renders blocks as text, truncating lines to `width` columns (0 means no
/// limit).
pub fn view(blocks: &[Block], styles: &Styles, width: usize) -> String {
    if blocks.is_empty() {
        return styles.empty.render("No users found.");
    }

    blocks
        .iter()
        .map(|block| match block {
            Block::User {
                name,
                avatar_url,
                profile_url,
            } => format!(
                "{}\n  {}\n  {}",
                styles.name.render(&truncate(name, width)),
                styles.link.render(&truncate(profile_url, width.saturating_sub(2))),
                styles
                    .avatar
                    .render(&truncate(&format!("avatar {avatar_url}"), width.saturating_sub(2))),
            ),
            Block::Error(message) => styles.error.render(&truncate(message, width)),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Cuts `s` to at most `width` columns, ending with [`ELLIPSIS`] when cut.
fn truncate(s: &str, width: usize) -> String {
    if width == 0 || s.width() <= width {
        return s.to_string();
    }

    let mut out = String::new();
    let mut used = 0;
    let budget = width.saturating_sub(ELLIPSIS.width());
    for ch in s.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push_str(ELLIPSIS);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: u64, login: &str) -> ResultItem {
        ResultItem {
            id,
            login: login.to_string(),
            avatar_url: format!("https://avatars.example/{id}"),
            html_url: format!("https://github.com/{login}"),
        }
    }

    fn plain(s: String) -> String {
        String::from_utf8(strip_ansi_escapes::strip(s)).unwrap()
    }

    #[test]
    fn test_one_block_per_item_in_order() {
        let items = vec![item(1, "ann"), item(2, "bob"), item(3, "cid")];
        let blocks = render(Some(items.as_slice()));
        let names: Vec<&str> = blocks
            .iter()
            .map(|b| match b {
                Block::User { name, .. } => name.as_str(),
                Block::Error(_) => "error",
            })
            .collect();
        assert_eq!(names, vec!["ann", "bob", "cid"]);
    }

    #[test]
    fn test_block_carries_links() {
        let blocks = render(Some(&[item(7, "octocat")][..]));
        assert_eq!(
            blocks,
            vec![Block::User {
                name: "octocat".to_string(),
                avatar_url: "https://avatars.example/7".to_string(),
                profile_url: "https://github.com/octocat".to_string(),
            }]
        );
    }

    #[test]
    fn test_missing_items_render_placeholder() {
        assert_eq!(render(None), vec![Block::Error(TOO_MANY_REQUESTS.to_string())]);
    }

    #[test]
    fn test_empty_page_renders_nothing() {
        let nobody: Vec<ResultItem> = Vec::new();
        assert!(render(Some(nobody.as_slice())).is_empty());
        assert_eq!(plain(view(&[], &Styles::default(), 0)), "No users found.");
    }

    #[test]
    fn test_render_is_idempotent() {
        let items = vec![item(1, "ann"), item(2, "bob")];
        assert_eq!(render(Some(items.as_slice())), render(Some(items.as_slice())));
        let styles = Styles::default();
        assert_eq!(
            view(&render(Some(items.as_slice())), &styles, 40),
            view(&render(Some(items.as_slice())), &styles, 40)
        );
    }

    #[test]
    fn test_view_user_block() {
        let view = plain(view(&render(Some(&[item(7, "octocat")][..])), &Styles::default(), 0));
        assert_eq!(
            view,
            "octocat\n  https://github.com/octocat\n  avatar https://avatars.example/7"
        );
    }

    #[test]
    fn test_view_error_block() {
        let view = plain(view(&render(None), &Styles::default(), 0));
        assert_eq!(view, TOO_MANY_REQUESTS);
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("octocat", 0), "octocat");
        assert_eq!(truncate("octocat", 7), "octocat");
        assert_eq!(truncate("octocat", 5), "octo…");
        assert_eq!(truncate("日本語テキスト", 5), "日本…");
    }
}
