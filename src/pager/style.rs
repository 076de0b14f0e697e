//! Styles and labels for the pager's controls.

use lipgloss_extras::prelude::*;

/// Styles applied to each kind of pager control.
///
/// All defaults use `AdaptiveColor` so they read on light and dark terminals.
///
/// ```rust
/// use bubbletea_usersearch::pager::Styles;
/// use lipgloss_extras::prelude::*;
///
/// let mut styles = Styles::default();
/// styles.active = Style::new().bold(true).underline(true);
/// ```
#[derive(Debug, Clone)]
pub struct Styles {
    /// Numbered controls other than the current page.
    pub page: Style,
    /// The current page while the pager is focused.
    pub active: Style,
    /// The current page while the pager is blurred.
    pub active_blurred: Style,
    /// First/prev/next/last controls.
    pub shortcut: Style,
    /// Wraps the whole control line.
    pub container: Style,
}

impl Default for Styles {
    fn default() -> Self {
        let subdued = AdaptiveColor {
            Light: "#9B9B9B",
            Dark: "#5C5C5C",
        };

        Self {
            page: Style::new().foreground(AdaptiveColor {
                Light: "#1a1a1a",
                Dark: "#dddddd",
            }),
            active: Style::new()
                .background(Color::from("62"))
                .foreground(Color::from("230"))
                .bold(true),
            active_blurred: Style::new()
                .foreground(AdaptiveColor {
                    Light: "#847A85",
                    Dark: "#979797",
                })
                .underline(true),
            shortcut: Style::new().foreground(subdued),
            container: Style::new().padding_left(2),
        }
    }
}

/// Text shown on the four shortcut controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Labels {
    /// Label of the "first page" control.
    pub first: String,
    /// Label of the "previous page" control.
    pub prev: String,
    /// Label of the "next page" control.
    pub next: String,
    /// Label of the "last page" control.
    pub last: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            first: "« first".to_string(),
            prev: "‹ prev".to_string(),
            next: "next ›".to_string(),
            last: "last »".to_string(),
        }
    }
}
