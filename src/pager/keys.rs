//! Key bindings for the pager.

use crate::key::{self, Binding};
use crossterm::event::KeyCode;

/// Key bindings for the pager's controls.
///
/// `jump` presses the n-th visible numbered control, so `1` is always the
/// leftmost page in the window, not page 1.
#[derive(Debug, Clone)]
pub struct PagerKeyMap {
    /// Go to the first page.
    pub first: Binding,
    /// Go to the previous page.
    pub prev: Binding,
    /// Go to the next page.
    pub next: Binding,
    /// Go to the last page.
    pub last: Binding,
    /// Press one of the visible numbered controls.
    pub jump: Binding,
}

impl Default for PagerKeyMap {
    fn default() -> Self {
        Self {
            first: Binding::new(vec![KeyCode::Home, KeyCode::Char('g')]).with_help("g/home", "first"),
            prev: Binding::new(vec![KeyCode::Left, KeyCode::Char('h'), KeyCode::PageUp])
                .with_help("←/h", "prev"),
            next: Binding::new(vec![KeyCode::Right, KeyCode::Char('l'), KeyCode::PageDown])
                .with_help("→/l", "next"),
            last: Binding::new(vec![KeyCode::End, KeyCode::Char('G')]).with_help("G/end", "last"),
            jump: Binding::new(('1'..='9').map(KeyCode::Char).collect::<Vec<_>>())
                .with_help("1-9", "jump"),
        }
    }
}

impl key::KeyMap for PagerKeyMap {
    fn short_help(&self) -> Vec<&Binding> {
        vec![&self.prev, &self.next, &self.jump]
    }

    fn full_help(&self) -> Vec<Vec<&Binding>> {
        vec![
            vec![&self.first, &self.prev, &self.next, &self.last],
            vec![&self.jump],
        ]
    }
}
