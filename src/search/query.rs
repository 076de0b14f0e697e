//! Single-line keyword input for the search screen.

use crate::key::{Binding, KeyPress};
use crate::Component;
use bubbletea_rs::{Cmd, KeyMsg, Msg};
use crossterm::event::{KeyCode, KeyModifiers};
use lipgloss_extras::prelude::*;

/// Editing keys for the keyword input.
#[derive(Debug, Clone)]
pub struct QueryKeyMap {
    /// Move one character left.
    pub backward: Binding,
    /// Move one character right.
    pub forward: Binding,
    /// Move to the start of the line.
    pub line_start: Binding,
    /// Move to the end of the line.
    pub line_end: Binding,
    /// Delete the character before the cursor.
    pub delete_backward: Binding,
    /// Delete the character under the cursor.
    pub delete_forward: Binding,
    /// Clear the whole line.
    pub clear: Binding,
}

impl Default for QueryKeyMap {
    fn default() -> Self {
        Self {
            backward: Binding::new(vec![KeyPress::from(KeyCode::Left), ctrl('b')]),
            forward: Binding::new(vec![KeyPress::from(KeyCode::Right), ctrl('f')]),
            line_start: Binding::new(vec![KeyPress::from(KeyCode::Home), ctrl('a')]),
            line_end: Binding::new(vec![KeyPress::from(KeyCode::End), ctrl('e')]),
            delete_backward: Binding::new(vec![KeyCode::Backspace]),
            delete_forward: Binding::new(vec![KeyCode::Delete]),
            clear: Binding::new(vec![ctrl('u')]).with_help("ctrl+u", "clear"),
        }
    }
}

fn ctrl(c: char) -> KeyPress {
    KeyPress::from((KeyCode::Char(c), KeyModifiers::CONTROL))
}

/// The keyword being typed.
///
/// ```rust
/// use bubbletea_usersearch::search::Query;
///
/// let mut query = Query::new();
/// query.set_value("rust");
/// assert_eq!(query.value(), "rust");
/// assert_eq!(query.position(), 4);
/// ```
#[derive(Debug, Clone)]
pub struct Query {
    value: Vec<char>,
    pos: usize,
    focus: bool,

    /// Text shown before the input.
    pub prompt: String,
    /// Text shown while the input is empty.
    pub placeholder: String,
    /// Style of the prompt.
    pub prompt_style: Style,
    /// Style of the typed text.
    pub text_style: Style,
    /// Style of the placeholder.
    pub placeholder_style: Style,
    /// Style of the character under the cursor.
    pub cursor_style: Style,
    /// Editing keys.
    pub keymap: QueryKeyMap,
}

impl Default for Query {
    fn default() -> Self {
        Self::new()
    }
}

impl Query {
    /// An empty, unfocused input.
    pub fn new() -> Self {
        Self {
            value: Vec::new(),
            pos: 0,
            focus: false,
            prompt: "Search users: ".to_string(),
            placeholder: "keyword".to_string(),
            prompt_style: Style::new().foreground(AdaptiveColor {
                Light: "#04B575",
                Dark: "#ECFD65",
            }),
            text_style: Style::new(),
            placeholder_style: Style::new().foreground(Color::from("240")),
            cursor_style: Style::new().reverse(true),
            keymap: QueryKeyMap::default(),
        }
    }

    /// The typed keyword.
    pub fn value(&self) -> String {
        self.value.iter().collect()
    }

    /// Replaces the keyword and moves the cursor to its end.
    pub fn set_value(&mut self, value: &str) {
        self.value = value.chars().collect();
        self.pos = self.value.len();
    }

    /// Cursor position in characters.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Applies an editing key while focused.
    pub fn update(&mut self, msg: &Msg) -> Option<Cmd> {
        if !self.focus {
            return None;
        }
        let key_msg = msg.downcast_ref::<KeyMsg>()?;

        if self.keymap.backward.matches(key_msg) {
            self.pos = self.pos.saturating_sub(1);
        } else if self.keymap.forward.matches(key_msg) {
            self.pos = (self.pos + 1).min(self.value.len());
        } else if self.keymap.line_start.matches(key_msg) {
            self.pos = 0;
        } else if self.keymap.line_end.matches(key_msg) {
            self.pos = self.value.len();
        } else if self.keymap.delete_backward.matches(key_msg) {
            if self.pos > 0 {
                self.pos -= 1;
                self.value.remove(self.pos);
            }
        } else if self.keymap.delete_forward.matches(key_msg) {
            if self.pos < self.value.len() {
                self.value.remove(self.pos);
            }
        } else if self.keymap.clear.matches(key_msg) {
            self.value.clear();
            self.pos = 0;
        } else if let KeyCode::Char(c) = key_msg.key {
            if key_msg
                .modifiers
                .difference(KeyModifiers::SHIFT)
                .is_empty()
            {
                self.value.insert(self.pos, c);
                self.pos += 1;
            }
        }
        None
    }

    /// Renders the prompt, keyword and cursor.
    pub fn view(&self) -> String {
        let prompt = self.prompt_style.render(&self.prompt);

        if self.value.is_empty() {
            let body = if self.focus {
                let mut chars = self.placeholder.chars();
                let first = chars.next().map(String::from).unwrap_or_else(|| " ".to_string());
                format!(
                    "{}{}",
                    self.cursor_style.render(&first),
                    self.placeholder_style.render(&chars.collect::<String>())
                )
            } else {
                self.placeholder_style.render(&self.placeholder)
            };
            return format!("{prompt}{body}");
        }

        if !self.focus {
            return format!("{prompt}{}", self.text_style.render(&self.value()));
        }

        let before: String = self.value[..self.pos].iter().collect();
        let under = self
            .value
            .get(self.pos)
            .map(|c| c.to_string())
            .unwrap_or_else(|| " ".to_string());
        let after: String = self.value.get(self.pos + 1..).unwrap_or(&[]).iter().collect();

        format!(
            "{prompt}{}{}{}",
            self.text_style.render(&before),
            self.cursor_style.render(&under),
            self.text_style.render(&after)
        )
    }
}

impl Component for Query {
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

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> Msg {
        Box::new(KeyMsg {
            key: code,
            modifiers: KeyModifiers::NONE,
        })
    }

    fn ctrl(c: char) -> Msg {
        Box::new(KeyMsg {
            key: KeyCode::Char(c),
            modifiers: KeyModifiers::CONTROL,
        })
    }

    fn typed(s: &str) -> Query {
        let mut q = Query::new();
        q.focus();
        for c in s.chars() {
            q.update(&key(KeyCode::Char(c)));
        }
        q
    }

    #[test]
    fn test_typing_appends() {
        let q = typed("rust");
        assert_eq!(q.value(), "rust");
        assert_eq!(q.position(), 4);
    }

    #[test]
    fn test_blurred_input_ignores_keys() {
        let mut q = Query::new();
        q.update(&key(KeyCode::Char('x')));
        assert_eq!(q.value(), "");
    }

    #[test]
    fn test_cursor_movement_and_insert() {
        let mut q = typed("rst");
        q.update(&key(KeyCode::Left));
        q.update(&key(KeyCode::Left));
        q.update(&key(KeyCode::Char('u')));
        assert_eq!(q.value(), "rust");
        assert_eq!(q.position(), 2);

        q.update(&ctrl('a'));
        assert_eq!(q.position(), 0);
        q.update(&ctrl('e'));
        assert_eq!(q.position(), 4);
    }

    #[test]
    fn test_deletion() {
        let mut q = typed("rusty");
        q.update(&key(KeyCode::Backspace));
        assert_eq!(q.value(), "rust");

        q.update(&key(KeyCode::Home));
        q.update(&key(KeyCode::Delete));
        assert_eq!(q.value(), "ust");

        q.update(&ctrl('u'));
        assert_eq!(q.value(), "");
        assert_eq!(q.position(), 0);
    }

    #[test]
    fn test_backspace_at_start_is_harmless() {
        let mut q = typed("");
        q.update(&key(KeyCode::Backspace));
        q.update(&key(KeyCode::Left));
        assert_eq!(q.value(), "");
        assert_eq!(q.position(), 0);
    }

    #[test]
    fn test_control_chars_are_not_inserted() {
        let mut q = typed("a");
        q.update(&ctrl('z'));
        assert_eq!(q.value(), "a");
    }

    #[test]
    fn test_view_shows_placeholder_and_value() {
        let plain = |s: String| String::from_utf8(strip_ansi_escapes::strip(s)).unwrap();

        let mut q = Query::new();
        assert_eq!(plain(q.view()), "Search users: keyword");

        q.set_value("octo");
        assert_eq!(plain(q.view()), "Search users: octo");

        q.focus();
        assert_eq!(plain(q.view()), "Search users: octo ");
    }
}
