//! Key bindings shared by the search screen and the pager.
//!
//! A [`Binding`] groups the key presses that trigger one action together with
//! the help text shown for it. Components expose their bindings through the
//! [`KeyMap`] trait so a footer can list them.
//!
//! ```rust
//! use bubbletea_usersearch::key::{Binding, KeyPress};
//! use bubbletea_rs::KeyMsg;
//! use crossterm::event::{KeyCode, KeyModifiers};
//!
//! let next = Binding::new(vec![KeyCode::Right, KeyCode::Char('l')]).with_help("→/l", "next page");
//!
//! let msg = KeyMsg { key: KeyCode::Char('l'), modifiers: KeyModifiers::NONE };
//! assert!(next.matches(&msg));
//! assert_eq!(next.help().key, "→/l");
//! ```

use bubbletea_rs::KeyMsg;
use crossterm::event::{KeyCode, KeyModifiers};
use lipgloss_extras::prelude::*;

/// A single key combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    /// The key itself.
    pub code: KeyCode,
    /// Modifiers that must be held.
    pub modifiers: KeyModifiers,
}

impl From<KeyCode> for KeyPress {
    fn from(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: KeyModifiers::NONE,
        }
    }
}

impl From<(KeyCode, KeyModifiers)> for KeyPress {
    fn from((code, modifiers): (KeyCode, KeyModifiers)) -> Self {
        Self { code, modifiers }
    }
}

impl KeyPress {
    /// Reports whether a key message is this key press.
    ///
    /// Shift is ignored for character keys since the terminal already folds
    /// it into the character (`G` arrives as `Char('G')` with SHIFT held).
    pub fn matches(&self, msg: &KeyMsg) -> bool {
        if self.code != msg.key {
            return false;
        }
        if self.modifiers == msg.modifiers {
            return true;
        }
        matches!(self.code, KeyCode::Char(_))
            && msg.modifiers.difference(KeyModifiers::SHIFT) == self.modifiers
    }
}

/// Help text for a binding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Help {
    /// Short rendering of the keys, e.g. `"←/h"`.
    pub key: String,
    /// What the binding does.
    pub desc: String,
}

/// A set of key presses bound to one action.
#[derive(Debug, Clone, Default)]
pub struct Binding {
    keys: Vec<KeyPress>,
    help: Help,
    disabled: bool,
}

impl Binding {
    /// Creates a binding from key codes or `(code, modifiers)` pairs.
    pub fn new<K: Into<KeyPress>>(keys: Vec<K>) -> Self {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
            help: Help::default(),
            disabled: false,
        }
    }

    /// Sets the help text (builder pattern).
    pub fn with_help(mut self, key: impl Into<String>, desc: impl Into<String>) -> Self {
        self.help = Help {
            key: key.into(),
            desc: desc.into(),
        };
        self
    }

    /// The key presses of this binding.
    pub fn keys(&self) -> &[KeyPress] {
        &self.keys
    }

    /// The help text of this binding.
    pub fn help(&self) -> &Help {
        &self.help
    }

    /// Enables or disables the binding. Disabled bindings match nothing and
    /// are left out of help.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.disabled = !enabled;
    }

    /// Whether the binding is enabled and has at least one key.
    pub fn enabled(&self) -> bool {
        !self.disabled && !self.keys.is_empty()
    }

    /// Reports whether the key message triggers this binding.
    pub fn matches(&self, msg: &KeyMsg) -> bool {
        self.enabled() && self.keys.iter().any(|k| k.matches(msg))
    }
}

/// Components that can describe their key bindings.
pub trait KeyMap {
    /// Bindings for the compact, single-line help.
    fn short_help(&self) -> Vec<&Binding>;

    /// Bindings grouped into columns for the expanded help.
    fn full_help(&self) -> Vec<Vec<&Binding>>;
}

/// Renders bindings as a single help line such as `←/h prev • →/l next`.
///
/// Disabled bindings are skipped.
pub fn short_help_view(bindings: &[&Binding]) -> String {
    let key_style = Style::new().foreground(AdaptiveColor {
        Light: "#909090",
        Dark: "#626262",
    });
    let desc_style = Style::new().foreground(AdaptiveColor {
        Light: "#B2B2B2",
        Dark: "#4A4A4A",
    });
    let separator = desc_style.render(" • ");

    bindings
        .iter()
        .filter(|b| b.enabled())
        .map(|b| {
            format!(
                "{} {}",
                key_style.render(&b.help().key),
                desc_style.render(&b.help().desc)
            )
        })
        .collect::<Vec<_>>()
        .join(separator.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyMsg {
        KeyMsg {
            key: code,
            modifiers,
        }
    }

    #[test]
    fn test_binding_matches_any_key() {
        let b = Binding::new(vec![KeyCode::Left, KeyCode::Char('h')]);
        assert!(b.matches(&key(KeyCode::Left, KeyModifiers::NONE)));
        assert!(b.matches(&key(KeyCode::Char('h'), KeyModifiers::NONE)));
        assert!(!b.matches(&key(KeyCode::Right, KeyModifiers::NONE)));
    }

    #[test]
    fn test_shift_is_folded_into_chars() {
        let b = Binding::new(vec![KeyCode::Char('G')]);
        assert!(b.matches(&key(KeyCode::Char('G'), KeyModifiers::SHIFT)));
        assert!(!b.matches(&key(KeyCode::Char('G'), KeyModifiers::CONTROL)));
    }

    #[test]
    fn test_modifier_bindings() {
        let b = Binding::new(vec![(KeyCode::Char('c'), KeyModifiers::CONTROL)]);
        assert!(b.matches(&key(KeyCode::Char('c'), KeyModifiers::CONTROL)));
        assert!(!b.matches(&key(KeyCode::Char('c'), KeyModifiers::NONE)));
    }

    #[test]
    fn test_disabled_binding() {
        let mut b = Binding::new(vec![KeyCode::Enter]).with_help("enter", "search");
        b.set_enabled(false);
        assert!(!b.matches(&key(KeyCode::Enter, KeyModifiers::NONE)));
        assert_eq!(short_help_view(&[&b]), "");
    }

    #[test]
    fn test_short_help_view_lists_bindings() {
        let a = Binding::new(vec![KeyCode::Left]).with_help("←", "prev");
        let b = Binding::new(vec![KeyCode::Right]).with_help("→", "next");
        let view = short_help_view(&[&a, &b]);
        let plain = String::from_utf8(strip_ansi_escapes::strip(view)).unwrap();
        assert_eq!(plain, "← prev • → next");
    }
}
