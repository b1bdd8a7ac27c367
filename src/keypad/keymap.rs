//! Character-to-button bindings.
//!
//! The default table covers the usual calculator keys; configured aliases
//! are layered on top and may rebind any character to any button id or
//! operator symbol.

use std::collections::HashMap;

use thiserror::Error;
use tracing::debug;

use super::Button;
use crate::calculator::Operator;

/// Error types for key lookups
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeypadError {
    /// Character with no binding
    #[error("No button bound to key {0:?}")]
    UnknownKey(char),
    /// Alias pointing at a button id that does not exist
    #[error("Unknown button id {id:?} for key {key:?}")]
    UnknownButtonId { key: char, id: String },
    /// Alias key that is not exactly one character
    #[error("Key alias {0:?} must be a single character")]
    InvalidAliasKey(String),
}

/// Control bindings, in addition to the digits `0`-`9` and every operator
/// spelling.
const CONTROL_BINDINGS: &[(char, Button)] = &[
    ('.', Button::Decimal),
    (',', Button::Decimal),
    ('=', Button::Equals),
    ('\n', Button::Equals),
    ('\r', Button::Equals),
    ('c', Button::Clear),
    ('C', Button::Clear),
    ('\u{1b}', Button::Clear),
];

/// Maps typed characters to keypad buttons.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyMap {
    bindings: HashMap<char, Button>,
}

impl Default for KeyMap {
    fn default() -> Self {
        let mut bindings: HashMap<char, Button> = (0..=9u8)
            .map(|d| (char::from(b'0' + d), Button::Digit(d)))
            .collect();
        for op in Operator::ALL {
            bindings.extend(op.spellings().iter().map(|c| (*c, Button::Operator(op))));
        }
        bindings.extend(CONTROL_BINDINGS.iter().copied());
        Self { bindings }
    }
}

impl KeyMap {
    /// Default bindings with `aliases` (key -> button id) layered on top.
    pub fn with_aliases<'a, I>(aliases: I) -> Result<Self, KeypadError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut keymap = Self::default();

        for (key, id) in aliases {
            let mut chars = key.chars();
            let key_char = match (chars.next(), chars.next()) {
                (Some(c), None) => c,
                _ => return Err(KeypadError::InvalidAliasKey(key.to_string())),
            };
            let button = button_for_alias(id).ok_or_else(|| KeypadError::UnknownButtonId {
                key: key_char,
                id: id.to_string(),
            })?;

            debug!(key = ?key_char, button = id, "binding key alias");
            keymap.bindings.insert(key_char, button);
        }

        Ok(keymap)
    }

    /// Button bound to `key`.
    pub fn lookup(&self, key: char) -> Result<Button, KeypadError> {
        self.bindings
            .get(&key)
            .copied()
            .ok_or(KeypadError::UnknownKey(key))
    }

    /// Map every non-whitespace character of `sequence` to a button.
    ///
    /// Newlines are significant (they evaluate); other whitespace is
    /// skipped so sequences like `"5 + 3 ="` read naturally.
    pub fn parse_sequence(&self, sequence: &str) -> Result<Vec<Button>, KeypadError> {
        sequence
            .chars()
            .filter(|c| !c.is_whitespace() || self.bindings.contains_key(c))
            .map(|c| self.lookup(c))
            .collect()
    }
}

/// Alias target: a button id (`"multiply"`) or an operator symbol (`"×"`).
fn button_for_alias(target: &str) -> Option<Button> {
    if let Some(button) = Button::from_id(target) {
        return Some(button);
    }

    let mut chars = target.chars();
    match (chars.next(), chars.next()) {
        (Some(symbol), None) => Operator::from_symbol(symbol).map(Button::Operator),
        _ => None,
    }
}
