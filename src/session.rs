//! Wires keypad input to the calculator and the calculator to a display.

use std::io;

use thiserror::Error;
use tracing::trace;

use crate::calculator::{Calculator, CalculatorSnapshot};
use crate::keypad::{Button, KeyMap, KeypadError};
use crate::ui::DisplaySink;

/// Errors from pressing keys through a session.
#[derive(Debug, Error)]
pub enum FeedError {
    /// A key had no binding.
    #[error(transparent)]
    Key(#[from] KeypadError),
    /// The display could not be written.
    #[error("Failed to update display: {0}")]
    Display(#[from] io::Error),
}

/// One calculator, one display.
///
/// Every press runs exactly one calculator operation and then writes the
/// display once, whether or not the press changed anything.
pub struct Session<S: DisplaySink> {
    calculator: Calculator,
    display: S,
    keymap: KeyMap,
}

impl<S: DisplaySink> Session<S> {
    pub fn new(display: S) -> Self {
        Self::with_keymap(display, KeyMap::default())
    }

    pub fn with_keymap(display: S, keymap: KeyMap) -> Self {
        Self {
            calculator: Calculator::new(),
            display,
            keymap,
        }
    }

    /// Write the initial display.
    pub fn start(&mut self) -> io::Result<()> {
        self.display.show(&self.calculator.display_text())
    }

    /// Press a single button and refresh the display.
    pub fn press(&mut self, button: Button) -> io::Result<()> {
        trace!(button = button.id(), "press");
        button.apply(&mut self.calculator);
        self.display.note_key(&button.label());
        self.display.show(&self.calculator.display_text())
    }

    /// Press the button bound to `key`.
    pub fn press_key(&mut self, key: char) -> Result<Button, FeedError> {
        let button = self.keymap.lookup(key)?;
        self.press(button)?;
        Ok(button)
    }

    /// Press every key of `sequence` in order.
    ///
    /// The sequence is resolved up front, so an unknown key leaves the
    /// calculator untouched.
    pub fn feed(&mut self, sequence: &str) -> Result<Vec<Button>, FeedError> {
        let buttons = self.keymap.parse_sequence(sequence)?;
        for button in &buttons {
            self.press(*button)?;
        }
        Ok(buttons)
    }

    pub fn calculator(&self) -> &Calculator {
        &self.calculator
    }

    pub fn display(&self) -> &S {
        &self.display
    }

    pub fn keymap(&self) -> &KeyMap {
        &self.keymap
    }

    pub fn snapshot(&self) -> CalculatorSnapshot {
        self.calculator.snapshot()
    }

    pub fn into_display(self) -> S {
        self.display
    }
}
