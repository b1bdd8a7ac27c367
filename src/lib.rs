//! A four-function keypad calculator.
//!
//! The [`calculator`] core owns all arithmetic state. Input adapters press
//! [`keypad::Button`]s; output adapters implement [`ui::DisplaySink`] and
//! receive the display text after every press. [`session::Session`] wires
//! the three together.

pub mod calculator;
pub mod config;
pub mod keypad;
pub mod session;
pub mod ui;

pub use calculator::{Calculator, CalculatorSnapshot, Operator};
pub use keypad::{Button, KeyMap};
pub use session::Session;
