//! Calculator core.
//!
//! This module provides:
//! - The input/state/evaluation state machine ([`Calculator`])
//! - Operator arithmetic with 8-decimal rounding
//! - Number text parsing and display formatting
//! - Clipboard export of the display

mod clipboard;
mod evaluation;
pub mod format;
mod state;

pub use clipboard::{ClipboardError, copy_to_clipboard};
pub use evaluation::{Operator, perform_calculation, round_result};
pub use state::{Calculator, CalculatorSnapshot};
