//! Binary arithmetic for the calculator.
//!
//! Every result is rounded to 8 decimal places so that binary floating-point
//! noise (`0.1 + 0.2`) never reaches the display.

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Scale factor used by [`round_result`]: 10^8.
const ROUNDING_SCALE: f64 = 100_000_000.0;

/// One of the four arithmetic operators on the keypad.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// All operators in keypad order.
    pub const ALL: [Operator; 4] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
    ];

    /// Typographic symbol shown on the button face.
    pub fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '−',
            Self::Multiply => '×',
            Self::Divide => '÷',
        }
    }

    /// Every character accepted for this operator, typographic symbol first.
    pub fn spellings(self) -> &'static [char] {
        match self {
            Self::Add => &['+'],
            Self::Subtract => &['−', '-'],
            Self::Multiply => &['×', '*', 'x', 'X'],
            Self::Divide => &['÷', '/'],
        }
    }

    /// Parse an operator from any of its spellings.
    ///
    /// Returns `None` for anything outside the closed operator set.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|op| op.spellings().contains(&symbol))
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Combine two operands with `op` and round the result.
///
/// Division by zero yields the dividend unchanged instead of an infinity.
pub fn perform_calculation(a: f64, b: f64, op: Operator) -> f64 {
    let raw = match op {
        Operator::Add => a + b,
        Operator::Subtract => a - b,
        Operator::Multiply => a * b,
        Operator::Divide => {
            if b == 0.0 {
                debug!(dividend = a, "division by zero, keeping dividend");
                return a;
            }
            a / b
        }
    };
    round_result(raw)
}

/// Round to 8 decimal places: scale by 10^8, round half away from zero,
/// scale back.
pub fn round_result(value: f64) -> f64 {
    (value * ROUNDING_SCALE).round() / ROUNDING_SCALE
}
