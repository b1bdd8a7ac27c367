mod keymap;

pub use keymap::{KeyMap, KeypadError};

use crate::calculator::{Calculator, Operator};

/// A button on the calculator keypad.
/// Every button triggers exactly one calculator operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Button {
    /// A digit key, `0..=9`
    Digit(u8),
    /// One of the four arithmetic operators
    Operator(Operator),
    /// The decimal point
    Decimal,
    /// Reset everything
    Clear,
    /// Complete the pending operation
    Equals,
}

/// Button identifiers for digits, indexed by digit value.
const DIGIT_IDS: [&str; 10] = [
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
];

impl Button {
    /// Every button on the keypad, digits first.
    pub fn all() -> Vec<Button> {
        let mut buttons: Vec<Button> = (0..=9).map(Button::Digit).collect();
        buttons.extend(Operator::ALL.into_iter().map(Button::Operator));
        buttons.extend([Button::Decimal, Button::Clear, Button::Equals]);
        buttons
    }

    /// Stable identifier used by adapters that bind buttons by name.
    pub fn id(&self) -> &'static str {
        match self {
            Self::Digit(d) => DIGIT_IDS.get(usize::from(*d)).copied().unwrap_or("digit"),
            Self::Operator(Operator::Add) => "add",
            Self::Operator(Operator::Subtract) => "subtract",
            Self::Operator(Operator::Multiply) => "multiply",
            Self::Operator(Operator::Divide) => "divide",
            Self::Decimal => "decimal",
            Self::Clear => "clear",
            Self::Equals => "equals",
        }
    }

    /// Look up a button by its identifier.
    pub fn from_id(id: &str) -> Option<Button> {
        Self::all().into_iter().find(|button| button.id() == id)
    }

    /// Text printed on the button face.
    pub fn label(&self) -> String {
        match self {
            Self::Digit(d) => d.to_string(),
            Self::Operator(op) => op.symbol().to_string(),
            Self::Decimal => ".".to_string(),
            Self::Clear => "C".to_string(),
            Self::Equals => "=".to_string(),
        }
    }

    /// Invoke the calculator operation bound to this button.
    pub fn apply(&self, calculator: &mut Calculator) {
        match *self {
            Self::Digit(d) => calculator.input_digit(d),
            Self::Operator(op) => calculator.input_operator(op),
            Self::Decimal => calculator.input_decimal_point(),
            Self::Clear => calculator.clear(),
            Self::Equals => calculator.evaluate(),
        }
    }
}

impl From<Operator> for Button {
    fn from(op: Operator) -> Self {
        Self::Operator(op)
    }
}

impl std::fmt::Display for Button {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
