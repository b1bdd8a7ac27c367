//! The calculator state machine.
//!
//! Informal states:
//! - Start: `"0"` with nothing pending
//! - EnteringFirstOperand: digits are appended to the current operand
//! - OperatorChosen: an operator is pending, the next digit starts a new operand
//! - EnteringSecondOperand: digits are appended to the second operand
//! - Result: an evaluation just finished, an operator chains onto the result
//!
//! Evaluation is eager and strictly left to right. Pressing a second
//! operator after a complete second operand folds the pending operation
//! into the previous operand immediately; there is no precedence.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use super::evaluation::{Operator, perform_calculation};
use super::format::{display_text, number_to_text, parse_number};

/// Operand text of a fresh or cleared calculator.
const INITIAL_INPUT: &str = "0";

/// Operand text while a negative number has only its sign typed.
const BARE_MINUS: &str = "-";

/// Four-function calculator state.
///
/// Callers own the instance and drive it one input at a time; after every
/// call the display adapter reads [`Calculator::display_text`].
#[derive(Clone, Debug, PartialEq)]
pub struct Calculator {
    /// Raw text of the operand being entered.
    current_input: String,
    /// Operand captured before the pending operator.
    previous_operand: Option<f64>,
    pending_operator: Option<Operator>,
    /// The next digit or decimal point starts a fresh operand.
    awaiting_operand: bool,
    /// The current operand is a freshly computed result.
    just_evaluated: bool,
}

/// Serializable copy of the calculator state, including the derived display.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CalculatorSnapshot {
    pub current_input: String,
    pub previous_operand: Option<f64>,
    pub pending_operator: Option<Operator>,
    pub awaiting_operand: bool,
    pub just_evaluated: bool,
    pub display: String,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    pub fn new() -> Self {
        Self {
            current_input: INITIAL_INPUT.to_string(),
            previous_operand: None,
            pending_operator: None,
            awaiting_operand: false,
            just_evaluated: false,
        }
    }

    /// Enter a single digit (`0..=9`).
    ///
    /// Leading zeros are suppressed, and a digit typed after an operator or
    /// an evaluation starts a new operand. Values above 9 are ignored.
    pub fn input_digit(&mut self, digit: u8) {
        if digit > 9 {
            warn!(digit, "ignoring out-of-range digit");
            return;
        }
        let digit = char::from(b'0' + digit);

        if self.awaiting_operand {
            self.current_input = digit.to_string();
            self.awaiting_operand = false;
        } else if self.current_input == BARE_MINUS {
            self.current_input.push(digit);
        } else if self.current_input == INITIAL_INPUT {
            if digit != '0' {
                self.current_input = digit.to_string();
            }
        } else {
            self.current_input.push(digit);
        }

        self.just_evaluated = false;
        trace!(input = %self.current_input, "digit entered");
    }

    /// Choose an arithmetic operator.
    ///
    /// Depending on the state this seeds the first operand, replaces the
    /// pending operator, starts a negative second operand (`−` right after
    /// another operator), or folds the pending operation into a result.
    pub fn input_operator(&mut self, op: Operator) {
        if self.current_input == BARE_MINUS {
            self.current_input = match self.previous_operand {
                Some(previous) if previous != 0.0 && !previous.is_nan() => {
                    number_to_text(previous)
                }
                _ => INITIAL_INPUT.to_string(),
            };
            debug!(input = %self.current_input, "repaired dangling minus sign");
        }

        let input_value = parse_number(&self.current_input);

        if self.just_evaluated {
            self.previous_operand = Some(input_value);
            self.pending_operator = Some(op);
            self.awaiting_operand = true;
            self.just_evaluated = false;
            trace!(%op, operand = input_value, "chaining onto result");
            return;
        }

        if self.awaiting_operand {
            if op == Operator::Subtract {
                self.current_input = BARE_MINUS.to_string();
                self.awaiting_operand = false;
                trace!("starting negative operand");
                return;
            }

            self.pending_operator = Some(op);
            trace!(%op, "replaced pending operator");
            return;
        }

        match (self.previous_operand, self.pending_operator) {
            (None, _) => {
                self.previous_operand = Some(input_value);
            }
            (Some(previous), Some(pending)) => {
                let result = perform_calculation(previous, input_value, pending);
                debug!(
                    previous,
                    operand = input_value,
                    op = %pending,
                    result,
                    "evaluated pending operation"
                );
                self.previous_operand = Some(result);
                self.current_input = number_to_text(result);
            }
            (Some(_), None) => {}
        }

        self.pending_operator = Some(op);
        self.awaiting_operand = true;
        self.just_evaluated = false;
        trace!(%op, "operator chosen");
    }

    /// Enter a decimal point. A second point in the same operand is ignored.
    pub fn input_decimal_point(&mut self) {
        if self.awaiting_operand {
            self.current_input = "0.".to_string();
            self.awaiting_operand = false;
        } else if self.current_input == BARE_MINUS {
            self.current_input = "-0.".to_string();
        } else if !self.current_input.contains('.') {
            self.current_input.push('.');
        } else {
            debug!(input = %self.current_input, "ignoring second decimal point");
        }

        self.just_evaluated = false;
        trace!(input = %self.current_input, "decimal point entered");
    }

    /// Reset to the initial state.
    pub fn clear(&mut self) {
        *self = Self::new();
        trace!("cleared");
    }

    /// Complete the pending operation.
    ///
    /// Does nothing while the operand is a bare minus sign or when no
    /// operator is pending.
    pub fn evaluate(&mut self) {
        if self.current_input == BARE_MINUS || self.current_input.is_empty() {
            debug!("ignoring evaluate on incomplete operand");
            return;
        }

        let input_value = parse_number(&self.current_input);

        let (Some(previous), Some(op)) = (self.previous_operand, self.pending_operator) else {
            trace!("nothing to evaluate");
            return;
        };

        let result = perform_calculation(previous, input_value, op);
        debug!(previous, operand = input_value, %op, result, "evaluated");

        self.current_input = number_to_text(result);
        self.previous_operand = None;
        self.pending_operator = None;
        self.awaiting_operand = true;
        self.just_evaluated = true;
    }

    /// Text for the display: the current operand, re-rendered when longer
    /// than 12 characters.
    pub fn display_text(&self) -> String {
        display_text(&self.current_input)
    }

    /// Raw text of the operand being entered.
    pub fn current_input(&self) -> &str {
        &self.current_input
    }

    pub fn previous_operand(&self) -> Option<f64> {
        self.previous_operand
    }

    pub fn pending_operator(&self) -> Option<Operator> {
        self.pending_operator
    }

    pub fn is_awaiting_operand(&self) -> bool {
        self.awaiting_operand
    }

    pub fn is_just_evaluated(&self) -> bool {
        self.just_evaluated
    }

    pub fn snapshot(&self) -> CalculatorSnapshot {
        CalculatorSnapshot {
            current_input: self.current_input.clone(),
            previous_operand: self.previous_operand,
            pending_operator: self.pending_operator,
            awaiting_operand: self.awaiting_operand,
            just_evaluated: self.just_evaluated,
            display: self.display_text(),
        }
    }
}
