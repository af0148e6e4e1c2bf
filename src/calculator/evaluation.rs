//! Sequential keypad evaluation.
//!
//! The calculator keeps one pending operand, one pending operator and a
//! display buffer. Operations apply immediately and strictly left to right;
//! there is no operator precedence.

use super::format::{format_plain, format_result, parse_number};
use super::keys::Key;
use serde::Serialize;
use std::fmt;
use tracing::{debug, warn};

/// Display value shown after an unrepresentable result.
pub const ERROR_DISPLAY: &str = "Error";

/// Default cap on the number of characters typed into the display.
pub const DEFAULT_MAX_INPUT_LEN: usize = 12;

/// A binary arithmetic operator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// Keypad symbol for this operator.
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "×",
            Self::Divide => "÷",
        }
    }

    /// Apply the operator. Returns `None` for division by zero.
    pub fn apply(&self, lhs: f64, rhs: f64) -> Option<f64> {
        match self {
            Self::Add => Some(lhs + rhs),
            Self::Subtract => Some(lhs - rhs),
            Self::Multiply => Some(lhs * rhs),
            Self::Divide if rhs == 0.0 => None,
            Self::Divide => Some(lhs / rhs),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Left operand and operator waiting for a right-hand side.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct PendingOperation {
    pub value: f64,
    pub operator: Operator,
}

/// Calculator state machine.
#[derive(Clone, Debug, Serialize)]
pub struct Calculator {
    display: String,
    pending: Option<PendingOperation>,
    awaiting_fresh_input: bool,
    /// Right operand of the last folded operation, reused when `=` follows
    /// an operator without a new number.
    #[serde(skip)]
    repeat_operand: Option<f64>,
    #[serde(skip)]
    max_input_len: usize,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    pub fn new() -> Self {
        Self::with_max_input_len(DEFAULT_MAX_INPUT_LEN)
    }

    /// Create a calculator with a custom typing cap.
    pub fn with_max_input_len(max_input_len: usize) -> Self {
        Self {
            display: "0".to_string(),
            pending: None,
            awaiting_fresh_input: false,
            repeat_operand: None,
            max_input_len: max_input_len.max(1),
        }
    }

    /// The current display buffer.
    pub fn display(&self) -> &str {
        &self.display
    }

    /// The operation waiting for its right-hand side, if any.
    pub fn pending(&self) -> Option<PendingOperation> {
        self.pending
    }

    /// Whether the next digit starts a new number.
    pub fn is_awaiting_fresh_input(&self) -> bool {
        self.awaiting_fresh_input
    }

    /// Whether the display shows the error sentinel.
    pub fn is_error(&self) -> bool {
        self.display == ERROR_DISPLAY
    }

    pub fn max_input_len(&self) -> usize {
        self.max_input_len
    }

    /// Dispatch a single key press.
    pub fn press(&mut self, key: Key) {
        match key {
            Key::Digit(d) => self.input_digit(d),
            Key::DecimalPoint => self.input_decimal_point(),
            Key::Operator(op) => self.set_operator(op),
            Key::Equals => self.evaluate(),
            Key::Percent => self.percent(),
            Key::ToggleSign => self.toggle_sign(),
            Key::Clear => self.clear(),
        }
    }

    /// Type a digit. Values above 9 are ignored.
    pub fn input_digit(&mut self, digit: u8) {
        let Some(c) = char::from_digit(u32::from(digit), 10) else {
            return;
        };

        if self.awaiting_fresh_input || self.display == "0" {
            self.display = c.to_string();
            self.awaiting_fresh_input = false;
            self.repeat_operand = None;
        } else if self.display.len() < self.max_input_len {
            self.display.push(c);
        }
    }

    /// Type a decimal point.
    pub fn input_decimal_point(&mut self) {
        if self.awaiting_fresh_input {
            self.display = "0.".to_string();
            self.awaiting_fresh_input = false;
            self.repeat_operand = None;
        } else if !self.display.contains('.') && self.display.len() < self.max_input_len {
            self.display.push('.');
        }
    }

    /// Choose an operator, folding any pending operation first.
    pub fn set_operator(&mut self, operator: Operator) {
        if self.pending.is_some() && !self.awaiting_fresh_input {
            self.evaluate();
        } else {
            self.repeat_operand = None;
        }

        self.pending = Some(PendingOperation {
            value: self.current_value(),
            operator,
        });
        self.awaiting_fresh_input = true;
        debug!(operator = %operator, display = %self.display, "Operator set");
    }

    /// Apply the pending operation to the display value.
    pub fn evaluate(&mut self) {
        let Some(PendingOperation { value, operator }) = self.pending.take() else {
            return;
        };

        let rhs = if self.awaiting_fresh_input {
            self.repeat_operand.unwrap_or_else(|| self.current_value())
        } else {
            self.current_value()
        };

        match operator.apply(value, rhs).filter(|result| result.is_finite()) {
            Some(result) => {
                self.display = format_result(result);
                self.repeat_operand = Some(rhs);
                debug!(lhs = value, %operator, rhs, display = %self.display, "Evaluated");
            }
            None => {
                warn!(lhs = value, %operator, rhs, "Unrepresentable result");
                self.display = ERROR_DISPLAY.to_string();
                self.repeat_operand = None;
            }
        }
        self.awaiting_fresh_input = true;
    }

    /// Flip the sign of the display. No-op on zero and on the error display.
    pub fn toggle_sign(&mut self) {
        if self.display == "0" || self.is_error() {
            return;
        }

        self.display = match self.display.strip_prefix('-') {
            Some(rest) => rest.to_string(),
            None => format!("-{}", self.display),
        };
        self.repeat_operand = None;
    }

    /// Divide the display by one hundred.
    pub fn percent(&mut self) {
        let Some(value) = parse_number(&self.display) else {
            return;
        };

        self.display = format_plain(value / 100.0);
        self.awaiting_fresh_input = true;
        self.repeat_operand = None;
    }

    /// Reset everything to the initial state.
    pub fn clear(&mut self) {
        self.display = "0".to_string();
        self.pending = None;
        self.awaiting_fresh_input = false;
        self.repeat_operand = None;
    }

    /// Numeric value of the display; the error sentinel counts as zero.
    fn current_value(&self) -> f64 {
        parse_number(&self.display).unwrap_or(0.0)
    }
}
