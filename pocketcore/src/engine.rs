//! Calculator engine
//!
//! Holds the number being typed, one pending binary operator and the
//! "awaiting new input" flag, and produces the two display strings the
//! window shows. Every operation runs to completion on the caller's thread.
//!
//! States:
//!
//! - **Idle** — empty buffer, nothing pending. Initial state and the target
//!   of [`CalculatorEngine::clear`].
//! - **Entering** — digits are being typed.
//! - **OperatorSet** — an operator is pending, the next digit starts the
//!   second operand.
//! - **ResultShown** — equals just produced a result, the next digit starts
//!   a fresh number.

use tracing::{debug, warn};

use crate::error::{CalcError, DIVIDE_BY_ZERO_MESSAGE};
use crate::format::format_number;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    pub const ALL: [Operator; 4] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
    ];

    /// Symbol printed on the keypad and in the secondary display.
    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "−",
            Operator::Multiply => "×",
            Operator::Divide => "÷",
        }
    }

    /// Parse a keypad symbol. ASCII stand-ins are accepted so keyboard
    /// input can share the same path.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(Operator::Add),
            "−" | "-" => Some(Operator::Subtract),
            "×" | "*" | "x" => Some(Operator::Multiply),
            "÷" | "/" => Some(Operator::Divide),
            _ => None,
        }
    }

    pub fn apply(self, lhs: f64, rhs: f64) -> Result<f64, CalcError> {
        match self {
            Operator::Add => Ok(lhs + rhs),
            Operator::Subtract => Ok(lhs - rhs),
            Operator::Multiply => Ok(lhs * rhs),
            Operator::Divide => {
                if rhs == 0.0 {
                    Err(CalcError::DivideByZero)
                } else {
                    Ok(lhs / rhs)
                }
            }
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

/// What the engine last did.
///
/// `Entering` is reported for any typing, including the second operand
/// while an operator is pending. After a division by zero the state is
/// `OperatorSet` with the operator still pending, but the awaiting flag
/// keeps whatever value it had, so it is `false` when a zero was typed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EngineState {
    #[default]
    Idle,
    Entering,
    OperatorSet,
    ResultShown,
}

/// The two text outputs of the engine.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Display {
    /// Current input or last result.
    pub primary: String,
    /// Running expression or error message.
    pub secondary: String,
}

#[derive(Debug, Clone, Default)]
pub struct CalculatorEngine {
    buffer: String,
    first_operand: f64,
    operator: Option<Operator>,
    awaiting_new_input: bool,
    state: EngineState,
    display: Display,
    /// Exact value of the shown result while the buffer still holds it.
    result: Option<f64>,
    /// Operator and second operand of the last successful evaluation.
    last_operation: Option<(Operator, f64)>,
    /// Bare "=" after a result re-applies `last_operation`.
    repeat_equals: bool,
}

impl CalculatorEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_repeat_equals(mut self, repeat_equals: bool) -> Self {
        self.repeat_equals = repeat_equals;
        self
    }

    pub fn set_repeat_equals(&mut self, repeat_equals: bool) {
        self.repeat_equals = repeat_equals;
    }

    pub fn repeat_equals(&self) -> bool {
        self.repeat_equals
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    pub fn first_operand(&self) -> f64 {
        self.first_operand
    }

    pub fn operator(&self) -> Option<Operator> {
        self.operator
    }

    pub fn awaiting_new_input(&self) -> bool {
        self.awaiting_new_input
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn display(&self) -> &Display {
        &self.display
    }

    pub fn primary(&self) -> &str {
        &self.display.primary
    }

    pub fn secondary(&self) -> &str {
        &self.display.secondary
    }

    /// The buffer as a number. Non-finite values (a shown "∞" or "NaN")
    /// count as unparseable.
    fn parse_buffer(&self) -> Option<f64> {
        self.result
            .or_else(|| self.buffer.parse::<f64>().ok())
            .filter(|v| v.is_finite())
    }

    /// Append a digit or the decimal point.
    pub fn enter(&mut self, token: char) -> Result<(), CalcError> {
        if !(token.is_ascii_digit() || token == '.') {
            return Err(CalcError::InvalidToken(token));
        }

        if self.awaiting_new_input {
            self.buffer.clear();
            self.result = None;
            self.awaiting_new_input = false;
        }

        if token == '.' && self.buffer.contains('.') {
            return Ok(());
        }

        self.result = None;

        self.buffer.push(token);
        self.state = EngineState::Entering;
        self.display.primary = self.buffer.clone();
        debug!(buffer = %self.buffer, "entered {token}");
        Ok(())
    }

    /// Record `op` with the current buffer as first operand. Ignored when
    /// the buffer is not a number.
    pub fn select_operator(&mut self, op: Operator) {
        let Some(value) = self.parse_buffer() else {
            debug!(buffer = %self.buffer, "operator {op} ignored, buffer is not a number");
            return;
        };

        self.first_operand = value;
        self.operator = Some(op);
        self.awaiting_new_input = true;
        self.state = EngineState::OperatorSet;
        self.display.secondary = format!("{} {}", format_number(value), op);
        debug!(first = value, "operator {op} selected");
    }

    /// Apply the pending operator to the first operand and the buffer.
    ///
    /// Unparseable input and a missing operator are silent no-ops. Dividing
    /// by zero writes the error message to the secondary display, empties
    /// the primary display and the buffer, and leaves the operand and
    /// operator in place.
    pub fn evaluate(&mut self) -> Result<(), CalcError> {
        let Some(value) = self.parse_buffer() else {
            debug!(buffer = %self.buffer, "equals ignored, buffer is not a number");
            return Ok(());
        };

        let (first, op, second) = match (self.operator, self.last_operation) {
            (Some(op), _) => (self.first_operand, op, value),
            (None, Some((op, rhs)))
                if self.repeat_equals && self.state == EngineState::ResultShown =>
            {
                (value, op, rhs)
            }
            _ => {
                debug!("equals ignored, no pending operator");
                return Ok(());
            }
        };

        let result = match op.apply(first, second) {
            Ok(result) => result,
            Err(err) => {
                warn!(first, "division by zero");
                self.buffer.clear();
                self.result = None;
                self.display.primary.clear();
                self.display.secondary = DIVIDE_BY_ZERO_MESSAGE.to_string();
                self.state = EngineState::OperatorSet;
                return Err(err);
            }
        };

        let text = format_number(result);
        self.display.secondary = format!(
            "{} {} {} =",
            format_number(first),
            op,
            format_number(second)
        );
        self.display.primary = text.clone();
        self.buffer = text;
        self.result = Some(result);
        self.first_operand = first;
        self.operator = None;
        self.last_operation = Some((op, second));
        self.awaiting_new_input = true;
        self.state = EngineState::ResultShown;
        debug!(result, "evaluated {first} {op} {second}");
        Ok(())
    }

    /// Reset everything except the repeat-equals preference.
    pub fn clear(&mut self) {
        *self = Self {
            repeat_equals: self.repeat_equals,
            ..Self::default()
        };
        debug!("cleared");
    }

    /// Drop the last character of the buffer.
    pub fn backspace(&mut self) {
        if self.buffer.pop().is_none() {
            return;
        }
        self.result = None;
        self.display.primary = self.buffer.clone();
        if self.buffer.is_empty() && self.operator.is_none() {
            self.state = EngineState::Idle;
        }
    }
}
