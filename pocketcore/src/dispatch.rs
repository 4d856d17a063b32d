//! Command dispatch
//!
//! Maps a button label to the engine transition it triggers, so the window
//! only ever hands over strings and reads back the two displays.

use std::str::FromStr;

use tracing::trace;

use crate::engine::{CalculatorEngine, Display, Operator};
use crate::error::CalcError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Digit(char),
    Point,
    Operator(Operator),
    Equals,
    Clear,
    Backspace,
}

/// Every accepted label. Keypad labels come first, keyboard aliases after.
const LABELS: &[(&str, Command)] = &[
    ("0", Command::Digit('0')),
    ("1", Command::Digit('1')),
    ("2", Command::Digit('2')),
    ("3", Command::Digit('3')),
    ("4", Command::Digit('4')),
    ("5", Command::Digit('5')),
    ("6", Command::Digit('6')),
    ("7", Command::Digit('7')),
    ("8", Command::Digit('8')),
    ("9", Command::Digit('9')),
    (".", Command::Point),
    ("+", Command::Operator(Operator::Add)),
    ("−", Command::Operator(Operator::Subtract)),
    ("×", Command::Operator(Operator::Multiply)),
    ("÷", Command::Operator(Operator::Divide)),
    ("=", Command::Equals),
    ("AC", Command::Clear),
    ("←", Command::Backspace),
    ("-", Command::Operator(Operator::Subtract)),
    ("*", Command::Operator(Operator::Multiply)),
    ("x", Command::Operator(Operator::Multiply)),
    ("/", Command::Operator(Operator::Divide)),
    ("C", Command::Clear),
    ("Esc", Command::Clear),
    ("⌫", Command::Backspace),
];

impl FromStr for Command {
    type Err = CalcError;

    fn from_str(label: &str) -> Result<Self, Self::Err> {
        LABELS
            .iter()
            .find(|(l, _)| *l == label)
            .map(|(_, command)| *command)
            .ok_or_else(|| CalcError::UnknownCommand(label.to_string()))
    }
}

type Transition = fn(&mut CalculatorEngine, Command) -> Result<(), CalcError>;

fn enter(engine: &mut CalculatorEngine, command: Command) -> Result<(), CalcError> {
    match command {
        Command::Digit(d) => engine.enter(d),
        _ => engine.enter('.'),
    }
}

fn select_operator(engine: &mut CalculatorEngine, command: Command) -> Result<(), CalcError> {
    if let Command::Operator(op) = command {
        engine.select_operator(op);
    }
    Ok(())
}

fn evaluate(engine: &mut CalculatorEngine, _: Command) -> Result<(), CalcError> {
    engine.evaluate()
}

fn clear(engine: &mut CalculatorEngine, _: Command) -> Result<(), CalcError> {
    engine.clear();
    Ok(())
}

fn backspace(engine: &mut CalculatorEngine, _: Command) -> Result<(), CalcError> {
    engine.backspace();
    Ok(())
}

impl Command {
    fn transition(self) -> Transition {
        match self {
            Command::Digit(_) | Command::Point => enter,
            Command::Operator(_) => select_operator,
            Command::Equals => evaluate,
            Command::Clear => clear,
            Command::Backspace => backspace,
        }
    }
}

/// Run `command` and return the resulting displays.
pub fn apply(engine: &mut CalculatorEngine, command: Command) -> Result<Display, CalcError> {
    trace!(?command, "dispatch");
    (command.transition())(engine, command)?;
    Ok(engine.display().clone())
}

/// Parse a button label and run it. Unknown labels change nothing.
///
/// On division by zero the error is returned, but the engine's displays
/// already carry the message, so callers may simply redraw.
pub fn press(engine: &mut CalculatorEngine, label: &str) -> Result<Display, CalcError> {
    let command = label.parse::<Command>()?;
    apply(engine, command)
}

/// One button of the keypad grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeypadKey {
    pub label: &'static str,
    /// Number of grid columns the button covers.
    pub span: usize,
}

const fn key(label: &'static str) -> KeypadKey {
    KeypadKey { label, span: 1 }
}

/// Button grid, row by row. Every row covers four columns.
pub const KEYPAD: [&[KeypadKey]; 5] = [
    &[key("AC"), key("÷"), key("×"), key("←")],
    &[key("7"), key("8"), key("9"), key("−")],
    &[key("4"), key("5"), key("6"), key("+")],
    &[key("1"), key("2"), key("3"), key("=")],
    &[KeypadKey { label: "0", span: 2 }, key(".")],
];

pub const KEYPAD_COLUMNS: usize = 4;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::EngineState;

    fn press_all(engine: &mut CalculatorEngine, labels: &[&str]) -> Result<Display, CalcError> {
        let mut last = Ok(engine.display().clone());
        for label in labels {
            last = press(engine, label);
        }
        last
    }

    #[test]
    fn test_twelve_plus_eight() {
        let mut engine = CalculatorEngine::new();
        let display = press_all(&mut engine, &["1", "2", "+", "8", "="]).unwrap();
        assert_eq!(display.primary, "20");
        assert_eq!(display.secondary, "12 + 8 =");
    }

    #[test]
    fn test_ninety_nine_times_nine() {
        let mut engine = CalculatorEngine::new();
        let display = press_all(&mut engine, &["9", "9", "×", "9", "="]).unwrap();
        assert_eq!(display.primary, "891");
        assert_eq!(display.secondary, "99 × 9 =");
    }

    #[test]
    fn test_ascii_aliases() {
        let mut engine = CalculatorEngine::new();
        let display = press_all(&mut engine, &["8", "/", "4", "="]).unwrap();
        assert_eq!(display.secondary, "8 ÷ 4 =");
        assert_eq!(display.primary, "2");
    }

    #[test]
    fn test_divide_by_zero_surfaces_error() {
        let mut engine = CalculatorEngine::new();
        press_all(&mut engine, &["7", "÷", "0"]).unwrap();
        assert_eq!(press(&mut engine, "="), Err(CalcError::DivideByZero));
        assert_eq!(engine.primary(), "");
        assert_eq!(engine.secondary(), "Error: Cannot divide by zero");
    }

    #[test]
    fn test_unknown_label_changes_nothing() {
        let mut engine = CalculatorEngine::new();
        press(&mut engine, "4").unwrap();
        assert_eq!(
            press(&mut engine, "sin"),
            Err(CalcError::UnknownCommand("sin".to_string()))
        );
        assert_eq!(engine.buffer(), "4");
    }

    #[test]
    fn test_clear_and_backspace_labels() {
        let mut engine = CalculatorEngine::new();
        let display = press_all(&mut engine, &["4", "2", "←"]).unwrap();
        assert_eq!(display.primary, "4");
        let display = press(&mut engine, "AC").unwrap();
        assert_eq!(display, Display::default());
        assert_eq!(engine.state(), EngineState::Idle);
    }

    #[test]
    fn test_every_keypad_label_dispatches() {
        for row in KEYPAD {
            assert_eq!(row.iter().map(|k| k.span).sum::<usize>(), KEYPAD_COLUMNS);
            for key in row {
                assert!(key.label.parse::<Command>().is_ok(), "{}", key.label);
            }
        }
    }
}
