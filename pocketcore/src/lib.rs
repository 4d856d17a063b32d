//! pocketcore — engine and shared plumbing for the pocket calculator

pub mod dispatch;
pub mod engine;
pub mod error;
pub mod format;
pub mod logging;
pub mod storage;
pub mod theme;

pub use dispatch::{press, Command, KEYPAD};
pub use engine::{CalculatorEngine, Display, EngineState, Operator};
pub use error::{CalcError, StorageError};
pub use format::format_number;
pub use storage::Settings;
pub use theme::CalcTheme;
