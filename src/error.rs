//! Error types for the lumira tools.

/// Top-level error type for everything outside the calculator state machine.
///
/// The calculator itself never fails: division by zero is absorbed into the
/// `"Error"` display. These variants cover the surfaces around it.
#[derive(Debug, thiserror::Error)]
pub enum LumiraError {
    /// Configuration file could not be parsed or serialized.
    #[error("config error: {0}")]
    Config(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A keypad script contained a token that is not a calculator key.
    #[error("invalid key: {0:?}")]
    InvalidKey(String),

    /// A unit is not known to the converter (or not in the chosen category).
    #[error("unknown unit: {0}")]
    UnknownUnit(String),

    /// The system clipboard could not be reached or written.
    #[error("clipboard error: {0}")]
    Clipboard(String),
}

/// Convenience result type.
pub type Result<T> = std::result::Result<T, LumiraError>;
