//! Calculator widget engine.
//!
//! This module provides functionality to:
//! - Drive a sequential keypad calculator (pending operand, pending operator,
//!   display buffer)
//! - Parse keypad scripts into key presses
//! - Format results for display
//! - Copy results to the clipboard

mod clipboard;
mod evaluation;
mod format;
mod keys;

pub use clipboard::{clipboard_text, copy_to_clipboard};
pub use evaluation::{
    Calculator, DEFAULT_MAX_INPUT_LEN, ERROR_DISPLAY, Operator, PendingOperation,
};
pub use format::{format_plain, format_result, parse_number};
pub use keys::{Key, parse_keys};

pub(crate) use format::{strip_separators, trim_decimal};
