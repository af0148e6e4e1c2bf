//! Keypad script parsing.
//!
//! Turns text such as `"1 . 5 + 2 ="` or `"9÷0="` into the key presses the
//! calculator understands.

use super::evaluation::Operator;
use crate::error::{LumiraError, Result};
use lazy_static::lazy_static;
use regex::Regex;

/// A single calculator key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Digit(u8),
    DecimalPoint,
    Operator(Operator),
    Equals,
    Percent,
    ToggleSign,
    Clear,
}

lazy_static! {
    /// One keypad token. Word tokens are listed before single characters so
    /// `AC` is not read as two keys.
    static ref KEY_TOKEN: Regex = Regex::new(
        r"^\s*((?i:ac|neg|[0-9]|[.+\-*/x×÷=%±c]))\s*"
    ).unwrap();
}

impl Key {
    /// Parse a single token.
    pub fn from_token(token: &str) -> Result<Self> {
        let key = match token.to_lowercase().as_str() {
            "." => Self::DecimalPoint,
            "+" => Self::Operator(Operator::Add),
            "-" => Self::Operator(Operator::Subtract),
            "*" | "x" | "×" => Self::Operator(Operator::Multiply),
            "/" | "÷" => Self::Operator(Operator::Divide),
            "=" => Self::Equals,
            "%" => Self::Percent,
            "±" | "neg" => Self::ToggleSign,
            "c" | "ac" => Self::Clear,
            other => match other.parse::<u8>() {
                Ok(d) if d <= 9 && other.len() == 1 => Self::Digit(d),
                _ => return Err(LumiraError::InvalidKey(token.to_string())),
            },
        };
        Ok(key)
    }
}

/// Parse a whole keypad script into key presses.
///
/// Whitespace between keys is optional. Any text that is not a key makes the
/// whole script invalid.
pub fn parse_keys(script: &str) -> Result<Vec<Key>> {
    let mut keys = Vec::new();
    let mut pos = 0;

    while pos < script.len() {
        let rest = &script[pos..];
        if rest.trim().is_empty() {
            break;
        }

        let Some(captures) = KEY_TOKEN.captures(rest) else {
            let bad: String = rest
                .trim_start()
                .chars()
                .take_while(|c| !c.is_whitespace())
                .collect();
            return Err(LumiraError::InvalidKey(bad));
        };

        let whole = captures.get(0).map_or(0, |m| m.end());
        if let Some(token) = captures.get(1) {
            keys.push(Key::from_token(token.as_str())?);
        }
        pos += whole;
    }

    Ok(keys)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digits_and_operators() {
        let keys = parse_keys("1 . 5 + 2 =").unwrap();
        assert_eq!(
            keys,
            vec![
                Key::Digit(1),
                Key::DecimalPoint,
                Key::Digit(5),
                Key::Operator(Operator::Add),
                Key::Digit(2),
                Key::Equals,
            ]
        );
    }

    #[test]
    fn test_no_whitespace() {
        let keys = parse_keys("9÷0=").unwrap();
        assert_eq!(
            keys,
            vec![
                Key::Digit(9),
                Key::Operator(Operator::Divide),
                Key::Digit(0),
                Key::Equals,
            ]
        );
    }

    #[test]
    fn test_aliases() {
        assert_eq!(
            parse_keys("x X * ×").unwrap(),
            vec![Key::Operator(Operator::Multiply); 4]
        );
        assert_eq!(
            parse_keys("/ ÷").unwrap(),
            vec![Key::Operator(Operator::Divide); 2]
        );
        assert_eq!(
            parse_keys("neg ± AC c %").unwrap(),
            vec![
                Key::ToggleSign,
                Key::ToggleSign,
                Key::Clear,
                Key::Clear,
                Key::Percent,
            ]
        );
    }

    #[test]
    fn test_empty_script() {
        assert!(parse_keys("").unwrap().is_empty());
        assert!(parse_keys("   ").unwrap().is_empty());
    }

    #[test]
    fn test_invalid_tokens_rejected() {
        assert!(matches!(parse_keys("2 + y"), Err(LumiraError::InvalidKey(t)) if t == "y"));
        assert!(parse_keys("sin 3").is_err());
        assert!(Key::from_token("12").is_err());
    }
}
