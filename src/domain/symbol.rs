//! Validated trading-pair symbol.

use std::fmt;

use super::error::ValidationError;

/// A validated, upper-cased trading pair identifier (e.g. `BTCUSDT`).
///
/// Construction goes through [`Symbol::parse`], which trims and upper-cases
/// the input and rejects anything that is not ASCII alphanumeric or is
/// shorter than [`Symbol::MIN_LEN`] characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Symbol(String);

impl Symbol {
    /// Minimum accepted symbol length.
    pub const MIN_LEN: usize = 2;

    /// Parse and normalize a raw symbol.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] naming the rejected value when the
    /// input is empty, non-alphanumeric, or too short.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptySymbol);
        }

        let symbol = trimmed.to_ascii_uppercase();
        if !symbol.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(ValidationError::SymbolNotAlphanumeric { symbol });
        }
        if symbol.len() < Self::MIN_LEN {
            return Err(ValidationError::SymbolTooShort {
                symbol,
                min: Self::MIN_LEN,
            });
        }

        Ok(Self(symbol))
    }

    /// The normalized symbol as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Symbol {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
