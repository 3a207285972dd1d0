use thiserror::Error;

/// Why a string was not accepted as a color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseColorError {
    #[error("empty color string")]
    Empty,
    /// Input ended before six hex digits were read.
    #[error("expected 6 hex digits, found {found}")]
    TooShort { found: usize },
    /// `index` counts from the first digit, after any `#` or `0x` prefix.
    #[error("invalid hex digit {byte:#04x} at position {index}")]
    InvalidDigit { byte: u8, index: usize },
    #[error("unknown color name")]
    UnknownName,
}
