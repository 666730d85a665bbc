//! Error types for the dotted-decimal codec.
//!
//! Only two operations in this crate can fail: parsing text and rendering
//! into a caller-supplied buffer. Everything else is a total function over
//! the 32-bit address domain.

use thiserror::Error;

/// Coarse failure category, stable across `ParseFailure` refinements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed or out-of-range address text.
    ParseFailure,
    /// Render destination cannot hold the text plus its NUL terminator.
    BufferTooSmall,
}

/// Why a piece of text was rejected by `aton`.
///
/// Offsets are byte offsets into the input slice. Field indices are
/// zero-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseFailure {
    #[error("empty input")]
    Empty,
    #[error("expected a digit at offset {offset}")]
    ExpectedDigit { offset: usize },
    #[error("more than four dot-separated fields")]
    TooManyFields,
    #[error("field {field} value {value:#x} exceeds {max:#x}")]
    FieldOutOfRange { field: usize, value: u32, max: u32 },
    #[error("field {field} overflows 32 bits")]
    Overflow { field: usize },
    #[error("unexpected byte at offset {offset}")]
    TrailingGarbage { offset: usize },
    #[error("non-canonical dotted-quad at offset {offset}")]
    NonCanonical { offset: usize },
}

/// Errors reported by the textual codec.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Ip4Error {
    #[error("invalid IPv4 address text: {0}")]
    Parse(#[from] ParseFailure),
    #[error("buffer too small: need {needed} bytes, have {capacity}")]
    BufferTooSmall { needed: usize, capacity: usize },
}

impl Ip4Error {
    /// Map to the coarse failure category.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Parse(_) => ErrorKind::ParseFailure,
            Self::BufferTooSmall { .. } => ErrorKind::BufferTooSmall,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_maps_variants() {
        assert_eq!(
            Ip4Error::from(ParseFailure::Empty).kind(),
            ErrorKind::ParseFailure
        );
        assert_eq!(
            Ip4Error::BufferTooSmall {
                needed: 16,
                capacity: 15
            }
            .kind(),
            ErrorKind::BufferTooSmall
        );
    }

    #[test]
    fn display_mentions_sizes() {
        let err = Ip4Error::BufferTooSmall {
            needed: 16,
            capacity: 15,
        };
        assert_eq!(err.to_string(), "buffer too small: need 16 bytes, have 15");
    }

    #[test]
    fn display_wraps_parse_reason() {
        let err = Ip4Error::from(ParseFailure::FieldOutOfRange {
            field: 0,
            value: 256,
            max: 0xff,
        });
        assert_eq!(
            err.to_string(),
            "invalid IPv4 address text: field 0 value 0x100 exceeds 0xff"
        );
    }
}
