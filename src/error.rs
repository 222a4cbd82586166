// This is a part of Clockspan.
// See README.md and LICENSE.txt for details.

use core::fmt;

/// The kind of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The input does not follow the `HH:MM:SS` grammar: the wrong number of
    /// fields, an unknown separator, or a field that is not an integer.
    Format,
    /// A value is outside the range allowed for its field, or an arithmetic
    /// operand is negative where only non-negative values make sense.
    OutOfRange,
}

/// The error raised when a [`Clock`](crate::Clock) or [`Span`](crate::Span)
/// cannot be constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Error {
    kind: ErrorKind,
}

impl Error {
    /// Internal constructor for an error.
    #[inline]
    pub(crate) const fn new(kind: ErrorKind) -> Self {
        Self { kind }
    }

    /// Returns what went wrong.
    #[inline]
    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Checks whether the input text was malformed.
    #[inline]
    pub const fn is_format(&self) -> bool {
        matches!(self.kind, ErrorKind::Format)
    }

    /// Checks whether a value was out of its allowed range.
    #[inline]
    pub const fn is_out_of_range(&self) -> bool {
        matches!(self.kind, ErrorKind::OutOfRange)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ErrorKind::Format => write!(f, "input is not in the HH:MM:SS format"),
            ErrorKind::OutOfRange => write!(f, "input is out of range"),
        }
    }
}

impl From<ErrorKind> for Error {
    #[inline]
    fn from(kind: ErrorKind) -> Self {
        Self::new(kind)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
