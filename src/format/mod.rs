// This is a part of Clockspan.
// See README.md and LICENSE.txt for details.

//! Parsing of the `HH:MM:SS` text representation.
//!
//! Both [`Clock`](crate::Clock) and [`Span`](crate::Span) read the same grammar:
//!
//! - exactly three fields separated by `:` or `.` (the two can be mixed, `10.81:17` is fine);
//! - any amount of whitespace around the whole input and around each field;
//! - every field is a base-10 integer literal.
//!
//! Anything else, including other separators like `,`, `-` or `/`, is a
//! [`Format`](crate::ErrorKind::Format) error. Whether the numbers are in range is decided by
//! the type being parsed and reported as [`OutOfRange`](crate::ErrorKind::OutOfRange).

use crate::error::{Error, ErrorKind};

pub(crate) mod scan;

/// Same as `Result<T, Error>`.
pub type ParseResult<T> = Result<T, Error>;

/// Some of the input is not in the expected shape.
pub(crate) const INVALID: Error = Error::new(ErrorKind::Format);

/// The given field is out of its allowed range.
pub(crate) const OUT_OF_RANGE: Error = Error::new(ErrorKind::OutOfRange);

/// Splits `s` into its three fields and reads each of them as a `T`.
///
/// The fields are returned in order: hours, minutes, seconds.
pub(crate) fn parse_hms<T>(s: &str) -> ParseResult<(T, T, T)>
where
    T: core::str::FromStr<Err = core::num::ParseIntError>,
{
    let [hours, minutes, seconds] = scan::fields(s)?;
    Ok((scan::number(hours)?, scan::number(minutes)?, scan::number(seconds)?))
}
