// This is a part of Clockspan.
// See README.md and LICENSE.txt for details.

/*!
 * Scanning routines for the parser.
 */

use core::num::{IntErrorKind, ParseIntError};
use core::str::FromStr;

use super::{ParseResult, INVALID, OUT_OF_RANGE};

/// The characters allowed between two fields.
const SEPARATORS: &[char] = &[':', '.'];

/// Splits the input into exactly three fields.
///
/// Whitespace around the input is dropped here; whitespace around each field
/// is left for [`number`] to deal with. Empty fields are kept, so `12::30`
/// has three fields and fails later on.
pub(crate) fn fields(s: &str) -> ParseResult<[&str; 3]> {
    let mut parts = s.trim().split(SEPARATORS);
    let mut fields = [""; 3];
    for field in fields.iter_mut() {
        *field = parts.next().ok_or(INVALID)?;
    }
    if parts.next().is_some() {
        return Err(INVALID);
    }
    Ok(fields)
}

/// Reads a single field as an integer, ignoring surrounding whitespace.
///
/// A literal that is well-formed but does not fit in `T` is out of range,
/// everything else that fails to parse is an invalid input.
pub(crate) fn number<T>(field: &str) -> ParseResult<T>
where
    T: FromStr<Err = ParseIntError>,
{
    field.trim().parse().map_err(|e: ParseIntError| match e.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => OUT_OF_RANGE,
        _ => INVALID,
    })
}

#[cfg(test)]
mod tests {
    use super::{fields, number};
    use crate::format::{INVALID, OUT_OF_RANGE};

    #[test]
    fn test_fields() {
        assert_eq!(fields("1:2:3"), Ok(["1", "2", "3"]));
        assert_eq!(fields("1.2.3"), Ok(["1", "2", "3"]));
        assert_eq!(fields(" 1 . 2: 3 "), Ok(["1 ", " 2", " 3"]));
        assert_eq!(fields("::"), Ok(["", "", ""]));
        assert_eq!(fields("1:2"), Err(INVALID));
        assert_eq!(fields("1:2:3:4"), Err(INVALID));
        assert_eq!(fields("1-2-3"), Err(INVALID));
        assert_eq!(fields("0×0×0"), Err(INVALID));
    }

    #[test]
    fn test_number() {
        assert_eq!(number::<u32>(" 42 "), Ok(42));
        assert_eq!(number::<u32>("07"), Ok(7));
        assert_eq!(number::<i64>("-7"), Ok(-7));
        assert_eq!(number::<u32>(""), Err(INVALID));
        assert_eq!(number::<u32>("4 2"), Err(INVALID));
        assert_eq!(number::<u32>("0x10"), Err(INVALID));
        assert_eq!(number::<u32>("4294967296"), Err(OUT_OF_RANGE));
        assert_eq!(number::<i64>("-9223372036854775809"), Err(OUT_OF_RANGE));
    }
}
