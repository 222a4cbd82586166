// This is a part of Clockspan.
// See README.md and LICENSE.txt for details.

#[cfg(test)]
use core::fmt::{self, Write};

/// Compare the `Display` format of `value` against `expected`.
///
/// Same as `assert_eq!(value.to_string(), "expected")`, but works without any allocations.
#[cfg(test)]
#[track_caller]
pub(crate) fn assert_display_eq<D>(value: D, expected: &str)
where
    D: fmt::Display,
{
    let mut sink = WriteCompare::new(expected);
    write!(&mut sink, "{}", value).unwrap();
    assert!(sink.remainder.is_empty(), "output is shorter than {:?}", expected);
}

/// Compare the `Debug` format of `value` against `expected`.
#[cfg(test)]
#[track_caller]
pub(crate) fn assert_debug_eq<D>(value: D, expected: &str)
where
    D: fmt::Debug,
{
    let mut sink = WriteCompare::new(expected);
    write!(&mut sink, "{:?}", value).unwrap();
    assert!(sink.remainder.is_empty(), "output is shorter than {:?}", expected);
}

/// Sink that returns an error when the bytes written to it do not match `expected`.
#[cfg(test)]
struct WriteCompare<'a> {
    expected: &'a str,
    remainder: &'a str,
}

#[cfg(test)]
impl<'a> WriteCompare<'a> {
    fn new(expected: &'a str) -> Self {
        Self { expected, remainder: expected }
    }
}

#[cfg(test)]
impl Write for WriteCompare<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        if let Some(remainder) = self.remainder.strip_prefix(s) {
            self.remainder = remainder;
            Ok(())
        } else {
            eprintln!(
                "formatting difference: `(left == right)`\n  left: `\"{}{}(...)\"`\n right: `\"{}\"`",
                &self.expected[..(self.expected.len() - self.remainder.len())],
                s,
                self.expected
            );
            Err(fmt::Error)
        }
    }
}
