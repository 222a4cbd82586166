// This is a part of Clockspan.
// See README.md and LICENSE.txt for details.

//! Non-negative durations counted in whole seconds.

use core::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use core::{fmt, str};

use num_integer::div_mod_floor;
#[cfg(feature = "rkyv")]
use rkyv::{Archive, Deserialize, Serialize};

use crate::clock::Clock;
use crate::error::{Error, ErrorKind};
use crate::format::{parse_hms, ParseResult};
use crate::Fields;

#[cfg(feature = "arbitrary")]
mod arbitrary;

#[cfg(feature = "bincode")]
mod bincode;

#[cfg(feature = "serde")]
mod serde;

#[cfg(test)]
mod tests;

/// The number of seconds in a minute.
const SECS_PER_MINUTE: i64 = 60;
/// The number of seconds in an hour.
const SECS_PER_HOUR: i64 = 3600;
/// The number of seconds in a day, which is also the size of the clock wheel.
pub(crate) const SECS_PER_DAY: i64 = 86_400;

/// A duration in whole seconds.
///
/// A `Span` is never negative and is not limited to a single day: `129:58:12`
/// is a perfectly good span. It is printed and parsed as `HH:MM:SS` where the
/// hours may take more than two digits.
///
/// # Wrapping operations
///
/// [`plus`](Span::plus) and [`plus_days`](Span::plus_days) keep the whole
/// total. [`minus`](Span::minus) and [`times`](Span::times) on the other hand
/// fold their result onto a 24-hour wheel, the way [`Clock`] arithmetic does,
/// so their result is always shorter than a day. Code that relies on either
/// behavior should keep this asymmetry in mind.
///
/// ```
/// use clockspan::Span;
///
/// let long = Span::from_hms(30, 0, 0)?;
/// let short = Span::from_hms(1, 0, 0)?;
/// assert_eq!((long + short).to_string(), "31:00:00");
/// assert_eq!((long - short).to_string(), "05:00:00");
/// assert_eq!(long.times(2)?.to_string(), "12:00:00");
/// # Ok::<_, clockspan::Error>(())
/// ```
///
/// # Archiving
///
/// With the `rkyv` feature the raw seconds are archived as they are.
/// `check_bytes` only checks the layout, not the range: an archive holding
/// a negative number of seconds deserializes into a `Span` that is not valid.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "rkyv", derive(Archive, Deserialize, Serialize))]
#[cfg_attr(
    feature = "rkyv",
    archive(compare(PartialEq, PartialOrd)),
    archive_attr(derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Hash))
)]
#[cfg_attr(feature = "rkyv-validation", archive(check_bytes))]
pub struct Span {
    secs: i64, // Always 0 <= secs
}

impl Span {
    /// A span of zero length.
    pub const ZERO: Span = Span { secs: 0 };

    /// The longest possible span, `i64::MAX` seconds.
    pub const MAX: Span = Span { secs: i64::MAX };

    /// Makes a new `Span` from hours, minutes and seconds.
    ///
    /// The components are not limited to the usual clock ranges; 125 minutes
    /// is simply two hours and five minutes.
    ///
    /// Returns `Err(Error)` with [`ErrorKind::OutOfRange`] if any component is
    /// negative or if the total does not fit in an `i64`.
    ///
    /// # Example
    ///
    /// ```
    /// use clockspan::Span;
    ///
    /// assert_eq!(Span::from_hms(1, 25, 31)?.num_seconds(), 5131);
    /// assert_eq!(Span::from_hms(32, 64, 0)?.num_seconds(), 119_040);
    /// assert!(Span::from_hms(-1, 0, 0).is_err());
    /// assert!(Span::from_hms(0, 0, -1).is_err());
    /// # Ok::<_, clockspan::Error>(())
    /// ```
    pub const fn from_hms(hours: i64, minutes: i64, seconds: i64) -> Result<Span, Error> {
        if hours < 0 || minutes < 0 || seconds < 0 {
            return Err(Error::new(ErrorKind::OutOfRange));
        }
        let hours = try_in_range!(hours.checked_mul(SECS_PER_HOUR));
        let minutes = try_in_range!(minutes.checked_mul(SECS_PER_MINUTE));
        let secs = try_in_range!(hours.checked_add(minutes));
        let secs = try_in_range!(secs.checked_add(seconds));
        Ok(Span { secs })
    }

    /// Makes a new `Span` from components that may each be left out; missing
    /// components are zero.
    ///
    /// # Example
    ///
    /// ```
    /// use clockspan::{Fields, Span};
    ///
    /// assert_eq!(Span::from_fields(Fields::new().minutes(123))?.num_seconds(), 7380);
    /// assert_eq!(Span::from_fields(Fields::new().hours(10).minutes(15))?.num_seconds(), 36_900);
    /// assert_eq!(Span::from_fields(Fields::new())?, Span::ZERO);
    /// assert!(Span::from_fields(Fields::new().seconds(-5)).is_err());
    /// # Ok::<_, clockspan::Error>(())
    /// ```
    #[inline]
    pub fn from_fields(fields: Fields<i64>) -> Result<Span, Error> {
        let (hours, minutes, seconds) = fields.resolve();
        Span::from_hms(hours, minutes, seconds)
    }

    /// Makes a new `Span` with the given number of seconds.
    ///
    /// Returns `Err(Error)` if `seconds` is negative.
    #[inline]
    pub const fn seconds(seconds: i64) -> Result<Span, Error> {
        if seconds < 0 {
            return Err(Error::new(ErrorKind::OutOfRange));
        }
        Ok(Span { secs: seconds })
    }

    /// Returns the time it takes to go forward from `start` to `end`.
    ///
    /// When `end` is earlier in the day than `start`, it is taken to be on
    /// the next day, so the result is always below 24 hours.
    ///
    /// # Example
    ///
    /// ```
    /// use clockspan::{Clock, Span};
    ///
    /// let nine = Clock::from_hms(9, 20, 0)?;
    /// let seven = Clock::from_hms(7, 20, 0)?;
    /// assert_eq!(Span::between(seven, nine).num_seconds(), 7200);
    /// assert_eq!(Span::between(nine, seven).to_string(), "22:00:00");
    /// assert_eq!(Span::between(nine, nine), Span::ZERO);
    /// # Ok::<_, clockspan::Error>(())
    /// ```
    pub const fn between(start: Clock, end: Clock) -> Span {
        let start = start.num_seconds_from_midnight() as i64;
        let end = end.num_seconds_from_midnight() as i64;
        let secs = if start == end {
            0
        } else if start > end {
            SECS_PER_DAY - (start - end)
        } else {
            end - start
        };
        Span { secs }
    }

    /// Parses `HH:MM:SS` (or `HH.MM.SS`, or any mix of the two separators).
    ///
    /// The hours may have any number of digits and minutes or seconds past
    /// 59 are folded into the total. Negative components are out of range.
    ///
    /// # Example
    ///
    /// ```
    /// use clockspan::{ErrorKind, Span};
    ///
    /// assert_eq!(Span::parse("  115:  51 :00    ")?.num_seconds(), 417_060);
    /// assert_eq!(Span::parse("10.81:17")?.num_seconds(), 40_877);
    /// assert_eq!(Span::parse("0:-1:0").unwrap_err().kind(), ErrorKind::OutOfRange);
    /// assert_eq!(Span::parse("12:0:0:09").unwrap_err().kind(), ErrorKind::Format);
    /// # Ok::<_, clockspan::Error>(())
    /// ```
    pub fn parse(s: &str) -> ParseResult<Span> {
        let (hours, minutes, seconds) = parse_hms::<i64>(s)?;
        Span::from_hms(hours, minutes, seconds)
    }

    /// Returns the total number of seconds in the span.
    #[inline]
    pub const fn num_seconds(&self) -> i64 {
        self.secs
    }

    /// Returns the total number of whole hours in the span.
    #[inline]
    pub const fn num_hours(&self) -> i64 {
        self.secs / SECS_PER_HOUR
    }

    /// Returns `true` if the span is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.secs == 0
    }

    /// Add two spans, returning `None` if the total does not fit in an `i64`.
    #[must_use]
    pub const fn checked_plus(&self, rhs: &Span) -> Option<Span> {
        match self.secs.checked_add(rhs.secs) {
            Some(secs) => Some(Span { secs }),
            None => None,
        }
    }

    /// Add two spans. The result is not limited to a single day.
    ///
    /// # Panics
    ///
    /// Panics if the total does not fit in an `i64`; see
    /// [`checked_plus`](Span::checked_plus).
    ///
    /// # Example
    ///
    /// ```
    /// use clockspan::Span;
    ///
    /// let sum = Span::from_hms(24, 0, 0)?.plus(Span::from_hms(2, 25, 0)?);
    /// assert_eq!(sum, Span::from_hms(26, 25, 0)?);
    /// # Ok::<_, clockspan::Error>(())
    /// ```
    #[must_use]
    pub fn plus(self, rhs: Span) -> Span {
        self.checked_plus(&rhs).expect("`Span + Span` overflowed")
    }

    /// Subtracts `rhs` from this span on a 24-hour wheel.
    ///
    /// Subtracting [`Span::ZERO`] returns `self` untouched. Otherwise the
    /// difference is taken modulo 24 hours and is never negative, so the
    /// result is always below 24 hours, even when both operands are longer
    /// than a day. This differs from [`plus`](Span::plus), which never
    /// truncates.
    ///
    /// # Example
    ///
    /// ```
    /// use clockspan::Span;
    ///
    /// let span = |h, m, s| Span::from_hms(h, m, s);
    ///
    /// assert_eq!(span(22, 10, 0)?.minus(span(0, 10, 0)?), span(22, 0, 0)?);
    /// assert_eq!(span(0, 0, 0)?.minus(span(0, 0, 1)?), span(23, 59, 59)?);
    /// assert_eq!(span(0, 0, 0)?.minus(span(1, 1, 1)?), span(22, 58, 59)?);
    /// assert_eq!(span(50, 0, 0)?.minus(span(1, 0, 0)?), span(1, 0, 0)?);
    /// assert_eq!(span(50, 0, 0)?.minus(Span::ZERO), span(50, 0, 0)?);
    /// # Ok::<_, clockspan::Error>(())
    /// ```
    #[must_use]
    pub const fn minus(self, rhs: Span) -> Span {
        if rhs.is_zero() {
            return self;
        }
        Span { secs: (self.secs - rhs.secs).rem_euclid(SECS_PER_DAY) }
    }

    /// Multiplies the span by `k` on a 24-hour wheel.
    ///
    /// Returns `Err(Error)` with [`ErrorKind::OutOfRange`] if `k` is negative.
    /// The product is taken modulo 24 hours, so like [`minus`](Span::minus)
    /// the result is always below 24 hours.
    /// This is not the product of the totals: `14:20:00` times 2 is `04:40:00`,
    /// not `28:40:00`. For the full product, multiply
    /// [`num_seconds`](Span::num_seconds) and pass it to [`Span::seconds`].
    ///
    /// # Example
    ///
    /// ```
    /// use clockspan::Span;
    ///
    /// let span = Span::from_hms(3, 10, 0)?;
    /// assert_eq!(span.times(2)?, Span::from_hms(6, 20, 0)?);
    /// assert_eq!(span.times(0)?, Span::ZERO);
    /// assert_eq!(Span::from_hms(14, 20, 0)?.times(2)?, Span::from_hms(4, 40, 0)?);
    /// assert!(span.times(-1).is_err());
    /// # Ok::<_, clockspan::Error>(())
    /// ```
    pub const fn times(self, k: i64) -> Result<Span, Error> {
        if k < 0 {
            return Err(Error::new(ErrorKind::OutOfRange));
        }
        Ok(self.wrapping_times(k as u64))
    }

    /// The product with `k`, folded onto a day. Never overflows: both factors
    /// are reduced below 86,400 first.
    const fn wrapping_times(self, k: u64) -> Span {
        let day = SECS_PER_DAY as u64;
        let secs = (self.secs as u64 % day) * (k % day) % day;
        Span { secs: secs as i64 }
    }

    /// Adds a whole number of days. The result is not limited to a single day.
    ///
    /// `days` may be negative as long as the result is not. Returns
    /// `Err(Error)` with [`ErrorKind::OutOfRange`] when the result would be
    /// negative or would not fit in an `i64`.
    ///
    /// # Example
    ///
    /// ```
    /// use clockspan::Span;
    ///
    /// let span = Span::from_hms(0, 1, 0)?;
    /// assert_eq!(span.plus_days(2)?, Span::from_hms(48, 1, 0)?);
    /// assert_eq!(Span::from_hms(50, 0, 0)?.plus_days(-2)?, Span::from_hms(2, 0, 0)?);
    /// assert!(span.plus_days(-1).is_err());
    /// # Ok::<_, clockspan::Error>(())
    /// ```
    pub const fn plus_days(self, days: i64) -> Result<Span, Error> {
        let days = try_in_range!(days.checked_mul(SECS_PER_DAY));
        let secs = try_in_range!(self.secs.checked_add(days));
        Span::seconds(secs)
    }

    fn hms(&self) -> (i64, i64, i64) {
        let (mins, sec) = div_mod_floor(self.secs, SECS_PER_MINUTE);
        let (hour, min) = div_mod_floor(mins, 60);
        (hour, min, sec)
    }
}

impl Add for Span {
    type Output = Span;

    fn add(self, rhs: Span) -> Span {
        self.plus(rhs)
    }
}

impl AddAssign for Span {
    fn add_assign(&mut self, rhs: Span) {
        *self = self.plus(rhs);
    }
}

impl Sub for Span {
    type Output = Span;

    fn sub(self, rhs: Span) -> Span {
        self.minus(rhs)
    }
}

impl SubAssign for Span {
    fn sub_assign(&mut self, rhs: Span) {
        *self = self.minus(rhs);
    }
}

/// Same as [`Span::times`]; the multiplier is unsigned so it cannot fail.
impl Mul<u32> for Span {
    type Output = Span;

    fn mul(self, rhs: u32) -> Span {
        self.wrapping_times(u64::from(rhs))
    }
}

impl<'a> core::iter::Sum<&'a Span> for Span {
    fn sum<I: Iterator<Item = &'a Span>>(iter: I) -> Span {
        iter.fold(Span::ZERO, |acc, x| acc + *x)
    }
}

impl core::iter::Sum<Span> for Span {
    fn sum<I: Iterator<Item = Span>>(iter: I) -> Span {
        iter.fold(Span::ZERO, |acc, x| acc + x)
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let (hour, min, sec) = self.hms();
        write!(f, "{:02}:{:02}:{:02}", hour, min, sec)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

impl str::FromStr for Span {
    type Err = Error;

    fn from_str(s: &str) -> ParseResult<Span> {
        Span::parse(s)
    }
}

#[cfg(all(test, feature = "serde"))]
fn test_encodable_json<F, E>(to_string: F)
where
    F: Fn(&Span) -> Result<String, E>,
    E: ::std::fmt::Debug,
{
    assert_eq!(to_string(&Span::ZERO).ok(), Some(r#""00:00:00""#.into()));
    assert_eq!(to_string(&Span::from_hms(1, 2, 1).unwrap()).ok(), Some(r#""01:02:01""#.into()));
    assert_eq!(
        to_string(&Span::from_hms(129, 58, 12).unwrap()).ok(),
        Some(r#""129:58:12""#.into())
    );
}

#[cfg(all(test, feature = "serde"))]
fn test_decodable_json<F, E>(from_str: F)
where
    F: Fn(&str) -> Result<Span, E>,
    E: ::std::fmt::Debug,
{
    assert_eq!(from_str(r#""00:00:00""#).unwrap(), Span::ZERO);
    assert_eq!(from_str(r#""01:02:01""#).unwrap(), Span::from_hms(1, 2, 1).unwrap());
    assert_eq!(from_str(r#""135. 56 .00""#).unwrap(), Span::from_hms(135, 56, 0).unwrap());
    assert_eq!(from_str(r#""0:125:0""#).unwrap(), Span::from_hms(2, 5, 0).unwrap());

    // bad formats
    assert!(from_str(r#""""#).is_err());
    assert!(from_str(r#""-1:00:00""#).is_err());
    assert!(from_str(r#""1:00""#).is_err());
    assert!(from_str(r#""0,0,0""#).is_err());
    assert!(from_str(r#"3600"#).is_err());
    assert!(from_str(r#"{"secs":3600}"#).is_err());
    assert!(from_str(r#"null"#).is_err());
}
