// This is a part of Clockspan.
// See README.md and LICENSE.txt for details.

//! Time of day within a single 24-hour cycle.

use core::ops::{Add, AddAssign, Sub, SubAssign};
use core::{fmt, str};

use num_integer::div_mod_floor;
#[cfg(feature = "rkyv")]
use rkyv::{Archive, Deserialize, Serialize};

use crate::error::{Error, ErrorKind};
use crate::format::{parse_hms, ParseResult};
use crate::span::{Span, SECS_PER_DAY};
use crate::Fields;

#[cfg(feature = "arbitrary")]
mod arbitrary;

#[cfg(feature = "bincode")]
mod bincode;

#[cfg(feature = "serde")]
mod serde;


/// A wall-clock time of day, from `00:00:00` to `23:59:59`.
///
/// There is no date, no time zone and no sub-second part. A `Clock` is
/// always valid: every constructor checks its input before anything is
/// built.
///
/// Clocks compare by the number of seconds since midnight.
///
/// # Arithmetic
///
/// Adding or subtracting a [`Span`] goes around a 24-hour wheel, so the
/// result is always another valid `Clock`:
///
/// ```
/// use clockspan::{Clock, Span};
///
/// let late = Clock::from_hms(23, 59, 59)?;
/// assert_eq!(late + Span::from_hms(0, 0, 1)?, Clock::MIDNIGHT);
/// assert_eq!(Clock::MIDNIGHT - Span::from_hms(1, 1, 1)?, Clock::from_hms(22, 58, 59)?);
/// assert_eq!(Clock::MIDNIGHT + Span::from_hms(32, 0, 0)?, Clock::from_hms(8, 0, 0)?);
/// # Ok::<_, clockspan::Error>(())
/// ```
///
/// # Archiving
///
/// With the `rkyv` feature the raw seconds are archived as they are.
/// `check_bytes` only checks the layout, not the range: an archive holding
/// a number of seconds of 86,400 or more deserializes into a `Clock` that is not valid.
#[derive(PartialEq, Eq, Hash, PartialOrd, Ord, Copy, Clone)]
#[cfg_attr(feature = "rkyv", derive(Archive, Deserialize, Serialize))]
#[cfg_attr(
    feature = "rkyv",
    archive(compare(PartialEq, PartialOrd)),
    archive_attr(derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Hash))
)]
#[cfg_attr(feature = "rkyv-validation", archive(check_bytes))]
pub struct Clock {
    secs: u32,
}

impl Clock {
    /// `00:00:00`.
    pub const MIDNIGHT: Clock = Clock { secs: 0 };

    /// The last representable time, `23:59:59`.
    pub const MAX: Clock = Clock { secs: 23 * 3600 + 59 * 60 + 59 };

    /// Makes a new `Clock` from hour, minute and second.
    ///
    /// Returns `Err(Error)` with [`ErrorKind::OutOfRange`] on an invalid hour, minute
    /// and/or second.
    ///
    /// # Example
    ///
    /// ```
    /// use clockspan::Clock;
    ///
    /// let t = Clock::from_hms(23, 56, 4)?;
    /// assert_eq!(t.hour(), 23);
    /// assert_eq!(t.minute(), 56);
    /// assert_eq!(t.second(), 4);
    ///
    /// let from_hms = Clock::from_hms;
    ///
    /// assert!(from_hms(0, 0, 0).is_ok());
    /// assert!(from_hms(23, 59, 59).is_ok());
    /// assert!(from_hms(24, 0, 0).is_err());
    /// assert!(from_hms(23, 60, 0).is_err());
    /// assert!(from_hms(23, 59, 60).is_err());
    /// # Ok::<_, clockspan::Error>(())
    /// ```
    #[inline]
    pub const fn from_hms(hour: u32, min: u32, sec: u32) -> Result<Clock, Error> {
        if hour >= 24 || min >= 60 || sec >= 60 {
            return Err(Error::new(ErrorKind::OutOfRange));
        }
        Ok(Clock { secs: hour * 3600 + min * 60 + sec })
    }

    /// Makes a new `Clock` from fields that may each be left out; missing
    /// fields are zero.
    ///
    /// # Example
    ///
    /// ```
    /// use clockspan::{Clock, Fields};
    ///
    /// assert_eq!(Clock::from_fields(Fields::new().hours(13).minutes(7))?, Clock::from_hms(13, 7, 0)?);
    /// assert_eq!(Clock::from_fields(Fields::new().seconds(59))?, Clock::from_hms(0, 0, 59)?);
    /// assert_eq!(Clock::from_fields(Fields::new())?, Clock::MIDNIGHT);
    /// assert!(Clock::from_fields(Fields::new().minutes(60)).is_err());
    /// # Ok::<_, clockspan::Error>(())
    /// ```
    #[inline]
    pub fn from_fields(fields: Fields<u32>) -> Result<Clock, Error> {
        let (hour, min, sec) = fields.resolve();
        Clock::from_hms(hour, min, sec)
    }

    /// Makes a new `Clock` from the number of seconds since midnight.
    ///
    /// Returns `Err(Error)` when `secs` is not below 86,400.
    ///
    /// # Example
    ///
    /// ```
    /// use clockspan::Clock;
    ///
    /// let t = Clock::from_num_seconds_from_midnight(86164)?;
    /// assert_eq!(t, Clock::from_hms(23, 56, 4)?);
    /// assert!(Clock::from_num_seconds_from_midnight(86_400).is_err());
    /// # Ok::<_, clockspan::Error>(())
    /// ```
    #[inline]
    pub const fn from_num_seconds_from_midnight(secs: u32) -> Result<Clock, Error> {
        if secs >= SECS_PER_DAY as u32 {
            return Err(Error::new(ErrorKind::OutOfRange));
        }
        Ok(Clock { secs })
    }

    /// Parses `HH:MM:SS` (or `HH.MM.SS`, or any mix of the two separators).
    ///
    /// Same as `s.parse::<Clock>()`; see the [`format`](crate::format) module for the grammar.
    ///
    /// # Example
    ///
    /// ```
    /// use clockspan::{Clock, ErrorKind};
    ///
    /// assert_eq!(Clock::parse(" 7 : 15.09 ")?, Clock::from_hms(7, 15, 9)?);
    /// assert_eq!(Clock::parse("24:00:00").unwrap_err().kind(), ErrorKind::OutOfRange);
    /// assert_eq!(Clock::parse("12:00").unwrap_err().kind(), ErrorKind::Format);
    /// assert_eq!(Clock::parse("12-00-00").unwrap_err().kind(), ErrorKind::Format);
    /// # Ok::<_, clockspan::Error>(())
    /// ```
    pub fn parse(s: &str) -> ParseResult<Clock> {
        let (hour, min, sec) = parse_hms::<u32>(s)?;
        Clock::from_hms(hour, min, sec)
    }

    /// Wraps any number of seconds onto the 24-hour wheel.
    #[inline]
    pub(crate) const fn from_wrapped_secs(secs: i64) -> Clock {
        Clock { secs: secs.rem_euclid(SECS_PER_DAY) as u32 }
    }

    /// Returns the hour number from 0 to 23.
    #[inline]
    pub fn hour(&self) -> u32 {
        self.hms().0
    }

    /// Returns the minute number from 0 to 59.
    #[inline]
    pub fn minute(&self) -> u32 {
        self.hms().1
    }

    /// Returns the second number from 0 to 59.
    #[inline]
    pub fn second(&self) -> u32 {
        self.hms().2
    }

    /// Returns the number of seconds since midnight, from 0 to 86,399.
    #[inline]
    pub const fn num_seconds_from_midnight(&self) -> u32 {
        self.secs
    }

    /// Adds a `Span`, wrapping past midnight.
    ///
    /// # Example
    ///
    /// ```
    /// use clockspan::{Clock, Span};
    ///
    /// let t = Clock::from_hms(3, 4, 5)?;
    /// assert_eq!(t.plus(Span::from_hms(11, 0, 0)?), Clock::from_hms(14, 4, 5)?);
    /// assert_eq!(t.plus(Span::from_hms(23, 0, 0)?), Clock::from_hms(2, 4, 5)?);
    /// assert_eq!(t.plus(Span::ZERO), t);
    /// # Ok::<_, clockspan::Error>(())
    /// ```
    #[must_use]
    pub const fn plus(self, rhs: Span) -> Clock {
        let rhs = rhs.num_seconds() % SECS_PER_DAY;
        Clock::from_wrapped_secs(self.secs as i64 + rhs)
    }

    /// Subtracts a `Span`, wrapping back past midnight.
    ///
    /// # Example
    ///
    /// ```
    /// use clockspan::{Clock, Span};
    ///
    /// let t = Clock::from_hms(3, 4, 5)?;
    /// assert_eq!(t.minus(Span::from_hms(2, 0, 0)?), Clock::from_hms(1, 4, 5)?);
    /// assert_eq!(t.minus(Span::from_hms(17, 0, 0)?), Clock::from_hms(10, 4, 5)?);
    /// assert_eq!(t.minus(Span::from_hms(48, 0, 0)?), t);
    /// # Ok::<_, clockspan::Error>(())
    /// ```
    #[must_use]
    pub const fn minus(self, rhs: Span) -> Clock {
        if rhs.is_zero() {
            return self;
        }
        let rhs = rhs.num_seconds() % SECS_PER_DAY;
        Clock::from_wrapped_secs(self.secs as i64 - rhs)
    }

    fn hms(&self) -> (u32, u32, u32) {
        let (mins, sec) = div_mod_floor(self.secs, 60);
        let (hour, min) = div_mod_floor(mins, 60);
        (hour, min, sec)
    }
}

impl Add<Span> for Clock {
    type Output = Clock;

    #[inline]
    fn add(self, rhs: Span) -> Clock {
        self.plus(rhs)
    }
}

impl AddAssign<Span> for Clock {
    #[inline]
    fn add_assign(&mut self, rhs: Span) {
        *self = self.plus(rhs);
    }
}

impl Sub<Span> for Clock {
    type Output = Clock;

    #[inline]
    fn sub(self, rhs: Span) -> Clock {
        self.minus(rhs)
    }
}

impl SubAssign<Span> for Clock {
    #[inline]
    fn sub_assign(&mut self, rhs: Span) {
        *self = self.minus(rhs);
    }
}

impl fmt::Debug for Clock {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let (hour, min, sec) = self.hms();
        write!(f, "{:02}:{:02}:{:02}", hour, min, sec)
    }
}

impl fmt::Display for Clock {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

impl str::FromStr for Clock {
    type Err = Error;

    fn from_str(s: &str) -> ParseResult<Clock> {
        Clock::parse(s)
    }
}

impl Default for Clock {
    fn default() -> Self {
        Clock::MIDNIGHT
    }
}

#[cfg(all(test, feature = "serde"))]
fn test_encodable_json<F, E>(to_string: F)
where
    F: Fn(&Clock) -> Result<String, E>,
    E: ::std::fmt::Debug,
{
    assert_eq!(to_string(&Clock::MIDNIGHT).ok(), Some(r#""00:00:00""#.into()));
    assert_eq!(to_string(&Clock::from_hms(0, 1, 2).unwrap()).ok(), Some(r#""00:01:02""#.into()));
    assert_eq!(to_string(&Clock::from_hms(7, 8, 9).unwrap()).ok(), Some(r#""07:08:09""#.into()));
    assert_eq!(to_string(&Clock::MAX).ok(), Some(r#""23:59:59""#.into()));
}

#[cfg(all(test, feature = "serde"))]
fn test_decodable_json<F, E>(from_str: F)
where
    F: Fn(&str) -> Result<Clock, E>,
    E: ::std::fmt::Debug,
{
    assert_eq!(from_str(r#""00:00:00""#).unwrap(), Clock::MIDNIGHT);
    assert_eq!(from_str(r#""0:0:0""#).unwrap(), Clock::MIDNIGHT);
    assert_eq!(from_str(r#""00.01.02""#).unwrap(), Clock::from_hms(0, 1, 2).unwrap());
    assert_eq!(from_str(r#"" 7 : 8 : 9 ""#).unwrap(), Clock::from_hms(7, 8, 9).unwrap());
    assert_eq!(from_str(r#""23:59:59""#).unwrap(), Clock::MAX);

    // bad formats
    assert!(from_str(r#""""#).is_err());
    assert!(from_str(r#""000000""#).is_err());
    assert!(from_str(r#""00:00:60""#).is_err());
    assert!(from_str(r#""00:60:00""#).is_err());
    assert!(from_str(r#""24:00:00""#).is_err());
    assert!(from_str(r#""23,59,59""#).is_err());
    assert!(from_str(r#""hh:mm:ss""#).is_err());
    assert!(from_str(r#"0"#).is_err());
    assert!(from_str(r#"86399"#).is_err());
    assert!(from_str(r#"{}"#).is_err());
    assert!(from_str(r#"{"secs":0}"#).is_err());
    assert!(from_str(r#"null"#).is_err());
}
