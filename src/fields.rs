// This is a part of Clockspan.
// See README.md and LICENSE.txt for details.

//! Hours, minutes and seconds given independently of each other.

/// The components of a [`Clock`](crate::Clock) or [`Span`](crate::Span) where
/// every component may be left out.
///
/// An absent component counts as zero. Nothing is validated here; the
/// type being built checks all three components together.
///
/// # Example
///
/// ```
/// use clockspan::{Clock, Fields, Span};
///
/// let clock = Clock::from_fields(Fields::new().hours(13).minutes(7))?;
/// assert_eq!(clock.to_string(), "13:07:00");
///
/// let span = Span::from_fields(Fields::new().minutes(123))?;
/// assert_eq!(span.num_seconds(), 7380);
/// # Ok::<_, clockspan::Error>(())
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Fields<T> {
    /// The number of hours, if given.
    pub hours: Option<T>,
    /// The number of minutes, if given.
    pub minutes: Option<T>,
    /// The number of seconds, if given.
    pub seconds: Option<T>,
}

impl<T> Fields<T> {
    /// Makes a new `Fields` with every component absent.
    #[inline]
    pub const fn new() -> Fields<T> {
        Fields { hours: None, minutes: None, seconds: None }
    }

    /// Sets the hours.
    #[inline]
    #[must_use]
    pub fn hours(mut self, hours: T) -> Fields<T> {
        self.hours = Some(hours);
        self
    }

    /// Sets the minutes.
    #[inline]
    #[must_use]
    pub fn minutes(mut self, minutes: T) -> Fields<T> {
        self.minutes = Some(minutes);
        self
    }

    /// Sets the seconds.
    #[inline]
    #[must_use]
    pub fn seconds(mut self, seconds: T) -> Fields<T> {
        self.seconds = Some(seconds);
        self
    }
}

impl<T: Default> Fields<T> {
    /// Returns `(hours, minutes, seconds)` with absent components replaced by zero.
    #[inline]
    pub fn resolve(self) -> (T, T, T) {
        (
            self.hours.unwrap_or_default(),
            self.minutes.unwrap_or_default(),
            self.seconds.unwrap_or_default(),
        )
    }
}

impl<T> From<(T, T, T)> for Fields<T> {
    #[inline]
    fn from((hours, minutes, seconds): (T, T, T)) -> Self {
        Fields { hours: Some(hours), minutes: Some(minutes), seconds: Some(seconds) }
    }
}
