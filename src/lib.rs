// This is a part of Clockspan.
// See README.md and LICENSE.txt for details.

//! # Clockspan: times of day and spans of time
//!
//! This crate provides two small value types:
//!
//! - [`Clock`] is a wall-clock time of day, from `00:00:00` to `23:59:59`, with no
//!   date, no time zone and no sub-second part.
//! - [`Span`] is a non-negative amount of time in whole seconds. It is not limited
//!   to a single day.
//!
//! Both are immutable and `Copy`. Every operation returns a new value.
//!
//! ### Clock arithmetic
//!
//! Adding a [`Span`] to a [`Clock`] goes around a 24-hour wheel, so it is
//! never an error:
//!
//! ```
//! use clockspan::{Clock, Span};
//!
//! let start = Clock::parse("22:15:00")?;
//! let shift = Span::parse("8:30:00")?;
//! assert_eq!((start + shift).to_string(), "06:45:00");
//! assert_eq!(Span::between(start, start + shift), shift);
//! # Ok::<_, clockspan::Error>(())
//! ```
//!
//! ### Span arithmetic
//!
//! Spans add up without limit, which makes them suited for totals:
//!
//! ```
//! use clockspan::Span;
//!
//! let logged: Span = ["7:45:00", "8:10:30", "9:05:00"]
//!     .iter()
//!     .map(|s| s.parse::<Span>())
//!     .collect::<Result<Vec<_>, _>>()?
//!     .into_iter()
//!     .sum();
//! assert_eq!(logged.to_string(), "25:00:30");
//! # Ok::<_, clockspan::Error>(())
//! ```
//!
//! [`Span::minus`] and [`Span::times`] however fold their result onto a
//! single day; see the [`Span`] documentation.
//!
//! ### Text format
//!
//! Both types print as zero-padded `HH:MM:SS` and parse the same shape,
//! with `.` accepted as a separator too. See the [`format`] module for the
//! details and [`ErrorKind`] for the ways parsing can fail.
//!
//! ## Optional features
//!
//! - `std` (default): implements `std::error::Error` for [`Error`]. Without it
//!   the crate is `no_std`.
//! - `alloc`: enables the parts that need a heap.
//! - `serde`: (de)serializes both types as their `HH:MM:SS` string.
//! - `bincode`: `bincode` 2 `Encode`/`Decode` through the same string.
//! - `rkyv`: zero-copy archiving of the underlying seconds.
//! - `rkyv-validation`: `check_bytes` validation of archives, needed for `rkyv::from_bytes`.
//! - `arbitrary`: builds valid values from fuzzer input.

#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![deny(missing_docs)]
#![warn(missing_debug_implementations)]
#![warn(unreachable_pub)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(feature = "alloc")]
extern crate alloc;

/// Unwraps an `Option` of a checked integer operation, or returns an
/// [`ErrorKind::OutOfRange`] error from the enclosing function.
///
/// Usable in `const fn`, unlike `?` on `Option::ok_or`.
macro_rules! try_in_range {
    ($e:expr) => {
        match $e {
            Some(v) => v,
            None => return Err($crate::error::Error::new($crate::error::ErrorKind::OutOfRange)),
        }
    };
}

mod clock;
pub use clock::Clock;

mod error;
pub use error::{Error, ErrorKind};

mod fields;
pub use fields::Fields;

pub mod format;
pub use format::ParseResult;

mod span;
pub use span::Span;

mod utils;
