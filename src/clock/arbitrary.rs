// This is a part of Clockspan.
// See README.md and LICENSE.txt for details.

#![cfg_attr(docsrs, doc(cfg(feature = "arbitrary")))]

use super::Clock;
use crate::span::SECS_PER_DAY;
use arbitrary::{Arbitrary, Unstructured};

impl Arbitrary<'_> for Clock {
    fn arbitrary(u: &mut Unstructured) -> arbitrary::Result<Clock> {
        let secs = u.int_in_range(0..=(SECS_PER_DAY as u32 - 1))?;
        Clock::from_num_seconds_from_midnight(secs).map_err(|_| arbitrary::Error::IncorrectFormat)
    }
}
