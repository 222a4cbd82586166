// This is a part of Clockspan.
// See README.md and LICENSE.txt for details.

#![cfg_attr(docsrs, doc(cfg(feature = "arbitrary")))]

use super::Span;
use arbitrary::{Arbitrary, Unstructured};

impl Arbitrary<'_> for Span {
    fn arbitrary(u: &mut Unstructured) -> arbitrary::Result<Span> {
        let secs = u.int_in_range(0..=i64::MAX)?;
        Span::seconds(secs).map_err(|_| arbitrary::Error::IncorrectFormat)
    }
}
