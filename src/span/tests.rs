// This is a part of Clockspan.
// See README.md and LICENSE.txt for details.

use super::{Span, SECS_PER_DAY};
use quickcheck::Arbitrary;

use crate::utils::{assert_debug_eq, assert_display_eq};
use crate::{Clock, ErrorKind, Fields};

impl Arbitrary for Span {
    fn arbitrary(g: &mut quickcheck::Gen) -> Span {
        // keep sums of two spans in range
        Span { secs: i64::arbitrary(g).rem_euclid(i64::MAX / 2) }
    }
}

fn span(hours: i64, minutes: i64, seconds: i64) -> Span {
    Span::from_hms(hours, minutes, seconds).unwrap()
}

fn clock(hour: u32, min: u32) -> Clock {
    Clock::from_hms(hour, min, 0).unwrap()
}

#[test]
fn test_span_default() {
    assert_eq!(Span::default(), Span::ZERO);
    assert_eq!(Span::default().num_seconds(), 0);
    assert!(Span::ZERO.is_zero());
}

#[test]
fn test_span_from_hms() {
    assert_eq!(span(1, 25, 31).num_seconds(), 5131);
    assert_eq!(span(0, 15, 2).num_seconds(), 902);
    assert_eq!(span(32, 15, 0).num_seconds(), 116_100);
    assert_eq!(span(32, 64, 0).num_seconds(), 119_040);
    assert_eq!(span(0, 123, 0).num_seconds(), 7380);
    assert_eq!(span(200, 0, 0).num_hours(), 200);
}

#[test]
fn test_span_from_hms_out_of_range() {
    for &(h, m, s) in &[
        (-1, 0, 0),
        (0, -1, 0),
        (0, 0, -1),
        (-1, -1, 0),
        (-1, 0, -1),
        (0, -1, -1),
        (-1, -1, -1),
        (i64::MAX, 0, 0),
        (0, i64::MAX, 0),
        (0, 0, i64::MIN),
    ] {
        assert_eq!(Span::from_hms(h, m, s).unwrap_err().kind(), ErrorKind::OutOfRange);
    }
    assert_eq!(Span::from_hms(0, 0, i64::MAX), Ok(Span::MAX));
    assert!(Span::from_hms(0, 1, i64::MAX).is_err());
}

#[test]
fn test_span_from_fields() {
    assert_eq!(Span::from_fields(Fields::new().hours(2).minutes(23)), Ok(span(2, 23, 0)));
    assert_eq!(Span::from_fields(Fields::new().minutes(7)).map(|s| s.num_seconds()), Ok(420));
    assert_eq!(Span::from_fields(Fields::new().seconds(9)), Ok(span(0, 0, 9)));
    assert_eq!(Span::from_fields(Fields::new()), Ok(Span::ZERO));
    assert!(Span::from_fields(Fields::new().hours(1).minutes(-1)).is_err());
}

#[test]
fn test_span_seconds() {
    assert_eq!(Span::seconds(3661), Ok(span(1, 1, 1)));
    assert_eq!(Span::seconds(0), Ok(Span::ZERO));
    assert_eq!(Span::seconds(-1).unwrap_err().kind(), ErrorKind::OutOfRange);
}

#[test]
fn test_span_between() {
    assert_eq!(Span::between(clock(7, 20), clock(9, 20)).num_seconds(), 7200);
    assert_eq!(Span::between(clock(12, 23), clock(13, 30)).num_seconds(), 4020);
    assert_eq!(Span::between(clock(1, 0), clock(0, 0)).num_seconds(), 82_800);
    assert_eq!(Span::between(clock(0, 0), clock(0, 0)), Span::ZERO);
    assert_eq!(Span::between(clock(12, 23), clock(4, 20)).num_seconds(), 57_420);
    assert_eq!(Span::between(Clock::MAX, Clock::MIDNIGHT).num_seconds(), 1);
}

#[test]
fn test_span_parse() {
    assert_eq!("  11:  11 :11    ".parse::<Span>().map(|s| s.num_seconds()), Ok(40_271));
    assert_eq!("  115:  51 :00    ".parse::<Span>().map(|s| s.num_seconds()), Ok(417_060));
    assert_eq!("  10.  81 :17    ".parse::<Span>().map(|s| s.num_seconds()), Ok(40_877));
    assert_eq!("  135.  56 .00    ".parse::<Span>().map(|s| s.num_seconds()), Ok(489_360));
    assert_eq!("0:0:0".parse::<Span>(), Ok(Span::ZERO));
}

#[test]
fn test_span_parse_out_of_range() {
    for s in &[
        "-1:0:0",
        "0:-1:0",
        "0:0:-1",
        "-1.-1.0",
        "-1.0.-1",
        "0.-1.-1",
        "-1.-1.-1",
        "99999999999999999999:0:0",
        "9223372036854775807:0:0",
    ] {
        assert_eq!(s.parse::<Span>().unwrap_err().kind(), ErrorKind::OutOfRange, "{}", s);
    }
}

#[test]
fn test_span_parse_format_error() {
    for s in &[
        "12:0:0:09", "0:13.9:0", "0,0,0", "0-0-0", "0/0/0", "0;0;0", "0_0_0", "0×0×0", "", "1:2",
        "1::2", "one:two:three", "1.5",
    ] {
        assert_eq!(s.parse::<Span>().unwrap_err().kind(), ErrorKind::Format, "{:?}", s);
    }
}

#[test]
fn test_span_fmt() {
    assert_display_eq(span(10, 32, 17), "10:32:17");
    assert_display_eq(span(129, 58, 12), "129:58:12");
    assert_display_eq(span(29, 58, 0), "29:58:00");
    assert_display_eq(span(1, 2, 1), "01:02:01");
    assert_display_eq(Span::ZERO, "00:00:00");
    assert_debug_eq(span(0, 65, 300), "01:10:00");
}

#[test]
fn test_span_text_round_trip() {
    let t = span(1, 2, 1);
    assert_eq!(t.to_string().parse::<Span>(), Ok(t));
    assert_eq!(Span::MAX.to_string().parse::<Span>(), Ok(Span::MAX));
}

#[test]
fn test_span_eq() {
    assert_eq!(span(1, 10, 0), span(1, 10, 0));
    assert_eq!(span(2, 0, 0), span(0, 120, 0));
    assert_eq!(span(0, 10, 0), span(0, 0, 600));
    assert_eq!(span(1, 10, 0), span(0, 65, 300));
    assert_ne!(span(1, 10, 0), span(11, 25, 30));
}

#[test]
fn test_span_cmp() {
    assert!(span(1, 10, 0) < span(11, 25, 30));
    assert!(span(22, 33, 44) > span(11, 25, 30));
    assert!(span(12, 0, 0) <= span(15, 15, 22));
    assert!(span(0, 2, 1) <= span(0, 0, 240));
    assert!(span(1, 2, 10) <= span(0, 62, 10));
    assert!(span(12, 0, 0) >= span(0, 0, 43_200));
    assert!(span(0, 2, 1) >= span(0, 2, 0));
    assert!(span(15, 21, 10) >= span(0, 63, 10));
    assert!(!(span(11, 25, 30) < span(1, 10, 0)));
    assert!(!(span(1, 10, 0) >= span(11, 25, 30)));
}

#[test]
fn test_span_plus() {
    assert_eq!(span(24, 0, 0).plus(span(2, 25, 0)), span(26, 25, 0));
    assert_eq!(span(23, 59, 59).plus(span(0, 0, 1)), span(24, 0, 0));
    assert_eq!(Span::ZERO.plus(Span::ZERO), Span::ZERO);
    assert_eq!(span(24, 0, 0) + span(2, 20, 0), span(26, 20, 0));

    let mut total = span(100, 0, 0);
    total += span(100, 0, 0);
    assert_eq!(total.num_hours(), 200);
}

#[test]
fn test_span_checked_plus() {
    assert_eq!(span(1, 0, 0).checked_plus(&span(0, 0, 1)), Some(span(1, 0, 1)));
    assert_eq!(Span::MAX.checked_plus(&Span::ZERO), Some(Span::MAX));
    assert_eq!(Span::MAX.checked_plus(&span(0, 0, 1)), None);
}

#[test]
#[should_panic(expected = "`Span + Span` overflowed")]
fn test_span_plus_overflow_panics() {
    let _ = Span::MAX + span(0, 0, 1);
}

#[test]
fn test_span_minus() {
    assert_eq!(span(22, 10, 0).minus(span(0, 10, 0)), span(22, 0, 0));
    assert_eq!(span(0, 0, 0).minus(span(0, 0, 1)), span(23, 59, 59));
    assert_eq!(span(0, 0, 0).minus(span(1, 1, 1)), span(22, 58, 59));
    assert_eq!(span(0, 0, 0) - span(0, 1, 1), span(23, 58, 59));

    let mut left = span(5, 0, 0);
    left -= span(1, 30, 0);
    assert_eq!(left, span(3, 30, 0));
}

#[test]
fn test_span_minus_truncates_to_a_day() {
    // subtracting two long spans only keeps the part below 24 hours
    assert_eq!(span(100, 0, 0).minus(span(1, 0, 0)), span(3, 0, 0));
    assert_eq!(span(48, 0, 0).minus(span(24, 0, 0)), Span::ZERO);
    assert_eq!(span(3, 0, 0).minus(span(3, 0, 0)), Span::ZERO);
    // but a zero span leaves the total alone
    assert_eq!(span(100, 0, 0).minus(Span::ZERO), span(100, 0, 0));
}

#[test]
fn test_span_times() {
    assert_eq!(span(0, 0, 0).times(1), Ok(Span::ZERO));
    assert_eq!(span(1, 1, 1).times(0), Ok(Span::ZERO));
    assert_eq!(span(3, 61, 60).times(2), Ok(span(8, 4, 0)));
    assert_eq!(span(5, 0, 0).times(3), Ok(span(15, 0, 0)));
    assert_eq!(span(1, 1, 1) * 2, span(2, 2, 2));
}

#[test]
fn test_span_times_truncates_to_a_day() {
    assert_eq!(span(14, 20, 0).times(2), Ok(span(4, 40, 0)));
    assert_eq!(span(12, 0, 0).times(2), Ok(Span::ZERO));
    assert_eq!(span(30, 0, 0).times(1), Ok(span(6, 0, 0)));
    assert_eq!(Span::MAX.times(i64::MAX).map(|s| s.num_seconds() < SECS_PER_DAY), Ok(true));
    assert_eq!(span(14, 20, 0) * 2, span(4, 40, 0));
    assert_eq!(Span::seconds(span(14, 20, 0).num_seconds() * 2), Ok(span(28, 40, 0)));
}

#[test]
fn test_span_times_negative() {
    assert_eq!(span(1, 1, 1).times(-1).unwrap_err().kind(), ErrorKind::OutOfRange);
    assert_eq!(Span::ZERO.times(i64::MIN).unwrap_err().kind(), ErrorKind::OutOfRange);
}

#[test]
fn test_span_plus_days() {
    assert_eq!(span(0, 1, 0).plus_days(2), Ok(span(48, 1, 0)));
    assert_eq!(span(0, 1, 0).plus_days(0), Ok(span(0, 1, 0)));
    assert_eq!(span(50, 0, 0).plus_days(-2), Ok(span(2, 0, 0)));
    assert_eq!(span(0, 1, 0).plus_days(-1).unwrap_err().kind(), ErrorKind::OutOfRange);
    assert_eq!(span(0, 0, 0).plus_days(i64::MAX).unwrap_err().kind(), ErrorKind::OutOfRange);
}

#[test]
fn test_span_sum() {
    let spans = [span(1, 0, 0), span(0, 30, 0), span(23, 30, 0)];
    assert_eq!(spans.iter().sum::<Span>(), span(25, 0, 0));
    assert_eq!(spans.iter().copied().sum::<Span>(), span(25, 0, 0));
    assert_eq!(core::iter::empty::<Span>().sum::<Span>(), Span::ZERO);
}

quickcheck::quickcheck! {
    fn prop_text_round_trip(s: Span) -> bool {
        s.to_string().parse::<Span>() == Ok(s)
    }

    fn prop_plus_sums_totals(a: Span, b: Span) -> bool {
        a.plus(b).num_seconds() == a.num_seconds() + b.num_seconds()
    }

    fn prop_ordering_same_as_seconds(a: Span, b: Span) -> bool {
        a.cmp(&b) == a.num_seconds().cmp(&b.num_seconds())
    }

    fn prop_minus_within_a_day(a: Span, b: Span) -> bool {
        b.is_zero() || a.minus(b).num_seconds() < SECS_PER_DAY
    }

    fn prop_between_then_plus(start: Clock, end: Clock) -> bool {
        start.plus(Span::between(start, end)) == end
    }
}

#[test]
#[cfg(feature = "rkyv-validation")]
fn test_rkyv_validation() {
    for s in [Span::ZERO, span(1, 0, 0), span(129, 58, 12), Span::MAX] {
        let bytes = rkyv::to_bytes::<_, 16>(&s).unwrap();
        assert_eq!(rkyv::from_bytes::<Span>(&bytes).unwrap(), s);
    }
}
