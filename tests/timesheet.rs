// timesheet.rs
//
// Working through a day of shifts with nothing but the public API.

use clockspan::{Clock, ErrorKind, Fields, Span};

fn clock(s: &str) -> Clock {
    s.parse().unwrap()
}

fn span(s: &str) -> Span {
    s.parse().unwrap()
}

#[test]
fn overnight_shift() {
    let start = clock("22:15:00");
    let end = clock("06:45:00");
    let worked = Span::between(start, end);
    assert_eq!(worked.to_string(), "08:30:00");
    assert_eq!(start + worked, end);
    assert_eq!(end - worked, start);
}

#[test]
fn weekly_total_keeps_every_hour() {
    let days = ["08:30:00", "9:00:00", "7.45.30", " 10 : 05 : 00 ", "08:00:00"];
    let total: Span = days.iter().map(|s| span(s)).sum();
    assert_eq!(total.to_string(), "43:20:30");
    assert_eq!(total.num_hours(), 43);
    assert_eq!(total.plus_days(1).unwrap().to_string(), "67:20:30");
}

#[test]
fn break_and_overtime_fold_onto_a_day() {
    let total = span("43:20:30");
    // a difference between two long spans is read off a clock face
    assert_eq!((total - span("40:00:00")).to_string(), "03:20:30");
    assert_eq!((total - span("0:00:00")).to_string(), "43:20:30");
    assert_eq!(span("03:20:30").times(3).unwrap().to_string(), "10:01:30");
    assert_eq!(span("10:00:00").times(3).unwrap().to_string(), "06:00:00");
}

#[test]
fn clock_wraps_both_ways() {
    let t = clock("23:59:59");
    assert_eq!(t + span("0:0:1"), Clock::MIDNIGHT);
    assert_eq!(Clock::MIDNIGHT - span("0:0:1"), t);
    assert_eq!(clock("12:00:00") + span("48:00:00"), clock("12:00:00"));
    assert_eq!(clock("12:00:00") - span("36:00:00"), Clock::MIDNIGHT);
}

#[test]
fn values_are_immutable() {
    let t = clock("10:00:00");
    let later = t.plus(span("1:00:00"));
    assert_eq!(t.to_string(), "10:00:00");
    assert_eq!(later.to_string(), "11:00:00");

    let s = span("1:00:00");
    let _ = s + s;
    assert_eq!(s.num_seconds(), 3600);
}

#[test]
fn building_from_fields() {
    let t = Clock::from_fields(Fields::new().hours(18).minutes(30)).unwrap();
    assert_eq!(t, clock("18:30:00"));
    let s = Span::from_fields(Fields::from((1, 90, 90))).unwrap();
    assert_eq!(s.to_string(), "02:31:30");
}

#[test]
fn errors_report_their_kind() {
    let err = "25:00:00".parse::<Clock>().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::OutOfRange);
    assert!(err.is_out_of_range());
    assert_eq!(err.to_string(), "input is out of range");

    let err = "12h30".parse::<Span>().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Format);
    assert!(err.is_format());
    assert_eq!(err.to_string(), "input is not in the HH:MM:SS format");

    assert_eq!(Span::from_hms(0, -5, 0).unwrap_err().kind(), ErrorKind::OutOfRange);
    assert_eq!(span("1:0:0").times(-2).unwrap_err().kind(), ErrorKind::OutOfRange);
}

#[test]
#[cfg(feature = "std")]
fn error_is_std_error() {
    fn check(_: &dyn std::error::Error) {}
    check(&"x".parse::<Clock>().unwrap_err());
}

#[test]
fn ordering_sorts_a_schedule() {
    let mut times = vec![clock("13:00:00"), clock("07:30:00"), clock("22:00:00"), clock("0:0:1")];
    times.sort();
    let printed: Vec<String> = times.iter().map(|t| t.to_string()).collect();
    assert_eq!(printed, ["00:00:01", "07:30:00", "13:00:00", "22:00:00"]);
    assert_eq!(times.iter().max(), Some(&clock("22:00:00")));

    let mut spans = vec![span("100:00:00"), span("0:59:59"), span("1:00:00")];
    spans.sort();
    assert_eq!(spans, [span("0:59:59"), span("1:00:00"), span("100:00:00")]);
}
