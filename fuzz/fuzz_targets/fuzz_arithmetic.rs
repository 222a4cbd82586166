#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: (clockspan::Clock, clockspan::Span, clockspan::Span, i64)| {
    use clockspan::Span;
    let (t, a, b, k) = data;
    assert_eq!(t.plus(a).minus(a), t);
    assert_eq!(t + Span::between(t, t.plus(a)), t.plus(a));
    if let Some(sum) = a.checked_plus(&b) {
        assert_eq!(sum.num_seconds(), a.num_seconds() + b.num_seconds());
    }
    assert!(a.minus(b) < Span::from_hms(24, 0, 0).unwrap() || b.is_zero());
    if let Ok(product) = a.times(k) {
        assert!(product < Span::from_hms(24, 0, 0).unwrap());
    }
});
