#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    use clockspan::{Clock, Span};
    if let Ok(data) = std::str::from_utf8(data) {
        if let Ok(t) = data.parse::<Clock>() {
            assert_eq!(t.to_string().parse::<Clock>(), Ok(t));
        }
        if let Ok(span) = data.parse::<Span>() {
            assert_eq!(span.to_string().parse::<Span>(), Ok(span));
        }
    }
});
