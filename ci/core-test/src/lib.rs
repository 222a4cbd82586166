#![no_std]

use clockspan::{Clock, Span};

pub fn closing_time() -> Result<Clock, clockspan::Error> {
    let open = Clock::parse("09:00:00")?;
    Ok(open + Span::from_hms(8, 30, 0)?)
}
