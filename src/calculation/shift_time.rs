//! Shift start and end time parsing.
//!
//! Shift times are entered as `HH:MM` on a 24-hour clock and normalized to
//! [`DecimalHour`] values (`HH + MM / 60`).

use tracing::debug;

use crate::error::{ReportError, ReportResult};
use crate::models::DecimalHour;

/// Parses a single `HH:MM` shift time.
///
/// The hour must be `00`-`24`. The minute must be `00`-`59`, or `00`-`69`
/// when `lenient_minutes` is set. The whole text must match. `24:00` is the
/// end of the day; anything later is out of range.
///
/// # Examples
///
/// ```
/// use labour_report::calculation::parse_shift_time;
/// use rust_decimal::Decimal;
///
/// let time = parse_shift_time("17:30", false).unwrap();
/// assert_eq!(time.value(), Decimal::new(175, 1));
///
/// assert!(parse_shift_time("5:30", false).is_err());
/// assert!(parse_shift_time("17:65", false).is_err());
/// assert!(parse_shift_time("17:65", true).is_ok());
/// ```
pub fn parse_shift_time(text: &str, lenient_minutes: bool) -> ReportResult<DecimalHour> {
    let invalid = || ReportError::InvalidTimeFormat {
        value: text.to_string(),
    };

    let &[h1, h2, b':', m1, m2] = text.as_bytes() else {
        return Err(invalid());
    };
    if !(h1.is_ascii_digit() && h2.is_ascii_digit() && m1.is_ascii_digit() && m2.is_ascii_digit())
    {
        return Err(invalid());
    }

    let hours_ok = matches!(h1, b'0' | b'1') || (h1 == b'2' && h2 <= b'4');
    let minute_limit = if lenient_minutes { b'6' } else { b'5' };
    if !hours_ok || m1 > minute_limit {
        return Err(invalid());
    }

    let hours = u32::from(h1 - b'0') * 10 + u32::from(h2 - b'0');
    let minutes = u32::from(m1 - b'0') * 10 + u32::from(m2 - b'0');
    let time = DecimalHour::from_hm(hours, minutes);

    if time > DecimalHour::END_OF_DAY {
        return Err(ReportError::HourOutOfRange {
            hour: time.to_string(),
        });
    }
    Ok(time)
}

/// Parses a shift's start and end times.
///
/// Shifts must not run past midnight, so an end before the start is an
/// invalid shift. A zero-length shift is allowed.
pub fn parse_shift_times(
    start_time: &str,
    end_time: &str,
    lenient_minutes: bool,
) -> ReportResult<(DecimalHour, DecimalHour)> {
    let start = parse_shift_time(start_time, lenient_minutes)?;
    let end = parse_shift_time(end_time, lenient_minutes)?;

    if end < start {
        return Err(ReportError::InvalidShift {
            message: format!("shift ends at {} before it starts at {}", end_time, start_time),
        });
    }

    debug!(start = %start, end = %end, "Parsed shift times");
    Ok((start, end))
}
