//! Break notes parsing and am/pm inference.
//!
//! Breaks are recorded as free text such as `"12.30-1pm"`, `"3 - 3:15 PM"`
//! or `"2-2.30"`. Spaces are removed and the text is lowercased, then it
//! must match:
//!
//! ```text
//! endpoint "-" endpoint
//! endpoint = hour{1,2} [".:"]? minute{2}? marker{2}?
//! ```
//!
//! where `marker` is any two non-digit characters (normally `am`/`pm`).
//! Alternatives are tried longest first and the first complete match wins,
//! so `"930-10"` reads as 9:30 to 10:00.
//!
//! Breaks are usually written on a 12-hour clock without a marker. The
//! endpoints are placed in the afternoon when marked `pm`, when only the
//! end is marked `pm` (start side), or when the reading is earlier than the
//! shift start. Readings of 12 or more are already unambiguous and never
//! move.

use tracing::debug;

use crate::error::{ReportError, ReportResult};
use crate::models::DecimalHour;

/// The am/pm marker after a break endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Meridiem {
    /// `am`
    Am,
    /// `pm`
    Pm,
    /// Any other two-character marker; accepted and ignored.
    Other(String),
}

impl Meridiem {
    fn from_chars(chars: &[char]) -> Self {
        let text: String = chars.iter().collect();
        match text.as_str() {
            "am" => Meridiem::Am,
            "pm" => Meridiem::Pm,
            _ => Meridiem::Other(text),
        }
    }
}

/// One side of a break interval as written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreakEndpoint {
    /// Clock hour as written, 0-99.
    pub hour: u32,
    /// Minutes as written; `None` means on the hour.
    pub minute: Option<u32>,
    /// The marker following the time, if any.
    pub meridiem: Option<Meridiem>,
}

impl BreakEndpoint {
    /// The reading as hours since midnight, before any am/pm inference.
    pub fn raw(&self) -> DecimalHour {
        DecimalHour::from_hm(self.hour, self.minute.unwrap_or(0))
    }

    fn is_pm(&self) -> bool {
        self.meridiem == Some(Meridiem::Pm)
    }

    fn resolve(&self, afternoon: bool) -> DecimalHour {
        if afternoon && self.hour < 12 {
            self.raw().plus_twelve()
        } else {
            self.raw()
        }
    }
}

/// A break interval as written, before am/pm inference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreakNotes {
    /// Where the break starts.
    pub start: BreakEndpoint,
    /// Where the break ends.
    pub end: BreakEndpoint,
}

impl BreakNotes {
    /// Parses break text against the break grammar.
    ///
    /// # Examples
    ///
    /// ```
    /// use labour_report::calculation::{BreakNotes, Meridiem};
    ///
    /// let notes = BreakNotes::parse("12.30 - 1 PM").unwrap();
    /// assert_eq!(notes.start.hour, 12);
    /// assert_eq!(notes.start.minute, Some(30));
    /// assert_eq!(notes.end.meridiem, Some(Meridiem::Pm));
    ///
    /// assert!(BreakNotes::parse("lunch").is_err());
    /// ```
    pub fn parse(text: &str) -> ReportResult<Self> {
        let normalized: String = text.replace(' ', "").to_lowercase();
        let chars: Vec<char> = normalized.chars().collect();

        for (start, after_start) in endpoint_candidates(&chars, 0) {
            if chars.get(after_start) != Some(&'-') {
                continue;
            }
            let end = endpoint_candidates(&chars, after_start + 1)
                .into_iter()
                .find(|(_, after_end)| *after_end == chars.len());
            if let Some((end, _)) = end {
                return Ok(BreakNotes { start, end });
            }
        }

        Err(ReportError::InvalidBreakFormat { value: normalized })
    }

    /// Places both endpoints on the 24-hour clock relative to the shift start.
    ///
    /// # Examples
    ///
    /// ```
    /// use labour_report::calculation::BreakNotes;
    /// use labour_report::models::DecimalHour;
    ///
    /// let shift_start = DecimalHour::from_hm(9, 0);
    /// let (start, end) = BreakNotes::parse("2-2.30").unwrap().resolve(shift_start);
    /// assert_eq!(start, DecimalHour::from_hm(14, 0));
    /// assert_eq!(end, DecimalHour::from_hm(14, 30));
    /// ```
    pub fn resolve(&self, shift_start: DecimalHour) -> (DecimalHour, DecimalHour) {
        let start_afternoon = self.start.is_pm()
            || (self.start.meridiem.is_none() && self.end.is_pm())
            || self.start.raw() < shift_start;
        let end_afternoon = self.end.is_pm() || self.end.raw() < shift_start;

        (
            self.start.resolve(start_afternoon),
            self.end.resolve(end_afternoon),
        )
    }
}

/// Parses break notes and resolves them against the shift start.
pub fn parse_break(
    text: &str,
    shift_start: DecimalHour,
) -> ReportResult<(DecimalHour, DecimalHour)> {
    let notes = BreakNotes::parse(text)?;
    let (start, end) = notes.resolve(shift_start);
    debug!(notes = %text, start = %start, end = %end, "Parsed break");
    Ok((start, end))
}

/// Every way an endpoint can be read starting at `pos`, in match priority
/// order, with the position just past it.
fn endpoint_candidates(chars: &[char], pos: usize) -> Vec<(BreakEndpoint, usize)> {
    let mut candidates = Vec::new();

    for hour_len in [2, 1] {
        let Some(hour) = digits_at(chars, pos, hour_len) else {
            continue;
        };
        let after_hour = pos + hour_len;

        let separators: &[usize] = match chars.get(after_hour) {
            Some('.' | ':') => &[1, 0],
            _ => &[0],
        };
        for &sep_len in separators {
            let after_sep = after_hour + sep_len;

            let minutes = match digits_at(chars, after_sep, 2) {
                Some(minute) => vec![Some(minute), None],
                None => vec![None],
            };
            for minute in minutes {
                let after_minute = after_sep + if minute.is_some() { 2 } else { 0 };

                let marker = chars
                    .get(after_minute..after_minute + 2)
                    .filter(|pair| pair.iter().all(|c| !c.is_ascii_digit()));
                if let Some(pair) = marker {
                    candidates.push((
                        BreakEndpoint {
                            hour,
                            minute,
                            meridiem: Some(Meridiem::from_chars(pair)),
                        },
                        after_minute + 2,
                    ));
                }
                candidates.push((
                    BreakEndpoint {
                        hour,
                        minute,
                        meridiem: None,
                    },
                    after_minute,
                ));
            }
        }
    }

    candidates
}

fn digits_at(chars: &[char], pos: usize, len: usize) -> Option<u32> {
    let slice = chars.get(pos..pos + len)?;
    slice
        .iter()
        .try_fold(0u32, |acc, c| c.to_digit(10).map(|d| acc * 10 + d))
}
