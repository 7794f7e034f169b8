//! Clock-time parsing shared across the cascade, plus the bare
//! time-of-day recognizer (lowest-priority pattern).

use chrono::{DateTime, FixedOffset, NaiveTime};

use crate::recognizer::{Recognizer, RecognizerInfo};
use crate::recognizers::resolve;
use crate::types::ParsedDate;

/// Confidence for a bare clock time with no date portion. Lowest of the
/// time-bearing tiers: the match says nothing about the day.
const BARE_TIME_CONFIDENCE: f32 = 0.50;

/// Parse a clock string: `7`, `7pm`, `7:30`, `7:30 PM`, `19:30`.
///
/// 12 AM maps to hour 0 and 12 PM to hour 12; any other PM hour below 12
/// gets 12 added. The 12-hour form requires an hour in 1..=12.
pub(crate) fn parse_clock(s: &str) -> Option<NaiveTime> {
    let lower = s.trim().to_lowercase();

    let parse_12h = |s: &str, is_pm: bool| -> Option<NaiveTime> {
        let (h, m) = split_hm(s.trim())?;
        if !(1..=12).contains(&h) || m > 59 {
            return None;
        }
        let h24 = match (h, is_pm) {
            (12, true) => 12,
            (12, false) => 0,
            (h, true) => h + 12,
            (h, false) => h,
        };
        NaiveTime::from_hms_opt(h24, m, 0)
    };

    if let Some(stripped) = lower.strip_suffix("am") {
        return parse_12h(stripped, false);
    }
    if let Some(stripped) = lower.strip_suffix("pm") {
        return parse_12h(stripped, true);
    }

    let (h, m) = split_hm(&lower)?;
    if h > 23 || m > 59 {
        return None;
    }
    NaiveTime::from_hms_opt(h, m, 0)
}

/// Split `H` or `H:MM` into hour and minute components.
fn split_hm(s: &str) -> Option<(u32, u32)> {
    if let Some((h_str, m_str)) = s.split_once(':') {
        Some((h_str.parse().ok()?, m_str.parse().ok()?))
    } else {
        Some((s.parse().ok()?, 0))
    }
}

/// Parse the tokens left over after a date portion as one clock time,
/// optionally introduced by "at" or "@".
///
/// Outer `None` means the remainder is not a clock time: the match is
/// poisoned and the caller should fall through instead of guessing.
/// `Some(None)` is an empty remainder (all-day).
pub(crate) fn trailing_clock(tokens: &[&str]) -> Option<Option<NaiveTime>> {
    let (had_at, rest) = match tokens.first() {
        Some(t) if t.eq_ignore_ascii_case("at") || *t == "@" => (true, &tokens[1..]),
        _ => (false, tokens),
    };
    if rest.is_empty() {
        // A dangling "at" with nothing after it is noise, not an all-day
        // date.
        return if had_at { None } else { Some(None) };
    }
    // "7:30 PM" arrives as two tokens; rejoin before parsing.
    parse_clock(&rest.join(" ")).map(Some)
}

pub struct BareTimeRecognizer;

impl Recognizer for BareTimeRecognizer {
    fn id(&self) -> &'static str {
        "bare-time"
    }

    fn name(&self) -> &'static str {
        "Bare time"
    }

    fn info(&self) -> RecognizerInfo {
        RecognizerInfo {
            id: self.id(),
            name: self.name(),
            description: "Clock time with no date, resolved on the reference day",
            examples: &["7:30 PM", "19:30", "8pm"],
        }
    }

    fn recognize(&self, text: &str, reference: DateTime<FixedOffset>) -> Option<ParsedDate> {
        let lower = text.trim().to_lowercase();
        // A lone integer is not a time; require a colon or an AM/PM
        // marker before treating the whole string as a clock.
        if !(lower.contains(':') || lower.ends_with("am") || lower.ends_with("pm")) {
            return None;
        }
        let time = parse_clock(&lower)?;
        let (when, _) = resolve(reference, reference.date_naive(), Some(time))?;
        Some(ParsedDate {
            when,
            confidence: BARE_TIME_CONFIDENCE,
            source: self.name().to_string(),
            all_day: false,
        })
    }
}
