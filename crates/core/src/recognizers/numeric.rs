//! US numeric date recognizer: `MM/DD/YYYY` and friends.

use chrono::{DateTime, FixedOffset, NaiveDate};

use crate::recognizer::{Recognizer, RecognizerInfo};
use crate::recognizers::clock::trailing_clock;
use crate::recognizers::resolve;
use crate::types::ParsedDate;

/// Lower than the ISO and month-name tiers: the slash form is locale
/// ambiguous even though we always read it as US ordering.
const WITH_TIME_CONFIDENCE: f32 = 0.85;
const DATE_ONLY_CONFIDENCE: f32 = 0.75;

pub struct UsNumericRecognizer;

impl UsNumericRecognizer {
    /// Parse `M/D/YYYY`, `MM-DD-YY` and variants. MM/DD always wins:
    /// `01/02/2024` is January 2, never February 1.
    fn parse_date_token(token: &str) -> Option<NaiveDate> {
        let sep = if token.contains('/') { '/' } else { '-' };
        let parts: Vec<&str> = token.split(sep).collect();
        if parts.len() != 3 {
            return None;
        }

        let month: u32 = parts[0].parse().ok()?;
        let day: u32 = parts[1].parse().ok()?;
        let year: i32 = match parts[2].len() {
            4 => parts[2].parse().ok()?,
            2 => 2000 + parts[2].parse::<i32>().ok()?,
            _ => return None,
        };

        NaiveDate::from_ymd_opt(year, month, day)
    }
}

impl Recognizer for UsNumericRecognizer {
    fn id(&self) -> &'static str {
        "us-numeric"
    }

    fn name(&self) -> &'static str {
        "US numeric date"
    }

    fn info(&self) -> RecognizerInfo {
        RecognizerInfo {
            id: self.id(),
            name: self.name(),
            description: "Slash or dash date in US month/day/year ordering",
            examples: &["2/20/2024", "02-20-24", "2/20/2024 7:30 PM"],
        }
    }

    fn recognize(&self, text: &str, reference: DateTime<FixedOffset>) -> Option<ParsedDate> {
        let tokens: Vec<&str> = text.split_whitespace().collect();
        let date = Self::parse_date_token(tokens.first()?)?;
        let time = trailing_clock(&tokens[1..])?;
        let (when, all_day) = resolve(reference, date, time)?;
        Some(ParsedDate {
            when,
            confidence: if all_day {
                DATE_ONLY_CONFIDENCE
            } else {
                WITH_TIME_CONFIDENCE
            },
            source: self.name().to_string(),
            all_day,
        })
    }
}
