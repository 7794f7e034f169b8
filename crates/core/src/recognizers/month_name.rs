//! Month-name date recognizer: `February 20, 2024`, `Feb 20 2024`.

use chrono::{DateTime, FixedOffset, NaiveDate};

use crate::recognizer::{Recognizer, RecognizerInfo};
use crate::recognizers::clock::trailing_clock;
use crate::recognizers::resolve;
use crate::types::ParsedDate;

const WITH_TIME_CONFIDENCE: f32 = 0.90;
const DATE_ONLY_CONFIDENCE: f32 = 0.85;

const MONTHS: [(&str, &str, u32); 12] = [
    ("jan", "january", 1),
    ("feb", "february", 2),
    ("mar", "march", 3),
    ("apr", "april", 4),
    ("may", "may", 5),
    ("jun", "june", 6),
    ("jul", "july", 7),
    ("aug", "august", 8),
    ("sep", "september", 9),
    ("oct", "october", 10),
    ("nov", "november", 11),
    ("dec", "december", 12),
];

pub struct MonthNameRecognizer;

impl MonthNameRecognizer {
    /// Match a lowercased token against the month table: the 3-letter
    /// abbreviation, or any prefix of the full name at least 3 letters
    /// long ("sept" counts, "septembrist" does not).
    fn month_from_name(token: &str) -> Option<u32> {
        let token = token.trim_end_matches('.');
        MONTHS
            .iter()
            .find(|(abbr, full, _)| token == *abbr || (token.len() >= 3 && full.starts_with(token)))
            .map(|(_, _, month)| *month)
    }
}

impl Recognizer for MonthNameRecognizer {
    fn id(&self) -> &'static str {
        "month-name"
    }

    fn name(&self) -> &'static str {
        "Month-name date"
    }

    fn info(&self) -> RecognizerInfo {
        RecognizerInfo {
            id: self.id(),
            name: self.name(),
            description: "English month name, numeric day and year",
            examples: &["February 20, 2024", "Feb 20 2024 at 7pm"],
        }
    }

    fn recognize(&self, text: &str, reference: DateTime<FixedOffset>) -> Option<ParsedDate> {
        let lower = text.trim().to_lowercase();
        let tokens: Vec<&str> = lower.split_whitespace().collect();

        let month = Self::month_from_name(tokens.first()?)?;
        let day: u32 = tokens.get(1)?.trim_end_matches(',').parse().ok()?;
        let year: i32 = tokens.get(2)?.parse().ok()?;
        let date = NaiveDate::from_ymd_opt(year, month, day)?;

        let time = trailing_clock(&tokens[3..])?;
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
