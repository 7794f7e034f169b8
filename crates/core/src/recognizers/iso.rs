//! ISO 8601 recognizer.
//!
//! Highest-priority pattern: machine-readable `datetime` attributes on
//! scraped pages carry either a full RFC 3339 timestamp or a bare
//! `YYYY-MM-DD` date.

use chrono::{DateTime, FixedOffset, NaiveDate};

use crate::recognizer::{Recognizer, RecognizerInfo};
use crate::recognizers::resolve;
use crate::types::ParsedDate;

/// Confidence for a full RFC 3339 timestamp: explicit, unambiguous,
/// offset included.
const TIMESTAMP_CONFIDENCE: f32 = 0.98;
/// Confidence for a date-only `YYYY-MM-DD` value.
const DATE_ONLY_CONFIDENCE: f32 = 0.95;

/// Year guard for the date-only form, to avoid false positives on
/// arbitrary dashed numbers.
const MIN_YEAR: i32 = 1900;
const MAX_YEAR: i32 = 2100;

pub struct IsoRecognizer;

impl IsoRecognizer {
    /// Try to parse ISO 8601 date-only format: YYYY-MM-DD
    fn parse_date_only(input: &str) -> Option<NaiveDate> {
        // Must be exactly 10 chars: YYYY-MM-DD
        if input.len() != 10 {
            return None;
        }
        let bytes = input.as_bytes();
        if bytes[4] != b'-' || bytes[7] != b'-' {
            return None;
        }

        let year: i32 = input[0..4].parse().ok()?;
        let month: u32 = input[5..7].parse().ok()?;
        let day: u32 = input[8..10].parse().ok()?;

        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return None;
        }
        NaiveDate::from_ymd_opt(year, month, day)
    }
}

impl Recognizer for IsoRecognizer {
    fn id(&self) -> &'static str {
        "iso"
    }

    fn name(&self) -> &'static str {
        "ISO Format"
    }

    fn info(&self) -> RecognizerInfo {
        RecognizerInfo {
            id: self.id(),
            name: self.name(),
            description: "RFC 3339 timestamp or ISO 8601 date (YYYY-MM-DD)",
            examples: &["2024-02-20T19:30:00-06:00", "2024-02-20"],
        }
    }

    fn recognize(&self, text: &str, reference: DateTime<FixedOffset>) -> Option<ParsedDate> {
        let trimmed = text.trim();

        // A full timestamp keeps the offset it came with.
        if let Ok(when) = DateTime::parse_from_rfc3339(trimmed) {
            return Some(ParsedDate {
                when,
                confidence: TIMESTAMP_CONFIDENCE,
                source: self.name().to_string(),
                all_day: false,
            });
        }

        let date = Self::parse_date_only(trimmed)?;
        let (when, all_day) = resolve(reference, date, None)?;
        Some(ParsedDate {
            when,
            confidence: DATE_ONLY_CONFIDENCE,
            source: self.name().to_string(),
            all_day,
        })
    }
}
