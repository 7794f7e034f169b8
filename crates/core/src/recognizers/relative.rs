//! Relative-keyword recognizers: today/tonight and tomorrow.

use chrono::{DateTime, FixedOffset, NaiveTime};

use crate::recognizer::{Recognizer, RecognizerInfo};
use crate::recognizers::clock::trailing_clock;
use crate::recognizers::resolve;
use crate::types::ParsedDate;

const RELATIVE_CONFIDENCE: f32 = 0.70;

/// Bare "tonight" defaults to this hour. Deliberately asymmetric with
/// bare "tomorrow", which stays all-day; see DESIGN.md.
const TONIGHT_DEFAULT_HOUR: u32 = 19;

pub struct TodayRecognizer;

impl Recognizer for TodayRecognizer {
    fn id(&self) -> &'static str {
        "today"
    }

    fn name(&self) -> &'static str {
        "Today/Tonight"
    }

    fn info(&self) -> RecognizerInfo {
        RecognizerInfo {
            id: self.id(),
            name: self.name(),
            description: "The reference day; bare \"tonight\" defaults to 19:00",
            examples: &["today at 7pm", "tonight"],
        }
    }

    fn recognize(&self, text: &str, reference: DateTime<FixedOffset>) -> Option<ParsedDate> {
        let lower = text.trim().to_lowercase();
        let tokens: Vec<&str> = lower.split_whitespace().collect();

        let keyword = *tokens.first()?;
        if keyword != "today" && keyword != "tonight" {
            return None;
        }

        let mut time = trailing_clock(&tokens[1..])?;
        if time.is_none() && keyword == "tonight" {
            time = NaiveTime::from_hms_opt(TONIGHT_DEFAULT_HOUR, 0, 0);
        }

        let (when, all_day) = resolve(reference, reference.date_naive(), time)?;
        Some(ParsedDate {
            when,
            confidence: RELATIVE_CONFIDENCE,
            source: self.name().to_string(),
            all_day,
        })
    }
}

pub struct TomorrowRecognizer;

impl Recognizer for TomorrowRecognizer {
    fn id(&self) -> &'static str {
        "tomorrow"
    }

    fn name(&self) -> &'static str {
        "Tomorrow"
    }

    fn info(&self) -> RecognizerInfo {
        RecognizerInfo {
            id: self.id(),
            name: self.name(),
            description: "The day after the reference day; all-day without an explicit time",
            examples: &["tomorrow", "tomorrow at 2pm"],
        }
    }

    fn recognize(&self, text: &str, reference: DateTime<FixedOffset>) -> Option<ParsedDate> {
        let lower = text.trim().to_lowercase();
        let tokens: Vec<&str> = lower.split_whitespace().collect();

        if *tokens.first()? != "tomorrow" {
            return None;
        }

        let time = trailing_clock(&tokens[1..])?;
        let date = reference.date_naive().succ_opt()?;
        let (when, all_day) = resolve(reference, date, time)?;
        Some(ParsedDate {
            when,
            confidence: RELATIVE_CONFIDENCE,
            source: self.name().to_string(),
            all_day,
        })
    }
}
