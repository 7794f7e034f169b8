//! Weekday-relative recognizer: "this friday", "next friday", bare
//! "friday".

use chrono::{DateTime, Datelike, Days, FixedOffset, Weekday};

use crate::recognizer::{Recognizer, RecognizerInfo};
use crate::recognizers::clock::trailing_clock;
use crate::recognizers::resolve;
use crate::types::ParsedDate;

const WEEKDAY_CONFIDENCE: f32 = 0.60;

const WEEKDAYS: [(&str, &str, Weekday); 7] = [
    ("monday", "Monday", Weekday::Mon),
    ("tuesday", "Tuesday", Weekday::Tue),
    ("wednesday", "Wednesday", Weekday::Wed),
    ("thursday", "Thursday", Weekday::Thu),
    ("friday", "Friday", Weekday::Fri),
    ("saturday", "Saturday", Weekday::Sat),
    ("sunday", "Sunday", Weekday::Sun),
];

pub struct WeekdayRecognizer;

impl WeekdayRecognizer {
    /// Match a lowercased token by full name or 3-letter abbreviation.
    fn weekday_from_name(token: &str) -> Option<(&'static str, Weekday)> {
        WEEKDAYS
            .iter()
            .find(|(lower, _, _)| token == *lower || (token.len() == 3 && lower.starts_with(token)))
            .map(|(_, label, weekday)| (*label, *weekday))
    }
}

impl Recognizer for WeekdayRecognizer {
    fn id(&self) -> &'static str {
        "weekday"
    }

    fn name(&self) -> &'static str {
        "Weekday relative"
    }

    fn info(&self) -> RecognizerInfo {
        RecognizerInfo {
            id: self.id(),
            name: self.name(),
            description: "Nearest occurrence of a weekday on/after the reference day (\"next\" adds a week)",
            examples: &["this friday", "next friday", "saturday 7pm"],
        }
    }

    fn recognize(&self, text: &str, reference: DateTime<FixedOffset>) -> Option<ParsedDate> {
        let lower = text.trim().to_lowercase();
        let tokens: Vec<&str> = lower.split_whitespace().collect();

        let (skip, next_week) = match *tokens.first()? {
            "this" => (1, false),
            "next" => (1, true),
            // Bare weekday behaves as "this".
            _ => (0, false),
        };
        let (label, target) = Self::weekday_from_name(tokens.get(skip)?)?;

        // Days ahead of the reference weekday; 0 when the reference
        // already falls on the target ("this monday" on a Monday is that
        // same day).
        let mut days_ahead = (i64::from(target.num_days_from_monday())
            - i64::from(reference.weekday().num_days_from_monday()))
        .rem_euclid(7);
        if next_week {
            days_ahead += 7;
        }
        let date = reference
            .date_naive()
            .checked_add_days(Days::new(days_ahead as u64))?;

        let time = trailing_clock(&tokens[skip + 1..])?;
        let (when, all_day) = resolve(reference, date, time)?;
        Some(ParsedDate {
            when,
            confidence: WEEKDAY_CONFIDENCE,
            source: format!("{label} relative"),
            all_day,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    // Monday
    fn reference() -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339("2024-01-15T12:00:00-06:00").unwrap()
    }

    #[test]
    fn test_this_friday_from_monday() {
        let parsed = WeekdayRecognizer
            .recognize("this friday", reference())
            .unwrap();
        assert_eq!(parsed.when.to_rfc3339(), "2024-01-19T00:00:00-06:00");
        assert_eq!(parsed.when.weekday(), Weekday::Fri);
        assert_eq!(parsed.source, "Friday relative");
        assert!(parsed.all_day);
    }

    #[test]
    fn test_next_friday_is_a_week_later() {
        let parsed = WeekdayRecognizer
            .recognize("next friday", reference())
            .unwrap();
        assert_eq!(parsed.when.to_rfc3339(), "2024-01-26T00:00:00-06:00");
    }

    #[test]
    fn test_this_weekday_on_its_own_day_is_today() {
        let parsed = WeekdayRecognizer
            .recognize("this monday", reference())
            .unwrap();
        assert_eq!(parsed.when.to_rfc3339(), "2024-01-15T00:00:00-06:00");
    }

    #[test]
    fn test_bare_weekday_behaves_as_this() {
        let parsed = WeekdayRecognizer.recognize("Friday", reference()).unwrap();
        assert_eq!(parsed.when.to_rfc3339(), "2024-01-19T00:00:00-06:00");
    }

    #[test]
    fn test_abbreviation_with_trailing_time() {
        let parsed = WeekdayRecognizer
            .recognize("sat 7pm", reference())
            .unwrap();
        assert_eq!(parsed.when.to_rfc3339(), "2024-01-20T19:00:00-06:00");
        assert!(!parsed.all_day);
    }

    #[test]
    fn test_non_weekday_falls_through() {
        assert!(WeekdayRecognizer
            .recognize("this weekend", reference())
            .is_none());
        assert!(WeekdayRecognizer.recognize("next", reference()).is_none());
    }
}
