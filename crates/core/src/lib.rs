//! Eventdate Core
//!
//! Free-text event date extraction. Feed in a raw candidate string
//! scraped from a venue page plus a reference instant, and get back a
//! normalized, timezoned date-time with a confidence score.
//!
//! # Quick Start
//!
//! ```
//! use chrono::DateTime;
//! use eventdate_core::EventDateParser;
//!
//! let parser = EventDateParser::new();
//! let reference = DateTime::parse_from_rfc3339("2024-01-15T12:00:00-06:00").unwrap();
//!
//! let parsed = parser.parse("tomorrow at 2pm", reference).unwrap();
//! assert_eq!(parsed.source, "Tomorrow");
//! assert_eq!(parsed.when.to_rfc3339(), "2024-01-16T14:00:00-06:00");
//! ```
//!
//! # Ranking multiple candidates
//!
//! A page often shows the same event's date in several DOM nodes of
//! varying quality: a loose visible label next to a precise
//! machine-readable `datetime` attribute. Parse every candidate and keep
//! the most confident match:
//!
//! ```
//! use chrono::DateTime;
//! use eventdate_core::EventDateParser;
//!
//! let parser = EventDateParser::new();
//! let reference = DateTime::parse_from_rfc3339("2024-01-15T12:00:00-06:00").unwrap();
//!
//! let ranked = parser.parse_many(
//!     &["this friday", "2024-02-20T19:30:00-06:00", "not a date"],
//!     reference,
//! );
//! assert_eq!(ranked.len(), 2);
//! assert_eq!(ranked[0].source, "ISO Format");
//! ```

pub mod error;
pub mod recognizer;
pub mod recognizers;
pub mod types;

pub use error::ParseDateError;
pub use recognizer::{Recognizer, RecognizerInfo};
pub use types::ParsedDate;

use chrono::{DateTime, FixedOffset};

use recognizers::{
    BareTimeRecognizer, IsoRecognizer, MonthNameRecognizer, TodayRecognizer, TomorrowRecognizer,
    UsNumericRecognizer, WeekdayRecognizer,
};

/// Parse a caller-supplied reference instant (RFC 3339).
///
/// A malformed reference is caller misuse, not scraped-data noise, so it
/// surfaces as an error instead of a silent non-match.
pub fn parse_reference(s: &str) -> Result<DateTime<FixedOffset>, ParseDateError> {
    DateTime::parse_from_rfc3339(s).map_err(|source| ParseDateError::InvalidReference {
        input: s.to_string(),
        source,
    })
}

/// Main entry point - the configured recognizer cascade.
pub struct EventDateParser {
    recognizers: Vec<Box<dyn Recognizer>>,
}

impl EventDateParser {
    /// Create a parser with all built-in recognizers in cascade order.
    #[must_use]
    pub fn new() -> Self {
        Self {
            recognizers: Self::create_recognizer_list(),
        }
    }

    /// Create the recognizer list in cascade priority order.
    ///
    /// Highest-precision grammars first: a specific, unambiguous pattern
    /// must never be shadowed by a looser one, so the order here is part
    /// of the contract and is pinned by a test.
    fn create_recognizer_list() -> Vec<Box<dyn Recognizer>> {
        vec![
            Box::new(IsoRecognizer),
            Box::new(UsNumericRecognizer),
            Box::new(MonthNameRecognizer),
            Box::new(TodayRecognizer),
            Box::new(TomorrowRecognizer),
            Box::new(WeekdayRecognizer),
            Box::new(BareTimeRecognizer),
        ]
    }

    /// Try to extract a date from one candidate string.
    ///
    /// The first matching recognizer wins. Empty or unparseable text
    /// yields `None`, never an error: on noisy scraped pages that is the
    /// routine outcome, not a failure path.
    #[must_use]
    pub fn parse(&self, text: &str, reference: DateTime<FixedOffset>) -> Option<ParsedDate> {
        if text.trim().is_empty() {
            return None;
        }
        for recognizer in &self.recognizers {
            tracing::trace!(recognizer = recognizer.id(), "trying recognizer");
            if let Some(parsed) = recognizer.recognize(text, reference) {
                tracing::debug!(
                    recognizer = recognizer.id(),
                    confidence = parsed.confidence,
                    "matched"
                );
                return Some(parsed);
            }
        }
        None
    }

    /// Parse every candidate independently, discard failures, and rank
    /// by confidence (highest first).
    ///
    /// The sort is stable, so equal-confidence results keep their input
    /// order. Empty or all-failing input yields an empty vec.
    #[must_use]
    pub fn parse_many<S: AsRef<str>>(
        &self,
        texts: &[S],
        reference: DateTime<FixedOffset>,
    ) -> Vec<ParsedDate> {
        let mut results: Vec<ParsedDate> = texts
            .iter()
            .filter_map(|text| self.parse(text.as_ref(), reference))
            .collect();
        // Sort by confidence, highest first
        results.sort_by(|a, b| b.confidence.total_cmp(&a.confidence));
        results
    }

    /// The single highest-confidence result across the candidates, if
    /// any.
    #[must_use]
    pub fn best<S: AsRef<str>>(
        &self,
        texts: &[S],
        reference: DateTime<FixedOffset>,
    ) -> Option<ParsedDate> {
        self.parse_many(texts, reference).into_iter().next()
    }

    /// Get info about all registered recognizers (for help output), in
    /// cascade order.
    #[must_use]
    pub fn recognizer_infos(&self) -> Vec<RecognizerInfo> {
        self.recognizers.iter().map(|r| r.info()).collect()
    }
}

impl Default for EventDateParser {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    // Monday noon, US Central offset
    fn reference() -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339("2024-01-15T12:00:00-06:00").unwrap()
    }

    /// The cascade order is part of the contract: reordering silently
    /// changes behavior on ambiguous input.
    #[test]
    fn test_cascade_order_is_pinned() {
        let parser = EventDateParser::new();
        let ids: Vec<&str> = parser.recognizers.iter().map(|r| r.id()).collect();
        assert_eq!(
            ids,
            [
                "iso",
                "us-numeric",
                "month-name",
                "today",
                "tomorrow",
                "weekday",
                "bare-time"
            ]
        );
    }

    #[test]
    fn test_iso_input_never_loses_to_a_looser_pattern() {
        let parser = EventDateParser::new();
        let parsed = parser
            .parse("2024-02-20T19:30:00-06:00", reference())
            .unwrap();
        assert_eq!(parsed.source, "ISO Format");
        assert!(parsed.confidence > 0.9);
    }

    #[test]
    fn test_repeated_calls_are_identical() {
        let parser = EventDateParser::new();
        let a = parser.parse("next friday at 8pm", reference());
        let b = parser.parse("next friday at 8pm", reference());
        assert_eq!(a, b);
        assert!(a.is_some());
    }

    #[test]
    fn test_graceful_failure_on_garbage() {
        let parser = EventDateParser::new();
        assert_eq!(parser.parse("", reference()), None);
        assert_eq!(parser.parse("   ", reference()), None);
        assert_eq!(parser.parse("asdf not a date", reference()), None);
        assert_eq!(parser.parse("invalid date string", reference()), None);
    }

    #[test]
    fn test_multi_candidate_ranking() {
        let parser = EventDateParser::new();
        let ranked = parser.parse_many(
            &["next friday", "2024-02-20T19:30:00-06:00", "invalid"],
            reference(),
        );
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].source, "ISO Format");
        assert_eq!(ranked[1].source, "Friday relative");

        let best = parser
            .best(
                &["next friday", "2024-02-20T19:30:00-06:00", "invalid"],
                reference(),
            )
            .unwrap();
        assert_eq!(best.source, "ISO Format");
    }

    #[test]
    fn test_equal_confidence_keeps_input_order() {
        let parser = EventDateParser::new();
        let ranked = parser.parse_many(&["tomorrow", "today"], reference());
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].source, "Tomorrow");
        assert_eq!(ranked[1].source, "Today/Tonight");
    }

    #[test]
    fn test_iso_outranks_bare_time() {
        let parser = EventDateParser::new();
        let iso = parser.parse("2024-02-20T19:30:00-06:00", reference()).unwrap();
        let bare = parser.parse("7:30 PM", reference()).unwrap();
        assert!(iso.confidence > bare.confidence);
    }

    #[test]
    fn test_empty_candidate_list() {
        let parser = EventDateParser::new();
        let texts: [&str; 0] = [];
        assert!(parser.parse_many(&texts, reference()).is_empty());
        assert_eq!(parser.best(&texts, reference()), None);
    }

    #[test]
    fn test_today_at_seven_scenario() {
        let parser = EventDateParser::new();
        let parsed = parser.parse("today at 7pm", reference()).unwrap();
        assert_eq!(parsed.when.to_rfc3339(), "2024-01-15T19:00:00-06:00");
        assert_eq!(parsed.source, "Today/Tonight");
    }

    #[test]
    fn test_bare_time_scenario() {
        let parser = EventDateParser::new();
        let parsed = parser.parse("7:30 PM", reference()).unwrap();
        assert_eq!(parsed.when.to_rfc3339(), "2024-01-15T19:30:00-06:00");
        assert!(!parsed.all_day);
    }

    #[test]
    fn test_parse_reference_rejects_garbage() {
        assert!(parse_reference("2024-01-15T12:00:00-06:00").is_ok());
        let err = parse_reference("last tuesday-ish").unwrap_err();
        assert!(err.to_string().contains("invalid reference instant"));
    }
}
