//! Core types for eventdate.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// A date successfully extracted from one candidate string.
///
/// Only ever produced by a recognizer that matched; "no match" is `None`
/// at the call site, never a sentinel date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedDate {
    /// The resolved instant. ISO matches keep the offset carried by the
    /// input; everything else is resolved at the reference instant's
    /// offset.
    pub when: DateTime<FixedOffset>,
    /// Relative trust in the match, in `[0, 1]`. Each recognizer uses a
    /// named constant, so callers can threshold against stable values.
    pub confidence: f32,
    /// Label of the recognizer that matched (e.g. "ISO Format",
    /// "Friday relative").
    pub source: String,
    /// True when the input carried no time-of-day and the result stands
    /// for the whole calendar day. `when` holds midnight in that case;
    /// consumers should treat the value as date-only.
    pub all_day: bool,
}
