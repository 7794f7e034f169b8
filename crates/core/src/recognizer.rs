//! Recognizer trait definition.

use chrono::{DateTime, FixedOffset};

use crate::types::ParsedDate;

/// Metadata about a recognizer for help/documentation.
#[derive(Debug, Clone)]
pub struct RecognizerInfo {
    /// Unique identifier (e.g., "iso")
    pub id: &'static str,
    /// Human-readable name (e.g., "ISO Format")
    pub name: &'static str,
    /// Short description
    pub description: &'static str,
    /// Example input strings
    pub examples: &'static [&'static str],
}

/// A single pattern rule in the cascade.
///
/// Implementations are pure functions of their two inputs: the same
/// `(text, reference)` pair always yields the same result, and a
/// non-match is `None`, not an error. Relative phrases resolve against
/// `reference`, never the system clock.
pub trait Recognizer: Send + Sync {
    /// Unique identifier for this recognizer (e.g., "iso", "weekday").
    fn id(&self) -> &'static str;

    /// Human-readable name (e.g., "ISO Format").
    fn name(&self) -> &'static str;

    /// Get recognizer metadata for help/documentation.
    fn info(&self) -> RecognizerInfo {
        RecognizerInfo {
            id: self.id(),
            name: self.name(),
            description: "",
            examples: &[],
        }
    }

    /// Try to extract a date from a candidate string.
    fn recognize(&self, text: &str, reference: DateTime<FixedOffset>) -> Option<ParsedDate>;
}
