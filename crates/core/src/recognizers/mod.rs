//! Built-in recognizer implementations.

mod clock;
mod iso;
mod month_name;
mod numeric;
mod relative;
mod weekday;

pub use clock::BareTimeRecognizer;
pub use iso::IsoRecognizer;
pub use month_name::MonthNameRecognizer;
pub use numeric::UsNumericRecognizer;
pub use relative::{TodayRecognizer, TomorrowRecognizer};
pub use weekday::WeekdayRecognizer;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime, TimeZone};

/// Resolve a local date plus optional time-of-day at the reference
/// instant's offset.
///
/// No time means the whole day: midnight plus the all-day flag, rather
/// than an invented default hour that would imply false precision.
pub(crate) fn resolve(
    reference: DateTime<FixedOffset>,
    date: NaiveDate,
    time: Option<NaiveTime>,
) -> Option<(DateTime<FixedOffset>, bool)> {
    let all_day = time.is_none();
    let local = date.and_time(time.unwrap_or(NaiveTime::MIN));
    let when = reference.offset().from_local_datetime(&local).single()?;
    Some((when, all_day))
}
