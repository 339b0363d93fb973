//! Remaining-time calculation engines for the countdown.
//!
//! This module provides the two pure duration calculations behind the
//! countdown display:
//!
//! - **Calendar variant**: the plain time between now and the target
//! - **Weekday variant**: only the portion of that span falling on a
//!   Monday-Friday day, with weekends excluded entirely
//!
//! Both functions operate on `chrono::NaiveDateTime`. Day-of-week and
//! midnight boundaries are therefore those of whatever calendar the caller
//! sampled the instants from; the server uses `Local::now().naive_local()`.
//!
//! The weekday calculation walks the interval one calendar day (or one
//! weekend block) at a time, so its cost is proportional to the number of
//! day boundaries in the span, not to its length in seconds. For
//! human-scale countdowns that is a handful of iterations per call.
//!
//! ## Usage Examples
//!
//! ```rust
//! use chrono::{Local, NaiveDate};
//! use downcount::libs::countdown::{remaining, weekday_remaining};
//!
//! let now = Local::now().naive_local();
//! let target = NaiveDate::from_ymd_opt(2030, 1, 1).unwrap().and_hms_opt(0, 0, 0).unwrap();
//! assert!(weekday_remaining(now, target) <= remaining(now, target));
//! ```

use chrono::{Datelike, Days, Duration, NaiveDateTime, NaiveTime, Weekday};

/// Calculates the plain time remaining between `now` and `target`.
///
/// Targets in the past yield a zero duration; the result is never negative.
pub fn remaining(now: NaiveDateTime, target: NaiveDateTime) -> Duration {
    (target - now).max(Duration::zero())
}

/// Calculates the weekday-only time within the half-open interval `[start, end)`.
///
/// Saturdays and Sundays contribute nothing regardless of time-of-day, so
/// the result is always less than or equal to `remaining(start, end)`, and
/// spans covering only weekend days yield zero. `end <= start` yields zero.
///
/// The walk keeps a cursor that always moves forward:
///
/// - On a weekend day the cursor jumps to the next local midnight Monday
///   (two days ahead from Saturday, one from Sunday) without accumulating
///   anything, even when that jump overshoots `end`.
/// - On a weekday the span up to the next midnight or `end`, whichever
///   comes first, is accumulated and the cursor moves there.
///
/// A cursor landing exactly on a midnight boundary belongs to the new day,
/// so midnight-to-midnight weekday spans are counted in full and the
/// Friday-to-Saturday boundary hands over cleanly.
pub fn weekday_remaining(start: NaiveDateTime, end: NaiveDateTime) -> Duration {
    let mut total = Duration::zero();
    let mut cursor = start;
    while cursor < end {
        match cursor.weekday() {
            Weekday::Sat => match midnight_after(cursor, 2) {
                Some(monday) => cursor = monday,
                None => break,
            },
            Weekday::Sun => match midnight_after(cursor, 1) {
                Some(monday) => cursor = monday,
                None => break,
            },
            _ => {
                let segment_end = match midnight_after(cursor, 1) {
                    Some(boundary) => boundary.min(end),
                    // Day arithmetic only fails at the edge of chrono's
                    // calendar; the rest of the span has no boundary left.
                    None => end,
                };
                total = total + (segment_end - cursor);
                cursor = segment_end;
            }
        }
    }
    total
}

/// Local midnight `days` days after the cursor's calendar day.
fn midnight_after(cursor: NaiveDateTime, days: u64) -> Option<NaiveDateTime> {
    cursor.date().checked_add_days(Days::new(days)).map(|day| day.and_time(NaiveTime::MIN))
}
