//! Duration formatting utilities for countdown display.
//!
//! This module converts millisecond-resolution durations into the
//! days/hours/minutes/seconds breakdown shown by the countdown page, the
//! terminal view, and the server log. All conversions use integer division
//! on whole seconds, and negative durations are clamped to zero so a target
//! in the past always renders as a zeroed countdown.
//!
//! ## Format Specifications
//!
//! - `format_countdown` renders `"3d 04:05:06"`, dropping the day count
//!   when it is zero (`"04:05:06"`)
//! - `format_target` renders the target instant as a full date with a long
//!   time and offset, e.g. `"Wednesday, December 31, 2025 at 23:59:59 +03:00"`
//!
//! ## Usage Examples
//!
//! ```rust
//! use chrono::Duration;
//! use downcount::libs::formatter::{breakdown, format_countdown};
//!
//! let duration = Duration::days(2) + Duration::hours(3);
//! assert_eq!(format_countdown(&duration), "2d 03:00:00");
//! assert_eq!(breakdown(&duration).hours, 3);
//! ```

use chrono::{DateTime, Duration, Local};
use serde::{Deserialize, Serialize};

/// A duration decomposed into display units.
///
/// `days` is unbounded; `hours`, `minutes`, and `seconds` are the remainder
/// fields (0-23 and 0-59 respectively). All fields are non-negative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountdownParts {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

/// A fully formatted countdown line for display purposes.
///
/// Holds pre-formatted strings alongside the numeric breakdown, making it
/// suitable for direct use with table rendering and serialization without
/// repeating format decisions at display time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormattedCountdown {
    /// Which engine produced the value (e.g. "Calendar", "Weekdays only").
    pub mode: String,
    /// The rendered remaining time (e.g. "3d 04:05:06").
    pub remaining: String,
    /// The numeric breakdown behind `remaining`.
    pub parts: CountdownParts,
}

/// Decomposes a duration into days, hours, minutes, and seconds.
///
/// Sub-second precision is discarded and negative durations count as zero.
pub fn breakdown(duration: &Duration) -> CountdownParts {
    let total_seconds = duration.num_seconds().max(0);
    CountdownParts {
        days: total_seconds / 86_400,
        hours: total_seconds % 86_400 / 3_600,
        minutes: total_seconds % 3_600 / 60,
        seconds: total_seconds % 60,
    }
}

/// Formats a duration as a countdown string.
///
/// The day count is only shown when non-zero, matching the page display.
pub fn format_countdown(duration: &Duration) -> String {
    let parts = breakdown(duration);
    if parts.days > 0 {
        format!("{}d {:02}:{:02}:{:02}", parts.days, parts.hours, parts.minutes, parts.seconds)
    } else {
        format!("{:02}:{:02}:{:02}", parts.hours, parts.minutes, parts.seconds)
    }
}

/// Formats the target instant for human display.
pub fn format_target(target: &DateTime<Local>) -> String {
    target.format("%A, %B %-d, %Y at %H:%M:%S %:z").to_string()
}
