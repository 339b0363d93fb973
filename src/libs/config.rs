//! Target configuration for the countdown server.
//!
//! This module captures the process environment into an immutable
//! configuration value at startup. The countdown target is supplied as an
//! ISO-8601 date-time string in the `DATE_TIME_COUNT` environment variable
//! and is read exactly once; an absent or unparseable value is preserved as
//! an explicit state so the rest of the application can render the
//! invalid-configuration page instead of a countdown.
//!
//! ## Accepted Target Formats
//!
//! - RFC 3339 with an offset or `Z` suffix (`2025-12-31T23:59:59Z`),
//!   converted to the server's local time
//! - Naive date-times (`2025-12-31T23:59:59`, `2025-12-31 23:59:59`,
//!   optionally with fractional seconds or without seconds), interpreted
//!   in the server's local calendar
//! - Bare dates (`2025-12-31`), interpreted as local midnight
//!
//! ## Usage Examples
//!
//! ```rust
//! use downcount::libs::config::{Config, Target};
//!
//! let config = Config::from_env();
//! match &config.target {
//!     Target::At { instant, .. } => println!("Counting down to {}", instant),
//!     Target::Missing => println!("No target configured"),
//!     Target::Invalid(raw) => println!("Bad target: {}", raw),
//! }
//! ```

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};
use std::env;

/// Environment variable holding the countdown target date-time.
pub const TARGET_ENV: &str = "DATE_TIME_COUNT";

/// Environment variable holding the listen port.
pub const PORT_ENV: &str = "PORT";

/// Port used when `PORT` is absent or unparseable.
pub const DEFAULT_PORT: u16 = 3000;

/// The configured countdown target, including its failure states.
///
/// The distinction between `Missing` and `Invalid` exists only for
/// operator-facing messages; both render the same invalid-configuration
/// state on the countdown page.
#[derive(Debug, Clone, PartialEq)]
pub enum Target {
    /// No target value was present in the environment.
    Missing,
    /// A value was present but could not be parsed as a date-time.
    Invalid(String),
    /// A valid target instant in the server's local calendar.
    ///
    /// The raw string is kept alongside the parsed instant because the
    /// delivered page hands the original value to the browser, which
    /// applies its own local-calendar interpretation.
    At { instant: DateTime<Local>, raw: String },
}

impl Target {
    /// Parses a raw environment value into a target state.
    ///
    /// Whitespace-only values count as missing, mirroring an unset variable.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if raw.is_empty() {
            return Target::Missing;
        }
        match parse_date_time(raw) {
            Some(instant) => Target::At { instant, raw: raw.to_string() },
            None => Target::Invalid(raw.to_string()),
        }
    }

    /// The original environment value, empty when no value was present.
    pub fn raw(&self) -> &str {
        match self {
            Target::Missing => "",
            Target::Invalid(raw) => raw,
            Target::At { raw, .. } => raw,
        }
    }

    /// The parsed target instant, if the configuration is valid.
    pub fn instant(&self) -> Option<DateTime<Local>> {
        match self {
            Target::At { instant, .. } => Some(*instant),
            _ => None,
        }
    }
}

/// Immutable process configuration, captured once at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// The countdown target state derived from `DATE_TIME_COUNT`.
    pub target: Target,
    /// The port the HTTP server listens on, from `PORT` or the default.
    pub port: u16,
}

impl Config {
    /// Captures the current process environment into a configuration value.
    ///
    /// This is the only place the environment is consulted; the resulting
    /// value is passed explicitly to the server and rendering logic and
    /// never re-read for the lifetime of the process.
    pub fn from_env() -> Self {
        let target = match env::var(TARGET_ENV) {
            Ok(value) => Target::parse(&value),
            Err(_) => Target::Missing,
        };
        let port = env::var(PORT_ENV).ok().and_then(|value| value.parse().ok()).unwrap_or(DEFAULT_PORT);
        Config { target, port }
    }
}

/// Formats accepted for naive (offset-less) date-time values.
const NAIVE_FORMATS: [&str; 4] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%d %H:%M"];

fn parse_date_time(raw: &str) -> Option<DateTime<Local>> {
    if let Ok(instant) = DateTime::parse_from_rfc3339(raw) {
        return Some(instant.with_timezone(&Local));
    }
    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return local_from_naive(naive);
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return local_from_naive(date.and_time(NaiveTime::MIN));
    }
    None
}

/// Resolves a naive local date-time to an instant.
///
/// DST transitions can make a local time ambiguous or nonexistent; the
/// earlier interpretation wins, and a nonexistent time counts as invalid.
fn local_from_naive(naive: NaiveDateTime) -> Option<DateTime<Local>> {
    Local.from_local_datetime(&naive).earliest()
}
