//! # Downcount - Weekday-Aware Countdown Server
//!
//! A tiny web service that serves a live countdown page to a configured
//! target date-time, counting both plain calendar time and weekday-only
//! time with weekends excluded.
//!
//! ## Features
//!
//! - **Calendar Countdown**: Plain remaining time to the target
//! - **Weekday Countdown**: Only Monday-Friday time counts; Saturdays and
//!   Sundays contribute nothing
//! - **Single-Page Server**: One `GET /` endpoint delivering a
//!   self-refreshing HTML document
//! - **Terminal View**: A one-shot countdown table for the console
//!
//! ## Usage
//!
//! ```rust,no_run
//! use downcount::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod commands;
pub mod libs;
