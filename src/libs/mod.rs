//! Core library modules for the downcount application.
//!
//! Serves as the main entry point for all downcount library components,
//! providing a centralized access point to the application's core
//! functionality.
//!
//! ## Features
//!
//! - **Core Infrastructure**: Configuration, messaging
//! - **Countdown Engines**: Plain and weekday-only remaining-time calculation
//! - **Presentation**: Duration formatting, console rendering, the countdown page
//! - **Serving**: The single-endpoint HTTP surface
//!
//! ## Usage
//!
//! ```rust
//! use downcount::libs::config::Config;
//! use downcount::libs::countdown;
//! use chrono::Local;
//!
//! let config = Config::from_env();
//! if let Some(target) = config.target.instant() {
//!     let now = Local::now();
//!     let left = countdown::remaining(now.naive_local(), target.naive_local());
//!     println!("{} seconds to go", left.num_seconds());
//! }
//! ```

pub mod config;
pub mod countdown;
pub mod formatter;
pub mod messages;
pub mod page;
pub mod server;
pub mod view;
