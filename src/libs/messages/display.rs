//! Display implementation for downcount application messages.
//!
//! This module provides the `Display` trait implementation for the `Message`
//! enum, converting structured message data into human-readable text for
//! terminal and log output. It is the single source of truth for all
//! user-facing message text in the application.
//!
//! ## Message Categories
//!
//! - **Server Messages**: Socket lifecycle and connection handling
//! - **Target Configuration Messages**: Environment-derived countdown target state
//! - **Countdown Messages**: Terminal countdown presentation headers
//!
//! ## Parameter Interpolation
//!
//! Messages with dynamic content use safe parameter interpolation:
//! ```text
//! Message::ServerStarted(port) => format!("Countdown server listening on http://localhost:{}", port)
//! Message::TargetInvalid(raw) => format!("DATE_TIME_COUNT is not a valid ISO date-time: \"{}\"", raw)
//! ```

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === SERVER MESSAGES ===
            Message::ServerStarted(port) => format!("Countdown server listening on http://localhost:{}", port),
            Message::ServerBindFailed(error) => format!("Failed to bind the server socket: {}", error),
            Message::ConnectionFailed(error) => format!("Failed to accept a connection: {}", error),

            // === TARGET CONFIGURATION MESSAGES ===
            Message::TargetConfigured(target) => format!("Counting down to {}", target),
            Message::TargetMissing => {
                "DATE_TIME_COUNT is not set. Example: DATE_TIME_COUNT=\"2025-12-31T23:59:59Z\" downcount serve".to_string()
            }
            Message::TargetInvalid(raw) => format!("DATE_TIME_COUNT is not a valid ISO date-time: \"{}\"", raw),

            // === COUNTDOWN MESSAGES ===
            Message::CountdownHeader(target) => format!("Time remaining until {}", target),
        };
        write!(f, "{}", text)
    }
}
