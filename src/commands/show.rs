//! Prints the countdown to the terminal once.
//!
//! The terminal counterpart of the countdown page: both engines are
//! evaluated against the current instant and rendered as a table. With a
//! missing or invalid target the command reports the configuration problem
//! and exits without attempting a countdown.

use crate::libs::config::{Config, Target};
use crate::libs::countdown;
use crate::libs::formatter::{breakdown, format_countdown, format_target, FormattedCountdown};
use crate::libs::messages::Message;
use crate::libs::view::View;
use crate::{msg_error, msg_print, msg_warning};
use anyhow::Result;
use chrono::Local;

pub async fn cmd() -> Result<()> {
    let config = Config::from_env();
    let target = match &config.target {
        Target::At { instant, .. } => *instant,
        Target::Missing => {
            msg_warning!(Message::TargetMissing);
            return Ok(());
        }
        Target::Invalid(raw) => {
            msg_error!(Message::TargetInvalid(raw.clone()));
            return Ok(());
        }
    };

    let now = Local::now().naive_local();
    let plain = countdown::remaining(now, target.naive_local());
    let weekdays = countdown::weekday_remaining(now, target.naive_local());

    msg_print!(Message::CountdownHeader(format_target(&target)), true);
    let entries = vec![
        FormattedCountdown {
            mode: "Calendar".to_string(),
            remaining: format_countdown(&plain),
            parts: breakdown(&plain),
        },
        FormattedCountdown {
            mode: "Weekdays only".to_string(),
            remaining: format_countdown(&weekdays),
            parts: breakdown(&weekdays),
        },
    ];
    View::countdown(&entries).map_err(|e| anyhow::anyhow!(e.to_string()))?;

    Ok(())
}
