use crate::libs::formatter::FormattedCountdown;
use prettytable::{row, Table};
use std::error::Error;

pub struct View {}

impl View {
    pub fn countdown(entries: &Vec<FormattedCountdown>) -> Result<(), Box<dyn Error>> {
        let mut table = Table::new();

        table.add_row(row!["MODE", "REMAINING", "DAYS", "HOURS", "MINUTES", "SECONDS"]);
        for entry in entries {
            table.add_row(row![
                entry.mode,
                entry.remaining,
                entry.parts.days,
                entry.parts.hours,
                entry.parts.minutes,
                entry.parts.seconds
            ]);
        }
        table.printstd();

        Ok(())
    }
}
