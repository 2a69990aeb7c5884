// src/services/clock_service.rs
//
// Timezone-aware wall clock: hour/minute lookup for the animator
// and the date/time strings shown in the debug panel.

use chrono::{DateTime, Timelike, Utc};
use chrono_tz::Tz;
use thiserror::Error;

use crate::models::GlyphError;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ClockError {
    #[error("unknown timezone identifier '{0}'")]
    UnknownTimezone(String),
    #[error(transparent)]
    Glyph(#[from] GlyphError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeParts {
    pub hour: u32,
    pub minute: u32,
}

impl TimeParts {
    pub fn new(hour: u32, minute: u32) -> Self {
        Self { hour, minute }
    }
}

/// Supplies the current hour and minute for a timezone identifier.
pub trait TimeSource {
    fn time_parts(&self, timezone: &str) -> Result<TimeParts, ClockError>;
}

/// The system clock, converted through the IANA timezone database.
#[derive(Debug, Default, Clone, Copy)]
pub struct ZonedClock;

impl ZonedClock {
    pub fn new() -> Self {
        Self
    }

    pub fn now_in(&self, timezone: &str) -> Result<DateTime<Tz>, ClockError> {
        let tz = parse_timezone(timezone)?;
        Ok(Utc::now().with_timezone(&tz))
    }

    /// "16 October 2026"
    pub fn format_date(&self, timezone: &str) -> Result<String, ClockError> {
        Ok(format_date(&self.now_in(timezone)?))
    }

    /// "14:05:09"
    pub fn format_time(&self, timezone: &str) -> Result<String, ClockError> {
        Ok(format_time(&self.now_in(timezone)?))
    }
}

impl TimeSource for ZonedClock {
    fn time_parts(&self, timezone: &str) -> Result<TimeParts, ClockError> {
        let tz = parse_timezone(timezone)?;
        Ok(time_parts_at(&Utc::now(), tz))
    }
}

pub fn parse_timezone(timezone: &str) -> Result<Tz, ClockError> {
    timezone
        .parse::<Tz>()
        .map_err(|_| ClockError::UnknownTimezone(timezone.to_string()))
}

pub fn time_parts_at(instant: &DateTime<Utc>, tz: Tz) -> TimeParts {
    let local = instant.with_timezone(&tz);
    TimeParts::new(local.hour(), local.minute())
}

pub fn format_date(local: &DateTime<Tz>) -> String {
    local.format("%-d %B %Y").to_string()
}

pub fn format_time(local: &DateTime<Tz>) -> String {
    local.format("%H:%M:%S").to_string()
}
