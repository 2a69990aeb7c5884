pub mod clock_service;

pub use clock_service::{ClockError, TimeParts, TimeSource, ZonedClock};
