// ABOUTME: Clock reading capture and digital time formatting.
// ABOUTME: Decomposes the local wall clock into hour/minute/second fields.

use chrono::{DateTime, Local, Timelike};

/// One captured instant, the single source for all hand positions at a redraw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockReading {
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
}

impl ClockReading {
    pub fn now() -> Self {
        Self::from_datetime(&Local::now())
    }

    pub fn from_datetime(time: &DateTime<Local>) -> Self {
        Self {
            hour: time.hour(),
            minute: time.minute(),
            second: time.second(),
        }
    }

    pub fn from_hms(hour: u32, minute: u32, second: u32) -> Self {
        Self {
            hour,
            minute,
            second,
        }
    }

    /// Hour on the 12-hour dial, 0-11.
    pub fn hour12(&self) -> u32 {
        self.hour % 12
    }
}

/// The digital readout: zero-padded 24-hour "HH:MM:SS".
pub fn format_time(time: &DateTime<Local>) -> String {
    time.format("%H:%M:%S").to_string()
}
