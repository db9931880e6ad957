//! Pure stopwatch logic library with no platform dependencies.
//! Testable on host, usable on Xous target.

mod clock;
mod engine;
mod format;
mod laps;
mod schedule;
mod theme;
mod view;
mod widget;

pub use clock::{Clock, ManualClock};
pub use engine::{TimerEngine, TimerState};
pub use format::{format, format_hms_ms, FormattedTime};
pub use laps::{LapEntry, LapRecorder};
pub use schedule::{Scheduler, TickToken};
pub use theme::{MemoryThemeStore, Theme, ThemeController, ThemeStore, THEME_KEY};
pub use view::{Controls, StopwatchView};
pub use widget::{StopwatchConfig, StopwatchWidget, DEFAULT_TICK_INTERVAL_MS};

/// Split a u64 into (low, high) 32-bit words for scalar messages
pub fn split_u64(val: u64) -> (usize, usize) {
    ((val & 0xFFFF_FFFF) as usize, (val >> 32) as usize)
}

/// Join (low, high) 32-bit words back into a u64
pub fn join_u64(lo: usize, hi: usize) -> u64 {
    ((hi as u64 & 0xFFFF_FFFF) << 32) | (lo as u64 & 0xFFFF_FFFF)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_join() {
        for val in [0u64, 1, 0xFFFF_FFFF, 0x1_0000_0000, 123_456_789_012, u64::MAX] {
            let (lo, hi) = split_u64(val);
            assert!(lo <= 0xFFFF_FFFF && hi <= 0xFFFF_FFFF);
            assert_eq!(join_u64(lo, hi), val);
        }
    }
}
