use core::fmt::Write;

use stopwatch_core::{Controls, FormattedTime, LapEntry, StopwatchView};

pub const CONTROL_START: usize = 1 << 0;
pub const CONTROL_STOP: usize = 1 << 1;
pub const CONTROL_LAP: usize = 1 << 2;

/// Mirrors renderings to the log. Keeps the display text and the control
/// state for `AppOp::GetControls` and the shutdown message.
pub struct LogView {
    display: String,
    controls: Controls,
}

impl LogView {
    pub fn new() -> Self {
        Self {
            display: String::new(),
            controls: Controls { start: true, stop: false, lap: false },
        }
    }

    pub fn display(&self) -> &str {
        &self.display
    }

    /// Enabled controls as `CONTROL_*` bits.
    pub fn controls_mask(&self) -> usize {
        let mut mask = 0;
        if self.controls.start {
            mask |= CONTROL_START;
        }
        if self.controls.stop {
            mask |= CONTROL_STOP;
        }
        if self.controls.lap {
            mask |= CONTROL_LAP;
        }
        mask
    }
}

impl StopwatchView for LogView {
    fn render_time(&mut self, time: &FormattedTime) {
        self.display.clear();
        write!(self.display, "{}", time).ok();
        log::trace!("display {}", self.display);
    }

    fn render_laps<'a, I>(&mut self, mut laps: I)
    where
        I: Iterator<Item = &'a LapEntry>,
    {
        match laps.next() {
            Some(latest) => log::info!("{} ({} laps)", latest, 1 + laps.count()),
            None => log::info!("lap list cleared"),
        }
    }

    fn render_controls(&mut self, controls: Controls) {
        self.controls = controls;
        log::debug!(
            "controls start={} stop={} lap={}",
            controls.start, controls.stop, controls.lap
        );
    }
}
