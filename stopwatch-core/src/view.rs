use crate::engine::TimerState;
use crate::format::FormattedTime;
use crate::laps::LapEntry;

/// Which controls accept input.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Controls {
    pub start: bool,
    pub stop: bool,
    pub lap: bool,
}

impl Controls {
    pub fn for_state(state: TimerState) -> Self {
        let running = state == TimerState::Running;
        Self {
            start: !running,
            stop: running,
            lap: running,
        }
    }
}

/// Display, lap list and control sinks.
pub trait StopwatchView {
    fn render_time(&mut self, time: &FormattedTime);

    /// `laps` is newest first.
    fn render_laps<'a, I>(&mut self, laps: I)
    where
        I: Iterator<Item = &'a LapEntry>;

    fn render_controls(&mut self, controls: Controls);
}
