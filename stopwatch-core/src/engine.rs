use crate::clock::Clock;
use crate::format::{format, FormattedTime};
use crate::laps::{LapEntry, LapRecorder};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TimerState {
    Stopped,
    Running,
}

/// Stopwatch state machine.
///
/// While running, elapsed time is `accumulated_ms + (now - segment_start_ms)`,
/// i.e. `now - start_epoch` with `start_epoch = segment_start - accumulated`.
/// `stop` folds the running segment into `accumulated_ms` exactly once.
pub struct TimerEngine<C: Clock> {
    clock: C,
    state: TimerState,
    accumulated_ms: u64,
    segment_start_ms: u64,
    laps: LapRecorder,
}

impl<C: Clock> TimerEngine<C> {
    pub fn new(clock: C) -> Self {
        Self {
            clock,
            state: TimerState::Stopped,
            accumulated_ms: 0,
            segment_start_ms: 0,
            laps: LapRecorder::new(),
        }
    }

    /// Returns true if the engine transitioned to Running.
    pub fn start(&mut self) -> bool {
        if self.state == TimerState::Running {
            return false;
        }
        self.segment_start_ms = self.clock.now_ms();
        self.state = TimerState::Running;
        true
    }

    /// Returns true if the engine transitioned to Stopped.
    pub fn stop(&mut self) -> bool {
        if self.state != TimerState::Running {
            return false;
        }
        self.accumulated_ms = self.current_elapsed_ms();
        self.state = TimerState::Stopped;
        true
    }

    pub fn reset(&mut self) {
        self.accumulated_ms = 0;
        self.segment_start_ms = 0;
        self.state = TimerState::Stopped;
        self.laps.clear();
    }

    pub fn current_elapsed_ms(&self) -> u64 {
        match self.state {
            TimerState::Running => {
                // backward clock steps clamp to the accumulated total
                let segment = self.clock.now_ms().saturating_sub(self.segment_start_ms);
                self.accumulated_ms.saturating_add(segment)
            }
            TimerState::Stopped => self.accumulated_ms,
        }
    }

    pub fn formatted(&self) -> FormattedTime {
        format(self.current_elapsed_ms())
    }

    /// Records the current elapsed time. Ignored while stopped.
    pub fn lap(&mut self) -> Option<LapEntry> {
        if self.state != TimerState::Running {
            return None;
        }
        let elapsed = self.current_elapsed_ms();
        Some(self.laps.record_lap(elapsed))
    }

    pub fn state(&self) -> TimerState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == TimerState::Running
    }

    pub fn laps(&self) -> &LapRecorder {
        &self.laps
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use crate::format::format_hms_ms;

    #[test]
    fn test_stopwatch_basic() {
        let clock = ManualClock::new(1000);
        let mut sw = TimerEngine::new(&clock);
        assert_eq!(sw.state(), TimerState::Stopped);
        assert_eq!(sw.current_elapsed_ms(), 0);

        assert!(sw.start());
        assert_eq!(sw.state(), TimerState::Running);
        clock.set(1500);
        assert_eq!(sw.current_elapsed_ms(), 500);
        clock.set(2000);
        assert_eq!(sw.current_elapsed_ms(), 1000);

        assert!(sw.stop());
        assert_eq!(sw.state(), TimerState::Stopped);
        clock.set(5000);
        assert_eq!(sw.current_elapsed_ms(), 1000); // Stays at 1000 when stopped

        sw.start();
        clock.set(5500);
        assert_eq!(sw.current_elapsed_ms(), 1500);

        sw.reset();
        assert_eq!(sw.state(), TimerState::Stopped);
        clock.set(10_000);
        assert_eq!(sw.current_elapsed_ms(), 0);
    }

    #[test]
    fn test_resume_accumulates() {
        let clock = ManualClock::new(0);
        let mut sw = TimerEngine::new(&clock);
        sw.start();
        clock.advance(2000);
        sw.stop();
        clock.advance(10_000);
        sw.start();
        clock.advance(500);
        sw.stop();
        assert_eq!(sw.current_elapsed_ms(), 2500);
    }

    #[test]
    fn test_sum_of_running_intervals() {
        let clock = ManualClock::new(42);
        let mut sw = TimerEngine::new(&clock);
        let intervals = [(10u64, 250u64), (0, 1), (3_000, 0), (17, 99_999), (5, 5)];
        let mut expected = 0;
        for (idle, running) in intervals {
            clock.advance(idle);
            sw.start();
            clock.advance(running);
            sw.stop();
            expected += running;
            assert_eq!(sw.current_elapsed_ms(), expected);
        }
    }

    #[test]
    fn test_start_stop_idempotent() {
        let clock = ManualClock::new(0);
        let mut sw = TimerEngine::new(&clock);
        assert!(sw.start());
        clock.advance(300);
        // a second start must not move the anchor
        assert!(!sw.start());
        clock.advance(200);
        assert_eq!(sw.current_elapsed_ms(), 500);

        assert!(sw.stop());
        clock.advance(1_000);
        assert!(!sw.stop());
        assert_eq!(sw.current_elapsed_ms(), 500);
    }

    #[test]
    fn test_stop_before_start_is_noop() {
        let clock = ManualClock::new(7_000);
        let mut sw = TimerEngine::new(&clock);
        assert!(!sw.stop());
        assert_eq!(sw.current_elapsed_ms(), 0);
        assert_eq!(sw.lap(), None);
        assert!(sw.laps().is_empty());
    }

    #[test]
    fn test_reset_from_any_state() {
        let clock = ManualClock::new(0);
        let mut sw = TimerEngine::new(&clock);
        sw.reset();
        assert_eq!(sw.current_elapsed_ms(), 0);

        sw.start();
        clock.advance(900);
        sw.lap();
        sw.reset();
        assert_eq!(sw.state(), TimerState::Stopped);
        assert_eq!(sw.current_elapsed_ms(), 0);
        assert!(sw.laps().is_empty());

        sw.start();
        clock.advance(400);
        sw.stop();
        sw.reset();
        assert_eq!(sw.current_elapsed_ms(), 0);
    }

    #[test]
    fn test_lap_at_1500() {
        let clock = ManualClock::new(0);
        let mut sw = TimerEngine::new(&clock);
        sw.start();
        clock.set(1500);
        let lap = sw.lap().unwrap();
        assert_eq!(lap.index(), 1);
        assert_eq!(lap.elapsed_at_lap_ms(), 1500);
        assert_eq!(format_hms_ms(lap.elapsed_at_lap_ms()), "00:00:01.500");
        // laps don't restart the clock
        assert_eq!(sw.current_elapsed_ms(), 1500);
    }

    #[test]
    fn test_laps_then_reset() {
        let clock = ManualClock::new(0);
        let mut sw = TimerEngine::new(&clock);
        sw.start();
        clock.set(1000);
        sw.lap();
        clock.set(2000);
        sw.lap();
        assert_eq!(sw.laps().len(), 2);
        sw.reset();
        assert!(sw.laps().is_empty());
        assert_eq!(sw.current_elapsed_ms(), 0);
    }

    #[test]
    fn test_lap_ignored_while_paused() {
        let clock = ManualClock::new(0);
        let mut sw = TimerEngine::new(&clock);
        sw.start();
        clock.set(100);
        sw.lap();
        sw.stop();
        assert_eq!(sw.lap(), None);
        sw.start();
        clock.set(400);
        let lap = sw.lap().unwrap();
        assert_eq!(lap.index(), 2);
        assert_eq!(lap.elapsed_at_lap_ms(), 400);
    }

    #[test]
    fn test_backward_clock_clamps() {
        let clock = ManualClock::new(5_000);
        let mut sw = TimerEngine::new(&clock);
        sw.start();
        clock.set(6_000);
        sw.stop();
        sw.start();
        clock.set(4_000);
        assert_eq!(sw.current_elapsed_ms(), 1_000);
        sw.stop();
        assert_eq!(sw.current_elapsed_ms(), 1_000);
    }

    #[test]
    fn test_owned_clock() {
        let mut sw = TimerEngine::new(ManualClock::new(0));
        sw.start();
        sw.clock().advance(3_723_456);
        assert_eq!(sw.formatted().to_string(), "01:02:03.456");
    }
}
