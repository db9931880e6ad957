use crate::clock::Clock;
use crate::engine::TimerEngine;
use crate::schedule::{Scheduler, TickToken};
use crate::view::{Controls, StopwatchView};

pub const DEFAULT_TICK_INTERVAL_MS: u64 = 10;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct StopwatchConfig {
    pub tick_interval_ms: u64,
}

impl Default for StopwatchConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
        }
    }
}

/// Drives a `TimerEngine` from user actions and refresh ticks.
pub struct StopwatchWidget<C: Clock, S: Scheduler, V: StopwatchView> {
    engine: TimerEngine<C>,
    scheduler: S,
    view: V,
    config: StopwatchConfig,
    active_tick: Option<TickToken>,
    next_token: u32,
}

impl<C: Clock, S: Scheduler, V: StopwatchView> StopwatchWidget<C, S, V> {
    pub fn new(clock: C, scheduler: S, view: V, config: StopwatchConfig) -> Self {
        let config = if config.tick_interval_ms == 0 {
            StopwatchConfig::default()
        } else {
            config
        };
        Self {
            engine: TimerEngine::new(clock),
            scheduler,
            view,
            config,
            active_tick: None,
            next_token: 1,
        }
    }

    /// Initial render: zero time, empty lap list, stopped controls.
    pub fn init(&mut self) {
        self.render_all();
    }

    pub fn start(&mut self) {
        if !self.engine.start() {
            return;
        }
        self.schedule_tick();
        self.view.render_controls(Controls::for_state(self.engine.state()));
    }

    pub fn stop(&mut self) {
        if !self.engine.stop() {
            return;
        }
        self.cancel_tick();
        self.view.render_time(&self.engine.formatted());
        self.view.render_controls(Controls::for_state(self.engine.state()));
    }

    pub fn reset(&mut self) {
        self.cancel_tick();
        self.engine.reset();
        self.render_all();
    }

    pub fn lap(&mut self) {
        if self.engine.lap().is_some() {
            self.view.render_laps(self.engine.laps().entries_newest_first());
        }
    }

    /// Returns false for ticks that were cancelled or belong to an older run.
    pub fn on_tick(&mut self, token: TickToken) -> bool {
        if self.active_tick != Some(token) || !self.engine.is_running() {
            return false;
        }
        self.view.render_time(&self.engine.formatted());
        true
    }

    pub fn engine(&self) -> &TimerEngine<C> {
        &self.engine
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn active_tick(&self) -> Option<TickToken> {
        self.active_tick
    }

    pub fn config(&self) -> StopwatchConfig {
        self.config
    }

    fn render_all(&mut self) {
        self.view.render_time(&self.engine.formatted());
        self.view.render_laps(self.engine.laps().entries_newest_first());
        self.view.render_controls(Controls::for_state(self.engine.state()));
    }

    fn schedule_tick(&mut self) {
        self.cancel_tick();
        let token = TickToken(self.next_token);
        self.next_token = self.next_token.wrapping_add(1);
        self.scheduler.schedule_repeating(self.config.tick_interval_ms, token);
        self.active_tick = Some(token);
    }

    fn cancel_tick(&mut self) {
        if let Some(token) = self.active_tick.take() {
            self.scheduler.cancel(token);
        }
    }
}
