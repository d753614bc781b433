//! Timer engine: owns the timer state and the tick source that drives it.
//!
//! Ticks never mutate the state from inside the scheduler callback. The
//! callback only forwards the arming generation to the host through
//! `on_tick`, and the host feeds it back as [`TimerCommand::Tick`] in the
//! same queue as user commands.

use crate::config::TICK_INTERVAL_MS;
use crate::format::format_elapsed;
use crate::state::{TimerCommand, TimerState, Transition};
use crate::ticker::{Scheduler, TickSource};
use log::{debug, info};
use serde::Serialize;
use yew::Callback;

/// What the presentation layer needs to draw the widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimerSnapshot {
    pub elapsed_ms: u64,
    pub running: bool,
    pub laps: Vec<u64>,
    pub formatted: String,
}

pub struct TimerEngine<S: Scheduler> {
    state: TimerState,
    ticks: TickSource<S>,
    on_tick: Callback<u64>,
}

impl<S: Scheduler> TimerEngine<S> {
    pub fn new(scheduler: S, on_tick: Callback<u64>) -> Self {
        Self {
            state: TimerState::new(),
            ticks: TickSource::new(scheduler, TICK_INTERVAL_MS),
            on_tick,
        }
    }

    pub fn state(&self) -> &TimerState {
        &self.state
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.state.elapsed_ms
    }

    pub fn is_running(&self) -> bool {
        self.state.running
    }

    pub fn laps(&self) -> &[u64] {
        &self.state.laps
    }

    pub fn is_armed(&self) -> bool {
        self.ticks.is_armed()
    }

    pub fn formatted(&self) -> String {
        format_elapsed(self.state.elapsed_ms)
    }

    pub fn snapshot(&self) -> TimerSnapshot {
        TimerSnapshot {
            elapsed_ms: self.state.elapsed_ms,
            running: self.state.running,
            laps: self.state.laps.clone(),
            formatted: self.formatted(),
        }
    }

    pub fn toggle_running(&mut self) {
        let transition = self.state.toggle_running();
        self.follow(transition);
    }

    pub fn reset(&mut self) {
        let transition = self.state.reset();
        self.follow(transition);
    }

    pub fn record_lap(&mut self) -> bool {
        self.state.record_lap()
    }

    pub fn tick(&mut self, generation: u64) -> bool {
        self.state.tick(generation)
    }

    /// Apply one queued command. Returns whether the view needs a redraw.
    pub fn apply(&mut self, command: TimerCommand) -> bool {
        match command {
            TimerCommand::ToggleRunning => {
                self.toggle_running();
                true
            }
            TimerCommand::Reset => {
                self.reset();
                true
            }
            TimerCommand::Lap => self.record_lap(),
            TimerCommand::Tick(generation) => self.tick(generation),
        }
    }

    /// Stop delivering ticks before the engine is discarded.
    pub fn teardown(&mut self) {
        if self.ticks.is_armed() {
            info!("Tearing down running timer at {} ms", self.state.elapsed_ms);
        }
        self.ticks.disarm();
    }

    fn follow(&mut self, transition: Transition) {
        match transition {
            Transition::Armed => {
                let on_tick = self.on_tick.clone();
                let generation = self.state.generation();
                self.ticks.arm(move || on_tick.emit(generation));
            }
            Transition::Disarmed => self.ticks.disarm(),
            Transition::Unchanged => {}
        }
        debug!(
            "Transition {:?}: running={}, armed={}",
            transition,
            self.state.running,
            self.ticks.is_armed()
        );
    }
}
