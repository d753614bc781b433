//! Timer state and its pure transitions.
//!
//! `TimerState` is plain owned data. Every operation mutates it in place and
//! reports what the tick source has to do afterwards, so whoever owns the
//! state (the engine, a test) decides how arming actually happens.

use crate::config::TICK_INCREMENT_MS;
use log::debug;

/// Run/stop status derived from [`TimerState::running`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerStatus {
    Idle,
    Running,
}

/// What the tick source must do after a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Armed,
    Disarmed,
    Unchanged,
}

/// Inbound command signals: the three user controls plus the periodic tick.
///
/// `Tick` carries the arming generation it was emitted for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerCommand {
    ToggleRunning,
    Reset,
    Lap,
    Tick(u64),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TimerState {
    pub elapsed_ms: u64,
    pub running: bool,
    pub laps: Vec<u64>,
    /// Number of Idle -> Running transitions so far. Never rewound.
    generation: u64,
}

impl TimerState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> TimerStatus {
        if self.running {
            TimerStatus::Running
        } else {
            TimerStatus::Idle
        }
    }

    /// Generation of the current (or most recent) arming.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn toggle_running(&mut self) -> Transition {
        self.running = !self.running;
        if self.running {
            self.generation = self.generation.wrapping_add(1);
            debug!(
                "Timer started at {} ms (generation {})",
                self.elapsed_ms, self.generation
            );
            Transition::Armed
        } else {
            debug!("Timer stopped at {} ms", self.elapsed_ms);
            Transition::Disarmed
        }
    }

    pub fn reset(&mut self) -> Transition {
        let was_running = self.running;
        self.running = false;
        self.elapsed_ms = 0;
        self.laps.clear();
        debug!("Timer reset (was running: {})", was_running);
        if was_running {
            Transition::Disarmed
        } else {
            Transition::Unchanged
        }
    }

    /// Append the current elapsed time to the lap list.
    ///
    /// Ignored while idle. Returns whether a lap was recorded.
    pub fn record_lap(&mut self) -> bool {
        if !self.running {
            debug!("Lap ignored while idle");
            return false;
        }
        self.laps.push(self.elapsed_ms);
        debug!("Lap {} recorded at {} ms", self.laps.len(), self.elapsed_ms);
        true
    }

    /// Apply one tick of the fixed increment.
    ///
    /// Ticks are additive, not wall-clock deltas. A tick whose generation does
    /// not match the current arming, or that arrives while idle, is dropped.
    pub fn tick(&mut self, generation: u64) -> bool {
        if !self.running || generation != self.generation {
            return false;
        }
        self.elapsed_ms = self.elapsed_ms.saturating_add(TICK_INCREMENT_MS);
        true
    }

    pub fn apply(&mut self, command: TimerCommand) -> Transition {
        match command {
            TimerCommand::ToggleRunning => self.toggle_running(),
            TimerCommand::Reset => self.reset(),
            TimerCommand::Lap => {
                self.record_lap();
                Transition::Unchanged
            }
            TimerCommand::Tick(generation) => {
                self.tick(generation);
                Transition::Unchanged
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ticks(state: &mut TimerState, n: usize) {
        let generation = state.generation();
        for _ in 0..n {
            state.tick(generation);
        }
    }

    #[test]
    fn test_initial_state() {
        let state = TimerState::new();
        assert_eq!(state.elapsed_ms, 0);
        assert!(!state.running);
        assert!(state.laps.is_empty());
        assert_eq!(state.status(), TimerStatus::Idle);
    }

    #[test]
    fn test_toggle_reports_arm_and_disarm() {
        let mut state = TimerState::new();
        assert_eq!(state.toggle_running(), Transition::Armed);
        assert_eq!(state.status(), TimerStatus::Running);
        assert_eq!(state.toggle_running(), Transition::Disarmed);
        assert_eq!(state.status(), TimerStatus::Idle);
    }

    #[test]
    fn test_start_stop_without_tick_keeps_elapsed() {
        let mut state = TimerState::new();
        state.toggle_running();
        ticks(&mut state, 3);
        state.toggle_running();
        let before = state.elapsed_ms;

        state.toggle_running();
        state.toggle_running();
        assert_eq!(state.elapsed_ms, before);
    }

    #[test]
    fn test_lap_while_idle_is_ignored() {
        let mut state = TimerState::new();
        assert!(!state.record_lap());
        assert!(state.laps.is_empty());

        state.toggle_running();
        ticks(&mut state, 2);
        state.toggle_running();
        assert!(!state.record_lap());
        assert!(state.laps.is_empty());
    }

    #[test]
    fn test_lap_sequence() {
        let mut state = TimerState::new();
        state.apply(TimerCommand::ToggleRunning);
        ticks(&mut state, 5);
        assert_eq!(state.elapsed_ms, 50);
        state.apply(TimerCommand::Lap);
        ticks(&mut state, 3);
        assert_eq!(state.elapsed_ms, 80);
        state.apply(TimerCommand::Lap);
        assert_eq!(state.laps, vec![50, 80]);
    }

    #[test]
    fn test_reset_from_any_state() {
        let mut idle = TimerState::new();
        assert_eq!(idle.reset(), Transition::Unchanged);

        let mut running = TimerState::new();
        running.toggle_running();
        ticks(&mut running, 4);
        running.record_lap();
        assert_eq!(running.reset(), Transition::Disarmed);

        let mut stopped = TimerState::new();
        stopped.toggle_running();
        ticks(&mut stopped, 7);
        stopped.record_lap();
        stopped.toggle_running();
        assert_eq!(stopped.reset(), Transition::Unchanged);

        for state in [idle, running, stopped] {
            assert_eq!(state.elapsed_ms, 0);
            assert!(!state.running);
            assert!(state.laps.is_empty());
        }
    }

    #[test]
    fn test_tick_while_idle_is_dropped() {
        let mut state = TimerState::new();
        assert!(!state.tick(state.generation()));
        assert_eq!(state.elapsed_ms, 0);
    }

    #[test]
    fn test_stale_generation_is_dropped_after_restart() {
        let mut state = TimerState::new();
        state.toggle_running();
        let first = state.generation();
        ticks(&mut state, 2);
        state.toggle_running();

        // A tick queued by the first arming lands after stop and restart.
        state.toggle_running();
        assert!(!state.tick(first));
        assert_eq!(state.elapsed_ms, 20);
        assert!(state.tick(state.generation()));
        assert_eq!(state.elapsed_ms, 30);
    }

    #[test]
    fn test_reset_does_not_rewind_generation() {
        let mut state = TimerState::new();
        state.toggle_running();
        let before = state.generation();
        state.reset();
        state.toggle_running();
        assert!(state.generation() > before);
        assert!(!state.tick(before));
    }
}
