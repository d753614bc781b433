//! Periodic tick source with explicit arm/disarm.
//!
//! A [`Scheduler`] hands out a handle per periodic callback; dropping the
//! handle cancels the callback. [`TickSource`] keeps at most one such handle
//! alive, so disarming is just releasing it, and dropping the source disarms
//! on every exit path.

use gloo_timers::callback::Interval;
use log::debug;

/// Something that can invoke a callback every `period_ms` milliseconds.
pub trait Scheduler {
    /// Cancels the periodic callback when dropped.
    type Handle;

    fn every(&self, period_ms: u32, on_tick: Box<dyn FnMut()>) -> Self::Handle;
}

/// Browser scheduler backed by `setInterval`.
#[derive(Debug, Clone, Copy, Default)]
pub struct IntervalScheduler;

impl Scheduler for IntervalScheduler {
    type Handle = Interval;

    fn every(&self, period_ms: u32, on_tick: Box<dyn FnMut()>) -> Interval {
        Interval::new(period_ms, on_tick)
    }
}

pub struct TickSource<S: Scheduler> {
    scheduler: S,
    period_ms: u32,
    handle: Option<S::Handle>,
}

impl<S: Scheduler> TickSource<S> {
    pub fn new(scheduler: S, period_ms: u32) -> Self {
        Self {
            scheduler,
            period_ms,
            handle: None,
        }
    }

    pub fn period_ms(&self) -> u32 {
        self.period_ms
    }

    pub fn is_armed(&self) -> bool {
        self.handle.is_some()
    }

    /// Start delivering `on_tick` every period. No-op if already armed.
    pub fn arm<F>(&mut self, on_tick: F)
    where
        F: FnMut() + 'static,
    {
        if self.is_armed() {
            return;
        }
        debug!("Arming tick source every {} ms", self.period_ms);
        self.handle = Some(self.scheduler.every(self.period_ms, Box::new(on_tick)));
    }

    /// Cancel the periodic callback. No-op if not armed.
    pub fn disarm(&mut self) {
        if let Some(handle) = self.handle.take() {
            drop(handle);
            debug!("Tick source disarmed");
        }
    }
}

impl<S: Scheduler> Drop for TickSource<S> {
    fn drop(&mut self) {
        self.disarm();
    }
}
