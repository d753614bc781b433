//! Stopwatch widget for the browser, built with Yew.
//!
//! The timer core ([`TimerState`], [`TimerEngine`], [`format_elapsed`]) is
//! plain Rust and runs on the host; [`Stopwatch`] wires it to the DOM and to
//! a `setInterval`-backed tick source.

use wasm_bindgen::prelude::*;

pub mod components;
pub mod config;
pub mod engine;
pub mod format;
pub mod state;
pub mod ticker;
mod widget;

pub use engine::{TimerEngine, TimerSnapshot};
pub use format::{format_elapsed, lap_label, parse_elapsed, ElapsedParseError};
pub use state::{TimerCommand, TimerState, TimerStatus, Transition};
pub use ticker::{IntervalScheduler, Scheduler, TickSource};
pub use widget::Stopwatch;

/// Render the widget into an element provided by the host page.
#[wasm_bindgen(js_name = mountStopwatch)]
pub fn mount_stopwatch(root: web_sys::Element) {
    log::info!("Mounting stopwatch into <{}>", root.tag_name().to_lowercase());
    yew::Renderer::<Stopwatch>::with_root(root).render();
}
