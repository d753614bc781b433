//! Pure Yew view components for the stopwatch widget.
//!
//! These components only render props and forward clicks; timer state lives
//! in the engine owned by [`crate::Stopwatch`].

use crate::config::{
    CLASS_CONTROLS, CLASS_LAP_LIST, CLASS_TIME_DISPLAY, LABEL_LAP, LABEL_RESET, LABEL_START,
    LABEL_STOP,
};
use crate::format::{format_elapsed, lap_label};
use std::rc::Rc;
use yew::prelude::*;

/// Label of the start/stop button for the given run state.
pub fn toggle_label(running: bool) -> &'static str {
    if running {
        LABEL_STOP
    } else {
        LABEL_START
    }
}

#[derive(Properties, PartialEq)]
pub struct TimeDisplayProps {
    pub elapsed_ms: u64,
}

#[function_component(TimeDisplay)]
pub fn time_display(props: &TimeDisplayProps) -> Html {
    html! {
        <div class={CLASS_TIME_DISPLAY}>{ format_elapsed(props.elapsed_ms) }</div>
    }
}

/// Start/stop, reset and lap buttons. Lap is disabled while idle.
#[derive(Properties, PartialEq)]
pub struct ControlsProps {
    pub running: bool,
    pub on_toggle: Callback<MouseEvent>,
    pub on_reset: Callback<MouseEvent>,
    pub on_lap: Callback<MouseEvent>,
}

#[function_component(Controls)]
pub fn controls(props: &ControlsProps) -> Html {
    html! {
        <div class={CLASS_CONTROLS}>
            <button onclick={props.on_toggle.clone()}>{ toggle_label(props.running) }</button>
            <button onclick={props.on_reset.clone()}>{ LABEL_RESET }</button>
            <button onclick={props.on_lap.clone()} disabled={!props.running}>{ LABEL_LAP }</button>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct LapListProps {
    pub laps: Rc<Vec<u64>>,
}

#[function_component(LapList)]
pub fn lap_list(props: &LapListProps) -> Html {
    html! {
        <div class={CLASS_LAP_LIST}>
            <ul>
                { props.laps.iter().enumerate().map(|(idx, &lap_ms)| {
                    html! { <li key={idx}>{ lap_label(idx, lap_ms) }</li> }
                }).collect::<Html>() }
            </ul>
        </div>
    }
}
