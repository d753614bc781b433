//! The stopwatch widget: owns a [`TimerEngine`] and routes every inbound
//! signal through Yew's message queue.

use crate::components::{Controls, LapList, TimeDisplay};
use crate::config::{CLASS_HEADING, CLASS_PANEL, CLASS_ROOT, HEADING};
use crate::engine::TimerEngine;
use crate::state::TimerCommand;
use crate::ticker::IntervalScheduler;
use log::info;
use std::rc::Rc;
use yew::prelude::*;

pub struct Stopwatch {
    engine: TimerEngine<IntervalScheduler>,
}

impl Component for Stopwatch {
    type Message = TimerCommand;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        info!("Stopwatch mounted");
        let on_tick = ctx.link().callback(TimerCommand::Tick);
        Self {
            engine: TimerEngine::new(IntervalScheduler, on_tick),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        self.engine.apply(msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let snapshot = self.engine.snapshot();

        html! {
            <div class={CLASS_ROOT}>
                <h4 class={CLASS_HEADING}>{ HEADING }</h4>
                <div class={CLASS_PANEL}>
                    <TimeDisplay elapsed_ms={snapshot.elapsed_ms} />
                    <Controls
                        running={snapshot.running}
                        on_toggle={link.callback(|_| TimerCommand::ToggleRunning)}
                        on_reset={link.callback(|_| TimerCommand::Reset)}
                        on_lap={link.callback(|_| TimerCommand::Lap)}
                    />
                    <LapList laps={Rc::new(snapshot.laps)} />
                </div>
            </div>
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        self.engine.teardown();
        info!("Stopwatch unmounted");
    }
}
