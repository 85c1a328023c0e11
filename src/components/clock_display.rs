use crate::components::clock_context::ClockContext;
use clock_core::{format_time, ClockPlayer};
use dioxus::prelude::*;

#[component]
pub fn ClockDisplay(player: ClockPlayer) -> Element {
    let clock = use_context::<ClockContext>();
    let state = clock.state.read();

    let active = state.active_player() == Some(player) && !state.is_over();
    let time_str = format_time(state.time_of(player));
    let number = player.number();

    rsx! {
        div {
            class: "clock-display",
            class: if active { "active" } else { "" },
            h2 { "Player {number}" }
            p { class: "clock-time", "{time_str}" }
        }
    }
}
