use crate::components::clock_context::ClockContext;
use clock_core::ClockPhase;
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaArrowsRotate, FaPlay};
use dioxus_free_icons::Icon;

#[component]
pub fn ClockActions() -> Element {
    let mut clock = use_context::<ClockContext>();
    let phase = clock.state.read().phase();

    let turn_button = match phase {
        ClockPhase::Idle => rsx! {
            button {
                class: "primary-button",
                onclick: move |_| clock.start(),
                Icon { icon: FaPlay }
                "Start Game"
            }
        },
        ClockPhase::Running(player) => {
            let number = player.number();
            rsx! {
                button {
                    class: "primary-button",
                    onclick: move |_| clock.switch_turn(),
                    "Player {number} Move"
                }
            }
        }
        ClockPhase::Over => rsx! {},
    };

    rsx! {
        div { class: "clock-actions",
            {turn_button}
            button {
                class: "primary-button",
                onclick: move |_| clock.reset(),
                Icon { icon: FaArrowsRotate }
                "Reset"
            }
        }
    }
}
