use crate::components::clock_context::ClockContext;
use dioxus::prelude::*;

#[component]
pub fn GameOverBanner() -> Element {
    let clock = use_context::<ClockContext>();

    let Some(winner) = clock.state.read().winner() else {
        return rsx! {};
    };
    let number = winner.number();

    rsx! {
        div { class: "game-over-banner",
            p { "Game Over! Player {number} wins!" }
        }
    }
}
