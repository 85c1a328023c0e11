use crate::components::clock_context::ClockContext;
use crate::components::{ClockActions, ClockDisplay, GameOverBanner, TimeControlChooser};
use clock_core::ClockPlayer;
use dioxus::prelude::*;

const CLOCK_CSS: Asset = asset!("/assets/styling/clock.css");

#[component]
pub fn Home() -> Element {
    use_context_provider(ClockContext::new);

    rsx! {
        document::Link { rel: "stylesheet", href: CLOCK_CSS }
        div { id: "clock-view",
            div { class: "clock-card",
                h1 { "Chess Clock" }
                div { class: "clock-row",
                    ClockDisplay { player: ClockPlayer::One }
                    ClockDisplay { player: ClockPlayer::Two }
                }
                TimeControlChooser {}
                ClockActions {}
                GameOverBanner {}
            }
        }
    }
}
