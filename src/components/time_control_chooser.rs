use crate::components::clock_context::ClockContext;
use clock_core::ClockConfig;
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaClock, FaPlus};
use dioxus_free_icons::Icon;

#[component]
pub fn TimeControlChooser() -> Element {
    let mut clock = use_context::<ClockContext>();
    let config = clock.state.read().config();

    rsx! {
        div { id: "time-control-chooser",
            div { class: "category-header",
                Icon { icon: FaClock }
                "Game Duration"
            }
            div { class: "category-container",
                for minutes in ClockConfig::DURATION_CHOICES {
                    button {
                        class: "duration-button",
                        class: if config.duration_minutes == minutes { "current" } else { "" },
                        onclick: move |_| clock.set_duration(minutes),
                        "{minutes} minutes"
                    }
                }
            }
            div { class: "category-header",
                Icon { icon: FaPlus }
                "Increment (seconds)"
            }
            div { class: "category-container",
                for seconds in 0..=ClockConfig::MAX_INCREMENT {
                    button {
                        class: "increment-button",
                        class: if config.increment_seconds == seconds { "current" } else { "" },
                        onclick: move |_| clock.set_increment(seconds),
                        "{seconds}"
                    }
                }
            }
        }
    }
}
