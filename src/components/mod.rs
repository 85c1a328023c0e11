mod clock_actions;
pub mod clock_context;
mod clock_display;
mod game_over_banner;
mod time_control_chooser;

pub use clock_actions::*;
pub use clock_display::*;
pub use game_over_banner::*;
pub use time_control_chooser::*;
