use clock_core::ClockState;
use dioxus::dioxus_core::Task;
use dioxus::logger::tracing;
use dioxus::prelude::*;
use std::time::Duration;

/// Shared clock state plus the single repeating ticker task.
///
/// The ticker runs iff a player is active and the game is not over. Every
/// transition that changes the active player or ends the game goes through
/// here so the old task is cancelled on the UI thread before the new state
/// becomes observable; a tick for a stale player can never apply.
#[derive(Clone, Copy)]
pub struct ClockContext {
    pub state: Signal<ClockState>,
    ticker: Signal<Option<Task>>,
}

impl ClockContext {
    pub fn new() -> Self {
        ClockContext {
            state: Signal::new(ClockState::default()),
            ticker: Signal::new(None),
        }
    }

    pub fn start(&mut self) {
        self.state.write().start_game();
        tracing::info!("Game started: {:?}", self.state.peek().config());
        self.restart_ticker();
    }

    pub fn switch_turn(&mut self) {
        self.state.write().switch_turn();
        self.restart_ticker();
    }

    pub fn reset(&mut self) {
        self.state.write().reset_game();
        self.restart_ticker();
    }

    // Config changes touch neither the active player nor the over-flag, so
    // the running ticker (if any) is left alone.
    pub fn set_duration(&mut self, minutes: u64) {
        self.state.write().set_duration(minutes);
    }

    pub fn set_increment(&mut self, seconds: u64) {
        self.state.write().set_increment(seconds);
    }

    fn restart_ticker(&mut self) {
        if let Some(task) = self.ticker.write().take() {
            task.cancel();
        }
        if !self.state.peek().is_running() {
            return;
        }
        let mut ctx = *self;
        let task = spawn(async move {
            loop {
                crate::future::sleep(Duration::from_secs(1)).await;
                let mut state = ctx.state.write();
                state.tick();
                if state.is_over() {
                    let winner = state.winner();
                    drop(state);
                    ctx.ticker.set(None);
                    if let Some(winner) = winner {
                        tracing::info!("Flag fell, player {} wins on time", winner.number());
                    }
                    break;
                }
            }
        });
        self.ticker.set(Some(task));
    }
}

impl Default for ClockContext {
    fn default() -> Self {
        ClockContext::new()
    }
}
