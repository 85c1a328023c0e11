mod format;
mod state;

pub use format::*;
pub use state::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ClockPlayer {
    One,
    Two,
}

impl ClockPlayer {
    pub fn other(&self) -> Self {
        match self {
            ClockPlayer::One => ClockPlayer::Two,
            ClockPlayer::Two => ClockPlayer::One,
        }
    }

    pub fn index(&self) -> usize {
        match self {
            ClockPlayer::One => 0,
            ClockPlayer::Two => 1,
        }
    }

    /// One-based number for display labels.
    pub fn number(&self) -> usize {
        self.index() + 1
    }
}
