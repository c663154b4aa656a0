use crate::effects::ToastBoard;
use super::input::InputController;
use super::items::ItemSet;
use super::progression::LevelProgression;
use super::score::ScoreTracker;
use super::snake::Snake;
use super::speed::{SpeedMode, tick_interval_ms};
use super::types::{Direction, Point};

pub const START_POSITION: Point = Point::new(8, 8);
pub const START_DIRECTION: Direction = Direction::Right;

/// Everything a run mutates. Only `EcoSnakeGame::dispatch` writes to it.
#[derive(Clone, Debug, PartialEq)]
pub struct GameState {
    pub snake: Snake,
    pub input: InputController,
    pub items: ItemSet,
    pub score: ScoreTracker,
    pub progression: LevelProgression,
    pub user_paused: bool,
    pub toasts: ToastBoard,
    pub practice_mode: bool,
    pub speed_mode: SpeedMode,
    pub theme_key: String,
}

impl GameState {
    pub fn new(
        speed_mode: SpeedMode,
        practice_mode: bool,
        toast_duration_ms: u64,
        theme_key: String,
    ) -> Self {
        Self {
            snake: Snake::new(START_POSITION),
            input: InputController::new(START_DIRECTION),
            items: ItemSet::new(),
            score: ScoreTracker::new(),
            progression: LevelProgression::new(),
            user_paused: false,
            toasts: ToastBoard::new(toast_duration_ms),
            practice_mode,
            speed_mode,
            theme_key,
        }
    }

    /// Level transition or explicit pause.
    pub fn is_paused(&self) -> bool {
        self.user_paused || self.progression.is_transitioning()
    }

    /// Movement, spawning and steering are live.
    pub fn is_running(&self) -> bool {
        self.progression.is_playing() && !self.user_paused
    }

    pub fn level(&self) -> u32 {
        self.progression.level()
    }

    pub fn tick_interval_ms(&self) -> u64 {
        tick_interval_ms(self.speed_mode, self.level())
    }
}
