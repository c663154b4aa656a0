mod autopilot;
mod engine;
mod input;
mod items;
mod progression;
mod score;
mod settings;
mod snake;
mod snapshot;
mod spawner;
mod speed;
mod state;
mod types;

pub use autopilot::Autopilot;
pub use engine::{Action, EcoSnakeGame, GameEvent};
pub use input::{InputController, InputIntent, KeyCode, accepts_turn};
pub use items::{Item, ItemKind, ItemSet};
pub use progression::{
    CountdownStep, CountdownTick, GameOverReason, LevelProgression, Phase, FIRST_THRESHOLD,
    THRESHOLD_STEP,
};
pub use score::{LIVES_MAX, ScoreTracker};
pub use settings::GameSettings;
pub use snake::{MIN_SHRINK_LENGTH, Snake};
pub use snapshot::GameSnapshot;
pub use spawner::{MAX_ITEMS, PLACEMENT_ATTEMPTS, Placement, SpawnOutcome, find_cell, spawn_item, trash_probability};
pub use speed::{MIN_TICK_MS, SpeedMode, tick_interval_ms};
pub use state::{GameState, START_DIRECTION, START_POSITION};
pub use types::{Axis, CANVAS_SIZE, CELL_SIZE, Direction, GRID_SIZE, Point};
