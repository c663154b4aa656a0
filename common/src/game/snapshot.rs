use crate::effects::{Particle, Toast};
use crate::render::{CanvasState, Sprite};
use super::progression::{GameOverReason, Phase};
use super::speed::SpeedMode;

/// Owned view of a game for hosts; cheap enough to publish every frame.
#[derive(Clone, Debug, PartialEq)]
pub struct GameSnapshot {
    pub now_ms: u64,
    pub canvas: CanvasState,
    pub sprites: Vec<Sprite>,
    pub toasts: Vec<Toast>,
    pub particles: Vec<Particle>,
    pub phase: Phase,
    pub countdown: Option<u8>,
    pub paused: bool,
    pub score: u32,
    pub level: u32,
    pub next_threshold: u32,
    pub mistakes: u32,
    pub lives_left: u32,
    pub snake_length: usize,
    pub practice_mode: bool,
    pub speed_mode: SpeedMode,
    pub tick_interval_ms: u64,
    pub theme_label: String,
    pub muted: bool,
    pub seed: u64,
}

impl GameSnapshot {
    pub fn game_over_reason(&self) -> Option<GameOverReason> {
        match self.phase {
            Phase::GameOver(reason) => Some(reason),
            _ => None,
        }
    }

    /// Steering is ignored before start, after game over and while paused.
    pub fn accepts_input(&self) -> bool {
        self.phase == Phase::Playing && !self.paused
    }
}
