pub mod config;
pub mod effects;
pub mod game;
pub mod logger;
pub mod render;
pub mod rng;
pub mod session;
pub mod theme;

pub use game::{Action, EcoSnakeGame, GameEvent, GameSettings, GameSnapshot};
pub use rng::SessionRng;
