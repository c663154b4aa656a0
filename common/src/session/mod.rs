mod broadcaster;
mod runner;
mod scheduler;

pub use broadcaster::SnapshotBroadcaster;
pub use runner::{EcoSnakeSession, FRAME_INTERVAL, SessionCommand};
pub use scheduler::{Scheduler, TimerKind};
