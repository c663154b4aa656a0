use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::{Instant, MissedTickBehavior, interval};

use crate::game::{Action, Autopilot, EcoSnakeGame, GameEvent, GameSnapshot};
use crate::log;
use super::broadcaster::SnapshotBroadcaster;

/// Host frame clock. Game timers are resolved against it, not driven by it.
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionCommand {
    Dispatch(Action),
    SetAutopilot(bool),
    Shutdown,
}

pub struct EcoSnakeSession;

impl EcoSnakeSession {
    /// Runs until `Shutdown` arrives or every command sender is dropped.
    /// Returns the last snapshot taken after the game was shut down.
    pub async fn run(
        mut game: EcoSnakeGame,
        mut commands: mpsc::UnboundedReceiver<SessionCommand>,
        broadcaster: impl SnapshotBroadcaster,
    ) -> GameSnapshot {
        let started_at = Instant::now();
        let mut frame_timer = interval(FRAME_INTERVAL);
        frame_timer.set_missed_tick_behavior(MissedTickBehavior::Skip);
        let mut autopilot = false;

        log!("Session started (seed {})", game.seed());

        loop {
            tokio::select! {
                _ = frame_timer.tick() => {
                    let now_ms = started_at.elapsed().as_millis() as u64;
                    let events = Self::drive_frame(&mut game, autopilot, now_ms);
                    broadcaster.broadcast_snapshot(game.snapshot(), events).await;
                }
                command = commands.recv() => {
                    match command {
                        Some(SessionCommand::Dispatch(action)) => {
                            let events = game.dispatch(action);
                            if !events.is_empty() {
                                broadcaster.broadcast_snapshot(game.snapshot(), events).await;
                            }
                        }
                        Some(SessionCommand::SetAutopilot(enabled)) => {
                            log!("Autopilot {}", if enabled { "engaged" } else { "released" });
                            autopilot = enabled;
                        }
                        Some(SessionCommand::Shutdown) | None => break,
                    }
                }
            }
        }

        game.shutdown();
        let final_snapshot = game.snapshot();
        log!(
            "Session stopped at {} ms (score {}, level {})",
            final_snapshot.now_ms,
            final_snapshot.score,
            final_snapshot.level
        );
        broadcaster.broadcast_shutdown(final_snapshot.clone()).await;
        final_snapshot
    }

    /// One host frame: optional autopilot steering, then the clock advance.
    pub fn drive_frame(game: &mut EcoSnakeGame, autopilot: bool, now_ms: u64) -> Vec<GameEvent> {
        let mut events = Vec::new();
        if autopilot && let Some(direction) = Autopilot::choose(game.state()) {
            events.extend(game.dispatch(Action::Turn(direction)));
        }
        events.extend(game.dispatch(Action::Advance { now_ms }));
        events
    }

    /// Drives a game on a simulated clock without any runtime, one frame at a time.
    pub fn run_headless(game: &mut EcoSnakeGame, frames: u64) -> Vec<GameEvent> {
        let frame_ms = FRAME_INTERVAL.as_millis() as u64;
        let mut events = game.dispatch(Action::Start);
        for frame in 1..=frames {
            events.extend(Self::drive_frame(game, true, frame * frame_ms));
            if game.state().progression.is_game_over() {
                break;
            }
        }
        events
    }
}
