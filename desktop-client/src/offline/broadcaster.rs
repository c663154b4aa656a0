use common::game::{GameEvent, GameSnapshot};
use common::session::SnapshotBroadcaster;
use crate::state::SharedState;

#[derive(Clone)]
pub struct LocalBroadcaster {
    shared_state: SharedState,
}

impl LocalBroadcaster {
    pub fn new(shared_state: SharedState) -> Self {
        Self { shared_state }
    }
}

impl SnapshotBroadcaster for LocalBroadcaster {
    async fn broadcast_snapshot(&self, snapshot: GameSnapshot, events: Vec<GameEvent>) {
        for event in &events {
            if let Some(line) = describe_event(event) {
                self.shared_state.push_event(line);
            }
        }
        self.shared_state.set_snapshot(snapshot);
    }

    async fn broadcast_shutdown(&self, final_snapshot: GameSnapshot) {
        self.shared_state.set_snapshot(final_snapshot);
        self.shared_state.set_session_closed();
    }
}

/// One feed line per event worth showing; steering and spawns stay quiet.
pub fn describe_event(event: &GameEvent) -> Option<String> {
    match event {
        GameEvent::Started => Some("Go!".to_string()),
        GameEvent::Restarted => Some("New run".to_string()),
        GameEvent::Collected { word, .. } => Some(format!("Collected {} (+1)", word)),
        GameEvent::Missed { word, mistakes, .. } => {
            Some(format!("Oops, {} belongs to nature (mistake {})", word, mistakes))
        }
        GameEvent::LevelUp { level } => Some(format!("Level {}!", level)),
        GameEvent::Resumed => Some("Go!".to_string()),
        GameEvent::PauseToggled(true) => Some("Paused".to_string()),
        GameEvent::PauseToggled(false) => Some("Resumed".to_string()),
        GameEvent::SpeedChanged { interval_ms } => Some(format!("Tick every {} ms", interval_ms)),
        GameEvent::GameOver(reason) => Some(format!("Game over: snake {}", reason.describe())),
        GameEvent::Turned(_)
        | GameEvent::ItemSpawned(_)
        | GameEvent::Celebrate
        | GameEvent::Countdown(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::game::{Direction, GameOverReason, Point};

    #[test]
    fn test_collect_and_miss_lines_name_the_word() {
        let collected = GameEvent::Collected { word: "bottle".to_string(), at: Point::new(1, 1) };
        assert_eq!(describe_event(&collected).as_deref(), Some("Collected bottle (+1)"));

        let missed = GameEvent::Missed { word: "tree".to_string(), at: Point::new(1, 1), mistakes: 2 };
        assert!(describe_event(&missed).unwrap().contains("tree"));
    }

    #[test]
    fn test_quiet_events_are_skipped() {
        assert_eq!(describe_event(&GameEvent::Turned(Direction::Up)), None);
        assert_eq!(describe_event(&GameEvent::Celebrate), None);
    }

    #[test]
    fn test_game_over_line_carries_reason() {
        let line = describe_event(&GameEvent::GameOver(GameOverReason::WallCollision)).unwrap();
        assert!(line.starts_with("Game over"));
    }
}
