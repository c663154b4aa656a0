use super::types::Direction;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyCode {
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    W,
    A,
    S,
    D,
}

/// A raw directional intent from either the keyboard or the on-screen pad.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputIntent {
    Key(KeyCode),
    Pad(Direction),
}

impl InputIntent {
    pub fn direction(&self) -> Direction {
        match self {
            InputIntent::Pad(direction) => *direction,
            InputIntent::Key(KeyCode::ArrowUp | KeyCode::W) => Direction::Up,
            InputIntent::Key(KeyCode::ArrowDown | KeyCode::S) => Direction::Down,
            InputIntent::Key(KeyCode::ArrowLeft | KeyCode::A) => Direction::Left,
            InputIntent::Key(KeyCode::ArrowRight | KeyCode::D) => Direction::Right,
        }
    }
}

/// A turn is accepted only onto the other axis than the last executed move.
pub fn accepts_turn(heading: Direction, requested: Direction) -> bool {
    heading.axis() != requested.axis()
}

/// Tracks the queued direction against the heading of the last executed move,
/// so several presses inside one tick can never fold back into the neck.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InputController {
    heading: Direction,
    queued: Direction,
}

impl InputController {
    pub fn new(initial: Direction) -> Self {
        Self {
            heading: initial,
            queued: initial,
        }
    }

    pub fn heading(&self) -> Direction {
        self.heading
    }

    pub fn queued(&self) -> Direction {
        self.queued
    }

    pub fn request(&mut self, requested: Direction) -> bool {
        if !accepts_turn(self.heading, requested) {
            return false;
        }
        self.queued = requested;
        true
    }

    /// Called by the movement tick; the queued direction becomes the heading.
    pub fn commit(&mut self) -> Direction {
        self.heading = self.queued;
        self.heading
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_and_pad_map_to_directions() {
        assert_eq!(InputIntent::Key(KeyCode::ArrowUp).direction(), Direction::Up);
        assert_eq!(InputIntent::Key(KeyCode::A).direction(), Direction::Left);
        assert_eq!(InputIntent::Key(KeyCode::S).direction(), Direction::Down);
        assert_eq!(InputIntent::Pad(Direction::Right).direction(), Direction::Right);
    }

    #[test]
    fn test_reversal_is_rejected() {
        let mut input = InputController::new(Direction::Right);
        assert!(!input.request(Direction::Left));
        assert!(!input.request(Direction::Right));
        assert_eq!(input.queued(), Direction::Right);
    }

    #[test]
    fn test_perpendicular_turn_is_queued_until_commit() {
        let mut input = InputController::new(Direction::Right);
        assert!(input.request(InputIntent::Key(KeyCode::ArrowUp).direction()));
        assert_eq!(input.heading(), Direction::Right);
        assert_eq!(input.commit(), Direction::Up);
    }

    #[test]
    fn test_mashing_within_one_tick_cannot_reverse() {
        let mut input = InputController::new(Direction::Right);
        assert!(input.request(Direction::Up));
        // Still heading right, so left shares the axis of the last real move.
        assert!(!input.request(Direction::Left));
        assert!(input.request(Direction::Down));
        assert_eq!(input.commit(), Direction::Down);
    }
}
