use super::items::ItemKind;
use super::state::GameState;
use super::types::{Direction, Point};

/// Greedy steering used by the headless runner: head for the nearest trash,
/// never into a wall or the body, and around nature items when possible.
pub struct Autopilot;

impl Autopilot {
    pub fn choose(state: &GameState) -> Option<Direction> {
        if !state.is_running() {
            return None;
        }

        let head = state.snake.head();
        let heading = state.input.heading();
        let candidates = Self::get_valid_directions(heading);

        let target = Self::find_nearest_trash(head, state);

        let mut best_dir = None;
        let mut best_cost = i32::MAX;

        for dir in candidates {
            let next = head.step(dir);
            if !Self::is_safe_position(next, state) {
                continue;
            }
            let mut cost = match target {
                Some(target) => next.manhattan(&target),
                None => 0,
            };
            if Self::is_nature(next, state) {
                cost += 1000;
            }
            if dir != heading {
                // Prefer going straight on ties.
                cost = cost * 2 + 1;
            } else {
                cost *= 2;
            }
            if cost < best_cost {
                best_cost = cost;
                best_dir = Some(dir);
            }
        }

        Some(best_dir.unwrap_or(heading))
    }

    fn get_valid_directions(current: Direction) -> Vec<Direction> {
        Direction::ALL
            .into_iter()
            .filter(|d| !d.is_opposite(&current))
            .collect()
    }

    fn find_nearest_trash(from: Point, state: &GameState) -> Option<Point> {
        state
            .items
            .iter()
            .filter(|item| item.kind == ItemKind::Trash)
            .min_by_key(|item| from.manhattan(&item.position))
            .map(|item| item.position)
    }

    fn is_safe_position(pos: Point, state: &GameState) -> bool {
        pos.in_bounds() && !state.snake.occupies(&pos)
    }

    fn is_nature(pos: Point, state: &GameState) -> bool {
        state
            .items
            .iter()
            .any(|item| item.kind == ItemKind::Nature && item.position == pos)
    }
}
