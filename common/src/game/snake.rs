use std::collections::{HashSet, VecDeque};

use super::types::Point;

/// Penalty shrinking stops once the snake is this short.
pub const MIN_SHRINK_LENGTH: usize = 3;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snake {
    body: VecDeque<Point>,
    body_set: HashSet<Point>,
}

impl Snake {
    pub fn new(start: Point) -> Self {
        Self {
            body: VecDeque::from([start]),
            body_set: HashSet::from([start]),
        }
    }

    #[cfg(test)]
    pub(crate) fn from_segments(segments: &[Point]) -> Self {
        Self {
            body: segments.iter().copied().collect(),
            body_set: segments.iter().copied().collect(),
        }
    }

    pub fn head(&self) -> Point {
        // Length never drops below one: `shrink` refuses at MIN_SHRINK_LENGTH.
        self.body[0]
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn segments(&self) -> impl Iterator<Item = &Point> {
        self.body.iter()
    }

    pub fn occupies(&self, point: &Point) -> bool {
        self.body_set.contains(point)
    }

    /// Prepends a new head and keeps the tail.
    pub fn grow(&mut self, head: Point) {
        self.body.push_front(head);
        self.body_set.insert(head);
    }

    /// Prepends a new head and drops the tail; length unchanged.
    pub fn advance(&mut self, head: Point) {
        if let Some(tail) = self.body.pop_back() {
            self.body_set.remove(&tail);
        }
        self.grow(head);
    }

    /// Drops one tail segment if the snake is longer than `MIN_SHRINK_LENGTH`.
    pub fn shrink(&mut self) -> bool {
        if self.body.len() <= MIN_SHRINK_LENGTH {
            return false;
        }
        if let Some(tail) = self.body.pop_back() {
            self.body_set.remove(&tail);
        }
        true
    }
}
