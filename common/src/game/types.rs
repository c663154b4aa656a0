use serde::{Deserialize, Serialize};

/// Cells per side of the square playing field.
pub const GRID_SIZE: i32 = 20;
/// Pixel edge of one cell on the drawing surface.
pub const CELL_SIZE: f32 = 20.0;
pub const CANVAS_SIZE: f32 = GRID_SIZE as f32 * CELL_SIZE;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn in_bounds(&self) -> bool {
        (0..GRID_SIZE).contains(&self.x) && (0..GRID_SIZE).contains(&self.y)
    }

    pub fn step(&self, direction: Direction) -> Point {
        let (dx, dy) = direction.delta();
        Point::new(self.x + dx, self.y + dy)
    }

    pub fn manhattan(&self, other: &Point) -> i32 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }

    /// Top-left pixel of this cell.
    pub fn to_pixel(&self) -> (f32, f32) {
        (self.x as f32 * CELL_SIZE, self.y as f32 * CELL_SIZE)
    }

    pub fn center_pixel(&self) -> (f32, f32) {
        let (x, y) = self.to_pixel();
        (x + CELL_SIZE / 2.0, y + CELL_SIZE / 2.0)
    }

    pub fn from_pixel(x: f32, y: f32) -> Option<Point> {
        if x < 0.0 || y < 0.0 {
            return None;
        }
        let cell = Point::new((x / CELL_SIZE) as i32, (y / CELL_SIZE) as i32);
        cell.in_bounds().then_some(cell)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    /// Unit vector; y grows downwards.
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
        }
    }

    pub fn axis(&self) -> Axis {
        match self {
            Direction::Left | Direction::Right => Axis::Horizontal,
            Direction::Up | Direction::Down => Axis::Vertical,
        }
    }

    pub fn is_opposite(&self, other: &Direction) -> bool {
        self.axis() == other.axis() && self != other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_cover_exactly_the_grid() {
        assert!(Point::new(0, 0).in_bounds());
        assert!(Point::new(GRID_SIZE - 1, GRID_SIZE - 1).in_bounds());
        assert!(!Point::new(-1, 5).in_bounds());
        assert!(!Point::new(5, GRID_SIZE).in_bounds());
    }

    #[test]
    fn test_step_follows_unit_vectors() {
        let p = Point::new(8, 8);
        assert_eq!(p.step(Direction::Right), Point::new(9, 8));
        assert_eq!(p.step(Direction::Left), Point::new(7, 8));
        assert_eq!(p.step(Direction::Up), Point::new(8, 7));
        assert_eq!(p.step(Direction::Down), Point::new(8, 9));
    }

    #[test]
    fn test_pixel_mapping_round_trips_through_cell_centers() {
        let p = Point::new(3, 17);
        let (cx, cy) = p.center_pixel();
        assert_eq!(Point::from_pixel(cx, cy), Some(p));
        assert_eq!(Point::from_pixel(-1.0, 4.0), None);
        assert_eq!(Point::from_pixel(CANVAS_SIZE + 1.0, 4.0), None);
    }

    #[test]
    fn test_opposites_share_an_axis() {
        assert!(Direction::Left.is_opposite(&Direction::Right));
        assert!(Direction::Up.is_opposite(&Direction::Down));
        assert!(!Direction::Up.is_opposite(&Direction::Left));
        assert!(!Direction::Up.is_opposite(&Direction::Up));
    }
}
