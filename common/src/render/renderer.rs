use crate::effects::Particle;
use crate::game::{CANVAS_SIZE, CELL_SIZE, Direction, GRID_SIZE};
use crate::theme::Flourish;
use super::{Canvas, CanvasState, Rgba};

const SEGMENT_INSET: f32 = 1.5;
const SPECKS_PER_CELL_CHANCE: u32 = 5;

pub struct Renderer;

impl Renderer {
    pub fn draw(canvas: &mut impl Canvas, state: &CanvasState) {
        Self::draw_background(canvas, state);
        Self::draw_flourish(canvas, state);
        Self::draw_snake(canvas, state);
    }

    pub fn draw_particles(canvas: &mut impl Canvas, particles: &[Particle]) {
        for particle in particles {
            canvas.fill_circle(particle.x, particle.y, particle.size, particle.faded_color());
        }
    }

    fn draw_background(canvas: &mut impl Canvas, state: &CanvasState) {
        let palette = &state.palette;
        canvas.fill_rect(0.0, 0.0, CANVAS_SIZE, CANVAS_SIZE, 0.0, palette.background);

        let seed = texture_seed(&state.theme_key);
        for y in 0..GRID_SIZE {
            for x in 0..GRID_SIZE {
                let px = x as f32 * CELL_SIZE;
                let py = y as f32 * CELL_SIZE;
                if (x + y) % 2 == 1 {
                    canvas.fill_rect(px, py, CELL_SIZE, CELL_SIZE, 0.0, palette.background_alt);
                }
                let hash = cell_hash(seed, x, y);
                if hash % SPECKS_PER_CELL_CHANCE == 0 {
                    let ox = (hash >> 8) % CELL_SIZE as u32;
                    let oy = (hash >> 16) % CELL_SIZE as u32;
                    let speck = palette.background_alt.mix(palette.accent, 0.35).with_alpha(120);
                    canvas.fill_circle(px + ox as f32, py + oy as f32, 1.2, speck);
                }
            }
        }
    }

    fn draw_flourish(canvas: &mut impl Canvas, state: &CanvasState) {
        let accent = state.palette.accent;
        match state.flourish {
            Flourish::None => {}
            Flourish::Leaves => {
                let leaf = accent.with_alpha(90);
                for i in 0..6 {
                    let offset = i as f32 * CANVAS_SIZE / 6.0 + CELL_SIZE;
                    canvas.fill_circle(offset, CELL_SIZE * 0.4, CELL_SIZE * 0.6, leaf);
                    canvas.fill_circle(CANVAS_SIZE - offset, CANVAS_SIZE - CELL_SIZE * 0.4, CELL_SIZE * 0.6, leaf);
                }
            }
            Flourish::Waves => {
                let crest = accent.with_alpha(70);
                let base = CANVAS_SIZE - CELL_SIZE * 0.5;
                for i in 0..=(GRID_SIZE * 2) {
                    let x = i as f32 * CELL_SIZE / 2.0;
                    let lift = if i % 2 == 0 { 0.0 } else { CELL_SIZE * 0.25 };
                    canvas.fill_circle(x, base - lift, CELL_SIZE * 0.45, crest);
                }
            }
            Flourish::Skyline => {
                let building = accent.with_alpha(60);
                let heights = [3.0, 5.0, 2.0, 6.0, 4.0, 2.5, 5.5, 3.5, 4.5, 2.0];
                let width = CANVAS_SIZE / heights.len() as f32;
                for (i, h) in heights.iter().enumerate() {
                    let height = h * CELL_SIZE * 0.5;
                    canvas.fill_rect(i as f32 * width + 2.0, CANVAS_SIZE - height, width - 4.0, height, 2.0, building);
                }
            }
            Flourish::Dunes => {
                let dune = accent.with_alpha(50);
                for i in 0..4 {
                    let cx = (i as f32 + 0.5) * CANVAS_SIZE / 4.0;
                    canvas.fill_circle(cx, CANVAS_SIZE + CELL_SIZE, CELL_SIZE * 2.5, dune);
                }
            }
        }
    }

    fn draw_snake(canvas: &mut impl Canvas, state: &CanvasState) {
        let palette = &state.palette;
        let count = state.segments.len().max(1);
        let size = CELL_SIZE - SEGMENT_INSET * 2.0;

        // Tail first so the head ends up on top.
        for (i, segment) in state.segments.iter().enumerate().rev() {
            let (px, py) = segment.to_pixel();
            let color = if i == 0 {
                palette.snake_head
            } else {
                palette.snake_body.mix(palette.background, 0.35 * i as f32 / count as f32)
            };
            canvas.fill_rect(px + SEGMENT_INSET, py + SEGMENT_INSET, size, size, CELL_SIZE * 0.3, color);
        }

        if let Some(head) = state.segments.first() {
            let (cx, cy) = head.center_pixel();
            for (ex, ey) in eye_offsets(state.heading) {
                canvas.fill_circle(cx + ex, cy + ey, CELL_SIZE * 0.12, Rgba::rgb(255, 255, 255));
            }
        }
    }
}

/// Eye positions relative to the head centre, pushed towards the heading.
fn eye_offsets(heading: Direction) -> [(f32, f32); 2] {
    let forward = CELL_SIZE * 0.2;
    let side = CELL_SIZE * 0.22;
    match heading {
        Direction::Right => [(forward, -side), (forward, side)],
        Direction::Left => [(-forward, -side), (-forward, side)],
        Direction::Up => [(-side, -forward), (side, -forward)],
        Direction::Down => [(-side, forward), (side, forward)],
    }
}

fn texture_seed(key: &str) -> u32 {
    key.bytes()
        .fold(2166136261u32, |acc, b| (acc ^ b as u32).wrapping_mul(16777619))
}

fn cell_hash(seed: u32, x: i32, y: i32) -> u32 {
    let mut h = seed ^ (x as u32).wrapping_mul(374761393) ^ (y as u32).wrapping_mul(668265263);
    h = (h ^ (h >> 13)).wrapping_mul(1274126177);
    h ^ (h >> 16)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Point;
    use crate::theme::{ThemeProvider, default_catalog};

    #[derive(Default)]
    struct RecordingCanvas {
        rects: Vec<(f32, f32, Rgba)>,
        circles: Vec<(f32, f32, Rgba)>,
    }

    impl Canvas for RecordingCanvas {
        fn fill_rect(&mut self, x: f32, y: f32, _w: f32, _h: f32, _r: f32, color: Rgba) {
            self.rects.push((x, y, color));
        }

        fn fill_circle(&mut self, cx: f32, cy: f32, _radius: f32, color: Rgba) {
            self.circles.push((cx, cy, color));
        }
    }

    fn canvas_state(segments: Vec<Point>, level: u32) -> CanvasState {
        let theme = default_catalog().theme_for("eco", level);
        CanvasState {
            segments,
            heading: Direction::Right,
            theme_key: theme.key,
            palette: theme.palette,
            flourish: theme.flourish,
        }
    }

    #[test]
    fn test_snake_head_is_drawn_last_in_head_color() {
        let state = canvas_state(vec![Point::new(9, 8), Point::new(8, 8), Point::new(7, 8)], 1);
        let mut canvas = RecordingCanvas::default();
        Renderer::draw(&mut canvas, &state);
        let (x, y, color) = *canvas.rects.last().unwrap();
        assert_eq!(color, state.palette.snake_head);
        assert_eq!((x, y), (9.0 * CELL_SIZE + SEGMENT_INSET, 8.0 * CELL_SIZE + SEGMENT_INSET));
    }

    #[test]
    fn test_background_texture_is_stable_per_theme() {
        let state = canvas_state(vec![Point::new(0, 0)], 1);
        let mut first = RecordingCanvas::default();
        let mut second = RecordingCanvas::default();
        Renderer::draw(&mut first, &state);
        Renderer::draw(&mut second, &state);
        assert_eq!(first.circles, second.circles);

        let other = canvas_state(vec![Point::new(0, 0)], 3);
        let mut third = RecordingCanvas::default();
        Renderer::draw(&mut third, &other);
        assert_ne!(first.circles, third.circles);
    }

    #[test]
    fn test_eyes_face_heading() {
        for heading in Direction::ALL {
            let (dx, dy) = heading.delta();
            for (ex, ey) in eye_offsets(heading) {
                assert!(ex * dx as f32 + ey * dy as f32 > 0.0);
            }
        }
    }

    #[test]
    fn test_particles_drawn_with_fade() {
        let mut canvas = RecordingCanvas::default();
        let particle = Particle {
            x: 10.0,
            y: 20.0,
            vx: 0.0,
            vy: 0.0,
            size: 3.0,
            color: Rgba::rgb(255, 0, 0),
            life_ms: 50.0,
            max_life_ms: 100.0,
        };
        Renderer::draw_particles(&mut canvas, &[particle]);
        assert_eq!(canvas.circles, vec![(10.0, 20.0, Rgba::rgb(255, 0, 0).with_alpha(128))]);
    }
}
