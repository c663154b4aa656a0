use crate::game::{Direction, Item, ItemKind, Point};
use crate::theme::{Flourish, Palette};
use super::Rgba;

/// A host drawing surface in canvas pixels (origin top-left).
pub trait Canvas {
    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, corner_radius: f32, color: Rgba);
    fn fill_circle(&mut self, cx: f32, cy: f32, radius: f32, color: Rgba);
}

/// What the continuous layer needs each frame: background, flourish and snake.
#[derive(Clone, Debug, PartialEq)]
pub struct CanvasState {
    pub segments: Vec<Point>,
    pub heading: Direction,
    pub theme_key: String,
    pub palette: Palette,
    pub flourish: Flourish,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpriteStyle {
    Trash,
    Nature,
}

/// A discrete item for the host overlay, positioned at its cell's top-left pixel.
#[derive(Clone, Debug, PartialEq)]
pub struct Sprite {
    pub cell: Point,
    pub x: f32,
    pub y: f32,
    pub label: String,
    pub style: SpriteStyle,
}

pub fn list_sprites<'a>(items: impl Iterator<Item = &'a Item>) -> Vec<Sprite> {
    items
        .map(|item| {
            let (x, y) = item.position.to_pixel();
            Sprite {
                cell: item.position,
                x,
                y,
                label: item.word.clone(),
                style: match item.kind {
                    ItemKind::Trash => SpriteStyle::Trash,
                    ItemKind::Nature => SpriteStyle::Nature,
                },
            }
        })
        .collect()
}
