mod canvas;
mod color;
mod renderer;

pub use canvas::{Canvas, CanvasState, Sprite, SpriteStyle, list_sprites};
pub use color::Rgba;
pub use renderer::Renderer;
