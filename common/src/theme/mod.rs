mod catalog;

pub use catalog::{ThemeCatalog, ThemeStage, default_catalog};

use serde::{Deserialize, Serialize};

use crate::render::Rgba;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    pub background: Rgba,
    pub background_alt: Rgba,
    pub snake_head: Rgba,
    pub snake_body: Rgba,
    pub accent: Rgba,
}

/// Decorative overlay drawn between the background texture and the snake.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Flourish {
    None,
    Leaves,
    Waves,
    Skyline,
    Dunes,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Theme {
    pub key: String,
    pub label: String,
    pub palette: Palette,
    pub flourish: Flourish,
    pub trash_words: Vec<String>,
    pub nature_words: Vec<String>,
}

/// Read-only lookup of presentation and word content for a level.
pub trait ThemeProvider: Send {
    fn theme_for(&self, variant: &str, level: u32) -> Theme;
    fn theme_key(&self, variant: &str, level: u32) -> String;
}
