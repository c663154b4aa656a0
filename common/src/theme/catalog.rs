use serde::{Deserialize, Serialize};

use crate::config::Validate;
use crate::render::Rgba;
use super::{Flourish, Palette, Theme, ThemeProvider};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeStage {
    pub key: String,
    pub label: String,
    pub palette: Palette,
    pub flourish: Flourish,
    pub trash_words: Vec<String>,
    pub nature_words: Vec<String>,
}

impl ThemeStage {
    fn to_theme(&self) -> Theme {
        Theme {
            key: self.key.clone(),
            label: self.label.clone(),
            palette: self.palette.clone(),
            flourish: self.flourish,
            trash_words: self.trash_words.clone(),
            nature_words: self.nature_words.clone(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeVariant {
    pub name: String,
    pub stages: Vec<ThemeStage>,
}

/// Variants in declaration order; each variant cycles through its stages as levels rise.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeCatalog {
    pub variants: Vec<ThemeVariant>,
}

impl ThemeCatalog {
    pub fn variant_names(&self) -> impl Iterator<Item = &str> {
        self.variants.iter().map(|v| v.name.as_str())
    }

    pub fn has_variant(&self, name: &str) -> bool {
        self.variants.iter().any(|v| v.name == name)
    }

    fn stage(&self, variant: &str, level: u32) -> Option<&ThemeStage> {
        let variant = self
            .variants
            .iter()
            .find(|v| v.name == variant)
            .or_else(|| self.variants.first())?;
        if variant.stages.is_empty() {
            return None;
        }
        let index = (level.max(1) as usize - 1) % variant.stages.len();
        variant.stages.get(index)
    }
}

impl Default for ThemeCatalog {
    fn default() -> Self {
        default_catalog()
    }
}

impl Validate for ThemeCatalog {
    fn validate(&self) -> Result<(), String> {
        if self.variants.is_empty() {
            return Err("Theme catalog must define at least one variant".to_string());
        }
        for variant in &self.variants {
            if variant.stages.is_empty() {
                return Err(format!("Theme variant '{}' has no stages", variant.name));
            }
            for stage in &variant.stages {
                if stage.trash_words.is_empty() {
                    return Err(format!("Theme stage '{}' has no trash words", stage.key));
                }
                if stage.nature_words.is_empty() {
                    return Err(format!("Theme stage '{}' has no nature words", stage.key));
                }
            }
        }
        Ok(())
    }
}

impl ThemeProvider for ThemeCatalog {
    fn theme_for(&self, variant: &str, level: u32) -> Theme {
        match self.stage(variant, level) {
            Some(stage) => stage.to_theme(),
            None => fallback_theme(),
        }
    }

    fn theme_key(&self, variant: &str, level: u32) -> String {
        match self.stage(variant, level) {
            Some(stage) => stage.key.clone(),
            None => fallback_theme().key,
        }
    }
}

fn fallback_theme() -> Theme {
    park_stage().to_theme()
}

fn words(list: &[&str]) -> Vec<String> {
    list.iter().map(|w| w.to_string()).collect()
}

fn park_stage() -> ThemeStage {
    ThemeStage {
        key: "park".to_string(),
        label: "City Park".to_string(),
        palette: Palette {
            background: Rgba::rgb(0xc8, 0xe6, 0xa0),
            background_alt: Rgba::rgb(0xbb, 0xdd, 0x92),
            snake_head: Rgba::rgb(0x1b, 0x5e, 0x20),
            snake_body: Rgba::rgb(0x43, 0xa0, 0x47),
            accent: Rgba::rgb(0x8d, 0x6e, 0x63),
        },
        flourish: Flourish::Leaves,
        trash_words: words(&["bottle", "can", "wrapper", "straw", "bag", "cup"]),
        nature_words: words(&["tree", "flower", "bird", "leaf", "grass", "bee"]),
    }
}

pub fn default_catalog() -> ThemeCatalog {
    let beach = ThemeStage {
        key: "beach".to_string(),
        label: "Sunny Beach".to_string(),
        palette: Palette {
            background: Rgba::rgb(0xfb, 0xe9, 0xb7),
            background_alt: Rgba::rgb(0xf5, 0xdf, 0xa5),
            snake_head: Rgba::rgb(0x00, 0x60, 0x64),
            snake_body: Rgba::rgb(0x00, 0x97, 0xa7),
            accent: Rgba::rgb(0xff, 0xb3, 0x00),
        },
        flourish: Flourish::Dunes,
        trash_words: words(&["net", "lid", "sandal", "tube", "balloon", "carton"]),
        nature_words: words(&["shell", "crab", "gull", "sand", "dune", "starfish"]),
    };
    let ocean = ThemeStage {
        key: "ocean".to_string(),
        label: "Deep Ocean".to_string(),
        palette: Palette {
            background: Rgba::rgb(0x81, 0xd4, 0xfa),
            background_alt: Rgba::rgb(0x6c, 0xc7, 0xf2),
            snake_head: Rgba::rgb(0x0d, 0x47, 0xa1),
            snake_body: Rgba::rgb(0x19, 0x76, 0xd2),
            accent: Rgba::rgb(0xe1, 0xf5, 0xfe),
        },
        flourish: Flourish::Waves,
        trash_words: words(&["oil", "rope", "buoy", "crate", "ring", "jug"]),
        nature_words: words(&["fish", "coral", "whale", "kelp", "turtle", "squid"]),
    };
    let city = ThemeStage {
        key: "city".to_string(),
        label: "Busy City".to_string(),
        palette: Palette {
            background: Rgba::rgb(0xcf, 0xd8, 0xdc),
            background_alt: Rgba::rgb(0xc2, 0xcc, 0xd1),
            snake_head: Rgba::rgb(0x37, 0x47, 0x4f),
            snake_body: Rgba::rgb(0x60, 0x7d, 0x8b),
            accent: Rgba::rgb(0xff, 0x70, 0x43),
        },
        flourish: Flourish::Skyline,
        trash_words: words(&["tire", "battery", "box", "receipt", "foil", "can"]),
        nature_words: words(&["pigeon", "moss", "oak", "ivy", "sparrow", "tulip"]),
    };
    let lagoon = ThemeStage {
        key: "lagoon".to_string(),
        label: "Quiet Lagoon".to_string(),
        palette: Palette {
            background: Rgba::rgb(0xb2, 0xdf, 0xdb),
            background_alt: Rgba::rgb(0xa5, 0xd6, 0xd1),
            snake_head: Rgba::rgb(0x4a, 0x14, 0x8c),
            snake_body: Rgba::rgb(0x7b, 0x1f, 0xa2),
            accent: Rgba::rgb(0xff, 0xf5, 0x9d),
        },
        flourish: Flourish::Waves,
        trash_words: words(&["bottle", "float", "glove", "mask", "lighter", "pod"]),
        nature_words: words(&["heron", "reed", "frog", "lily", "otter", "mangrove"]),
    };

    ThemeCatalog {
        variants: vec![
            ThemeVariant {
                name: "eco".to_string(),
                stages: vec![park_stage(), beach, ocean.clone(), city],
            },
            ThemeVariant {
                name: "coast".to_string(),
                stages: vec![lagoon, ocean],
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{from_yaml, to_yaml};

    #[test]
    fn test_default_catalog_is_valid() {
        assert!(default_catalog().validate().is_ok());
    }

    #[test]
    fn test_stages_cycle_with_level() {
        let catalog = default_catalog();
        assert_eq!(catalog.theme_key("eco", 1), "park");
        assert_eq!(catalog.theme_key("eco", 2), "beach");
        assert_eq!(catalog.theme_key("eco", 4), "city");
        assert_eq!(catalog.theme_key("eco", 5), "park");
        assert_eq!(catalog.theme_key("coast", 2), "ocean");
    }

    #[test]
    fn test_unknown_variant_falls_back_to_first() {
        let catalog = default_catalog();
        assert_eq!(catalog.theme_key("nope", 1), catalog.theme_key("eco", 1));
        assert_eq!(catalog.theme_for("nope", 3).label, "Deep Ocean");
    }

    #[test]
    fn test_theme_for_matches_theme_key() {
        let catalog = default_catalog();
        for level in 1..10 {
            assert_eq!(catalog.theme_for("eco", level).key, catalog.theme_key("eco", level));
        }
    }

    #[test]
    fn test_empty_word_list_fails_validation() {
        let mut catalog = default_catalog();
        catalog.variants[0].stages[1].nature_words.clear();
        let err = catalog.validate().unwrap_err();
        assert!(err.contains("beach"));
    }

    #[test]
    fn test_catalog_survives_yaml() {
        let catalog = default_catalog();
        let yaml = to_yaml(&catalog).unwrap();
        assert!(yaml.contains("#c8e6a0"));
        let parsed: ThemeCatalog = from_yaml(&yaml).unwrap();
        assert_eq!(parsed, catalog);
    }
}
