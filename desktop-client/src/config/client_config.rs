use common::config::{ConfigStore, FileConfigSource, Validate};
use common::game::GameSettings;
use common::theme::ThemeCatalog;
use serde::{Deserialize, Serialize};

const CONFIG_FILE_NAME: &str = "eco_snake_config.yaml";
const THEMES_FILE_NAME: &str = "eco_snake_themes.yaml";

const MIN_WINDOW_SIDE: f32 = 320.0;

fn get_path_next_to_exe(file_name: &str) -> String {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(file_name).to_string_lossy().into_owned();
    }
    file_name.to_string()
}

pub fn get_config_store() -> ConfigStore<FileConfigSource, ClientConfig> {
    ConfigStore::from_yaml_file(&get_path_next_to_exe(CONFIG_FILE_NAME))
}

/// Optional catalog override; the built-in catalog is used when the file is absent.
pub fn get_theme_store() -> ConfigStore<FileConfigSource, ThemeCatalog> {
    ConfigStore::from_yaml_file(&get_path_next_to_exe(THEMES_FILE_NAME))
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct ClientConfig {
    #[serde(default)]
    pub game: GameSettings,
    pub window_width: f32,
    pub window_height: f32,
}

impl Validate for ClientConfig {
    fn validate(&self) -> Result<(), String> {
        self.game.validate()?;
        if self.window_width < MIN_WINDOW_SIDE || self.window_height < MIN_WINDOW_SIDE {
            return Err(format!(
                "Window must be at least {}x{}, got {}x{}",
                MIN_WINDOW_SIDE, MIN_WINDOW_SIDE, self.window_width, self.window_height
            ));
        }
        Ok(())
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            game: GameSettings::default(),
            window_width: 760.0,
            window_height: 640.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::config::{from_yaml, to_yaml};
    use common::game::SpeedMode;

    fn get_temp_file_path() -> String {
        use std::env;
        let mut path = env::temp_dir();
        let random_number: u32 = rand::random();
        let file_name = format!("temp_eco_snake_client_config_{}.yaml", random_number);
        path.push(file_name);
        path.to_str().unwrap().to_string()
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(ClientConfig::default().validate().is_ok());
    }

    #[test]
    fn test_default_config_can_be_serialized_and_deserialized_string() {
        let default_config = ClientConfig::default();
        let serialized = to_yaml(&default_config).unwrap();
        let deserialized: ClientConfig = from_yaml(&serialized).unwrap();
        assert_eq!(default_config, deserialized);
    }

    #[test]
    fn test_config_can_be_saved_and_loaded_from_file() {
        let path = get_temp_file_path();
        let store: ConfigStore<FileConfigSource, ClientConfig> = ConfigStore::from_yaml_file(&path);

        let mut config = ClientConfig::default();
        config.game.speed_mode = SpeedMode::Urgent;
        config.game.practice_mode = true;
        config.window_width = 1024.0;
        store.save(&config).unwrap();

        let reloaded: ConfigStore<FileConfigSource, ClientConfig> = ConfigStore::from_yaml_file(&path);
        assert_eq!(reloaded.load().unwrap(), config);

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_missing_file_falls_back_to_default() {
        let store: ConfigStore<FileConfigSource, ClientConfig> =
            ConfigStore::from_yaml_file(&get_temp_file_path());
        assert_eq!(store.load().unwrap(), ClientConfig::default());
    }

    #[test]
    fn test_tiny_window_is_rejected() {
        let config = ClientConfig {
            window_width: 100.0,
            ..ClientConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_game_section_may_be_omitted() {
        let config: ClientConfig = from_yaml("window_width: 800.0\nwindow_height: 700.0\n").unwrap();
        assert_eq!(config.game, GameSettings::default());
    }
}
