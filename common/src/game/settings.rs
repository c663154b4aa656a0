use serde::{Deserialize, Serialize};

use crate::config::Validate;
use crate::effects::DEFAULT_TOAST_DURATION_MS;
use super::progression::DEFAULT_COUNTDOWN_STEP_MS;
use super::spawner::DEFAULT_SPAWN_INTERVAL_MS;
use super::speed::SpeedMode;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameSettings {
    pub speed_mode: SpeedMode,
    pub practice_mode: bool,
    pub theme_variant: String,
    pub muted: bool,
    pub spawn_interval_ms: u64,
    pub countdown_step_ms: u64,
    pub toast_duration_ms: u64,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            speed_mode: SpeedMode::Calm,
            practice_mode: false,
            theme_variant: "eco".to_string(),
            muted: false,
            spawn_interval_ms: DEFAULT_SPAWN_INTERVAL_MS,
            countdown_step_ms: DEFAULT_COUNTDOWN_STEP_MS,
            toast_duration_ms: DEFAULT_TOAST_DURATION_MS,
        }
    }
}

impl Validate for GameSettings {
    fn validate(&self) -> Result<(), String> {
        if self.theme_variant.trim().is_empty() {
            return Err("Theme variant must not be empty".to_string());
        }
        if !(500..=10_000).contains(&self.spawn_interval_ms) {
            return Err(format!(
                "Spawn interval must be between 500ms and 10000ms, got {}",
                self.spawn_interval_ms
            ));
        }
        if !(100..=3_000).contains(&self.countdown_step_ms) {
            return Err(format!(
                "Countdown step must be between 100ms and 3000ms, got {}",
                self.countdown_step_ms
            ));
        }
        if !(100..=5_000).contains(&self.toast_duration_ms) {
            return Err(format!(
                "Toast duration must be between 100ms and 5000ms, got {}",
                self.toast_duration_ms
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ConfigStore, MemoryConfigSource, from_yaml};

    #[test]
    fn test_default_settings_are_valid() {
        assert!(GameSettings::default().validate().is_ok());
    }

    #[test]
    fn test_partial_yaml_fills_defaults() {
        let settings: GameSettings = from_yaml("speed_mode: urgent\npractice_mode: true\n").unwrap();
        assert_eq!(settings.speed_mode, SpeedMode::Urgent);
        assert!(settings.practice_mode);
        assert_eq!(settings.spawn_interval_ms, 2800);
        assert_eq!(settings.theme_variant, "eco");
    }

    #[test]
    fn test_out_of_range_spawn_interval_is_rejected() {
        let settings = GameSettings {
            spawn_interval_ms: 50,
            ..GameSettings::default()
        };
        assert!(settings.validate().unwrap_err().contains("Spawn interval"));
    }

    #[test]
    fn test_store_round_trip() {
        let store: ConfigStore<_, GameSettings> = ConfigStore::new(MemoryConfigSource::new());
        let settings = GameSettings {
            speed_mode: SpeedMode::Fast,
            theme_variant: "coast".to_string(),
            ..GameSettings::default()
        };
        store.save(&settings).unwrap();
        assert_eq!(store.load().unwrap(), settings);
    }
}
