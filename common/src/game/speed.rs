use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub const MIN_TICK_MS: u64 = 60;
pub const MAX_LEVEL_BONUS_MS: u64 = 90;
pub const LEVEL_BONUS_STEP_MS: u64 = 10;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpeedMode {
    #[default]
    Calm,
    Fast,
    Urgent,
}

impl SpeedMode {
    pub const ALL: [SpeedMode; 3] = [SpeedMode::Calm, SpeedMode::Fast, SpeedMode::Urgent];

    pub fn base_ms(&self) -> u64 {
        match self {
            SpeedMode::Calm => 240,
            SpeedMode::Fast => 160,
            SpeedMode::Urgent => 110,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SpeedMode::Calm => "Calm",
            SpeedMode::Fast => "Fast",
            SpeedMode::Urgent => "Urgent",
        }
    }
}

impl FromStr for SpeedMode {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "calm" => Ok(SpeedMode::Calm),
            "fast" => Ok(SpeedMode::Fast),
            "urgent" => Ok(SpeedMode::Urgent),
            other => Err(format!("unknown speed mode '{}' (expected calm, fast or urgent)", other)),
        }
    }
}

/// Movement period in milliseconds for a speed mode at a level.
pub fn tick_interval_ms(mode: SpeedMode, level: u32) -> u64 {
    let bonus = (level.saturating_sub(1) as u64 * LEVEL_BONUS_STEP_MS).min(MAX_LEVEL_BONUS_MS);
    mode.base_ms().saturating_sub(bonus).max(MIN_TICK_MS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_speed_mode_parses_case_insensitively() {
        assert_eq!("Fast".parse::<SpeedMode>(), Ok(SpeedMode::Fast));
        assert_eq!(" urgent ".parse::<SpeedMode>(), Ok(SpeedMode::Urgent));
        assert!("turbo".parse::<SpeedMode>().is_err());
    }

    #[test]
    fn test_level_one_uses_base() {
        assert_eq!(tick_interval_ms(SpeedMode::Calm, 1), 240);
        assert_eq!(tick_interval_ms(SpeedMode::Fast, 1), 160);
        assert_eq!(tick_interval_ms(SpeedMode::Urgent, 1), 110);
    }

    #[test]
    fn test_level_bonus_caps_at_ninety() {
        assert_eq!(tick_interval_ms(SpeedMode::Calm, 4), 210);
        assert_eq!(tick_interval_ms(SpeedMode::Calm, 10), 150);
        assert_eq!(tick_interval_ms(SpeedMode::Calm, 50), 150);
    }

    #[test]
    fn test_floor_applies_to_urgent() {
        assert_eq!(tick_interval_ms(SpeedMode::Urgent, 6), 60);
        assert_eq!(tick_interval_ms(SpeedMode::Urgent, 30), 60);
    }

    #[test]
    fn test_floor_and_monotonic_for_every_mode() {
        for mode in SpeedMode::ALL {
            let mut previous = u64::MAX;
            for level in 1..=100 {
                let interval = tick_interval_ms(mode, level);
                assert!(interval >= MIN_TICK_MS);
                assert!(interval <= previous);
                previous = interval;
            }
        }
    }
}
