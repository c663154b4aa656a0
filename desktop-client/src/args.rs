use clap::Parser;
use common::game::{GameSettings, SpeedMode};

#[derive(Parser, Debug)]
#[command(name = "eco_snake", about = "Eco Snake: collect the trash, spare the nature")]
pub struct Args {
    /// calm, fast or urgent
    #[arg(long)]
    pub speed: Option<SpeedMode>,

    /// Nature hits never end the run
    #[arg(long)]
    pub practice: bool,

    /// Theme variant from the catalog
    #[arg(long)]
    pub variant: Option<String>,

    #[arg(long)]
    pub mute: bool,

    /// Fixed seed for a reproducible run
    #[arg(long)]
    pub seed: Option<u64>,

    #[arg(long)]
    pub use_log_prefix: bool,

    /// Run the autopilot for this many 16 ms frames without a window, then print a summary
    #[arg(long, value_name = "TICKS")]
    pub headless: Option<u64>,
}

impl Args {
    /// Flags override the stored settings for this run only.
    pub fn apply(&self, settings: &mut GameSettings) {
        if let Some(speed) = self.speed {
            settings.speed_mode = speed;
        }
        if self.practice {
            settings.practice_mode = true;
        }
        if let Some(variant) = &self.variant {
            settings.theme_variant = variant.clone();
        }
        if self.mute {
            settings.muted = true;
        }
    }
}
