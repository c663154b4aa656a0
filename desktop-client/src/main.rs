mod args;
mod audio;
mod config;
mod offline;
mod state;
mod ui;

use clap::Parser;
use common::config::Validate;
use common::effects::ToneEmitter;
use common::game::GameEvent;
use common::session::EcoSnakeSession;
use common::theme::{ThemeCatalog, default_catalog};
use common::{log, logger};
use eframe::egui;
use tokio::sync::mpsc;

use args::Args;
use audio::open_audio;
use config::{get_config_store, get_theme_store};
use offline::{build_game, local_game_task};
use state::SharedState;
use ui::EcoSnakeApp;

fn load_catalog() -> ThemeCatalog {
    match get_theme_store().load() {
        Ok(catalog) => catalog,
        Err(e) => {
            log!("Failed to load theme catalog, using built-in themes: {}", e);
            default_catalog()
        }
    }
}

fn run_headless(game: &mut common::EcoSnakeGame, frames: u64) {
    logger::set_muted(true);
    let events = EcoSnakeSession::run_headless(game, frames);
    let collected = events
        .iter()
        .filter(|event| matches!(event, GameEvent::Collected { .. }))
        .count();
    let snapshot = game.snapshot();
    println!(
        "seed={} frames={} time_ms={} collected={} score={} level={} mistakes={} length={} phase={:?}",
        snapshot.seed,
        frames,
        snapshot.now_ms,
        collected,
        snapshot.score,
        snapshot.level,
        snapshot.mistakes,
        snapshot.snake_length,
        snapshot.phase
    );
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("EcoSnake".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let config_store = get_config_store();
    let config = match config_store.load() {
        Ok(config) => config,
        Err(e) => {
            log!("Failed to load config, using defaults: {}", e);
            config::ClientConfig::default()
        }
    };

    let mut settings = config.game.clone();
    args.apply(&mut settings);
    settings.validate()?;

    let audio = if args.headless.is_some() {
        ToneEmitter::silent()
    } else {
        open_audio()
    };
    let game = build_game(settings, load_catalog(), args.seed, audio);

    if let Some(frames) = args.headless {
        let mut game = game;
        run_headless(&mut game, frames);
        return Ok(());
    }

    let shared_state = SharedState::new();
    let (command_tx, command_rx) = mpsc::unbounded_channel();

    let shared_state_clone = shared_state.clone();
    std::thread::spawn(move || {
        let rt = match tokio::runtime::Runtime::new() {
            Ok(rt) => rt,
            Err(e) => {
                log!("Failed to start runtime: {}", e);
                shared_state_clone.set_session_closed();
                return;
            }
        };
        rt.block_on(local_game_task(game, shared_state_clone, command_rx));
    });

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window_width, config.window_height])
            .with_title("Eco Snake"),
        ..Default::default()
    };

    eframe::run_native(
        "Eco Snake",
        options,
        Box::new(|_cc| {
            Ok(Box::new(EcoSnakeApp::new(
                shared_state,
                command_tx,
                config_store,
                config,
            )))
        }),
    )?;

    Ok(())
}
