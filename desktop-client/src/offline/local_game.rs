use tokio::sync::mpsc;
use common::effects::ToneEmitter;
use common::game::GameSettings;
use common::session::{EcoSnakeSession, SessionCommand};
use common::theme::ThemeCatalog;
use common::{EcoSnakeGame, SessionRng, log};
use crate::state::SharedState;

use super::LocalBroadcaster;

pub fn build_game(
    settings: GameSettings,
    catalog: ThemeCatalog,
    seed: Option<u64>,
    audio: ToneEmitter,
) -> EcoSnakeGame {
    if !catalog.has_variant(&settings.theme_variant) {
        log!(
            "Unknown theme variant '{}'; falling back to '{}'",
            settings.theme_variant,
            catalog.variant_names().next().unwrap_or("?")
        );
    }

    let rng = match seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };

    EcoSnakeGame::new(settings, Box::new(catalog), Box::new(audio), rng)
}

pub async fn local_game_task(
    game: EcoSnakeGame,
    shared_state: SharedState,
    command_rx: mpsc::UnboundedReceiver<SessionCommand>,
) {
    let broadcaster = LocalBroadcaster::new(shared_state);
    let final_snapshot = EcoSnakeSession::run(game, command_rx, broadcaster).await;
    log!(
        "Local game finished: score {}, level {}, mistakes {}",
        final_snapshot.score,
        final_snapshot.level,
        final_snapshot.mistakes
    );
}
