use common::config::{ConfigStore, FileConfigSource};
use common::game::{Action, GameSnapshot, LIVES_MAX, Phase, SpeedMode};
use common::log;
use common::session::SessionCommand;
use eframe::egui;
use tokio::sync::mpsc;

use crate::config::ClientConfig;
use crate::state::SharedState;
use super::board::render_board;
use super::controls::{pressed_intents, render_dpad};

pub struct EcoSnakeApp {
    shared_state: SharedState,
    command_tx: mpsc::UnboundedSender<SessionCommand>,
    config_store: ConfigStore<FileConfigSource, ClientConfig>,
    config: ClientConfig,
    autopilot: bool,
    shutdown_sent: bool,
}

impl EcoSnakeApp {
    pub fn new(
        shared_state: SharedState,
        command_tx: mpsc::UnboundedSender<SessionCommand>,
        config_store: ConfigStore<FileConfigSource, ClientConfig>,
        config: ClientConfig,
    ) -> Self {
        Self {
            shared_state,
            command_tx,
            config_store,
            config,
            autopilot: false,
            shutdown_sent: false,
        }
    }

    fn send(&self, command: SessionCommand) {
        let _ = self.command_tx.send(command);
    }

    fn dispatch(&self, action: Action) {
        self.send(SessionCommand::Dispatch(action));
    }

    fn save_config(&self) {
        if let Err(e) = self.config_store.save(&self.config) {
            log!("Failed to save config: {}", e);
        }
    }

    fn handle_keyboard(&mut self, ctx: &egui::Context, snapshot: &GameSnapshot) {
        for intent in pressed_intents(ctx) {
            self.dispatch(Action::Input(intent));
        }

        let (enter, space, restart, mute) = ctx.input(|i| {
            (
                i.key_pressed(egui::Key::Enter),
                i.key_pressed(egui::Key::Space) || i.key_pressed(egui::Key::P),
                i.key_pressed(egui::Key::R),
                i.key_pressed(egui::Key::M),
            )
        });

        if enter {
            match snapshot.phase {
                Phase::Ready => self.dispatch(Action::Start),
                Phase::GameOver(_) => self.dispatch(Action::Restart),
                _ => {}
            }
        }
        if space {
            self.dispatch(Action::TogglePause);
        }
        if restart {
            self.dispatch(Action::Restart);
        }
        if mute {
            self.set_muted(!snapshot.muted);
        }
    }

    fn set_muted(&mut self, muted: bool) {
        self.dispatch(Action::SetMuted(muted));
        self.config.game.muted = muted;
        self.save_config();
    }

    fn render_hud(&self, ui: &mut egui::Ui, snapshot: &GameSnapshot) {
        ui.horizontal(|ui| {
            ui.heading(format!("Score: {}", snapshot.score));
            ui.separator();
            ui.label(format!("Level {}", snapshot.level));
            ui.label(
                egui::RichText::new(format!("next at {}", snapshot.next_threshold))
                    .small()
                    .color(egui::Color32::GRAY),
            );
            ui.separator();
            if snapshot.practice_mode {
                ui.label(format!("Practice: {} mistakes", snapshot.mistakes));
            } else {
                let hearts: String = (0..LIVES_MAX)
                    .map(|i| if i < snapshot.lives_left { '♥' } else { '♡' })
                    .collect();
                ui.label(egui::RichText::new(hearts).color(egui::Color32::from_rgb(220, 70, 70)));
            }
            ui.separator();
            ui.label(format!("{} · {}", snapshot.theme_label, snapshot.speed_mode.label()));
        });
    }

    fn render_settings(&mut self, ui: &mut egui::Ui, snapshot: &GameSnapshot) {
        ui.horizontal(|ui| {
            let mut speed = snapshot.speed_mode;
            egui::ComboBox::from_label("Speed")
                .selected_text(speed.label())
                .show_ui(ui, |ui| {
                    for mode in SpeedMode::ALL {
                        ui.selectable_value(&mut speed, mode, mode.label());
                    }
                });
            if speed != snapshot.speed_mode {
                self.dispatch(Action::SetSpeedMode(speed));
                self.config.game.speed_mode = speed;
                self.save_config();
            }

            let mut practice = snapshot.practice_mode;
            if ui.checkbox(&mut practice, "Practice").changed() {
                self.dispatch(Action::SetPractice(practice));
                self.config.game.practice_mode = practice;
                self.save_config();
            }

            let mut muted = snapshot.muted;
            if ui.checkbox(&mut muted, "Mute").changed() {
                self.set_muted(muted);
            }

            if ui.checkbox(&mut self.autopilot, "Autopilot").changed() {
                self.send(SessionCommand::SetAutopilot(self.autopilot));
            }

            ui.separator();

            let pause_label = if snapshot.paused { "Resume (Space)" } else { "Pause (Space)" };
            let can_pause = matches!(snapshot.phase, Phase::Playing);
            if ui.add_enabled(can_pause, egui::Button::new(pause_label)).clicked() {
                self.dispatch(Action::TogglePause);
            }
            if ui.button("Restart (R)").clicked() {
                self.dispatch(Action::Restart);
            }
        });
    }

    fn render_event_feed(&self, ui: &mut egui::Ui) {
        ui.heading("Events");
        ui.separator();
        egui::ScrollArea::vertical().show(ui, |ui| {
            for line in self.shared_state.get_event_feed() {
                ui.label(line);
            }
        });
    }

    fn render_game_over_summary(&self, ctx: &egui::Context, snapshot: &GameSnapshot) {
        let Some(reason) = snapshot.game_over_reason() else {
            return;
        };
        egui::Window::new("Game Over")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_BOTTOM, egui::vec2(0.0, -24.0))
            .show(ctx, |ui| {
                ui.label(format!("The snake {}.", reason.describe()));
                ui.label(format!("Final score: {}", snapshot.score));
                ui.label(format!("Reached level: {}", snapshot.level));
                ui.label(format!("Mistakes: {}", snapshot.mistakes));
                ui.label(
                    egui::RichText::new(format!("Seed: {}", snapshot.seed))
                        .small()
                        .color(egui::Color32::GRAY),
                );
                ui.add_space(6.0);
                if ui.button("Play Again (Enter)").clicked() {
                    self.dispatch(Action::Restart);
                }
            });
    }
}

impl eframe::App for EcoSnakeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.shared_state.has_context() {
            self.shared_state.set_context(ctx.clone());
        }

        if ctx.input(|i| i.viewport().close_requested()) && !self.shutdown_sent {
            self.send(SessionCommand::Shutdown);
            self.shutdown_sent = true;
        }

        let Some(snapshot) = self.shared_state.get_snapshot() else {
            egui::CentralPanel::default().show(ctx, |ui| {
                ui.centered_and_justified(|ui| {
                    ui.label("Starting session...");
                });
            });
            return;
        };

        if !self.shared_state.is_session_closed() {
            self.handle_keyboard(ctx, &snapshot);
        }

        egui::TopBottomPanel::top("hud").show(ctx, |ui| {
            self.render_hud(ui, &snapshot);
            self.render_settings(ui, &snapshot);
        });

        egui::SidePanel::right("events")
            .resizable(false)
            .default_width(200.0)
            .show(ctx, |ui| {
                self.render_event_feed(ui);
            });

        egui::TopBottomPanel::bottom("dpad").show(ctx, |ui| {
            if let Some(intent) = render_dpad(ui, snapshot.accepts_input()) {
                self.dispatch(Action::Input(intent));
            }
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                render_board(ui, &snapshot);
            });
        });

        self.render_game_over_summary(ctx, &snapshot);
    }
}
