use crate::effects::{AudioCueEmitter, CueKind, PARTICLE_FRAME_MS, ParticleSystem};
use crate::log;
use crate::render::{CanvasState, list_sprites};
use crate::rng::SessionRng;
use crate::session::{Scheduler, TimerKind};
use crate::theme::{Theme, ThemeProvider};
use super::input::InputIntent;
use super::items::{Item, ItemKind};
use super::progression::{CountdownStep, CountdownTick, GameOverReason};
use super::settings::GameSettings;
use super::snapshot::GameSnapshot;
use super::spawner::{Placement, spawn_item};
use super::speed::SpeedMode;
use super::state::GameState;
use super::types::{CANVAS_SIZE, Direction, Point};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Start,
    Restart,
    Turn(Direction),
    Input(InputIntent),
    TogglePause,
    SetSpeedMode(SpeedMode),
    SetPractice(bool),
    SetMuted(bool),
    /// The external clock: milliseconds since the session began.
    Advance { now_ms: u64 },
}

#[derive(Clone, Debug, PartialEq)]
pub enum GameEvent {
    Started,
    Restarted,
    Turned(Direction),
    Collected { word: String, at: Point },
    Missed { word: String, at: Point, mistakes: u32 },
    ItemSpawned(Item),
    LevelUp { level: u32 },
    Celebrate,
    Countdown(CountdownStep),
    Resumed,
    PauseToggled(bool),
    SpeedChanged { interval_ms: u64 },
    GameOver(GameOverReason),
}

/// Owns one play session and is its only writer.
pub struct EcoSnakeGame {
    settings: GameSettings,
    state: GameState,
    scheduler: Scheduler,
    rng: SessionRng,
    themes: Box<dyn ThemeProvider>,
    theme: Theme,
    audio: Box<dyn AudioCueEmitter>,
    particles: ParticleSystem,
    now_ms: u64,
}

impl EcoSnakeGame {
    pub fn new(
        settings: GameSettings,
        themes: Box<dyn ThemeProvider>,
        mut audio: Box<dyn AudioCueEmitter>,
        rng: SessionRng,
    ) -> Self {
        let theme = themes.theme_for(&settings.theme_variant, 1);
        let state = GameState::new(
            settings.speed_mode,
            settings.practice_mode,
            settings.toast_duration_ms,
            theme.key.clone(),
        );
        audio.set_muted(settings.muted);

        Self {
            settings,
            state,
            scheduler: Scheduler::new(),
            rng,
            themes,
            theme,
            audio,
            particles: ParticleSystem::new(),
            now_ms: 0,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn settings(&self) -> &GameSettings {
        &self.settings
    }

    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn particles(&self) -> &ParticleSystem {
        &self.particles
    }

    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    #[cfg(test)]
    pub(crate) fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn dispatch(&mut self, action: Action) -> Vec<GameEvent> {
        let mut events = Vec::new();
        match action {
            Action::Start => self.start(&mut events),
            Action::Restart => self.restart(&mut events),
            Action::Turn(direction) => self.turn(direction, &mut events),
            Action::Input(intent) => self.turn(intent.direction(), &mut events),
            Action::TogglePause => self.toggle_pause(&mut events),
            Action::SetSpeedMode(mode) => self.set_speed_mode(mode, &mut events),
            Action::SetPractice(enabled) => {
                self.settings.practice_mode = enabled;
                self.state.practice_mode = enabled;
            }
            Action::SetMuted(muted) => {
                self.settings.muted = muted;
                self.audio.set_muted(muted);
            }
            Action::Advance { now_ms } => self.advance(now_ms, &mut events),
        }
        self.sync_timers();
        events
    }

    /// Cancels every timer, particle and in-flight sound. The game stays inspectable.
    pub fn shutdown(&mut self) {
        self.scheduler.disarm_all();
        self.particles.clear();
        self.audio.silence();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let state = &self.state;
        GameSnapshot {
            now_ms: self.now_ms,
            canvas: CanvasState {
                segments: state.snake.segments().copied().collect(),
                heading: state.input.heading(),
                theme_key: state.theme_key.clone(),
                palette: self.theme.palette.clone(),
                flourish: self.theme.flourish,
            },
            sprites: list_sprites(state.items.iter()),
            toasts: state.toasts.toasts().to_vec(),
            particles: self.particles.particles().to_vec(),
            phase: state.progression.phase(),
            countdown: state.progression.countdown().map(|step| step.value()),
            paused: state.is_paused(),
            score: state.score.score(),
            level: state.level(),
            next_threshold: state.progression.next_threshold(),
            mistakes: state.score.mistakes(),
            lives_left: state.score.lives_left(),
            snake_length: state.snake.len(),
            practice_mode: state.practice_mode,
            speed_mode: state.speed_mode,
            tick_interval_ms: state.tick_interval_ms(),
            theme_label: self.theme.label.clone(),
            muted: self.audio.is_muted(),
            seed: self.rng.seed(),
        }
    }

    fn start(&mut self, events: &mut Vec<GameEvent>) {
        if self.state.progression.start() {
            log!(
                "Run started (seed {}, {} mode{})",
                self.rng.seed(),
                self.state.speed_mode.label(),
                if self.state.practice_mode { ", practice" } else { "" }
            );
            events.push(GameEvent::Started);
        }
    }

    fn restart(&mut self, events: &mut Vec<GameEvent>) {
        self.scheduler.disarm_all();
        self.particles.clear();
        self.audio.silence();

        self.theme = self.themes.theme_for(&self.settings.theme_variant, 1);
        self.state = GameState::new(
            self.settings.speed_mode,
            self.settings.practice_mode,
            self.settings.toast_duration_ms,
            self.theme.key.clone(),
        );
        self.state.progression.start();

        log!("Run restarted");
        events.push(GameEvent::Restarted);
    }

    fn turn(&mut self, direction: Direction, events: &mut Vec<GameEvent>) {
        if !self.state.is_running() {
            return;
        }
        if self.state.input.request(direction) {
            events.push(GameEvent::Turned(direction));
        }
    }

    fn toggle_pause(&mut self, events: &mut Vec<GameEvent>) {
        if !self.state.progression.is_playing() {
            return;
        }
        self.state.user_paused = !self.state.user_paused;
        events.push(GameEvent::PauseToggled(self.state.user_paused));
    }

    fn set_speed_mode(&mut self, mode: SpeedMode, events: &mut Vec<GameEvent>) {
        if mode == self.state.speed_mode {
            return;
        }
        self.settings.speed_mode = mode;
        self.state.speed_mode = mode;
        events.push(GameEvent::SpeedChanged {
            interval_ms: self.state.tick_interval_ms(),
        });
    }

    fn advance(&mut self, now_ms: u64, events: &mut Vec<GameEvent>) {
        if now_ms < self.now_ms {
            return;
        }

        while let Some((kind, due_ms)) = self.scheduler.poll(now_ms) {
            // Handlers see the deadline they fired for, so catch-up stays exact.
            self.now_ms = due_ms;
            self.state.toasts.prune(due_ms);
            match kind {
                TimerKind::Movement => self.movement_tick(events),
                TimerKind::Spawn => self.spawn_tick(events),
                TimerKind::Countdown => self.countdown_tick(events),
                TimerKind::Particles => self.particles.step(PARTICLE_FRAME_MS as f32),
            }
            self.sync_timers();
        }

        self.now_ms = now_ms;
        self.state.toasts.prune(now_ms);
    }

    fn movement_tick(&mut self, events: &mut Vec<GameEvent>) {
        if !self.state.is_running() {
            return;
        }
        self.refresh_theme();

        let heading = self.state.input.commit();
        let next = self.state.snake.head().step(heading);

        if !next.in_bounds() {
            self.finish(GameOverReason::WallCollision, events);
            return;
        }
        if self.state.snake.occupies(&next) {
            self.finish(GameOverReason::SelfCollision, events);
            return;
        }

        match self.state.items.take_at(&next) {
            Some(item) if item.kind == ItemKind::Trash => {
                self.state.snake.grow(next);
                self.state.score.record_trash();
                self.state.toasts.push(next, "+1", self.now_ms);
                self.audio.emit(CueKind::Collect);
                events.push(GameEvent::Collected { word: item.word, at: next });
            }
            Some(item) => {
                let mistakes = self.state.score.record_mistake();
                events.push(GameEvent::Missed { word: item.word, at: next, mistakes });
                if !self.state.practice_mode && self.state.score.is_out_of_lives() {
                    self.finish(GameOverReason::OutOfLives, events);
                    return;
                }
                self.state.snake.advance(next);
                self.state.snake.shrink();
                self.audio.emit(CueKind::Miss);
            }
            None => self.state.snake.advance(next),
        }

        if let Some(level) = self.state.progression.check(self.state.score.score()) {
            self.level_up(level, events);
        }
    }

    fn spawn_tick(&mut self, events: &mut Vec<GameEvent>) {
        if !self.state.is_running() {
            return;
        }
        let Some(outcome) = spawn_item(
            &self.state.snake,
            &self.state.items,
            self.state.level(),
            &self.theme,
            &mut self.rng,
        ) else {
            return;
        };

        if let Placement::Exhausted(point) = outcome.placement {
            log!(
                "No free cell after retries; placing '{}' on occupied ({}, {})",
                outcome.item.word,
                point.x,
                point.y
            );
        }
        events.push(GameEvent::ItemSpawned(outcome.item.clone()));
        self.state.items.insert(outcome.item);
    }

    fn countdown_tick(&mut self, events: &mut Vec<GameEvent>) {
        match self.state.progression.countdown_tick() {
            CountdownTick::Step(step) => events.push(GameEvent::Countdown(step)),
            CountdownTick::Finished => events.push(GameEvent::Resumed),
            CountdownTick::Idle => {}
        }
    }

    fn level_up(&mut self, level: u32, events: &mut Vec<GameEvent>) {
        self.state.items.clear();
        self.refresh_theme();

        let palette = &self.theme.palette;
        let colors = [palette.accent, palette.snake_head, palette.snake_body];
        self.particles
            .celebrate((CANVAS_SIZE / 2.0, CANVAS_SIZE / 2.0), &colors, &mut self.rng);
        self.audio.emit(CueKind::Level);

        log!(
            "Level {} reached at score {}; next threshold {}",
            level,
            self.state.score.score(),
            self.state.progression.next_threshold()
        );
        events.push(GameEvent::LevelUp { level });
        events.push(GameEvent::Celebrate);
        events.push(GameEvent::Countdown(CountdownStep::Three));
    }

    fn finish(&mut self, reason: GameOverReason, events: &mut Vec<GameEvent>) {
        self.state.progression.end(reason);
        self.audio.emit(CueKind::GameOver);
        log!(
            "Game over: snake {} (score {}, level {}, mistakes {})",
            reason.describe(),
            self.state.score.score(),
            self.state.level(),
            self.state.score.mistakes()
        );
        events.push(GameEvent::GameOver(reason));
    }

    /// Re-derives the theme from (variant, level). A new theme restarts the spawn timer.
    fn refresh_theme(&mut self) {
        let variant = &self.settings.theme_variant;
        let level = self.state.level();
        let key = self.themes.theme_key(variant, level);
        if key == self.state.theme_key {
            return;
        }
        self.theme = self.themes.theme_for(variant, level);
        self.state.theme_key = key;
    }

    /// Brings every timer in line with the current state: running timers whose
    /// period changed are re-armed, timers whose subsystem is suspended are cancelled.
    fn sync_timers(&mut self) {
        let now = self.now_ms;

        if self.state.is_running() {
            self.scheduler
                .ensure(TimerKind::Movement, self.state.tick_interval_ms(), now);
            self.scheduler
                .ensure(TimerKind::Spawn, self.settings.spawn_interval_ms, now);
        } else {
            self.scheduler.disarm(TimerKind::Movement);
            self.scheduler.disarm(TimerKind::Spawn);
        }

        if self.state.progression.is_transitioning() {
            self.scheduler
                .ensure(TimerKind::Countdown, self.settings.countdown_step_ms, now);
        } else {
            self.scheduler.disarm(TimerKind::Countdown);
        }

        if self.particles.is_active() {
            self.scheduler
                .ensure(TimerKind::Particles, PARTICLE_FRAME_MS, now);
        } else {
            self.scheduler.disarm(TimerKind::Particles);
        }
    }
}
