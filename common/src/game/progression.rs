pub const FIRST_THRESHOLD: u32 = 10;
pub const THRESHOLD_STEP: u32 = 10;
pub const DEFAULT_COUNTDOWN_STEP_MS: u64 = 700;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameOverReason {
    WallCollision,
    SelfCollision,
    OutOfLives,
}

impl GameOverReason {
    pub fn describe(&self) -> &'static str {
        match self {
            GameOverReason::WallCollision => "hit the wall",
            GameOverReason::SelfCollision => "bit its own tail",
            GameOverReason::OutOfLives => "ran out of lives",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CountdownStep {
    Three,
    Two,
    One,
}

impl CountdownStep {
    pub fn value(&self) -> u8 {
        match self {
            CountdownStep::Three => 3,
            CountdownStep::Two => 2,
            CountdownStep::One => 1,
        }
    }

    fn next(&self) -> Option<CountdownStep> {
        match self {
            CountdownStep::Three => Some(CountdownStep::Two),
            CountdownStep::Two => Some(CountdownStep::One),
            CountdownStep::One => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Pre-start screen.
    Ready,
    Playing,
    LevelTransition(CountdownStep),
    GameOver(GameOverReason),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CountdownTick {
    Step(CountdownStep),
    Finished,
    /// Fired outside a transition; nothing changed.
    Idle,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LevelProgression {
    level: u32,
    next_threshold: u32,
    phase: Phase,
}

impl Default for LevelProgression {
    fn default() -> Self {
        Self::new()
    }
}

impl LevelProgression {
    pub fn new() -> Self {
        Self {
            level: 1,
            next_threshold: FIRST_THRESHOLD,
            phase: Phase::Ready,
        }
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn next_threshold(&self) -> u32 {
        self.next_threshold
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_playing(&self) -> bool {
        self.phase == Phase::Playing
    }

    pub fn is_transitioning(&self) -> bool {
        matches!(self.phase, Phase::LevelTransition(_))
    }

    pub fn is_game_over(&self) -> bool {
        matches!(self.phase, Phase::GameOver(_))
    }

    pub fn countdown(&self) -> Option<CountdownStep> {
        match self.phase {
            Phase::LevelTransition(step) => Some(step),
            _ => None,
        }
    }

    pub fn start(&mut self) -> bool {
        if self.phase != Phase::Ready {
            return false;
        }
        self.phase = Phase::Playing;
        true
    }

    /// Game over is terminal; the first reason sticks.
    pub fn end(&mut self, reason: GameOverReason) {
        if !self.is_game_over() {
            self.phase = Phase::GameOver(reason);
        }
    }

    /// Enters a level transition when `score` has reached the threshold.
    /// Returns the new level. The threshold moves past `score`'s trigger point,
    /// so the same score can never fire twice.
    pub fn check(&mut self, score: u32) -> Option<u32> {
        if self.phase != Phase::Playing || score < self.next_threshold {
            return None;
        }
        self.level += 1;
        self.next_threshold += THRESHOLD_STEP;
        self.phase = Phase::LevelTransition(CountdownStep::Three);
        Some(self.level)
    }

    pub fn countdown_tick(&mut self) -> CountdownTick {
        let Phase::LevelTransition(step) = self.phase else {
            return CountdownTick::Idle;
        };
        match step.next() {
            Some(next) => {
                self.phase = Phase::LevelTransition(next);
                CountdownTick::Step(next)
            }
            None => {
                self.phase = Phase::Playing;
                CountdownTick::Finished
            }
        }
    }
}
