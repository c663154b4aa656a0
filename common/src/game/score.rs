pub const LIVES_MAX: u32 = 3;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScoreTracker {
    score: u32,
    mistakes: u32,
}

impl ScoreTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn mistakes(&self) -> u32 {
        self.mistakes
    }

    pub fn lives_left(&self) -> u32 {
        LIVES_MAX.saturating_sub(self.mistakes)
    }

    pub fn is_out_of_lives(&self) -> bool {
        self.mistakes >= LIVES_MAX
    }

    pub fn record_trash(&mut self) -> u32 {
        self.score += 1;
        self.score
    }

    pub fn record_mistake(&mut self) -> u32 {
        self.mistakes += 1;
        self.mistakes
    }
}
