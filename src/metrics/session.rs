use std::time::{Duration, Instant};

/// In-memory stats for one terminal session. Nothing here survives the
/// process; the high score is per session only.
pub struct SessionMetrics {
    round_start: Instant,
    elapsed: Duration,
    high_score: u32,
    rounds_played: u32,
}

impl SessionMetrics {
    pub fn new() -> Self {
        Self {
            round_start: Instant::now(),
            elapsed: Duration::ZERO,
            high_score: 0,
            rounds_played: 0,
        }
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    pub fn update(&mut self) {
        self.elapsed = self.round_start.elapsed();
    }

    pub fn on_round_start(&mut self) {
        self.round_start = Instant::now();
        self.elapsed = Duration::ZERO;
    }

    pub fn on_round_over(&mut self, final_score: u32) {
        self.rounds_played += 1;
        if final_score > self.high_score {
            self.high_score = final_score;
        }
    }

    pub fn format_time(&self) -> String {
        let total_secs = self.elapsed.as_secs();
        format!("{:02}:{:02}", total_secs / 60, total_secs % 60)
    }
}

impl Default for SessionMetrics {
    fn default() -> Self {
        Self::new()
    }
}
