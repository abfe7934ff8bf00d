use std::time::{Duration, Instant};

/// Session bookkeeping shown around the play area
pub struct GameMetrics {
    pub start_time: Instant,
    pub elapsed_time: Duration,
    pub tick_interval: Duration,
    pub high_score: u32,
    pub games_played: u32,
    running: bool,
}

impl GameMetrics {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            elapsed_time: Duration::ZERO,
            tick_interval: Duration::from_millis(crate::game::config::BASE_DELAY_MS),
            high_score: 0,
            games_played: 0,
            running: false,
        }
    }

    /// Refresh the clock; it stands still outside of play
    pub fn update(&mut self) {
        if self.running {
            self.elapsed_time = self.start_time.elapsed();
        }
    }

    pub fn on_game_start(&mut self, tick_interval: Duration) {
        self.start_time = Instant::now();
        self.elapsed_time = Duration::ZERO;
        self.tick_interval = tick_interval;
        self.running = true;
    }

    pub fn on_speed_change(&mut self, tick_interval: Duration) {
        self.tick_interval = tick_interval;
    }

    pub fn on_game_over(&mut self, final_score: u32) {
        self.update();
        self.running = false;
        self.games_played += 1;
        if final_score > self.high_score {
            self.high_score = final_score;
        }
    }

    pub fn format_time(&self) -> String {
        let total_secs = self.elapsed_time.as_secs();
        let minutes = total_secs / 60;
        let seconds = total_secs % 60;
        format!("{:02}:{:02}", minutes, seconds)
    }
}

impl Default for GameMetrics {
    fn default() -> Self {
        Self::new()
    }
}
