use std::collections::VecDeque;

use crate::game::{GameResult, Player};

use super::episode::GameRecord;

/// Series bookkeeping: a rolling window of recent games plus lifetime
/// totals.
pub struct SeriesMetrics {
    recent: VecDeque<GameRecord>,
    capacity: usize,
    total_games: usize, // lifetime count, never capped
    x_wins: usize,
    o_wins: usize,
    draws: usize,
    unfinished: usize,
    total_moves: usize,
}

impl SeriesMetrics {
    pub fn with_capacity(capacity: usize) -> Self {
        SeriesMetrics {
            recent: VecDeque::with_capacity(capacity),
            capacity,
            total_games: 0,
            x_wins: 0,
            o_wins: 0,
            draws: 0,
            unfinished: 0,
            total_moves: 0,
        }
    }

    pub fn new() -> Self {
        Self::with_capacity(100)
    }

    pub fn record_game(&mut self, record: GameRecord) {
        self.total_games += 1;
        self.total_moves += record.game_length;
        match record.result {
            GameResult::Winner(Player::X) => self.x_wins += 1,
            GameResult::Winner(Player::O) => self.o_wins += 1,
            GameResult::Draw => self.draws += 1,
            GameResult::InProgress => self.unfinished += 1,
        }

        self.recent.push_back(record);
        if self.recent.len() > self.capacity {
            self.recent.pop_front();
        }
    }

    /// Fraction of the last N games matching `pred`.
    fn rate(&self, last_n: usize, pred: impl Fn(&GameRecord) -> bool) -> f32 {
        let n = self.recent.len().min(last_n);
        if n == 0 {
            return 0.0;
        }
        let hits = self.recent.iter().rev().take(n).filter(|&r| pred(r)).count();
        hits as f32 / n as f32
    }

    /// X win rate in the last N games.
    pub fn x_win_rate(&self, last_n: usize) -> f32 {
        self.rate(last_n, |r| r.winner() == Some(Player::X))
    }

    /// O win rate in the last N games.
    pub fn o_win_rate(&self, last_n: usize) -> f32 {
        self.rate(last_n, |r| r.winner() == Some(Player::O))
    }

    /// Draw rate in the last N games.
    pub fn draw_rate(&self, last_n: usize) -> f32 {
        self.rate(last_n, |r| r.result == GameResult::Draw)
    }

    /// Share of the last N games cut off by the round limit.
    pub fn unfinished_rate(&self, last_n: usize) -> f32 {
        self.rate(last_n, |r| r.result == GameResult::InProgress)
    }

    /// Average game length over the last N games.
    pub fn average_game_length(&self, last_n: usize) -> f32 {
        let n = self.recent.len().min(last_n);
        if n == 0 {
            return 0.0;
        }
        let total: usize = self
            .recent
            .iter()
            .rev()
            .take(n)
            .map(|r| r.game_length)
            .sum();
        total as f32 / n as f32
    }

    /// Average evictions per game over the last N games.
    pub fn average_evictions(&self, last_n: usize) -> f32 {
        let n = self.recent.len().min(last_n);
        if n == 0 {
            return 0.0;
        }
        let total: usize = self.recent.iter().rev().take(n).map(|r| r.evictions).sum();
        total as f32 / n as f32
    }

    pub fn total_games(&self) -> usize {
        self.total_games
    }

    pub fn x_wins(&self) -> usize {
        self.x_wins
    }

    pub fn o_wins(&self) -> usize {
        self.o_wins
    }

    pub fn draws(&self) -> usize {
        self.draws
    }

    pub fn unfinished(&self) -> usize {
        self.unfinished
    }

    /// Lifetime average game length.
    pub fn overall_game_length(&self) -> f32 {
        if self.total_games == 0 {
            return 0.0;
        }
        self.total_moves as f32 / self.total_games as f32
    }
}

impl Default for SeriesMetrics {
    fn default() -> Self {
        Self::new()
    }
}
