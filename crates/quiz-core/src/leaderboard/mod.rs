//! Per-difficulty leaderboards.
//!
//! - **Player**: one record (name, last score, rank)
//! - **Store**: persistence behind [`LeaderboardStore`], one JSON file per level
//! - **Leaderboard**: merges a result into the stored records and re-ranks them
//!
//! Every save rewrites the whole record set for a level.

mod format;
mod store;

pub use format::{format_ranking_header, format_ranking_line};
pub use store::{JsonFileStore, LeaderboardStore};

use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, warn};

use crate::level::Level;

/// A player record within one level's leaderboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub score: u32,
    /// 1-based position by descending score; 0 until ranked
    pub rank: u32,
}

impl Player {
    pub fn new(name: impl Into<String>, score: u32) -> Self {
        Self {
            name: name.into(),
            score,
            rank: 0,
        }
    }
}

/// Overwrite the score of `name`, or append an unranked record for it.
///
/// The last recorded score wins even when it is lower than the previous one.
pub fn apply_result(players: &mut Vec<Player>, name: &str, score: u32) {
    match players.iter_mut().find(|p| p.name == name) {
        Some(player) => player.score = score,
        None => players.push(Player::new(name, score)),
    }
}

/// Sort by descending score and assign ranks `1..=N`.
///
/// The sort is stable, so tied players keep their previous relative order.
pub fn assign_ranks(players: &mut [Player]) {
    players.sort_by(|a, b| b.score.cmp(&a.score));
    for (index, player) in players.iter_mut().enumerate() {
        player.rank = index as u32 + 1;
    }
}

/// Leaderboard service on top of a [`LeaderboardStore`]
pub struct Leaderboard<S> {
    store: S,
}

impl<S: LeaderboardStore> Leaderboard<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Load the records for a level, degrading to an empty list on failure.
    pub fn load(&self, level: Level) -> Vec<Player> {
        match self.store.load(level) {
            Ok(players) => players,
            Err(e) => {
                warn!("Failed to load leaderboard for level {}: {}", level, e);
                Vec::new()
            }
        }
    }

    /// Merge a finished game into the level's leaderboard and persist it.
    ///
    /// A failed write is logged and otherwise ignored; the re-ranked records
    /// are returned either way.
    pub fn record_result(&self, name: &str, score: u32, level: Level) -> Vec<Player> {
        let mut players = self.load(level);
        apply_result(&mut players, name, score);
        assign_ranks(&mut players);

        match self.store.save(level, &players) {
            Ok(()) => info!(
                "Recorded {} with score {} for level {} ({} players)",
                name,
                score,
                level,
                players.len()
            ),
            Err(e) => error!("Failed to save leaderboard for level {}: {}", level, e),
        }

        players
    }

    /// Records for a level in display order.
    pub fn ranking(&self, level: Level) -> Vec<Player> {
        let mut players = self.load(level);
        players.sort_by(|a, b| b.score.cmp(&a.score));
        debug!("Ranking for level {}: {} players", level, players.len());
        players
    }
}
