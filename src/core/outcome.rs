//! Terminal game results handed back to the orchestrator.
//!
//! Engines never persist scores themselves. When a session ends, it reports a
//! `GameResult`, and `GameResult::standings` turns that into one
//! win/loss/draw record per participant for whatever store the host uses.

use serde::{Deserialize, Serialize};

use super::player::Identity;

/// Result of a completed game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// Single winner.
    Winner(Identity),
    /// Shared victory (ties on the final ranking).
    Winners(Vec<Identity>),
    /// Board filled with no winner.
    Draw,
    /// Ended early without a winner (too few players left, quit).
    Abandoned,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: &Identity) -> bool {
        match self {
            GameResult::Winner(p) => p == player,
            GameResult::Winners(ps) => ps.contains(player),
            GameResult::Draw | GameResult::Abandoned => false,
        }
    }

    /// Per-player records for score persistence.
    ///
    /// AI seats are skipped: they have no external identity to credit.
    /// An abandoned game produces no records.
    pub fn standings<'a>(&self, players: impl IntoIterator<Item = &'a Identity>) -> Vec<Standing> {
        if matches!(self, GameResult::Abandoned) {
            return Vec::new();
        }
        players
            .into_iter()
            .filter(|p| !p.is_ai())
            .map(|p| Standing {
                player: p.clone(),
                result: match self {
                    GameResult::Draw => PlayerResult::Drew,
                    _ if self.is_winner(p) => PlayerResult::Won,
                    _ => PlayerResult::Lost,
                },
            })
            .collect()
    }
}

/// Outcome for one participant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerResult {
    Won,
    Lost,
    Drew,
}

/// One row of score persistence.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standing {
    pub player: Identity,
    pub result: PlayerResult,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_result_is_winner() {
        let a = Identity::user(1, "a");
        let b = Identity::user(2, "b");
        let c = Identity::user(3, "c");

        let result = GameResult::Winner(b.clone());
        assert!(!result.is_winner(&a));
        assert!(result.is_winner(&b));

        assert!(!GameResult::Draw.is_winner(&a));

        let shared = GameResult::Winners(vec![a.clone(), c.clone()]);
        assert!(shared.is_winner(&a));
        assert!(!shared.is_winner(&b));
        assert!(shared.is_winner(&c));
    }

    #[test]
    fn test_standings() {
        let a = Identity::user(1, "a");
        let ai = Identity::ai(1);

        let won = GameResult::Winner(ai.clone()).standings([&a, &ai]);
        assert_eq!(won, vec![Standing { player: a.clone(), result: PlayerResult::Lost }]);

        let draw = GameResult::Draw.standings([&a]);
        assert_eq!(draw[0].result, PlayerResult::Drew);

        assert!(GameResult::Abandoned.standings([&a]).is_empty());
    }
}
