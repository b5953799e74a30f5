//! Roster candidates as supplied by the roster and movepool providers

use serde::{Deserialize, Serialize};

use crate::category::Category;
use crate::moves::{self, Move};
use crate::stats::BaseStats;
use crate::typing::Typing;

/// A party candidate: typing, base stats, and its learnable moves
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Candidate {
    /// Stable identifying key (e.g. "charizard")
    pub key: String,

    /// Display name
    pub name: String,

    /// Own defensive/offensive identity
    pub typing: Typing,

    /// Six base stats
    pub stats: BaseStats,

    /// Learnable moves, deduplicated by key
    pub moves: Vec<Move>,
}

impl Candidate {
    /// Build a candidate, keeping only the first occurrence of each move
    /// key: the same move reachable via two learn methods counts once.
    pub fn new(
        key: impl Into<String>,
        name: impl Into<String>,
        typing: Typing,
        stats: BaseStats,
        moves: Vec<Move>,
    ) -> Self {
        let mut deduped: Vec<Move> = Vec::with_capacity(moves.len());
        for m in moves {
            if !deduped.iter().any(|seen| seen.key == m.key) {
                deduped.push(m);
            }
        }
        Self {
            key: key.into(),
            name: name.into(),
            typing,
            stats,
            moves: deduped,
        }
    }

    /// Unique categories among this candidate's damaging moves
    pub fn attack_categories(&self) -> Vec<Category> {
        moves::attack_categories(&self.moves)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::moves::{DamageClass, LearnMethod};

    fn mv(key: &str, category: Category, class: DamageClass, method: LearnMethod) -> Move {
        Move {
            key: key.to_string(),
            name: key.to_string(),
            category,
            class,
            power: 80,
            method,
            level: None,
        }
    }

    #[test]
    fn test_moves_dedupe_by_key() {
        let candidate = Candidate::new(
            "nidoking",
            "Nidoking",
            Typing::dual(Category::Poison, Category::Ground),
            BaseStats::new(81, 102, 77, 85, 75, 85),
            vec![
                mv("earthquake", Category::Ground, DamageClass::Physical, LearnMethod::LevelUp),
                mv("earthquake", Category::Ground, DamageClass::Physical, LearnMethod::Machine),
                mv("sludge-wave", Category::Poison, DamageClass::Special, LearnMethod::Machine),
            ],
        );

        assert_eq!(candidate.moves.len(), 2);
        assert_eq!(candidate.moves[0].method, LearnMethod::LevelUp);
    }

    #[test]
    fn test_attack_categories_skip_status_moves() {
        let candidate = Candidate::new(
            "gengar",
            "Gengar",
            Typing::dual(Category::Ghost, Category::Poison),
            BaseStats::new(60, 65, 60, 130, 75, 110),
            vec![
                mv("shadow-ball", Category::Ghost, DamageClass::Special, LearnMethod::LevelUp),
                mv("sludge-bomb", Category::Poison, DamageClass::Special, LearnMethod::Machine),
                mv("hypnosis", Category::Psychic, DamageClass::Status, LearnMethod::LevelUp),
            ],
        );

        assert_eq!(
            candidate.attack_categories(),
            vec![Category::Ghost, Category::Poison]
        );
    }
}
