//! Opposing team profile as supplied by the opponent-team provider

use serde::{Deserialize, Serialize};

use crate::category::Category;
use crate::moves::{self, Move};
use crate::stats::BaseStats;
use crate::typing::Typing;

/// One member of the opposing team
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OpposingMember {
    /// Stable identifying key
    pub key: String,

    /// Defensive typing
    pub typing: Typing,

    /// Six base stats
    pub stats: BaseStats,

    /// The member's known moves
    pub moves: Vec<Move>,
}

impl OpposingMember {
    /// Unique categories among this member's damaging moves
    pub fn attack_categories(&self) -> Vec<Category> {
        moves::attack_categories(&self.moves)
    }
}

/// A fixed opposing team, in encounter order
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TeamProfile {
    pub members: Vec<OpposingMember>,
}

impl TeamProfile {
    pub fn new(members: Vec<OpposingMember>) -> Self {
        Self { members }
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Union of damaging-move categories across the whole team,
    /// alphabetical. This is the attack surface defensive scoring is
    /// evaluated against.
    pub fn attack_categories(&self) -> Vec<Category> {
        let mut categories: Vec<Category> = Vec::new();
        for member in &self.members {
            for category in member.attack_categories() {
                if !categories.contains(&category) {
                    categories.push(category);
                }
            }
        }
        categories.sort_by_key(|c| c.as_str());
        categories
    }
}
