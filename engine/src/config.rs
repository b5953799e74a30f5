//! Tuned scoring constants
//!
//! Every empirical constant in the scoring formulas lives here so callers
//! can tune them without touching the algorithms. The defaults are the
//! reference values the heuristics were calibrated with.

use std::hash::{Hash, Hasher};

/// Weights merging the four component scores into the composite total.
/// The defaults sum to 1.0 so the total stays on the same 0-100 scale
/// as the components.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RankWeights {
    pub defense: f32,
    pub offense: f32,
    pub stat: f32,
    pub power: f32,
}

impl Default for RankWeights {
    fn default() -> Self {
        Self {
            defense: 0.30,
            offense: 0.40,
            stat: 0.15,
            power: 0.15,
        }
    }
}

/// Scoring configuration shared by the defensive scorer, the move
/// recommendation engine, and the composite ranker.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ScoringConfig {
    /// Raw defense score mapped to 0 on the normalized scale.
    /// The raw formula bottoms out around -40 for typical six-member
    /// teams, well short of the theoretical minimum.
    pub defense_floor: f32,

    /// Raw defense score mapped to 100 on the normalized scale
    pub defense_ceiling: f32,

    /// Attacking stat treated as the practical maximum when normalizing
    pub stat_ceiling: f32,

    /// Overall power total mapped to 0
    pub power_floor: f32,

    /// Overall power total mapped to 100
    pub power_ceiling: f32,

    /// How many top attacking categories feed move recommendation
    pub recommended_categories: usize,

    /// Per-category cap in the diversified move selection
    pub moves_per_category: usize,

    /// Total cap on the diversified move selection
    pub selected_moves: usize,

    /// Component weights for the composite total
    pub weights: RankWeights,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            defense_floor: -40.0,
            defense_ceiling: 30.0,
            stat_ceiling: 190.0,
            power_floor: 300.0,
            power_ceiling: 600.0,
            recommended_categories: 4,
            moves_per_category: 3,
            selected_moves: 15,
            weights: RankWeights::default(),
        }
    }
}

// Manual Hash so configurations can participate in cache fingerprints;
// the f32 fields hash by bit pattern.
impl Hash for ScoringConfig {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.defense_floor.to_bits().hash(state);
        self.defense_ceiling.to_bits().hash(state);
        self.stat_ceiling.to_bits().hash(state);
        self.power_floor.to_bits().hash(state);
        self.power_ceiling.to_bits().hash(state);
        self.recommended_categories.hash(state);
        self.moves_per_category.hash(state);
        self.selected_moves.hash(state);
        self.weights.defense.to_bits().hash(state);
        self.weights.offense.to_bits().hash(state);
        self.weights.stat.to_bits().hash(state);
        self.weights.power.to_bits().hash(state);
    }
}
