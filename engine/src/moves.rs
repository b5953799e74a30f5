//! Move selection and diversification against a ranked category list

use faceoff_core::{Category, Move, TeamProfile, Typing};

use crate::config::ScoringConfig;
use crate::offense;

/// Flat bonus for a move matching the user's own typing
const STAB_BONUS: f32 = 5.0;
/// Divisor turning base power into a score bonus (100 power = 5 points)
const POWER_BONUS_DIVISOR: f32 = 20.0;
/// Cap on a candidate's aggregate offense score
const OFFENSE_SCORE_CAP: f32 = 100.0;

/// An attacking category recommended against a specific team
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RecommendedCategory {
    pub category: Category,
    /// Raw single-category offense score
    pub score: i32,
    /// 1 = best
    pub rank: usize,
}

/// A qualifying move with its scoring breakdown
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoredMove {
    pub mv: Move,
    /// Move category matches the user's own typing
    pub stab: bool,
    /// Rank of the move's category in the recommendation list
    pub rank: usize,
    pub rank_bonus: f32,
    pub power_bonus: f32,
    /// rank_bonus + stab_bonus + power_bonus
    pub score: f32,
    /// Display power: 1.5x base power when the move has STAB
    pub effective_power: u16,
}

/// Aggregate offense score plus the diversified move list
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveSelection {
    /// Sum of all qualifying move scores, capped at 100
    pub score: f32,
    pub moves: Vec<ScoredMove>,
}

/// Top-N attacking categories against the team, rank 1 first.
pub fn recommended_categories(team: &TeamProfile, config: &ScoringConfig) -> Vec<RecommendedCategory> {
    if team.is_empty() {
        return Vec::new();
    }
    offense::rank_all_single_categories(team)
        .into_iter()
        .take(config.recommended_categories)
        .enumerate()
        .map(|(i, entry)| RecommendedCategory {
            category: entry.category,
            score: entry.score,
            rank: i + 1,
        })
        .collect()
}

/// Score and diversify a candidate's learnable moves.
///
/// Moves are deduplicated by key; only damaging moves of a recommended
/// category qualify. Each qualifying move scores a rank bonus of
/// (N+1−rank)×2, a STAB bonus when its category matches the user's typing,
/// and power/20; the aggregate is the capped sum over every qualifying
/// move. The returned list is diversified: at most `moves_per_category`
/// per category (STAB first, then effective power, then key), buckets
/// interleaved in ascending rank order, truncated to `selected_moves`.
pub fn select_moves(
    typing: Typing,
    moves: &[Move],
    recommended: &[RecommendedCategory],
    config: &ScoringConfig,
) -> MoveSelection {
    if moves.is_empty() || recommended.is_empty() {
        return MoveSelection::default();
    }

    let rank_of = |category: Category| -> Option<usize> {
        recommended
            .iter()
            .find(|r| r.category == category)
            .map(|r| r.rank)
    };

    let mut qualifying: Vec<ScoredMove> = Vec::new();
    let mut score_sum = 0.0f32;

    for mv in moves {
        if qualifying.iter().any(|q| q.mv.key == mv.key) {
            continue;
        }
        if !mv.is_damaging() {
            continue;
        }
        let Some(rank) = rank_of(mv.category) else {
            continue;
        };

        let stab = typing.has(mv.category);
        // Ranks beyond the configured top-N earn nothing rather than
        // underflowing.
        let rank_bonus = (config.recommended_categories + 1).saturating_sub(rank) as f32 * 2.0;
        let power_bonus = mv.power as f32 / POWER_BONUS_DIVISOR;
        let stab_bonus = if stab { STAB_BONUS } else { 0.0 };
        let score = rank_bonus + stab_bonus + power_bonus;
        score_sum += score;

        qualifying.push(ScoredMove {
            effective_power: if stab { mv.power + mv.power / 2 } else { mv.power },
            mv: mv.clone(),
            stab,
            rank,
            rank_bonus,
            power_bonus,
            score,
        });
    }

    MoveSelection {
        score: score_sum.min(OFFENSE_SCORE_CAP),
        moves: diversify(qualifying, config),
    }
}

/// Spread the selection across categories so near-duplicate moves of one
/// category cannot crowd out the rest.
fn diversify(qualifying: Vec<ScoredMove>, config: &ScoringConfig) -> Vec<ScoredMove> {
    if qualifying.is_empty() {
        return qualifying;
    }

    let mut buckets: Vec<(Category, Vec<ScoredMove>)> = Vec::new();
    for scored in qualifying {
        match buckets.iter_mut().find(|(c, _)| *c == scored.mv.category) {
            Some((_, bucket)) => bucket.push(scored),
            None => buckets.push((scored.mv.category, vec![scored])),
        }
    }

    for (_, bucket) in &mut buckets {
        bucket.sort_by(|a, b| {
            b.stab
                .cmp(&a.stab)
                .then_with(|| b.effective_power.cmp(&a.effective_power))
                .then_with(|| a.mv.key.cmp(&b.mv.key))
        });
        bucket.truncate(config.moves_per_category);
    }

    // Best-ranked category leads; an equal-rank tie goes to the bucket
    // with a STAB move.
    buckets.sort_by(|(_, a), (_, b)| {
        let rank_a = a.iter().map(|m| m.rank).min().unwrap_or(usize::MAX);
        let rank_b = b.iter().map(|m| m.rank).min().unwrap_or(usize::MAX);
        rank_a
            .cmp(&rank_b)
            .then_with(|| b.iter().any(|m| m.stab).cmp(&a.iter().any(|m| m.stab)))
    });

    let mut selection = Vec::new();
    let mut depth = 0;
    while selection.len() < config.selected_moves {
        let mut took_any = false;
        for (_, bucket) in &buckets {
            if selection.len() >= config.selected_moves {
                break;
            }
            if let Some(scored) = bucket.get(depth) {
                selection.push(scored.clone());
                took_any = true;
            }
        }
        if !took_any {
            break;
        }
        depth += 1;
    }
    selection
}

#[cfg(test)]
mod tests {
    use super::*;
    use faceoff_core::{BaseStats, DamageClass, LearnMethod, OpposingMember};

    fn mv(key: &str, category: Category, power: u16) -> Move {
        Move {
            key: key.to_string(),
            name: key.to_string(),
            category,
            class: DamageClass::Physical,
            power,
            method: LearnMethod::LevelUp,
            level: None,
        }
    }

    fn recommendations(categories: &[Category]) -> Vec<RecommendedCategory> {
        categories
            .iter()
            .enumerate()
            .map(|(i, &category)| RecommendedCategory {
                category,
                score: 10 - i as i32,
                rank: i + 1,
            })
            .collect()
    }

    #[test]
    fn test_recommended_categories_top_n() {
        let team = TeamProfile::new(vec![OpposingMember {
            key: "golem".to_string(),
            typing: Typing::dual(Category::Rock, Category::Ground),
            stats: BaseStats::default(),
            moves: Vec::new(),
        }]);

        let recommended = recommended_categories(&team, &ScoringConfig::default());
        assert_eq!(recommended.len(), 4);
        assert_eq!(recommended[0].rank, 1);
        assert_eq!(recommended[3].rank, 4);
        // Water and Grass both reach 4x and share the top raw score.
        assert_eq!(recommended[0].category, Category::Water);
        assert_eq!(recommended[1].category, Category::Grass);
        assert!(recommended_categories(&TeamProfile::default(), &ScoringConfig::default()).is_empty());
    }

    #[test]
    fn test_select_moves_scores_and_bonuses() {
        let config = ScoringConfig::default();
        let typing = Typing::mono(Category::Water);
        let moves = vec![
            mv("surf", Category::Water, 90),
            mv("ice-beam", Category::Ice, 90),
            mv("tackle", Category::Normal, 40),
        ];
        let recommended = recommendations(&[Category::Water, Category::Ice]);

        let selection = select_moves(typing, &moves, &recommended, &config);

        // Normal is not recommended, so tackle is discarded.
        assert_eq!(selection.moves.len(), 2);

        let surf = &selection.moves[0];
        assert_eq!(surf.mv.key, "surf");
        assert!(surf.stab);
        assert_eq!(surf.rank_bonus, 8.0);
        assert_eq!(surf.power_bonus, 4.5);
        assert_eq!(surf.score, 17.5);
        assert_eq!(surf.effective_power, 135);

        let ice_beam = &selection.moves[1];
        assert!(!ice_beam.stab);
        assert_eq!(ice_beam.rank_bonus, 6.0);
        assert_eq!(ice_beam.score, 10.5);
        assert_eq!(ice_beam.effective_power, 90);

        assert_eq!(selection.score, 28.0);
    }

    #[test]
    fn test_select_moves_empty_inputs() {
        let config = ScoringConfig::default();
        let typing = Typing::mono(Category::Fire);

        let no_moves = select_moves(typing, &[], &recommendations(&[Category::Fire]), &config);
        assert_eq!(no_moves.score, 0.0);
        assert!(no_moves.moves.is_empty());

        let no_recommendations =
            select_moves(typing, &[mv("ember", Category::Fire, 40)], &[], &config);
        assert_eq!(no_recommendations.score, 0.0);
        assert!(no_recommendations.moves.is_empty());
    }

    #[test]
    fn test_select_moves_dedupes_by_key() {
        let config = ScoringConfig::default();
        let moves = vec![
            mv("flamethrower", Category::Fire, 90),
            mv("flamethrower", Category::Fire, 90),
        ];
        let selection = select_moves(
            Typing::mono(Category::Fire),
            &moves,
            &recommendations(&[Category::Fire]),
            &config,
        );
        assert_eq!(selection.moves.len(), 1);
    }

    #[test]
    fn test_aggregate_score_caps_at_100() {
        let config = ScoringConfig::default();
        let moves: Vec<Move> = (0..12)
            .map(|i| mv(&format!("blast-{i}"), Category::Fire, 120))
            .collect();
        let selection = select_moves(
            Typing::mono(Category::Fire),
            &moves,
            &recommendations(&[Category::Fire]),
            &config,
        );
        assert_eq!(selection.score, 100.0);
    }

    #[test]
    fn test_diversification_caps_category_and_interleaves() {
        let config = ScoringConfig::default();
        let typing = Typing::mono(Category::Water);
        let moves = vec![
            mv("hydro-pump", Category::Water, 110),
            mv("surf", Category::Water, 90),
            mv("waterfall", Category::Water, 80),
            mv("aqua-tail", Category::Water, 90),
            mv("bubble-beam", Category::Water, 65),
            mv("ice-beam", Category::Ice, 90),
            mv("blizzard", Category::Ice, 110),
        ];
        let recommended = recommendations(&[Category::Water, Category::Ice]);

        let selection = select_moves(typing, &moves, &recommended, &config);

        let water_count = selection
            .moves
            .iter()
            .filter(|m| m.mv.category == Category::Water)
            .count();
        assert_eq!(water_count, 3);

        let ice_count = selection
            .moves
            .iter()
            .filter(|m| m.mv.category == Category::Ice)
            .count();
        assert_eq!(ice_count, 2);

        // Round-robin: rank-1 Water leads, then Ice, alternating.
        let categories: Vec<Category> = selection.moves.iter().map(|m| m.mv.category).collect();
        assert_eq!(
            categories,
            vec![
                Category::Water,
                Category::Ice,
                Category::Water,
                Category::Ice,
                Category::Water,
            ]
        );

        // Within the Water bucket: STAB everywhere, so highest effective
        // power first; surf and aqua-tail tie at 135 and order by key.
        assert_eq!(selection.moves[0].mv.key, "hydro-pump");
        assert_eq!(selection.moves[2].mv.key, "aqua-tail");
        assert_eq!(selection.moves[4].mv.key, "surf");
    }

    #[test]
    fn test_equal_moves_tie_break_is_alphabetical() {
        let config = ScoringConfig::default();
        let moves = vec![
            mv("mud-shot", Category::Ground, 55),
            mv("bulldoze", Category::Ground, 55),
        ];
        let selection = select_moves(
            Typing::mono(Category::Normal),
            &moves,
            &recommendations(&[Category::Ground]),
            &config,
        );
        assert_eq!(selection.moves[0].mv.key, "bulldoze");
        assert_eq!(selection.moves[1].mv.key, "mud-shot");
    }

    #[test]
    fn test_total_selection_cap() {
        let mut config = ScoringConfig::default();
        config.selected_moves = 4;
        let moves = vec![
            mv("a1", Category::Water, 90),
            mv("a2", Category::Water, 80),
            mv("a3", Category::Water, 70),
            mv("b1", Category::Ice, 90),
            mv("b2", Category::Ice, 80),
            mv("b3", Category::Ice, 70),
        ];
        let selection = select_moves(
            Typing::mono(Category::Normal),
            &moves,
            &recommendations(&[Category::Water, Category::Ice]),
            &config,
        );
        assert_eq!(selection.moves.len(), 4);
    }
}
