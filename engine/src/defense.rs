//! Defensive scoring against an opposing team's attack surface

use faceoff_core::{Category, Move, NEUTRAL_MULTIPLIER, TeamProfile, Typing};
use tracing::debug;

use crate::config::ScoringConfig;

/// Weight of each immunity in the raw defensive score
const IMMUNE_WEIGHT: i32 = 3;
/// Weight of each resistance in the raw defensive score
const RESIST_WEIGHT: i32 = 2;
/// Penalty of each weakness in the raw defensive score
const WEAK_WEIGHT: i32 = 4;
/// Bonus per opposing member left without a super-effective answer
const NEUTRALIZED_WEIGHT: i32 = 5;

/// Attacking categories bucketed by how a typing receives them.
/// Every input category lands in exactly one bucket; duplicates in the
/// input stay duplicated in the buckets.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DefenseBuckets {
    pub immune: Vec<Category>,
    pub resisted: Vec<Category>,
    pub neutral: Vec<Category>,
    pub weak: Vec<Category>,
}

/// Normalized defense score plus the lists worth displaying
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DefenseReport {
    /// Score on a 0-100 scale
    pub score: f32,
    pub immune: Vec<Category>,
    pub resisted: Vec<Category>,
    pub weak: Vec<Category>,
}

/// One of the 171 typings ranked against a whole team
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TypingDefense {
    pub typing: Typing,
    pub buckets: DefenseBuckets,
    /// Opposing members with no super-effective damaging move against
    /// this typing
    pub neutralized: usize,
    /// Raw composite: 3×immune + 2×resisted + 5×neutralized − 4×weak
    pub score: i32,
}

/// How hard one opposing member can hit a given typing
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MemberThreat {
    pub member: String,
    pub typing: Typing,
    /// The member's hardest-hitting damaging move against the evaluated
    /// typing
    pub best_move: Move,
    pub effectiveness: f32,
    /// True when even the best move lands at 1x or below
    pub neutralized: bool,
}

/// Bucket every attacking category by its multiplier against `typing`.
pub fn score_against_categories(typing: Typing, attacking: &[Category]) -> DefenseBuckets {
    let mut buckets = DefenseBuckets::default();
    for &category in attacking {
        let effectiveness = typing.effectiveness_from(category);
        if effectiveness == 0.0 {
            buckets.immune.push(category);
        } else if effectiveness < NEUTRAL_MULTIPLIER {
            buckets.resisted.push(category);
        } else if effectiveness == NEUTRAL_MULTIPLIER {
            buckets.neutral.push(category);
        } else {
            buckets.weak.push(category);
        }
    }
    buckets
}

/// Score a typing against the opposing team's move categories, normalized
/// to 0-100.
///
/// Raw score is 3×immune + 2×resisted − 4×weak, rescaled linearly from the
/// configured practical range and clamped. An empty category list scores 0
/// with empty lists.
pub fn defense_score(
    typing: Typing,
    trainer_categories: &[Category],
    config: &ScoringConfig,
) -> DefenseReport {
    if trainer_categories.is_empty() {
        return DefenseReport::default();
    }

    let buckets = score_against_categories(typing, trainer_categories);
    let raw = IMMUNE_WEIGHT * buckets.immune.len() as i32
        + RESIST_WEIGHT * buckets.resisted.len() as i32
        - WEAK_WEIGHT * buckets.weak.len() as i32;

    let span = config.defense_ceiling - config.defense_floor;
    let normalized = ((raw as f32 - config.defense_floor) / span * 100.0).clamp(0.0, 100.0);

    DefenseReport {
        score: normalized,
        immune: buckets.immune,
        resisted: buckets.resisted,
        weak: buckets.weak,
    }
}

fn is_neutralized(member_categories: &[Category], typing: Typing) -> bool {
    !member_categories.is_empty()
        && member_categories
            .iter()
            .all(|c| typing.effectiveness_from(*c) <= NEUTRAL_MULTIPLIER)
}

/// Rank all 171 typings against a team by the raw composite score.
///
/// On top of the immunity/resistance/weakness terms, each opposing member
/// whose every damaging move lands at 1x or below adds a neutralization
/// bonus. A team without any damaging moves yields an empty ranking.
pub fn rank_all_typings(team: &TeamProfile) -> Vec<TypingDefense> {
    let trainer_categories = team.attack_categories();
    if trainer_categories.is_empty() {
        return Vec::new();
    }

    let member_categories: Vec<Vec<Category>> = team
        .members
        .iter()
        .map(|m| m.attack_categories())
        .collect();

    let mut results: Vec<TypingDefense> = Typing::all_combinations()
        .into_iter()
        .map(|typing| {
            let buckets = score_against_categories(typing, &trainer_categories);
            let neutralized = member_categories
                .iter()
                .filter(|categories| is_neutralized(categories, typing))
                .count();
            let score = IMMUNE_WEIGHT * buckets.immune.len() as i32
                + RESIST_WEIGHT * buckets.resisted.len() as i32
                + NEUTRALIZED_WEIGHT * neutralized as i32
                - WEAK_WEIGHT * buckets.weak.len() as i32;
            TypingDefense {
                typing,
                buckets,
                neutralized,
                score,
            }
        })
        .collect();

    // Stable sort over the canonical enumeration keeps ties deterministic
    results.sort_by(|a, b| b.score.cmp(&a.score));
    debug!(
        categories = trainer_categories.len(),
        best = results.first().map(|r| r.score),
        "ranked 171 defensive typings"
    );
    results
}

/// Per-member breakdown of the best answer each opposing member has
/// against a typing. Members without a damaging move are omitted.
pub fn neutralization_detail(team: &TeamProfile, typing: Typing) -> Vec<MemberThreat> {
    team.members
        .iter()
        .filter_map(|member| {
            let best = member
                .moves
                .iter()
                .filter(|m| m.is_damaging())
                .map(|m| (m, typing.effectiveness_from(m.category)))
                .max_by(|(a, ea), (b, eb)| {
                    ea.total_cmp(eb).then_with(|| b.key.cmp(&a.key))
                })?;
            Some(MemberThreat {
                member: member.key.clone(),
                typing: member.typing,
                best_move: best.0.clone(),
                effectiveness: best.1,
                neutralized: best.1 <= NEUTRAL_MULTIPLIER,
            })
        })
        .collect()
}
