//! Offensive category scoring and exhaustive four-category coverage search

use faceoff_core::{Category, NEUTRAL_MULTIPLIER, SUPER_EFFECTIVE_THRESHOLD, TeamProfile, Typing};
use tracing::debug;

/// Multiplier at or above which a hit counts as doubly super effective
const QUAD_EFFECTIVE_THRESHOLD: f32 = 4.0;

const QUAD_WEIGHT: i32 = 8;
const SUPER_WEIGHT: i32 = 4;
const RESISTED_PENALTY: i32 = 2;
const IMMUNE_PENALTY: i32 = 6;

const COVERED_WEIGHT: f32 = 10.0;
const BEST_EFFECTIVENESS_WEIGHT: f32 = 2.0;
const UNCOVERED_PENALTY: f32 = 15.0;

/// How hard a single attacking category lands on one defender
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HitKind {
    Quad,
    Super,
    Neutral,
    Resisted,
    Immune,
}

impl HitKind {
    /// Classify an effectiveness multiplier
    pub fn classify(effectiveness: f32) -> Self {
        if effectiveness == 0.0 {
            HitKind::Immune
        } else if effectiveness >= QUAD_EFFECTIVE_THRESHOLD {
            HitKind::Quad
        } else if effectiveness >= SUPER_EFFECTIVE_THRESHOLD {
            HitKind::Super
        } else if effectiveness == NEUTRAL_MULTIPLIER {
            HitKind::Neutral
        } else {
            HitKind::Resisted
        }
    }
}

/// One attacking category scored against every member of a team
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CategoryOffense {
    pub category: Category,
    pub quad: usize,
    pub super_effective: usize,
    pub neutral: usize,
    pub resisted: usize,
    pub immune: usize,
    /// 8×quad + 4×super − 2×resisted − 6×immune
    pub score: i32,
}

/// A four-category set scored for team-wide coverage
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CoverageCombo {
    pub categories: [Category; 4],
    /// Members hit at >= 2x by at least one of the four categories
    pub covered: usize,
    pub members: usize,
    pub coverage_pct: f32,
    /// 10×covered + 2×Σ(best effectiveness) − 15×uncovered
    pub score: f32,
}

/// Per-member outcome of a single attacking category
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CategoryHit {
    pub member: String,
    pub typing: Typing,
    pub effectiveness: f32,
    pub kind: HitKind,
}

/// Per-member outcome of the best pick among several attacking categories
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CoverageHit {
    pub member: String,
    pub typing: Typing,
    /// The category reaching the best multiplier; None when every given
    /// category is walled at 0x (or none were given)
    pub best_category: Option<Category>,
    pub effectiveness: f32,
    pub covered: bool,
}

/// Score one attacking category against every member of the team.
pub fn score_single_category(category: Category, team: &TeamProfile) -> CategoryOffense {
    let mut result = CategoryOffense {
        category,
        quad: 0,
        super_effective: 0,
        neutral: 0,
        resisted: 0,
        immune: 0,
        score: 0,
    };

    for member in &team.members {
        match HitKind::classify(member.typing.effectiveness_from(category)) {
            HitKind::Quad => result.quad += 1,
            HitKind::Super => result.super_effective += 1,
            HitKind::Neutral => result.neutral += 1,
            HitKind::Resisted => result.resisted += 1,
            HitKind::Immune => result.immune += 1,
        }
    }

    result.score = QUAD_WEIGHT * result.quad as i32 + SUPER_WEIGHT * result.super_effective as i32
        - RESISTED_PENALTY * result.resisted as i32
        - IMMUNE_PENALTY * result.immune as i32;
    result
}

/// Score all 18 categories against the team, best first.
/// Ties keep chart order, so the ranking is deterministic.
pub fn rank_all_single_categories(team: &TeamProfile) -> Vec<CategoryOffense> {
    let mut results: Vec<CategoryOffense> = Category::ALL
        .into_iter()
        .map(|category| score_single_category(category, team))
        .collect();
    results.sort_by(|a, b| b.score.cmp(&a.score));
    results
}

/// Exhaustively score every unordered four-category set for coverage.
///
/// All C(18,4) = 3060 combinations are evaluated against a per-(category,
/// member) effectiveness table computed once up front. A member is covered
/// when the best of the four categories reaches 2x. Results come back best
/// first, truncated to `top_n`; an empty team yields an empty list.
pub fn search_four_category_coverage(team: &TeamProfile, top_n: usize) -> Vec<CoverageCombo> {
    if team.is_empty() {
        return Vec::new();
    }

    // effectiveness[category ordinal][member index]
    let effectiveness: Vec<Vec<f32>> = Category::ALL
        .into_iter()
        .map(|category| {
            team.members
                .iter()
                .map(|member| member.typing.effectiveness_from(category))
                .collect()
        })
        .collect();

    let members = team.len();
    let mut results: Vec<CoverageCombo> = Vec::with_capacity(3060);

    for a in 0..Category::ALL.len() {
        for b in (a + 1)..Category::ALL.len() {
            for c in (b + 1)..Category::ALL.len() {
                for d in (c + 1)..Category::ALL.len() {
                    let mut covered = 0usize;
                    let mut best_sum = 0.0f32;
                    for m in 0..members {
                        let best = effectiveness[a][m]
                            .max(effectiveness[b][m])
                            .max(effectiveness[c][m])
                            .max(effectiveness[d][m]);
                        if best >= SUPER_EFFECTIVE_THRESHOLD {
                            covered += 1;
                        }
                        best_sum += best;
                    }
                    let uncovered = members - covered;
                    results.push(CoverageCombo {
                        categories: [
                            Category::ALL[a],
                            Category::ALL[b],
                            Category::ALL[c],
                            Category::ALL[d],
                        ],
                        covered,
                        members,
                        coverage_pct: covered as f32 / members as f32 * 100.0,
                        score: COVERED_WEIGHT * covered as f32
                            + BEST_EFFECTIVENESS_WEIGHT * best_sum
                            - UNCOVERED_PENALTY * uncovered as f32,
                    });
                }
            }
        }
    }

    debug!(
        combinations = results.len(),
        members, top_n, "searched four-category coverage"
    );

    // Stable sort over the lexicographic enumeration keeps ties deterministic
    results.sort_by(|a, b| b.score.total_cmp(&a.score));
    results.truncate(top_n);
    results
}

/// Per-member breakdown for a single attacking category.
pub fn single_category_detail(team: &TeamProfile, category: Category) -> Vec<CategoryHit> {
    team.members
        .iter()
        .map(|member| {
            let effectiveness = member.typing.effectiveness_from(category);
            CategoryHit {
                member: member.key.clone(),
                typing: member.typing,
                effectiveness,
                kind: HitKind::classify(effectiveness),
            }
        })
        .collect()
}

/// Per-member breakdown of the best pick among the given categories.
pub fn coverage_detail(team: &TeamProfile, categories: &[Category]) -> Vec<CoverageHit> {
    team.members
        .iter()
        .map(|member| {
            let mut best_category = None;
            let mut best = 0.0f32;
            for &category in categories {
                let effectiveness = member.typing.effectiveness_from(category);
                if effectiveness > best {
                    best = effectiveness;
                    best_category = Some(category);
                }
            }
            CoverageHit {
                member: member.key.clone(),
                typing: member.typing,
                best_category,
                effectiveness: best,
                covered: best >= SUPER_EFFECTIVE_THRESHOLD,
            }
        })
        .collect()
}
