//! Composite roster ranking against a fixed opposing team

use std::collections::HashSet;

use faceoff_core::{
    Candidate, Category, LearnMethod, Move, SUPER_EFFECTIVE_THRESHOLD, TeamProfile, Typing,
};
use tracing::{debug, trace};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::alignment::{self, AlignmentHint};
use crate::config::ScoringConfig;
use crate::defense;
use crate::moves::{self, RecommendedCategory, ScoredMove};
use crate::offense::{self, CoverageHit};

/// What the player has actually unlocked, applied before scoring.
///
/// `None` in a field means no restriction. Candidates match on display
/// name or key; the move set restricts Machine-taught moves only, since
/// other learn methods travel with the candidate itself.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AvailabilityFilter {
    pub candidates: Option<HashSet<String>>,
    pub machine_moves: Option<HashSet<String>>,
}

impl AvailabilityFilter {
    fn allows_candidate(&self, candidate: &Candidate) -> bool {
        match &self.candidates {
            Some(available) => {
                available.contains(&candidate.name) || available.contains(&candidate.key)
            }
            None => true,
        }
    }

    fn allows_move(&self, mv: &Move) -> bool {
        match &self.machine_moves {
            Some(available) => mv.method != LearnMethod::Machine || available.contains(&mv.key),
            None => true,
        }
    }
}

/// One candidate's composite score and its component breakdown
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RankedResult {
    /// 1-based position after sorting
    pub rank: usize,
    pub key: String,
    pub name: String,
    pub typing: Typing,
    /// Overall power total (sum of the six base stats)
    pub power_total: u16,
    pub total_score: f32,
    pub defense_score: f32,
    pub offense_score: f32,
    pub stat_score: f32,
    pub power_score: f32,
    pub immune: Vec<Category>,
    pub resisted: Vec<Category>,
    pub weak: Vec<Category>,
    /// Diversified move recommendation
    pub moves: Vec<ScoredMove>,
    /// Keys of opposing members this candidate can hit at >= 2x
    pub covered: Vec<String>,
}

impl RankedResult {
    /// How many opposing members the candidate covers
    pub fn coverage_count(&self) -> usize {
        self.covered.len()
    }
}

/// Attacking-stat alignment with the opposing team's defensive skew,
/// normalized to 0-100.
fn stat_score(attack: u16, sp_attack: u16, hint: AlignmentHint, config: &ScoringConfig) -> f32 {
    let normalize = |stat: u16| (f32::from(stat) / config.stat_ceiling * 100.0).min(100.0);
    match hint {
        AlignmentHint::Physical => normalize(attack),
        AlignmentHint::Special => normalize(sp_attack),
        AlignmentHint::Either => (normalize(attack) + normalize(sp_attack)) / 2.0,
    }
}

/// Overall power total mapped linearly onto 0-100 and clamped.
fn power_score(total: u16, config: &ScoringConfig) -> f32 {
    let span = config.power_ceiling - config.power_floor;
    ((f32::from(total) - config.power_floor) / span * 100.0).clamp(0.0, 100.0)
}

/// Opposing members hit at >= 2x by any of the given attack categories.
/// Each member is settled by the first super-effective category found.
fn covered_members(attack_categories: &[Category], team: &TeamProfile) -> Vec<String> {
    if attack_categories.is_empty() {
        return Vec::new();
    }
    team.members
        .iter()
        .filter(|member| {
            attack_categories
                .iter()
                .any(|c| member.typing.effectiveness_from(*c) >= SUPER_EFFECTIVE_THRESHOLD)
        })
        .map(|member| member.key.clone())
        .collect()
}

fn score_candidate(
    candidate: &Candidate,
    team: &TeamProfile,
    trainer_categories: &[Category],
    recommended: &[RecommendedCategory],
    hint: AlignmentHint,
    filter: Option<&AvailabilityFilter>,
    config: &ScoringConfig,
) -> RankedResult {
    let available_moves: Vec<Move> = candidate
        .moves
        .iter()
        .filter(|m| filter.is_none_or(|f| f.allows_move(m)))
        .cloned()
        .collect();

    let defense = defense::defense_score(candidate.typing, trainer_categories, config);
    let selection = moves::select_moves(candidate.typing, &available_moves, recommended, config);
    let stat = stat_score(candidate.stats.attack, candidate.stats.sp_attack, hint, config);
    let power = power_score(candidate.stats.total(), config);
    let covered = covered_members(
        &faceoff_core::attack_categories(&available_moves),
        team,
    );

    let weights = &config.weights;
    let total = weights.defense * defense.score
        + weights.offense * selection.score
        + weights.stat * stat
        + weights.power * power;

    trace!(
        candidate = %candidate.key,
        total,
        defense = defense.score,
        offense = selection.score,
        "scored candidate"
    );

    RankedResult {
        rank: 0,
        key: candidate.key.clone(),
        name: candidate.name.clone(),
        typing: candidate.typing,
        power_total: candidate.stats.total(),
        total_score: total,
        defense_score: defense.score,
        offense_score: selection.score,
        stat_score: stat,
        power_score: power,
        immune: defense.immune,
        resisted: defense.resisted,
        weak: defense.weak,
        moves: selection.moves,
        covered,
    }
}

/// Rank a roster of candidates against a fixed opposing team.
///
/// Every candidate passing the availability filter is scored
/// independently, so the per-candidate pass is a plain map over the
/// roster (a parallel one with the `parallel` feature). Results are
/// sorted by total score, ties broken by candidate key, given 1-based
/// ranks, and truncated to `top_n` unless it is 0.
pub fn rank_roster(
    team: &TeamProfile,
    roster: &[Candidate],
    filter: Option<&AvailabilityFilter>,
    top_n: usize,
    config: &ScoringConfig,
) -> Vec<RankedResult> {
    let recommended = moves::recommended_categories(team, config);
    let hint = alignment::defensive_alignment(team).hint;
    let trainer_categories = team.attack_categories();

    let eligible: Vec<&Candidate> = roster
        .iter()
        .filter(|c| filter.is_none_or(|f| f.allows_candidate(c)))
        .collect();

    debug!(
        roster = roster.len(),
        eligible = eligible.len(),
        members = team.len(),
        ?hint,
        "ranking roster"
    );

    let score = |candidate: &&Candidate| {
        score_candidate(
            candidate,
            team,
            &trainer_categories,
            &recommended,
            hint,
            filter,
            config,
        )
    };

    #[cfg(feature = "parallel")]
    let mut results: Vec<RankedResult> = eligible.par_iter().map(score).collect();
    #[cfg(not(feature = "parallel"))]
    let mut results: Vec<RankedResult> = eligible.iter().map(score).collect();

    results.sort_by(|a, b| {
        b.total_score
            .total_cmp(&a.total_score)
            .then_with(|| a.key.cmp(&b.key))
    });
    for (i, result) in results.iter_mut().enumerate() {
        result.rank = i + 1;
    }
    if top_n > 0 {
        results.truncate(top_n);
    }
    results
}

/// Full scored-move drill-down for one candidate against a team.
pub fn candidate_move_detail(
    candidate: &Candidate,
    team: &TeamProfile,
    filter: Option<&AvailabilityFilter>,
    config: &ScoringConfig,
) -> Vec<ScoredMove> {
    let recommended = moves::recommended_categories(team, config);
    let available_moves: Vec<Move> = candidate
        .moves
        .iter()
        .filter(|m| filter.is_none_or(|f| f.allows_move(m)))
        .cloned()
        .collect();
    moves::select_moves(candidate.typing, &available_moves, &recommended, config).moves
}

/// Per-member coverage drill-down for one candidate against a team.
pub fn candidate_coverage_detail(
    candidate: &Candidate,
    team: &TeamProfile,
    filter: Option<&AvailabilityFilter>,
) -> Vec<CoverageHit> {
    let available_moves: Vec<Move> = candidate
        .moves
        .iter()
        .filter(|m| filter.is_none_or(|f| f.allows_move(m)))
        .cloned()
        .collect();
    offense::coverage_detail(team, &faceoff_core::attack_categories(&available_moves))
}

#[cfg(test)]
mod tests {
    use super::*;
    use faceoff_core::{BaseStats, DamageClass, OpposingMember};

    fn mv(key: &str, category: Category, class: DamageClass, power: u16, method: LearnMethod) -> Move {
        Move {
            key: key.to_string(),
            name: key.to_string(),
            category,
            class,
            power,
            method,
            level: None,
        }
    }

    fn opposing(key: &str, typing: Typing, moves: Vec<Move>) -> OpposingMember {
        OpposingMember {
            key: key.to_string(),
            typing,
            stats: BaseStats::new(70, 80, 90, 60, 70, 50),
            moves,
        }
    }

    fn rock_team() -> TeamProfile {
        TeamProfile::new(vec![
            opposing(
                "golem",
                Typing::dual(Category::Rock, Category::Ground),
                vec![
                    mv("rock-slide", Category::Rock, DamageClass::Physical, 75, LearnMethod::LevelUp),
                    mv("earthquake", Category::Ground, DamageClass::Physical, 100, LearnMethod::LevelUp),
                ],
            ),
            opposing(
                "onix",
                Typing::dual(Category::Rock, Category::Ground),
                vec![mv("rock-throw", Category::Rock, DamageClass::Physical, 50, LearnMethod::LevelUp)],
            ),
        ])
    }

    fn starmie() -> Candidate {
        Candidate::new(
            "starmie",
            "Starmie",
            Typing::dual(Category::Water, Category::Psychic),
            BaseStats::new(60, 75, 85, 100, 85, 115),
            vec![
                mv("surf", Category::Water, DamageClass::Special, 90, LearnMethod::Machine),
                mv("psychic", Category::Psychic, DamageClass::Special, 90, LearnMethod::LevelUp),
            ],
        )
    }

    fn tangela() -> Candidate {
        Candidate::new(
            "tangela",
            "Tangela",
            Typing::mono(Category::Grass),
            BaseStats::new(65, 55, 115, 100, 40, 60),
            vec![mv("giga-drain", Category::Grass, DamageClass::Special, 75, LearnMethod::LevelUp)],
        )
    }

    #[test]
    fn test_rank_roster_orders_and_numbers_results() {
        let config = ScoringConfig::default();
        let roster = vec![tangela(), starmie()];
        let results = rank_roster(&rock_team(), &roster, None, 0, &config);

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].rank, 1);
        assert_eq!(results[1].rank, 2);
        assert!(results[0].total_score >= results[1].total_score);
    }

    #[test]
    fn test_component_weighting() {
        let config = ScoringConfig::default();
        let results = rank_roster(&rock_team(), &[starmie()], None, 0, &config);
        let result = &results[0];

        let expected = 0.30 * result.defense_score
            + 0.40 * result.offense_score
            + 0.15 * result.stat_score
            + 0.15 * result.power_score;
        assert!((result.total_score - expected).abs() < 1e-4);

        // Water/Psychic resists neither Rock nor Ground, but takes both
        // at neutral.
        assert!(result.immune.is_empty());
        assert!(result.weak.is_empty());

        // Surf hits both Rock/Ground members at 4x.
        assert_eq!(result.covered, vec!["golem", "onix"]);
        assert_eq!(result.coverage_count(), 2);
    }

    #[test]
    fn test_stat_score_follows_alignment_hint() {
        let config = ScoringConfig::default();
        assert_eq!(stat_score(95, 190, AlignmentHint::Physical, &config), 50.0);
        assert_eq!(stat_score(95, 190, AlignmentHint::Special, &config), 100.0);
        assert_eq!(stat_score(95, 190, AlignmentHint::Either, &config), 75.0);
        // Capped per side.
        assert_eq!(stat_score(250, 0, AlignmentHint::Physical, &config), 100.0);
    }

    #[test]
    fn test_power_score_clamps() {
        let config = ScoringConfig::default();
        assert_eq!(power_score(300, &config), 0.0);
        assert_eq!(power_score(450, &config), 50.0);
        assert_eq!(power_score(600, &config), 100.0);
        assert_eq!(power_score(240, &config), 0.0);
        assert_eq!(power_score(720, &config), 100.0);
    }

    #[test]
    fn test_empty_availability_filter_yields_empty_ranking() {
        let config = ScoringConfig::default();
        let filter = AvailabilityFilter {
            candidates: Some(HashSet::new()),
            machine_moves: None,
        };
        let results = rank_roster(&rock_team(), &[starmie(), tangela()], Some(&filter), 0, &config);
        assert!(results.is_empty());
    }

    #[test]
    fn test_candidate_filter_matches_name_or_key() {
        let config = ScoringConfig::default();
        let filter = AvailabilityFilter {
            candidates: Some(HashSet::from(["Starmie".to_string()])),
            machine_moves: None,
        };
        let results = rank_roster(&rock_team(), &[starmie(), tangela()], Some(&filter), 0, &config);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].key, "starmie");
    }

    #[test]
    fn test_machine_move_filter_drops_locked_moves() {
        let config = ScoringConfig::default();
        let filter = AvailabilityFilter {
            candidates: None,
            machine_moves: Some(HashSet::new()),
        };
        let results = rank_roster(&rock_team(), &[starmie()], Some(&filter), 0, &config);

        // Surf is Machine-taught and locked; Psychic remains but is not
        // super effective against anyone, so coverage collapses.
        assert!(results[0].moves.iter().all(|m| m.mv.key != "surf"));
        assert!(results[0].covered.is_empty());
    }

    #[test]
    fn test_ranking_is_idempotent() {
        let config = ScoringConfig::default();
        let roster = vec![starmie(), tangela()];
        let first = rank_roster(&rock_team(), &roster, None, 0, &config);
        let second = rank_roster(&rock_team(), &roster, None, 0, &config);
        assert_eq!(first, second);
    }

    #[test]
    fn test_top_n_truncation() {
        let config = ScoringConfig::default();
        let roster = vec![starmie(), tangela()];
        let results = rank_roster(&rock_team(), &roster, None, 1, &config);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].rank, 1);
    }

    #[test]
    fn test_empty_team_scores_zero_defense_and_coverage() {
        let config = ScoringConfig::default();
        let results = rank_roster(&TeamProfile::default(), &[starmie()], None, 0, &config);
        assert_eq!(results[0].defense_score, 0.0);
        assert_eq!(results[0].offense_score, 0.0);
        assert!(results[0].covered.is_empty());
    }

    #[test]
    fn test_candidate_move_detail_scores_against_team() {
        let config = ScoringConfig::default();
        let detail = candidate_move_detail(&starmie(), &rock_team(), None, &config);
        assert!(!detail.is_empty());
        assert_eq!(detail[0].mv.key, "surf");
        assert!(detail[0].stab);
    }

    #[test]
    fn test_candidate_coverage_detail() {
        let detail = candidate_coverage_detail(&starmie(), &rock_team(), None);
        assert_eq!(detail.len(), 2);
        assert!(detail.iter().all(|hit| hit.covered));
        assert_eq!(detail[0].best_category, Some(Category::Water));
    }
}
