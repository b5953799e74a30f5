//! Matchup scoring and roster ranking over static type affinities.
//!
//! Given a fixed opposing team, this crate answers "who should I bring
//! and what should they throw": defensive typing quality, the strongest
//! attacking categories, exhaustive four-category coverage, per-candidate
//! move recommendations, and a composite ranking merging all of it.
//!
//! # Overview
//!
//! ```text
//! faceoff-core (records + chart)
//!        │
//!        ▼
//! faceoff-engine ← THIS CRATE
//!        │
//!        ├─ defense    defensive buckets, normalized score, 171-typing ranking
//!        ├─ offense    single-category scores, C(18,4) coverage search
//!        ├─ moves      recommended categories, move selection + diversification
//!        ├─ alignment  physical/special skew of the opposing team
//!        ├─ rank       availability filter + weighted composite ranking
//!        └─ cache      explicit memoization of ranking passes
//! ```
//!
//! Everything is a pure function of its inputs: scoring a roster mutates
//! nothing and degenerate inputs (empty team, empty move set, empty
//! filter) produce empty or zero results rather than errors. The
//! per-candidate ranking pass is independent per candidate; enable the
//! `parallel` feature to spread it across threads with an identical final
//! order.
//!
//! # Example
//!
//! ```ignore
//! use faceoff_engine::{rank_roster, ScoringConfig};
//!
//! let config = ScoringConfig::default();
//! let ranked = rank_roster(&team, &roster, None, 10, &config);
//! for result in &ranked {
//!     println!("#{} {} ({:.1})", result.rank, result.name, result.total_score);
//! }
//! ```

pub mod alignment;
pub mod cache;
pub mod config;
pub mod defense;
pub mod moves;
pub mod offense;
pub mod rank;

pub use alignment::{
    AlignmentHint, AlignmentReport, DefensePriority, PressureReport, defensive_alignment,
    offensive_pressure,
};
pub use cache::RankCache;
pub use config::{RankWeights, ScoringConfig};
pub use defense::{
    DefenseBuckets, DefenseReport, MemberThreat, TypingDefense, defense_score,
    neutralization_detail, rank_all_typings, score_against_categories,
};
pub use moves::{MoveSelection, RecommendedCategory, ScoredMove, recommended_categories, select_moves};
pub use offense::{
    CategoryHit, CategoryOffense, CoverageCombo, CoverageHit, HitKind, coverage_detail,
    rank_all_single_categories, score_single_category, search_four_category_coverage,
    single_category_detail,
};
pub use rank::{
    AvailabilityFilter, RankedResult, candidate_coverage_detail, candidate_move_detail, rank_roster,
};
