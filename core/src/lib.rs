//! Affinity categories, the effectiveness chart, and matchup domain records.
//!
//! This crate holds everything the scoring engine operates on but does not
//! compute: the fixed 18-category effectiveness chart and the immutable
//! record types produced by the roster, movepool, and opponent-team
//! providers.
//!
//! ```text
//! providers (out of process / out of scope)
//!        │
//!        ▼
//! faceoff-core (records + chart) ← THIS CRATE
//!        │
//!        └─> faceoff-engine (scoring, coverage search, ranking)
//! ```
//!
//! # Main Types
//!
//! - [`Category`] - the 18 affinity categories with the static chart
//! - [`Typing`] - canonical one- or two-category identity
//! - [`Move`], [`DamageClass`], [`LearnMethod`] - learnable-move records
//! - [`BaseStats`] - six base stats plus the overall power total
//! - [`Candidate`] - a roster entry with its learnable moves
//! - [`OpposingMember`], [`TeamProfile`] - the fixed opposing team
//!
//! Category and damage-class names arriving from loosely-typed sources are
//! parsed once at this boundary; an unrecognized name is an
//! [`UnknownCategory`]/[`UnknownDamageClass`] error for the caller to drop,
//! so no out-of-enumeration value can ever reach a scoring pass.

pub mod category;
pub mod moves;
pub mod roster;
pub mod stats;
pub mod team;
pub mod typing;

pub use category::{
    AFFINITY_CHART, Category, IMMUNE_MULTIPLIER, NEUTRAL_MULTIPLIER, RESISTANCE_THRESHOLD,
    SUPER_EFFECTIVE_THRESHOLD, UnknownCategory,
};
pub use moves::{DamageClass, LearnMethod, Move, UnknownDamageClass, attack_categories};
pub use roster::Candidate;
pub use stats::BaseStats;
pub use team::{OpposingMember, TeamProfile};
pub use typing::Typing;
