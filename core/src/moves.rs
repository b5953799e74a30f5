//! Move records as produced by the ingestion collaborator

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::category::Category;

/// A damage class name from an external record that is not Physical,
/// Special, or Status.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown damage class: {0}")]
pub struct UnknownDamageClass(pub String);

/// Which attacking stat a move uses, or none at all
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DamageClass {
    Physical,
    Special,
    Status,
}

impl DamageClass {
    /// Parse from a record string (case-insensitive)
    pub fn from_name(name: &str) -> Option<Self> {
        [Self::Physical, Self::Special, Self::Status]
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(name))
    }

    /// Canonical string representation
    pub fn as_str(self) -> &'static str {
        match self {
            DamageClass::Physical => "Physical",
            DamageClass::Special => "Special",
            DamageClass::Status => "Status",
        }
    }
}

impl fmt::Display for DamageClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DamageClass {
    type Err = UnknownDamageClass;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| UnknownDamageClass(s.to_string()))
    }
}

/// How a candidate learns a move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LearnMethod {
    LevelUp,
    Machine,
    Egg,
    Tutor,
}

/// A single learnable or known move. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Stable identifying key (e.g. "flamethrower")
    pub key: String,

    /// Display name (e.g. "Flamethrower")
    pub name: String,

    /// Affinity category of the move
    pub category: Category,

    /// Physical, Special, or Status
    pub class: DamageClass,

    /// Base power; 0 for moves without one
    pub power: u16,

    /// How the move is learned
    pub method: LearnMethod,

    /// Learn level, for level-up moves
    pub level: Option<u8>,
}

impl Move {
    /// Whether the move can deal direct damage: a non-Status class with
    /// a base power above zero. Only damaging moves participate in
    /// offensive scoring and coverage.
    pub fn is_damaging(&self) -> bool {
        self.class != DamageClass::Status && self.power > 0
    }
}

/// Unique categories of the damaging moves in a set, alphabetical.
/// Status and zero-power moves never contribute a category.
pub fn attack_categories(moves: &[Move]) -> Vec<Category> {
    let mut categories: Vec<Category> = Vec::new();
    for m in moves {
        if m.is_damaging() && !categories.contains(&m.category) {
            categories.push(m.category);
        }
    }
    categories.sort_by_key(|c| c.as_str());
    categories
}

#[cfg(test)]
mod tests {
    use super::*;

    fn growl() -> Move {
        Move {
            key: "growl".to_string(),
            name: "Growl".to_string(),
            category: Category::Normal,
            class: DamageClass::Status,
            power: 0,
            method: LearnMethod::LevelUp,
            level: Some(1),
        }
    }

    #[test]
    fn test_status_moves_are_not_damaging() {
        assert!(!growl().is_damaging());
    }

    #[test]
    fn test_zero_power_moves_are_not_damaging() {
        let mut odd = growl();
        odd.class = DamageClass::Special;
        assert!(!odd.is_damaging());

        odd.power = 90;
        assert!(odd.is_damaging());
    }

    #[test]
    fn test_damage_class_from_name() {
        assert_eq!(DamageClass::from_name("physical"), Some(DamageClass::Physical));
        assert_eq!(DamageClass::from_name("SPECIAL"), Some(DamageClass::Special));
        assert_eq!(DamageClass::from_name("other"), None);
        assert!("other".parse::<DamageClass>().is_err());
    }
}
