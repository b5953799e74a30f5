//! One- or two-category typings with canonical ordering

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::category::{
    Category, NEUTRAL_MULTIPLIER, RESISTANCE_THRESHOLD, SUPER_EFFECTIVE_THRESHOLD, UnknownCategory,
};

/// A defender's (or attacker's) one or two categories.
///
/// The stored form is canonical: a secondary category equal to the primary
/// collapses to a monotyping, and a dual pair is ordered alphabetically.
/// Two typings built from the same categories in either order compare equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Typing {
    primary: Category,
    secondary: Option<Category>,
}

impl Typing {
    /// Single-category typing
    pub fn mono(category: Category) -> Self {
        Self {
            primary: category,
            secondary: None,
        }
    }

    /// Two-category typing; a duplicated pair collapses to a monotyping
    pub fn dual(first: Category, second: Category) -> Self {
        if first == second {
            return Self::mono(first);
        }
        let (a, b) = if first.as_str() < second.as_str() {
            (first, second)
        } else {
            (second, first)
        };
        Self {
            primary: a,
            secondary: Some(b),
        }
    }

    /// Build from an optional secondary category
    pub fn new(primary: Category, secondary: Option<Category>) -> Self {
        match secondary {
            Some(s) => Self::dual(primary, s),
            None => Self::mono(primary),
        }
    }

    /// Parse from record strings, rejecting names outside the 18 categories
    pub fn from_names(primary: &str, secondary: Option<&str>) -> Result<Self, UnknownCategory> {
        let first: Category = primary.parse()?;
        let second = secondary.map(str::parse).transpose()?;
        Ok(Self::new(first, second))
    }

    /// Primary category (alphabetically first for dual typings)
    pub fn primary(&self) -> Category {
        self.primary
    }

    /// Secondary category, if any
    pub fn secondary(&self) -> Option<Category> {
        self.secondary
    }

    /// Whether this typing contains the given category (STAB check)
    pub fn has(&self, category: Category) -> bool {
        self.primary == category || self.secondary == Some(category)
    }

    /// Effectiveness multiplier of an attacking category against this typing.
    ///
    /// Product of the one or two single-category multipliers, so the result
    /// is one of 0, 0.25, 0.5, 1, 2, or 4.
    pub fn effectiveness_from(&self, attacker: Category) -> f32 {
        let mut multiplier = attacker.effectiveness(self.primary);
        if let Some(secondary) = self.secondary {
            multiplier *= attacker.effectiveness(secondary);
        }
        multiplier
    }

    /// Categories hitting this typing at >= 2x
    pub fn weaknesses(&self) -> Vec<Category> {
        self.filter_categories(|eff| eff >= SUPER_EFFECTIVE_THRESHOLD)
    }

    /// Categories this typing resists (0 < multiplier <= 0.5)
    pub fn resistances(&self) -> Vec<Category> {
        self.filter_categories(|eff| eff > 0.0 && eff <= RESISTANCE_THRESHOLD)
    }

    /// Categories this typing is immune to (0x)
    pub fn immunities(&self) -> Vec<Category> {
        self.filter_categories(|eff| eff == 0.0)
    }

    /// Categories hitting this typing at exactly 1x
    pub fn neutral(&self) -> Vec<Category> {
        self.filter_categories(|eff| eff == NEUTRAL_MULTIPLIER)
    }

    fn filter_categories(&self, keep: impl Fn(f32) -> bool) -> Vec<Category> {
        Category::ALL
            .into_iter()
            .filter(|c| keep(self.effectiveness_from(*c)))
            .collect()
    }

    /// All 171 unique typings: 18 monotypings plus C(18,2) = 153 dual
    /// typings, each dual pair produced exactly once in canonical order.
    pub fn all_combinations() -> Vec<Typing> {
        let mut combinations: Vec<Typing> = Category::ALL.into_iter().map(Typing::mono).collect();
        for (i, first) in Category::ALL.into_iter().enumerate() {
            for second in Category::ALL.into_iter().skip(i + 1) {
                combinations.push(Typing::dual(first, second));
            }
        }
        combinations
    }
}

impl fmt::Display for Typing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.secondary {
            Some(secondary) => write!(f, "{}/{}", self.primary, secondary),
            None => write!(f, "{}", self.primary),
        }
    }
}
