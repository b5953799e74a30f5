//! Physical/special alignment analysis of an opposing team
//!
//! Answers two questions about a fixed team from base stats and known
//! moves alone: which damage class the player should attack with, and
//! which defensive stat the team is going to pressure.

use faceoff_core::{DamageClass, Move, TeamProfile};

/// Factor by which one stat must exceed the other before a member (or a
/// team average) counts as skewed toward it
const SKEW_FACTOR: f32 = 1.2;

/// Factor by which one damage-class power total must exceed the other
/// before it decides the defensive priority on its own
const POWER_SKEW_FACTOR: f32 = 1.5;

/// Which damage class the player's attackers should lean on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AlignmentHint {
    Physical,
    Special,
    Either,
}

/// Which defensive stat matters most against this team
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DefensePriority {
    Physical,
    Special,
    Balanced,
}

/// A member's defensive lean, from its defense/sp_defense skew
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DefenseKind {
    Physical,
    Special,
    Balanced,
}

/// A member's offensive lean, from the damage classes of its moves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AttackKind {
    Physical,
    Special,
    Mixed,
}

/// Per-member defensive classification
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MemberDefenseProfile {
    pub member: String,
    pub defense: u16,
    pub sp_defense: u16,
    pub kind: DefenseKind,
}

/// Per-member offensive classification
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MemberAttackProfile {
    pub member: String,
    pub attack: u16,
    pub sp_attack: u16,
    pub kind: AttackKind,
    pub physical_moves: Vec<String>,
    pub special_moves: Vec<String>,
}

/// Team-wide defensive skew and the resulting attack-class hint
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AlignmentReport {
    pub physical: usize,
    pub special: usize,
    pub balanced: usize,
    pub avg_defense: f32,
    pub avg_sp_defense: f32,
    pub hint: AlignmentHint,
    pub members: Vec<MemberDefenseProfile>,
}

/// Team-wide offensive pressure and the resulting defensive priority
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PressureReport {
    pub physical: usize,
    pub special: usize,
    pub mixed: usize,
    pub physical_power: u32,
    pub special_power: u32,
    pub avg_attack: f32,
    pub avg_sp_attack: f32,
    pub priority: DefensePriority,
    pub members: Vec<MemberAttackProfile>,
}

/// Classify one member's defensive lean
pub fn classify_defense(defense: u16, sp_defense: u16) -> DefenseKind {
    if defense as f32 > sp_defense as f32 * SKEW_FACTOR {
        DefenseKind::Physical
    } else if sp_defense as f32 > defense as f32 * SKEW_FACTOR {
        DefenseKind::Special
    } else {
        DefenseKind::Balanced
    }
}

/// Classify one member's offensive lean from its damaging moves.
/// A member with no damaging moves counts as Mixed.
pub fn classify_attack(moves: &[Move]) -> (AttackKind, Vec<String>, Vec<String>, u32, u32) {
    let mut physical_moves = Vec::new();
    let mut special_moves = Vec::new();
    let mut physical_power = 0u32;
    let mut special_power = 0u32;

    for mv in moves.iter().filter(|m| m.is_damaging()) {
        match mv.class {
            DamageClass::Physical => {
                physical_power += u32::from(mv.power);
                physical_moves.push(mv.name.clone());
            }
            DamageClass::Special => {
                special_power += u32::from(mv.power);
                special_moves.push(mv.name.clone());
            }
            DamageClass::Status => {}
        }
    }

    let kind = match (!physical_moves.is_empty(), !special_moves.is_empty()) {
        (true, false) => AttackKind::Physical,
        (false, true) => AttackKind::Special,
        _ => AttackKind::Mixed,
    };
    (kind, physical_moves, special_moves, physical_power, special_power)
}

/// Which damage class to attack the team with.
///
/// A team stacked with physically defensive members is better attacked on
/// the special side and vice versa; when member counts tie, the team-wide
/// stat averages break the tie at the same skew factor. An empty team
/// gives no signal and hints `Either`.
pub fn defensive_alignment(team: &TeamProfile) -> AlignmentReport {
    let members: Vec<MemberDefenseProfile> = team
        .members
        .iter()
        .map(|m| MemberDefenseProfile {
            member: m.key.clone(),
            defense: m.stats.defense,
            sp_defense: m.stats.sp_defense,
            kind: classify_defense(m.stats.defense, m.stats.sp_defense),
        })
        .collect();

    let physical = members.iter().filter(|m| m.kind == DefenseKind::Physical).count();
    let special = members.iter().filter(|m| m.kind == DefenseKind::Special).count();
    let balanced = members.len() - physical - special;

    let (avg_defense, avg_sp_defense) = if members.is_empty() {
        (0.0, 0.0)
    } else {
        let count = members.len() as f32;
        (
            members.iter().map(|m| f32::from(m.defense)).sum::<f32>() / count,
            members.iter().map(|m| f32::from(m.sp_defense)).sum::<f32>() / count,
        )
    };

    let hint = if members.is_empty() {
        AlignmentHint::Either
    } else if physical > special {
        AlignmentHint::Special
    } else if special > physical {
        AlignmentHint::Physical
    } else if avg_defense > avg_sp_defense * SKEW_FACTOR {
        AlignmentHint::Special
    } else if avg_sp_defense > avg_defense * SKEW_FACTOR {
        AlignmentHint::Physical
    } else {
        AlignmentHint::Either
    };

    AlignmentReport {
        physical,
        special,
        balanced,
        avg_defense,
        avg_sp_defense,
        hint,
        members,
    }
}

/// Which defensive stat the team's own attackers pressure.
///
/// Decided by attacker head-count backed by power totals; when those
/// disagree, a damage-class power total 1.5x the other decides alone.
pub fn offensive_pressure(team: &TeamProfile) -> PressureReport {
    let mut members = Vec::with_capacity(team.len());
    let mut physical = 0usize;
    let mut special = 0usize;
    let mut mixed = 0usize;
    let mut physical_power = 0u32;
    let mut special_power = 0u32;

    for m in &team.members {
        let (kind, physical_moves, special_moves, phys, spec) = classify_attack(&m.moves);
        match kind {
            AttackKind::Physical => physical += 1,
            AttackKind::Special => special += 1,
            AttackKind::Mixed => mixed += 1,
        }
        physical_power += phys;
        special_power += spec;
        members.push(MemberAttackProfile {
            member: m.key.clone(),
            attack: m.stats.attack,
            sp_attack: m.stats.sp_attack,
            kind,
            physical_moves,
            special_moves,
        });
    }

    let (avg_attack, avg_sp_attack) = if members.is_empty() {
        (0.0, 0.0)
    } else {
        let count = members.len() as f32;
        (
            members.iter().map(|m| f32::from(m.attack)).sum::<f32>() / count,
            members.iter().map(|m| f32::from(m.sp_attack)).sum::<f32>() / count,
        )
    };

    let priority = if physical > special && physical_power > special_power {
        DefensePriority::Physical
    } else if special > physical && special_power > physical_power {
        DefensePriority::Special
    } else if physical_power as f32 > special_power as f32 * POWER_SKEW_FACTOR {
        DefensePriority::Physical
    } else if special_power as f32 > physical_power as f32 * POWER_SKEW_FACTOR {
        DefensePriority::Special
    } else {
        DefensePriority::Balanced
    };

    PressureReport {
        physical,
        special,
        mixed,
        physical_power,
        special_power,
        avg_attack,
        avg_sp_attack,
        priority,
        members,
    }
}
