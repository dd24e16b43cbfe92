//! Modifier classification: stance and per-stance sub-types.
//!
//! A modifier either applies while attacking or while defending, and
//! its sub-type enumeration depends on that stance. `ModifierKind`
//! binds the two together so a rule can never carry an attack sub-type
//! in a defense stance or vice versa.
//!
//! `ModifierKind::None` exists only as the decode-substitution default
//! and the "rejected at insertion" case; it is never produced by the
//! content loader.

use serde::{Deserialize, Serialize};

/// Whether a modifier applies while attacking or defending.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ModifierStance {
    None,
    Attack,
    Defense,
}

impl ModifierStance {
    /// Stable 1-byte wire code.
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            ModifierStance::None => 0,
            ModifierStance::Attack => 1,
            ModifierStance::Defense => 2,
        }
    }

    /// Decode a wire code. Unknown codes map to `None`.
    #[must_use]
    pub const fn from_code(code: u8) -> Self {
        match code {
            1 => ModifierStance::Attack,
            2 => ModifierStance::Defense,
            _ => ModifierStance::None,
        }
    }

    /// Look up a stance by its configuration name.
    ///
    /// Anything other than `"attack"` / `"defense"` is `None`, matching
    /// the loader's lenient handling of bad stance strings.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "attack" => ModifierStance::Attack,
            "defense" => ModifierStance::Defense,
            _ => ModifierStance::None,
        }
    }
}

/// Attack-side modifier sub-types.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AttackModifier {
    /// Damage dealt is partially converted to the attacker's health.
    Lifesteal,
    /// Damage dealt is partially converted to the attacker's mana.
    Manasteal,
    /// Damage dealt is partially converted to the attacker's stamina.
    Staminasteal,
    /// Damage dealt is partially converted to the attacker's soul.
    Soulsteal,
    /// Damage can critically hit.
    Critical,
    /// Damage ignores defenses.
    Piercing,
    /// Damage is converted to a different type (carries a target type).
    Conversion,
    /// Increased damage against a specific monster.
    Butcher,
    /// Increased damage against a specific race.
    Hunter,
    /// Increased damage against a specific boss.
    Slayer,
    /// Increased damage against all bosses.
    Cull,
}

impl AttackModifier {
    /// Stable 1-byte wire code (1..=11). 0 is reserved for "none".
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            AttackModifier::Lifesteal => 1,
            AttackModifier::Manasteal => 2,
            AttackModifier::Staminasteal => 3,
            AttackModifier::Soulsteal => 4,
            AttackModifier::Critical => 5,
            AttackModifier::Piercing => 6,
            AttackModifier::Conversion => 7,
            AttackModifier::Butcher => 8,
            AttackModifier::Hunter => 9,
            AttackModifier::Slayer => 10,
            AttackModifier::Cull => 11,
        }
    }

    /// Decode a wire code. Returns `None` for 0 and for unknown codes.
    #[must_use]
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(AttackModifier::Lifesteal),
            2 => Some(AttackModifier::Manasteal),
            3 => Some(AttackModifier::Staminasteal),
            4 => Some(AttackModifier::Soulsteal),
            5 => Some(AttackModifier::Critical),
            6 => Some(AttackModifier::Piercing),
            7 => Some(AttackModifier::Conversion),
            8 => Some(AttackModifier::Butcher),
            9 => Some(AttackModifier::Hunter),
            10 => Some(AttackModifier::Slayer),
            11 => Some(AttackModifier::Cull),
            _ => None,
        }
    }

    /// Look up an attack sub-type by its configuration name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "lifesteal" => Some(AttackModifier::Lifesteal),
            "manasteal" => Some(AttackModifier::Manasteal),
            "staminasteal" => Some(AttackModifier::Staminasteal),
            "soulsteal" => Some(AttackModifier::Soulsteal),
            "critical" => Some(AttackModifier::Critical),
            "piercing" => Some(AttackModifier::Piercing),
            "conversion" => Some(AttackModifier::Conversion),
            "butcher" => Some(AttackModifier::Butcher),
            "hunter" => Some(AttackModifier::Hunter),
            "slayer" => Some(AttackModifier::Slayer),
            "cull" => Some(AttackModifier::Cull),
            _ => None,
        }
    }
}

/// Defense-side modifier sub-types.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DefenseModifier {
    /// Damage taken is partially converted to the defender's health.
    Absorb,
    /// Damage taken is partially converted to the defender's mana.
    Restore,
    /// Damage taken is partially converted to the defender's stamina.
    Replenish,
    /// Damage taken is partially converted to the defender's soul.
    Revive,
    /// Damage is reduced on the defender and returned to the attacker.
    Reflect,
    /// Damage is negated on the defender but hits all nearby enemies.
    Deflect,
    /// Damage is negated on the defender but hits one random enemy.
    Ricochet,
    /// Plain damage reduction.
    Resist,
    /// Damage is converted to a different type (carries a target type).
    Reform,
    /// Reduced damage from a specific monster.
    BeastArmor,
    /// Reduced damage from a specific race.
    Aegis,
    /// Reduced damage from all bosses.
    Immortal,
    /// Reduced damage from a specific boss.
    Slayer,
}

impl DefenseModifier {
    /// Stable 1-byte wire code (1..=13). 0 is reserved for "none".
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            DefenseModifier::Absorb => 1,
            DefenseModifier::Restore => 2,
            DefenseModifier::Replenish => 3,
            DefenseModifier::Revive => 4,
            DefenseModifier::Reflect => 5,
            DefenseModifier::Deflect => 6,
            DefenseModifier::Ricochet => 7,
            DefenseModifier::Resist => 8,
            DefenseModifier::Reform => 9,
            DefenseModifier::BeastArmor => 10,
            DefenseModifier::Aegis => 11,
            DefenseModifier::Immortal => 12,
            DefenseModifier::Slayer => 13,
        }
    }

    /// Decode a wire code. Returns `None` for 0 and for unknown codes.
    #[must_use]
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(DefenseModifier::Absorb),
            2 => Some(DefenseModifier::Restore),
            3 => Some(DefenseModifier::Replenish),
            4 => Some(DefenseModifier::Revive),
            5 => Some(DefenseModifier::Reflect),
            6 => Some(DefenseModifier::Deflect),
            7 => Some(DefenseModifier::Ricochet),
            8 => Some(DefenseModifier::Resist),
            9 => Some(DefenseModifier::Reform),
            10 => Some(DefenseModifier::BeastArmor),
            11 => Some(DefenseModifier::Aegis),
            12 => Some(DefenseModifier::Immortal),
            13 => Some(DefenseModifier::Slayer),
            _ => None,
        }
    }

    /// Look up a defense sub-type by its configuration name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "absorb" => Some(DefenseModifier::Absorb),
            "restore" => Some(DefenseModifier::Restore),
            "replenish" => Some(DefenseModifier::Replenish),
            "revive" => Some(DefenseModifier::Revive),
            "reflect" => Some(DefenseModifier::Reflect),
            "deflect" => Some(DefenseModifier::Deflect),
            "ricochet" => Some(DefenseModifier::Ricochet),
            "resist" => Some(DefenseModifier::Resist),
            "reform" => Some(DefenseModifier::Reform),
            "beastarmor" => Some(DefenseModifier::BeastArmor),
            "aegis" => Some(DefenseModifier::Aegis),
            "immortal" => Some(DefenseModifier::Immortal),
            "slayer" => Some(DefenseModifier::Slayer),
            _ => None,
        }
    }
}

/// A stance-qualified modifier sub-type.
///
/// The stance is derived from the variant, so attack and defense
/// sub-types can never be mixed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ModifierKind {
    /// Unclassified. Decode substitution default; rejected at insertion.
    None,
    Attack(AttackModifier),
    Defense(DefenseModifier),
}

impl ModifierKind {
    /// The stance this kind belongs to.
    #[must_use]
    pub const fn stance(self) -> ModifierStance {
        match self {
            ModifierKind::None => ModifierStance::None,
            ModifierKind::Attack(_) => ModifierStance::Attack,
            ModifierKind::Defense(_) => ModifierStance::Defense,
        }
    }

    /// The sub-type wire code within the stance (0 for `None`).
    #[must_use]
    pub const fn sub_type_code(self) -> u8 {
        match self {
            ModifierKind::None => 0,
            ModifierKind::Attack(sub_type) => sub_type.code(),
            ModifierKind::Defense(sub_type) => sub_type.code(),
        }
    }

    /// Rebuild a kind from its stance and sub-type wire codes.
    ///
    /// Returns `None` when the codes name a stance/sub-type combination
    /// that does not exist; the caller decides the substitution policy.
    #[must_use]
    pub const fn from_codes(stance: u8, sub_type: u8) -> Option<Self> {
        match ModifierStance::from_code(stance) {
            ModifierStance::Attack => match AttackModifier::from_code(sub_type) {
                Some(kind) => Some(ModifierKind::Attack(kind)),
                None => None,
            },
            ModifierStance::Defense => match DefenseModifier::from_code(sub_type) {
                Some(kind) => Some(ModifierKind::Defense(kind)),
                None => None,
            },
            ModifierStance::None => None,
        }
    }

    /// True for rules that single out a specific monster.
    #[must_use]
    pub const fn is_monster_based(self) -> bool {
        matches!(
            self,
            ModifierKind::Attack(AttackModifier::Butcher)
                | ModifierKind::Defense(DefenseModifier::BeastArmor)
        )
    }

    /// True for rules that single out a creature race.
    #[must_use]
    pub const fn is_race_based(self) -> bool {
        matches!(
            self,
            ModifierKind::Attack(AttackModifier::Hunter)
                | ModifierKind::Defense(DefenseModifier::Aegis)
        )
    }

    /// True for rules that single out bosses.
    #[must_use]
    pub const fn is_boss_based(self) -> bool {
        matches!(
            self,
            ModifierKind::Attack(AttackModifier::Slayer)
                | ModifierKind::Attack(AttackModifier::Cull)
                | ModifierKind::Defense(DefenseModifier::Immortal)
                | ModifierKind::Defense(DefenseModifier::Slayer)
        )
    }

    /// True for rules that re-type damage rather than scale it.
    #[must_use]
    pub const fn is_conversion(self) -> bool {
        matches!(
            self,
            ModifierKind::Attack(AttackModifier::Conversion)
                | ModifierKind::Defense(DefenseModifier::Reform)
        )
    }
}
