//! Attack origin classification.
//!
//! The origin is the categorical source of a hit: a weapon swing, a
//! spell, a lingering condition, or damage re-emitted by another
//! modifier. Origin-bound rules only apply to hits from their origin.
//!
//! Codes 1..=10 are the wire mapping; code 0 encodes an absent filter
//! (`Option::None`, "any origin").

use serde::{Deserialize, Serialize};

/// A specific attack origin.
///
/// Filters are expressed as `Option<CombatOrigin>`: `None` means the
/// rule applies to hits from any origin.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CombatOrigin {
    /// Periodic damage from an active condition (poison, burn, ...).
    Condition,
    Spell,
    Melee,
    Ranged,
    /// Damage returned to the attacker by a reflect rule.
    Reflect,
    /// Damage redistributed to nearby enemies by a deflect rule.
    Deflect,
    /// Damage redirected to one random enemy by a ricochet rule.
    Ricochet,
    /// Damage synthesized by a damage modifier itself.
    Modifier,
    Augment,
    Imbuement,
}

impl CombatOrigin {
    /// Stable 1-byte wire code. Never 0 (0 encodes "no filter").
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            CombatOrigin::Condition => 1,
            CombatOrigin::Spell => 2,
            CombatOrigin::Melee => 3,
            CombatOrigin::Ranged => 4,
            CombatOrigin::Reflect => 5,
            CombatOrigin::Deflect => 6,
            CombatOrigin::Ricochet => 7,
            CombatOrigin::Modifier => 8,
            CombatOrigin::Augment => 9,
            CombatOrigin::Imbuement => 10,
        }
    }

    /// Decode a wire code. Returns `None` for 0 and for unknown codes.
    #[must_use]
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(CombatOrigin::Condition),
            2 => Some(CombatOrigin::Spell),
            3 => Some(CombatOrigin::Melee),
            4 => Some(CombatOrigin::Ranged),
            5 => Some(CombatOrigin::Reflect),
            6 => Some(CombatOrigin::Deflect),
            7 => Some(CombatOrigin::Ricochet),
            8 => Some(CombatOrigin::Modifier),
            9 => Some(CombatOrigin::Augment),
            10 => Some(CombatOrigin::Imbuement),
            _ => None,
        }
    }

    /// Configuration-facing name, as used by the content loader.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            CombatOrigin::Condition => "condition",
            CombatOrigin::Spell => "spell",
            CombatOrigin::Melee => "melee",
            CombatOrigin::Ranged => "ranged",
            CombatOrigin::Reflect => "reflect",
            CombatOrigin::Deflect => "deflect",
            CombatOrigin::Ricochet => "ricochet",
            CombatOrigin::Modifier => "modifier",
            CombatOrigin::Augment => "augment",
            CombatOrigin::Imbuement => "imbuement",
        }
    }

    /// Look up an origin by its configuration name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "condition" => Some(CombatOrigin::Condition),
            "spell" => Some(CombatOrigin::Spell),
            "melee" => Some(CombatOrigin::Melee),
            "ranged" => Some(CombatOrigin::Ranged),
            "reflect" => Some(CombatOrigin::Reflect),
            "deflect" => Some(CombatOrigin::Deflect),
            "ricochet" => Some(CombatOrigin::Ricochet),
            "modifier" => Some(CombatOrigin::Modifier),
            "augment" => Some(CombatOrigin::Augment),
            "imbuement" => Some(CombatOrigin::Imbuement),
            _ => None,
        }
    }
}

impl std::fmt::Display for CombatOrigin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Encode an optional origin filter as a wire code (0 = no filter).
#[must_use]
pub const fn filter_code(filter: Option<CombatOrigin>) -> u8 {
    match filter {
        Some(origin) => origin.code(),
        None => 0,
    }
}
