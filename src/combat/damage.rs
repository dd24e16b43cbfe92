//! Damage type classification.
//!
//! Damage types are the element/medium of a hit (physical, fire, drown,
//! life-drain, ...). Modifier rules filter on them, and conversion-class
//! rules re-type damage into one of them.
//!
//! ## Wire mapping
//!
//! Each type has a stable 1-byte wire code (1..=12). Code 0 is reserved
//! for "no type" and encodes an absent filter (`Option::None`), meaning
//! the rule applies to any damage type.

use serde::{Deserialize, Serialize};

/// A specific damage type.
///
/// Filters are expressed as `Option<DamageType>`: `None` means the rule
/// is not restricted to any particular type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DamageType {
    Physical,
    Energy,
    Earth,
    Fire,
    /// Typeless damage that still carries a number (e.g. scripted hits).
    Undefined,
    LifeDrain,
    ManaDrain,
    Healing,
    Drown,
    Ice,
    Holy,
    Death,
}

impl DamageType {
    /// Stable 1-byte wire code. Never 0 (0 encodes "no filter").
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            DamageType::Physical => 1,
            DamageType::Energy => 2,
            DamageType::Earth => 3,
            DamageType::Fire => 4,
            DamageType::Undefined => 5,
            DamageType::LifeDrain => 6,
            DamageType::ManaDrain => 7,
            DamageType::Healing => 8,
            DamageType::Drown => 9,
            DamageType::Ice => 10,
            DamageType::Holy => 11,
            DamageType::Death => 12,
        }
    }

    /// Decode a wire code. Returns `None` for 0 and for unknown codes;
    /// callers that care about the distinction must check for 0 first.
    #[must_use]
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(DamageType::Physical),
            2 => Some(DamageType::Energy),
            3 => Some(DamageType::Earth),
            4 => Some(DamageType::Fire),
            5 => Some(DamageType::Undefined),
            6 => Some(DamageType::LifeDrain),
            7 => Some(DamageType::ManaDrain),
            8 => Some(DamageType::Healing),
            9 => Some(DamageType::Drown),
            10 => Some(DamageType::Ice),
            11 => Some(DamageType::Holy),
            12 => Some(DamageType::Death),
            _ => None,
        }
    }

    /// Configuration-facing name, as used by the content loader.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            DamageType::Physical => "physical",
            DamageType::Energy => "energy",
            DamageType::Earth => "earth",
            DamageType::Fire => "fire",
            DamageType::Undefined => "undefined",
            DamageType::LifeDrain => "lifedrain",
            DamageType::ManaDrain => "manadrain",
            DamageType::Healing => "healing",
            DamageType::Drown => "drown",
            DamageType::Ice => "ice",
            DamageType::Holy => "holy",
            DamageType::Death => "death",
        }
    }

    /// Look up a type by its configuration name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "physical" => Some(DamageType::Physical),
            "energy" => Some(DamageType::Energy),
            "earth" => Some(DamageType::Earth),
            "fire" => Some(DamageType::Fire),
            "undefined" => Some(DamageType::Undefined),
            "lifedrain" => Some(DamageType::LifeDrain),
            "manadrain" => Some(DamageType::ManaDrain),
            "healing" => Some(DamageType::Healing),
            "drown" => Some(DamageType::Drown),
            "ice" => Some(DamageType::Ice),
            "holy" => Some(DamageType::Holy),
            "death" => Some(DamageType::Death),
            _ => None,
        }
    }
}

impl std::fmt::Display for DamageType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Encode an optional damage-type filter as a wire code (0 = no filter).
#[must_use]
pub const fn filter_code(filter: Option<DamageType>) -> u8 {
    match filter {
        Some(damage_type) => damage_type.code(),
        None => 0,
    }
}
