//! The damage modifier rule.
//!
//! A `DamageModifier` is one conditional combat effect: "on 10% of
//! hits, critical for +25% damage", "resist 30 fire damage from
//! spells", and so on. Rules are built once by the content loader,
//! queried every combat tick, and serialized into the player/item save
//! blob.
//!
//! ## Wire format
//!
//! Little-endian, versionless, 8 bytes minimum:
//!
//! | field            | size | notes                                   |
//! |------------------|------|-----------------------------------------|
//! | stance           | 1    | 0 none, 1 attack, 2 defense             |
//! | sub-type         | 1    | per-stance code, 0 none                 |
//! | value            | 2    | flat amount or whole percent            |
//! | chance           | 1    | 0 = unconditional                       |
//! | damage filter    | 1    | `DamageType` code, 0 = any              |
//! | origin filter    | 1    | `CombatOrigin` code, 0 = any            |
//! | flags            | 1    | bit0 flat, bit1 any-damage, bit2 origin |
//! | conversion target| 0/1  | only for conversion-class sub-types     |

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::codec::{CodecError, ReadStream, WriteStream};
use crate::combat::{damage, origin, CombatOrigin, CombatRng, DamageType};

use super::kind::{ModifierKind, ModifierStance};

/// Ceiling applied when increasing a percent-kind rule's value.
///
/// The storage does not structurally enforce 0..=100, but runtime
/// increases never push a percent rule past this.
pub const PERCENT_CEILING: u16 = 100;

/// Minimum encoded size of one rule, in bytes.
pub const MIN_ENCODED_LEN: usize = 8;

const FLAG_FLAT_VALUE: u8 = 1 << 0;
const FLAG_ANY_DAMAGE: u8 = 1 << 1;
const FLAG_ORIGIN_BOUND: u8 = 1 << 2;

/// One conditional combat effect.
///
/// Equality and ordering are structural over every field; removal from
/// a `ModifierList` works by structural match.
///
/// ## Example
///
/// ```
/// use combat_augments::modifier::{AttackModifier, DamageModifier, ModifierKind};
/// use combat_augments::combat::DamageType;
///
/// let critical = DamageModifier::new(
///     ModifierKind::Attack(AttackModifier::Critical),
///     25,
///     10,
///     Some(DamageType::Physical),
/// );
///
/// assert!(critical.is_percent());
/// assert!(critical.is_attack_stance());
/// ```
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct DamageModifier {
    kind: ModifierKind,
    value: u16,
    chance: u8,
    damage_type: Option<DamageType>,
    origin: Option<CombatOrigin>,
    flat_value: bool,
    any_damage: bool,
    origin_bound: bool,
    conversion_target: Option<DamageType>,
}

impl DamageModifier {
    /// Create a rule with unrestricted origin and percent-value
    /// semantics. Refine with the `with_*` builders.
    ///
    /// `damage_type` of `None` leaves the rule unfiltered by type.
    #[must_use]
    pub fn new(
        kind: ModifierKind,
        value: u16,
        chance: u8,
        damage_type: Option<DamageType>,
    ) -> Self {
        Self {
            kind,
            value,
            chance,
            damage_type,
            origin: None,
            flat_value: false,
            any_damage: false,
            origin_bound: false,
            conversion_target: None,
        }
    }

    /// Restrict the rule to hits from one origin.
    #[must_use]
    pub fn with_origin(mut self, origin: CombatOrigin) -> Self {
        self.origin = Some(origin);
        self.origin_bound = true;
        self
    }

    /// Interpret the value as a flat amount instead of a percent.
    #[must_use]
    pub fn flat_rate(mut self) -> Self {
        self.flat_value = true;
        self
    }

    /// Apply the rule to every damage type regardless of the filter.
    #[must_use]
    pub fn applying_to_all(mut self) -> Self {
        self.any_damage = true;
        self
    }

    /// Set the conversion target for a conversion-class rule.
    ///
    /// Ignored (with a diagnostic) for any other kind.
    #[must_use]
    pub fn with_conversion_target(mut self, target: DamageType) -> Self {
        self.set_transform_damage_type(target);
        self
    }

    // === Accessors ===

    #[must_use]
    pub const fn kind(&self) -> ModifierKind {
        self.kind
    }

    #[must_use]
    pub const fn stance(&self) -> ModifierStance {
        self.kind.stance()
    }

    /// The magnitude: a flat amount or a whole percent, per `is_percent`.
    #[must_use]
    pub const fn value(&self) -> u16 {
        self.value
    }

    /// Per-hit trigger chance in whole percent. 0 means unconditional.
    #[must_use]
    pub const fn chance(&self) -> u8 {
        self.chance
    }

    /// Damage-type restriction. `None` means any type.
    #[must_use]
    pub const fn damage_type(&self) -> Option<DamageType> {
        self.damage_type
    }

    /// Origin restriction. `None` means any origin.
    #[must_use]
    pub const fn origin(&self) -> Option<CombatOrigin> {
        self.origin
    }

    #[must_use]
    pub const fn is_percent(&self) -> bool {
        !self.flat_value
    }

    #[must_use]
    pub const fn is_flat_value(&self) -> bool {
        self.flat_value
    }

    #[must_use]
    pub const fn applies_to_all_damage(&self) -> bool {
        self.any_damage
    }

    #[must_use]
    pub const fn is_origin_based(&self) -> bool {
        self.origin_bound
    }

    #[must_use]
    pub const fn is_attack_stance(&self) -> bool {
        matches!(self.kind, ModifierKind::Attack(_))
    }

    #[must_use]
    pub const fn is_defense_stance(&self) -> bool {
        matches!(self.kind, ModifierKind::Defense(_))
    }

    #[must_use]
    pub const fn is_monster_based(&self) -> bool {
        self.kind.is_monster_based()
    }

    #[must_use]
    pub const fn is_race_based(&self) -> bool {
        self.kind.is_race_based()
    }

    #[must_use]
    pub const fn is_boss_based(&self) -> bool {
        self.kind.is_boss_based()
    }

    /// Target type for conversion-class rules, `None` otherwise.
    #[must_use]
    pub const fn conversion_type(&self) -> Option<DamageType> {
        self.conversion_target
    }

    // === Mutators ===

    /// Raise the value by `amount`.
    ///
    /// Flat rules saturate at `u16::MAX`; percent rules clamp at
    /// `PERCENT_CEILING`. A percent rule already above the ceiling
    /// (loader data is not range-checked) is left untouched.
    pub fn increase_value(&mut self, amount: u16) {
        let ceiling = if self.flat_value {
            u16::MAX
        } else {
            PERCENT_CEILING
        };
        if self.value >= ceiling {
            warn!(value = self.value, ceiling, "modifier value already at ceiling");
            return;
        }
        let raised = self.value.saturating_add(amount);
        if raised > ceiling {
            warn!(value = self.value, amount, ceiling, "modifier value clamped at ceiling");
        }
        self.value = raised.min(ceiling);
    }

    /// Lower the value by `amount`, clamping at zero.
    pub fn decrease_value(&mut self, amount: u16) {
        if amount > self.value {
            warn!(value = self.value, amount, "modifier value clamped at zero");
        }
        self.value = self.value.saturating_sub(amount);
    }

    /// Store the damage type a conversion-class rule re-types hits
    /// into. Ignored (with a diagnostic) for any other kind.
    pub fn set_transform_damage_type(&mut self, target: DamageType) {
        if self.kind.is_conversion() {
            self.conversion_target = Some(target);
        } else {
            warn!(kind = ?self.kind, "conversion target set on non-conversion modifier, ignoring");
        }
    }

    // === Trigger evaluation ===

    /// Roll this rule's trigger chance.
    ///
    /// A chance of 0 is unconditional; otherwise the rule triggers with
    /// probability `chance / 100`.
    pub fn roll(&self, rng: &mut CombatRng) -> bool {
        self.chance == 0 || rng.percent_roll(self.chance)
    }

    // === Persistence ===

    /// Write this rule's fields in wire order.
    pub fn serialize(&self, stream: &mut WriteStream) {
        stream.write_u8(self.stance().code());
        stream.write_u8(self.kind.sub_type_code());
        stream.write_u16(self.value);
        stream.write_u8(self.chance);
        stream.write_u8(damage::filter_code(self.damage_type));
        stream.write_u8(origin::filter_code(self.origin));

        let mut flags = 0u8;
        if self.flat_value {
            flags |= FLAG_FLAT_VALUE;
        }
        if self.any_damage {
            flags |= FLAG_ANY_DAMAGE;
        }
        if self.origin_bound {
            flags |= FLAG_ORIGIN_BOUND;
        }
        stream.write_u8(flags);

        if self.kind.is_conversion() {
            stream.write_u8(damage::filter_code(self.conversion_target));
        }
    }

    /// Read one rule from the stream.
    ///
    /// A truncated stream fails with `CodecError::UnexpectedEof`;
    /// because decoding builds a fresh rule, a failed read can never
    /// leave a half-written rule behind. Unknown classification or
    /// filter codes decode to the documented defaults (`none` / "any")
    /// with a diagnostic rather than failing the whole record.
    pub fn unserialize(stream: &mut ReadStream<'_>) -> Result<Self, CodecError> {
        let stance_code = stream.read_u8()?;
        let sub_type_code = stream.read_u8()?;
        let value = stream.read_u16()?;
        let chance = stream.read_u8()?;
        let damage_code = stream.read_u8()?;
        let origin_code = stream.read_u8()?;
        let flags = stream.read_u8()?;

        let kind = match ModifierKind::from_codes(stance_code, sub_type_code) {
            Some(kind) => kind,
            None => {
                if stance_code != 0 || sub_type_code != 0 {
                    warn!(
                        stance = stance_code,
                        sub_type = sub_type_code,
                        "unknown modifier classification, substituting none"
                    );
                }
                ModifierKind::None
            }
        };

        let damage_type = DamageType::from_code(damage_code);
        if damage_type.is_none() && damage_code != 0 {
            warn!(code = damage_code, "unknown damage type code, substituting any");
        }

        let origin = CombatOrigin::from_code(origin_code);
        if origin.is_none() && origin_code != 0 {
            warn!(code = origin_code, "unknown origin code, substituting any");
        }

        let conversion_target = if kind.is_conversion() {
            let target_code = stream.read_u8()?;
            let target = DamageType::from_code(target_code);
            if target.is_none() && target_code != 0 {
                warn!(code = target_code, "unknown conversion target code, substituting any");
            }
            target
        } else {
            None
        };

        Ok(Self {
            kind,
            value,
            chance,
            damage_type,
            origin,
            flat_value: flags & FLAG_FLAT_VALUE != 0,
            any_damage: flags & FLAG_ANY_DAMAGE != 0,
            origin_bound: flags & FLAG_ORIGIN_BOUND != 0,
            conversion_target,
        })
    }
}
