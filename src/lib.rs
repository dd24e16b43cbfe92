//! # combat-augments
//!
//! The damage-modifier rules engine inside a multiplayer game server's
//! combat subsystem. Designers attach data-driven, probabilistic combat
//! effects (lifesteal, critical, piercing, conversion, resistances, ...)
//! to equipment and creatures through named bundles called *augments*;
//! the combat resolver retrieves only the rules relevant to the current
//! stance and sub-type at hit time and folds triggered rules into one
//! net adjustment.
//!
//! ## Design Principles
//!
//! 1. **Closed classifications**: stance and sub-type are exhaustively
//!    matched enums, so a rule can never mix attack and defense
//!    sub-types and unknown codes only exist at the decode boundary.
//!
//! 2. **Cheap hot path**: sub-type queries linearly scan small buckets
//!    and copy matches into a `SmallVec`; callers never alias internal
//!    storage.
//!
//! 3. **Shared bundles**: cloning an `Augment` shares its rule list by
//!    contract, so a bundle worn by many items stores its rules once.
//!    The engine is single-threaded per simulation tick; nothing here
//!    is `Send`.
//!
//! 4. **One persistence boundary**: the augment record (version, name,
//!    rules) is the unit of save/load; rules use a fixed little-endian
//!    field layout validated before every read.
//!
//! ## Modules
//!
//! - `combat`: damage types, attack origins, deterministic combat RNG
//! - `modifier`: rule, classification, totals, stance-partitioned list
//! - `augment`: named bundles and the template registry
//! - `codec`: byte-stream primitives for the binary format

pub mod augment;
pub mod codec;
pub mod combat;
pub mod modifier;

// Re-export commonly used types
pub use crate::augment::{Augment, AugmentRegistry};
pub use crate::codec::{CodecError, ReadStream, WriteStream};
pub use crate::combat::{CombatOrigin, CombatRng, DamageType};
pub use crate::modifier::{
    AttackModifier, DamageModifier, DefenseModifier, ModifierKind, ModifierList,
    ModifierMatches, ModifierStance, ModifierTotals,
};
