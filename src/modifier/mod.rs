//! The damage-modifier data model.
//!
//! - `kind`: stance and per-stance sub-type classification
//! - `rule`: the `DamageModifier` record and its wire format
//! - `totals`: per-hit accumulation of triggered rules
//! - `list`: stance-partitioned rule storage

pub mod kind;
pub mod list;
pub mod rule;
pub mod totals;

pub use kind::{AttackModifier, DefenseModifier, ModifierKind, ModifierStance};
pub use list::{ModifierList, ModifierMatches};
pub use rule::{DamageModifier, MIN_ENCODED_LEN, PERCENT_CEILING};
pub use totals::ModifierTotals;
