//! Stance-partitioned storage for modifier rules.
//!
//! A `ModifierList` owns one attack bucket and one defense bucket.
//! Insertion routes by the rule's stance, and the only ordering
//! guarantee is insertion order within a bucket. Sub-type queries are
//! the hot path: the resolver calls them every combat tick, so they do
//! a linear scan and copy matches into a `SmallVec` (rules are `Copy`
//! and small) rather than handing out references into the buckets.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::warn;

use super::kind::{AttackModifier, DefenseModifier, ModifierKind};
use super::rule::DamageModifier;

/// Query result: matches copied out of a bucket.
///
/// Inline capacity covers typical bundle sizes without allocating.
pub type ModifierMatches = SmallVec<[DamageModifier; 8]>;

/// Two ordered sequences of rules, one per stance.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModifierList {
    attack: Vec<DamageModifier>,
    defense: Vec<DamageModifier>,
}

impl ModifierList {
    /// Create an empty list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a rule to the bucket matching its stance.
    ///
    /// Returns `false` (and warns) for a `ModifierKind::None` rule:
    /// unclassified rules are ignored, never stored.
    pub fn add_modifier(&mut self, modifier: DamageModifier) -> bool {
        match modifier.kind() {
            ModifierKind::Attack(_) => {
                self.attack.push(modifier);
                true
            }
            ModifierKind::Defense(_) => {
                self.defense.push(modifier);
                true
            }
            ModifierKind::None => {
                warn!("ignoring modifier with no stance");
                false
            }
        }
    }

    /// Remove the first rule structurally equal to `modifier` from the
    /// bucket matching its stance. Removing an absent rule is a no-op.
    pub fn remove_modifier(&mut self, modifier: &DamageModifier) {
        let bucket = match modifier.kind() {
            ModifierKind::Attack(_) => &mut self.attack,
            ModifierKind::Defense(_) => &mut self.defense,
            ModifierKind::None => return,
        };
        if let Some(index) = bucket.iter().position(|existing| existing == modifier) {
            bucket.remove(index);
        }
    }

    /// Attack-bucket rules of the given sub-type, in insertion order.
    #[must_use]
    pub fn attack_modifiers(&self, sub_type: AttackModifier) -> ModifierMatches {
        self.attack
            .iter()
            .filter(|modifier| modifier.kind() == ModifierKind::Attack(sub_type))
            .copied()
            .collect()
    }

    /// Defense-bucket rules of the given sub-type, in insertion order.
    #[must_use]
    pub fn defense_modifiers(&self, sub_type: DefenseModifier) -> ModifierMatches {
        self.defense
            .iter()
            .filter(|modifier| modifier.kind() == ModifierKind::Defense(sub_type))
            .copied()
            .collect()
    }

    /// All attack-bucket rules, in insertion order.
    #[must_use]
    pub fn attack(&self) -> &[DamageModifier] {
        &self.attack
    }

    /// All defense-bucket rules, in insertion order.
    #[must_use]
    pub fn defense(&self) -> &[DamageModifier] {
        &self.defense
    }

    /// Iterate every rule, attack bucket first.
    pub fn iter(&self) -> impl Iterator<Item = &DamageModifier> {
        self.attack.iter().chain(self.defense.iter())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.attack.len() + self.defense.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.attack.is_empty() && self.defense.is_empty()
    }
}
