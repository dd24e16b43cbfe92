//! Per-hit accumulation of triggered modifiers.
//!
//! The combat resolver queries the relevant rules for a hit, rolls each
//! one's trigger chance, and folds the winners into one `ModifierTotals`
//! before touching the damage number. Flat and percent contributions
//! stay separate; how they combine with the raw damage is the
//! resolver's business.

use serde::{Deserialize, Serialize};

use crate::combat::CombatRng;

use super::rule::DamageModifier;

/// Net flat and percent contributions of the rules that triggered on
/// one hit. Produced fresh per hit-resolution pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModifierTotals {
    pub flat_total: u16,
    pub percent_total: u16,
}

impl ModifierTotals {
    /// Create zeroed totals.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one triggered rule into the totals.
    ///
    /// Additions saturate; a hit can stack many flat rules without
    /// wrapping.
    pub fn absorb(&mut self, modifier: &DamageModifier) {
        if modifier.is_flat_value() {
            self.flat_total = self.flat_total.saturating_add(modifier.value());
        } else {
            self.percent_total = self.percent_total.saturating_add(modifier.value());
        }
    }

    /// Roll each rule in insertion order and fold the winners.
    ///
    /// This is the resolver-side helper for one hit: rules with chance
    /// 0 always count, others count with `chance`% probability.
    pub fn accumulate<'a, I>(modifiers: I, rng: &mut CombatRng) -> Self
    where
        I: IntoIterator<Item = &'a DamageModifier>,
    {
        let mut totals = Self::new();
        for modifier in modifiers {
            if modifier.roll(rng) {
                totals.absorb(modifier);
            }
        }
        totals
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.flat_total == 0 && self.percent_total == 0
    }
}
