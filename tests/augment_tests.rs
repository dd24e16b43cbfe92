//! Augment bundle integration tests.
//!
//! These exercise the shared-list clone contract, registry behavior,
//! and the list semantics the combat resolver depends on.

use combat_augments::augment::{Augment, AugmentRegistry};
use combat_augments::combat::{CombatOrigin, DamageType};
use combat_augments::modifier::{
    AttackModifier, DamageModifier, DefenseModifier, ModifierKind, ModifierList,
};

fn critical() -> DamageModifier {
    DamageModifier::new(
        ModifierKind::Attack(AttackModifier::Critical),
        25,
        10,
        Some(DamageType::Physical),
    )
}

fn fire_resist() -> DamageModifier {
    DamageModifier::new(
        ModifierKind::Defense(DefenseModifier::Resist),
        30,
        0,
        Some(DamageType::Fire),
    )
    .flat_rate()
}

/// Adding through a clone is visible through the original. This is the
/// intended bundle-reuse contract, not a defect.
#[test]
fn test_clone_aliases_rule_storage() {
    let original = Augment::new("assassin's edge");
    let mut clone = original.clone();

    clone.add_modifier(critical());
    clone.add_modifier(fire_resist());

    assert_eq!(original.attack_modifiers(AttackModifier::Critical).len(), 1);
    assert_eq!(original.defense_modifiers(DefenseModifier::Resist).len(), 1);

    // And removal through the original is visible through the clone.
    let mut original = original;
    original.remove_modifier(&critical());
    assert!(clone.attack_modifiers(AttackModifier::Critical).is_empty());
}

#[test]
fn test_clone_chain_shares_one_list() {
    let first = Augment::new("stacked");
    let second = first.clone();
    let mut third = second.clone();

    assert!(first.shares_modifiers_with(&second));
    assert!(first.shares_modifiers_with(&third));

    third.add_modifier(critical());
    assert_eq!(first.modifier_count(), 1);
    assert_eq!(second.modifier_count(), 1);
}

#[test]
fn test_deep_copy_breaks_the_alias() {
    let mut template = Augment::new("assassin's edge");
    template.add_modifier(critical());

    let mut isolated = template.deep_copy();
    isolated.add_modifier(fire_resist());

    assert_eq!(template.modifier_count(), 1);
    assert_eq!(isolated.modifier_count(), 2);
}

#[test]
fn test_stance_separation_across_all_sub_types() {
    let mut augment = Augment::new("mixed bag");
    augment.add_modifier(critical());
    augment.add_modifier(fire_resist());
    augment.add_modifier(
        DamageModifier::new(ModifierKind::Attack(AttackModifier::Lifesteal), 5, 0, None)
            .with_origin(CombatOrigin::Melee),
    );
    augment.add_modifier(DamageModifier::new(
        ModifierKind::Defense(DefenseModifier::Reflect),
        50,
        20,
        None,
    ));

    let attack_kinds = [
        AttackModifier::Lifesteal,
        AttackModifier::Manasteal,
        AttackModifier::Staminasteal,
        AttackModifier::Soulsteal,
        AttackModifier::Critical,
        AttackModifier::Piercing,
        AttackModifier::Conversion,
        AttackModifier::Butcher,
        AttackModifier::Hunter,
        AttackModifier::Slayer,
        AttackModifier::Cull,
    ];
    for sub_type in attack_kinds {
        for modifier in augment.attack_modifiers(sub_type) {
            assert!(modifier.is_attack_stance());
            assert!(!modifier.is_defense_stance());
        }
    }

    let defense_kinds = [
        DefenseModifier::Absorb,
        DefenseModifier::Restore,
        DefenseModifier::Replenish,
        DefenseModifier::Revive,
        DefenseModifier::Reflect,
        DefenseModifier::Deflect,
        DefenseModifier::Ricochet,
        DefenseModifier::Resist,
        DefenseModifier::Reform,
        DefenseModifier::BeastArmor,
        DefenseModifier::Aegis,
        DefenseModifier::Immortal,
        DefenseModifier::Slayer,
    ];
    for sub_type in defense_kinds {
        for modifier in augment.defense_modifiers(sub_type) {
            assert!(modifier.is_defense_stance());
            assert!(!modifier.is_attack_stance());
        }
    }
}

#[test]
fn test_duplicate_rules_remove_one_at_a_time() {
    let mut list = ModifierList::new();
    list.add_modifier(critical());
    list.add_modifier(critical());

    list.remove_modifier(&critical());
    assert_eq!(list.len(), 1);

    list.remove_modifier(&critical());
    assert_eq!(list.len(), 0);

    list.remove_modifier(&critical());
    assert_eq!(list.len(), 0);
}

#[test]
fn test_registry_instances_share_template_storage() {
    let mut template = Augment::new("vampirism");
    template.add_modifier(
        DamageModifier::new(ModifierKind::Attack(AttackModifier::Lifesteal), 10, 0, None),
    );

    let mut registry = AugmentRegistry::new();
    registry.insert(template);

    let mut worn_by_sword = registry.instantiate("vampirism").unwrap();
    let worn_by_ring = registry.instantiate("vampirism").unwrap();

    worn_by_sword.add_modifier(
        DamageModifier::new(ModifierKind::Attack(AttackModifier::Lifesteal), 5, 50, None),
    );

    assert_eq!(
        worn_by_ring.attack_modifiers(AttackModifier::Lifesteal).len(),
        2
    );
    assert_eq!(
        registry
            .get("vampirism")
            .unwrap()
            .attack_modifiers(AttackModifier::Lifesteal)
            .len(),
        2
    );
}

#[test]
fn test_registry_reload_cycle() {
    let mut registry = AugmentRegistry::new();
    registry.insert(Augment::new("vampirism"));
    registry.insert(Augment::new("warding sigil"));
    assert_eq!(registry.len(), 2);

    registry.clear();
    assert!(registry.is_empty());
    assert!(registry.instantiate("vampirism").is_none());

    registry.insert(Augment::new("vampirism"));
    assert_eq!(registry.len(), 1);
}
