//! Binary persistence integration tests.
//!
//! Round-trips the rule wire format across the full field domain and
//! exercises the augment-level record (version tag, name, rule list).

use proptest::prelude::*;

use combat_augments::augment::Augment;
use combat_augments::codec::{CodecError, ReadStream, WriteStream};
use combat_augments::combat::{CombatOrigin, DamageType};
use combat_augments::modifier::{
    AttackModifier, DamageModifier, DefenseModifier, ModifierKind, MIN_ENCODED_LEN,
};

fn encode(rule: &DamageModifier) -> Vec<u8> {
    let mut writer = WriteStream::new();
    rule.serialize(&mut writer);
    writer.into_bytes()
}

fn decode(bytes: &[u8]) -> Result<DamageModifier, CodecError> {
    let mut reader = ReadStream::new(bytes);
    DamageModifier::unserialize(&mut reader)
}

/// The worked example: attack/critical, 25%, 10% chance, physical.
#[test]
fn test_critical_round_trip_scenario() {
    let rule = DamageModifier::new(
        ModifierKind::Attack(AttackModifier::Critical),
        25,
        10,
        Some(DamageType::Physical),
    );

    let bytes = encode(&rule);
    let decoded = decode(&bytes).unwrap();

    assert_eq!(decoded, rule);
    assert!(decoded.is_percent());
    assert!(!decoded.is_flat_value());
    assert!(!decoded.applies_to_all_damage());
    assert!(!decoded.is_origin_based());
}

#[test]
fn test_minimum_encoding_is_eight_bytes() {
    let plain = DamageModifier::new(
        ModifierKind::Defense(DefenseModifier::Absorb),
        5,
        0,
        None,
    );
    assert_eq!(encode(&plain).len(), MIN_ENCODED_LEN);

    // Conversion-class rules carry one extra byte for the target type.
    let conversion = DamageModifier::new(
        ModifierKind::Attack(AttackModifier::Conversion),
        100,
        0,
        Some(DamageType::Physical),
    )
    .with_conversion_target(DamageType::Fire);
    assert_eq!(encode(&conversion).len(), MIN_ENCODED_LEN + 1);
}

#[test]
fn test_every_truncation_fails_cleanly() {
    let rule = DamageModifier::new(
        ModifierKind::Defense(DefenseModifier::Reform),
        100,
        25,
        Some(DamageType::Death),
    )
    .with_conversion_target(DamageType::Healing);

    let bytes = encode(&rule);
    for len in 0..bytes.len() {
        assert!(
            matches!(
                decode(&bytes[..len]),
                Err(CodecError::UnexpectedEof { .. })
            ),
            "decode of {len}/{} bytes should fail",
            bytes.len()
        );
    }
    assert!(decode(&bytes).is_ok());
}

#[test]
fn test_unknown_codes_decode_to_defaults() {
    // stance 5 / sub-type 42 / damage 200 / origin 150 are all unknown.
    let bytes = [5u8, 42, 0, 0, 50, 200, 150, 0b0000_0111];
    let decoded = decode(&bytes).unwrap();

    assert_eq!(decoded.kind(), ModifierKind::None);
    assert_eq!(decoded.damage_type(), None);
    assert_eq!(decoded.origin(), None);
    // Flags still decode; filters fell back to "any".
    assert!(decoded.is_flat_value());
    assert!(decoded.applies_to_all_damage());
    assert!(decoded.is_origin_based());
}

#[test]
fn test_augment_record_round_trip() {
    let mut augment = Augment::new("warding sigil");
    augment.add_modifier(
        DamageModifier::new(
            ModifierKind::Attack(AttackModifier::Critical),
            25,
            10,
            Some(DamageType::Physical),
        ),
    );
    augment.add_modifier(
        DamageModifier::new(
            ModifierKind::Defense(DefenseModifier::Resist),
            30,
            0,
            Some(DamageType::Fire),
        )
        .flat_rate(),
    );
    augment.add_modifier(
        DamageModifier::new(
            ModifierKind::Defense(DefenseModifier::Reform),
            100,
            5,
            Some(DamageType::Death),
        )
        .with_conversion_target(DamageType::Healing),
    );

    let mut writer = WriteStream::new();
    augment.serialize(&mut writer);

    let bytes = writer.into_bytes();
    let mut reader = ReadStream::new(&bytes);
    let decoded = Augment::unserialize(&mut reader).unwrap();

    assert_eq!(decoded, augment);
    assert!(reader.is_exhausted());
}

#[test]
fn test_augment_version_tag_is_checked_first() {
    let mut writer = WriteStream::new();
    Augment::new("anything").serialize(&mut writer);

    let mut bytes = writer.into_bytes();
    bytes[0] = 2;

    let mut reader = ReadStream::new(&bytes);
    assert_eq!(
        Augment::unserialize(&mut reader),
        Err(CodecError::UnsupportedVersion(2))
    );
}

#[test]
fn test_consecutive_records_in_one_stream() {
    let first = DamageModifier::new(
        ModifierKind::Attack(AttackModifier::Piercing),
        40,
        0,
        None,
    )
    .flat_rate();
    let second = DamageModifier::new(
        ModifierKind::Defense(DefenseModifier::Aegis),
        15,
        30,
        Some(DamageType::Holy),
    );

    let mut writer = WriteStream::new();
    first.serialize(&mut writer);
    second.serialize(&mut writer);

    let bytes = writer.into_bytes();
    let mut reader = ReadStream::new(&bytes);
    assert_eq!(DamageModifier::unserialize(&mut reader).unwrap(), first);
    assert_eq!(DamageModifier::unserialize(&mut reader).unwrap(), second);
    assert!(reader.is_exhausted());
}

fn kind_strategy() -> impl Strategy<Value = ModifierKind> {
    prop_oneof![
        (1..=11u8).prop_map(|code| ModifierKind::Attack(AttackModifier::from_code(code).unwrap())),
        (1..=13u8)
            .prop_map(|code| ModifierKind::Defense(DefenseModifier::from_code(code).unwrap())),
    ]
}

fn damage_filter_strategy() -> impl Strategy<Value = Option<DamageType>> {
    (0..=12u8).prop_map(DamageType::from_code)
}

fn origin_filter_strategy() -> impl Strategy<Value = Option<CombatOrigin>> {
    (0..=10u8).prop_map(CombatOrigin::from_code)
}

proptest! {
    /// Wire round-trip over the full constructible field domain,
    /// conversion target included.
    #[test]
    fn prop_wire_round_trip(
        kind in kind_strategy(),
        value in any::<u16>(),
        chance in 0..=100u8,
        damage_type in damage_filter_strategy(),
        origin in origin_filter_strategy(),
        flat in any::<bool>(),
        any_damage in any::<bool>(),
        conversion_target in damage_filter_strategy(),
    ) {
        let mut rule = DamageModifier::new(kind, value, chance, damage_type);
        if let Some(origin) = origin {
            rule = rule.with_origin(origin);
        }
        if flat {
            rule = rule.flat_rate();
        }
        if any_damage {
            rule = rule.applying_to_all();
        }
        if kind.is_conversion() {
            if let Some(target) = conversion_target {
                rule = rule.with_conversion_target(target);
            }
        }

        let decoded = decode(&encode(&rule)).unwrap();
        prop_assert_eq!(decoded, rule);
    }

    /// The serde representation round-trips too (used by tooling, not
    /// by the save blob).
    #[test]
    fn prop_serde_round_trip(
        kind in kind_strategy(),
        value in any::<u16>(),
        chance in 0..=100u8,
        damage_type in damage_filter_strategy(),
    ) {
        let rule = DamageModifier::new(kind, value, chance, damage_type);
        let encoded = bincode::serialize(&rule).unwrap();
        let decoded: DamageModifier = bincode::deserialize(&encoded).unwrap();
        prop_assert_eq!(decoded, rule);
    }
}
