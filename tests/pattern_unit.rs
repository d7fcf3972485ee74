use neurobit_lib::model::pattern::PatternUnit;
use neurobit_lib::model::PatternSeed;
use uuid::Uuid;

fn reference_unit() -> PatternUnit {
    PatternUnit::new(Uuid::nil(), PatternSeed::new(0b1011_0010).with_mask(0b1111_0000))
}

#[test]
fn test_upper_nibble_match() {
    let mut nb = reference_unit();
    assert!(nb.evaluate(0b1011_0111), "Top four bits 1011 should match");
    assert_eq!(nb.match_count(), 1);
}

#[test]
fn test_reward_flips_low_bits() {
    let mut nb = reference_unit();
    nb.evaluate(0b1011_0111);
    nb.adapt(0b0000_0011);
    assert_eq!(nb.pattern(), 0b1011_0001);
    // Low bits are masked out, so the unit still matches the same input.
    assert!(nb.evaluate(0b1011_0111));
    assert_eq!(nb.match_count(), 2);
}

#[test]
fn test_reward_on_masked_bits_changes_decisions() {
    let mut nb = reference_unit();
    nb.adapt(0b1000_0000);
    assert_eq!(nb.pattern(), 0b0011_0010);
    assert!(!nb.evaluate(0b1011_0111));
    assert!(nb.evaluate(0b0011_0000));
}

#[test]
fn test_reward_rule_is_asymmetric() {
    let mut nb = reference_unit();
    nb.evaluate(0b1011_0000);
    nb.adapt(-1);
    assert_eq!(nb.match_count(), 1);
    assert_eq!(nb.pattern(), 0b1011_0010);
    nb.adapt(0);
    assert_eq!(nb.match_count(), 0);
    assert_eq!(nb.pattern(), 0b1011_0010);
}

#[test]
fn test_seed_defaults_match_every_bit() {
    let mut nb = PatternUnit::new(Uuid::nil(), PatternSeed::new(0x3C));
    assert_eq!(nb.mask(), 0xFF);
    assert_eq!(nb.action_code(), 0);
    assert!(nb.evaluate(0x3C));
    assert!(!nb.evaluate(0x3D));
}
