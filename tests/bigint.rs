// Black-box coverage of the engine's documented properties: words stay
// within range, length never exceeds capacity, and the carry rules hold
// across growth.

use bigword::{Bigint, Sign, WORD_MAX};

fn assert_valid(value: &Bigint) {
    assert!(value.word_count() >= 1);
    assert!(value.word_count() <= value.capacity());
    assert!(value.words().iter().all(|&word| word <= WORD_MAX));
}

fn magnitude(value: &Bigint) -> u128 {
    value
        .words()
        .iter()
        .rev()
        .fold(0u128, |acc, &word| (acc << 30) | u128::from(word))
}

#[test]
fn invariants_hold_across_operation_sequences() {
    let mut value = Bigint::from_word(Sign::Positive, 1).unwrap();
    let mut model: u128 = 1;
    for step in 1..=20i32 {
        value.mul_word(step).unwrap();
        value.add_word(step as u32).unwrap();
        model = model * step as u128 + step as u128;
        assert_valid(&value);
        assert_eq!(magnitude(&value), model);
        assert_eq!(value.sign(), Sign::Positive);
    }
}

#[test]
fn canonical_zero_survives_multiplication() {
    let mut value = Bigint::from_word(Sign::Zero, 0).unwrap();
    value.mul_word(7).unwrap();
    value.mul_word(-3).unwrap();
    assert_eq!(value.word_count(), 1);
    assert_eq!(value.words(), &[0]);
    assert_eq!(value.sign(), Sign::Zero);
}

#[test]
fn multiply_round_trip() {
    let mut value = Bigint::from_word(Sign::Positive, 7).unwrap();
    value.mul_word(6).unwrap();
    assert_eq!(value.word_count(), 1);
    assert_eq!(value.words(), &[42]);
    assert_eq!(value.sign(), Sign::Positive);
}

#[test]
fn overflow_growth() {
    let mut value = Bigint::from_word(Sign::Positive, WORD_MAX).unwrap();
    value.mul_word(2).unwrap();
    assert_eq!(value.word_count(), 2);
    assert_eq!(value.words(), &[WORD_MAX - 1, 1]);
    // Reconstructed: 2 * (2^30 - 1) = 2^31 - 2.
    assert_eq!(magnitude(&value), (1u128 << 31) - 2);
}

#[test]
fn sign_flip() {
    let mut value = Bigint::from_word(Sign::Positive, 5).unwrap();
    value.mul_word(-3).unwrap();
    assert_eq!(value.sign(), Sign::Negative);
    assert_eq!(value.words(), &[15]);
}

#[test]
fn add_carry_chain() {
    // Least significant word at the maximum: the carry moves one unit into
    // the next word, growing the value when that word was the top one.
    let mut value = Bigint::from_word(Sign::Positive, WORD_MAX).unwrap();
    value.add_word(1).unwrap();
    assert_eq!(value.words(), &[0, 1]);

    let mut value = Bigint::zeroed(Sign::Positive, 2, None).unwrap();
    value.words_mut().copy_from_slice(&[WORD_MAX, 3]);
    value.add_word(1).unwrap();
    assert_eq!(value.words(), &[0, 4]);
    assert_eq!(value.word_count(), 2);
}

#[test]
fn set_zero_idempotence() {
    let mut value = Bigint::from_word(Sign::Negative, 77).unwrap();
    value.ensure_capacity(3).unwrap();
    value.set_zero();
    let once = (value.sign(), value.words().to_vec(), value.capacity());
    value.set_zero();
    let twice = (value.sign(), value.words().to_vec(), value.capacity());
    assert_eq!(once, twice);
    assert_eq!(once, (Sign::Zero, vec![0], 3));
}

#[test]
fn growth_preserves_prior_digits() {
    let mut value = Bigint::from_word(Sign::Positive, 123).unwrap();
    value.mul_word(1 << 29).unwrap();
    let before = value.words().to_vec();
    value.ensure_capacity(16).unwrap();
    assert_eq!(value.words(), &before[..]);
    assert_valid(&value);
}

#[test]
fn external_fill_round_trip() {
    let mut value = Bigint::zeroed(Sign::Negative, 3, Some(8)).unwrap();
    value.words_mut().copy_from_slice(&[45, 0, 1]);
    assert_eq!(value.sign(), Sign::Negative);
    assert_eq!(value.words(), &[45, 0, 1]);
    assert_eq!(value.capacity(), 8);
    assert_eq!(magnitude(&value), (1u128 << 60) + 45);
}

#[test]
fn factorial_matches_machine_integer() {
    let mut value = Bigint::from_word(Sign::Positive, 1).unwrap();
    for k in 2..=20i32 {
        value.mul_word(k).unwrap();
    }
    let expected = Bigint::from_i64(2_432_902_008_176_640_000).unwrap();
    assert_eq!(value, expected);
}

#[test]
fn rejected_operands_leave_value_intact() {
    let mut value = Bigint::from_word(Sign::Positive, 31).unwrap();
    let snapshot = value.clone();

    assert!(value.mul_word(1 << 30).unwrap_err().is_precondition());
    assert_eq!(value, snapshot);

    assert!(value.add_word(u32::MAX).unwrap_err().is_precondition());
    assert_eq!(value, snapshot);
}
