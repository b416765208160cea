#![cfg(feature = "serde")]

// Values serialize as their decimal string form so any size survives a
// round trip through formats with narrower native numbers.

use bigword::{Bigint, Sign};

#[test]
fn json_round_trip() {
    let value: Bigint = "123456789012345678901234567890".parse().unwrap();
    let json = serde_json::to_string(&value).unwrap();
    assert_eq!(json, "\"123456789012345678901234567890\"");

    let back: Bigint = serde_json::from_str(&json).unwrap();
    assert_eq!(back, value);
}

#[test]
fn negative_and_zero() {
    let value: Bigint = "-45".parse().unwrap();
    assert_eq!(serde_json::to_string(&value).unwrap(), "\"-45\"");

    let zero: Bigint = serde_json::from_str("\"0\"").unwrap();
    assert_eq!(zero.sign(), Sign::Zero);
    assert_eq!(zero.words(), &[0]);
}

#[test]
fn rejects_invalid_input() {
    assert!(serde_json::from_str::<Bigint>("\"12a\"").is_err());
    assert!(serde_json::from_str::<Bigint>("\"\"").is_err());
    // Numbers must arrive as strings.
    assert!(serde_json::from_str::<Bigint>("12").is_err());
}
