//! Property-based tests for lossless numeric coercion and round-tripping

use foscam_parser::numeric::{coerce_leaf, format_number, round_trip_number};
use foscam_parser::{normalize, Value, CGI_RESULT_ENVELOPE};
use indexmap::IndexMap;
use proptest::prelude::*;

/// Finite doubles across the whole exponent range
fn finite_f64() -> impl Strategy<Value = f64> {
    prop::num::f64::NORMAL | prop::num::f64::SUBNORMAL | prop::num::f64::ZERO
}

/// Leaf values whose written form normalizes back to themselves
fn leaf_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        finite_f64().prop_map(Value::Number),
        "[a-zA-Z][a-zA-Z_ &<>]{0,15}[a-zA-Z]".prop_map(Value::Text),
    ]
}

fn map_strategy() -> impl Strategy<Value = Value> {
    let leaf_map = prop::collection::vec(("[a-z][a-zA-Z0-9]{0,8}", leaf_strategy()), 1..6);
    leaf_map
        .prop_recursive(3, 24, 4, |inner| {
            prop::collection::vec(
                ("[a-z][a-zA-Z0-9]{0,8}", prop_oneof![leaf_strategy(), inner.prop_map(to_map)]),
                1..4,
            )
        })
        .prop_map(to_map)
}

/// Build a map, keeping the first value for a duplicated key
fn to_map(entries: Vec<(String, Value)>) -> Value {
    let mut map = IndexMap::new();
    for (key, value) in entries {
        map.entry(key).or_insert(value);
    }
    Value::Map(map)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Any finite number printed canonically coerces back to itself
    #[test]
    fn prop_canonical_text_round_trips(n in finite_f64()) {
        let text = format_number(n);
        prop_assert_eq!(coerce_leaf(&text), Value::Number(n));
    }

    /// Every integer up to 2^53 survives as a number
    #[test]
    fn prop_safe_integers_become_numbers(i in -(1i64 << 53)..=(1i64 << 53)) {
        prop_assert_eq!(round_trip_number(&i.to_string()), Some(i as f64));
    }

    /// Prefixing a zero to a positive integer always defeats coercion
    #[test]
    fn prop_leading_zero_keeps_text(i in 1u64..1_000_000_000_000) {
        let text = format!("0{}", i);
        prop_assert_eq!(coerce_leaf(&text), Value::Text(text.clone()));
    }

    /// Writing a numeric-safe value under the envelope and normalizing it
    /// reproduces the value
    #[test]
    fn prop_envelope_round_trip(value in map_strategy()) {
        let xml = value.to_xml(CGI_RESULT_ENVELOPE).unwrap();
        let normalized = normalize(Some(xml.as_str())).into_value();
        prop_assert_eq!(normalized, Some(value));
    }
}
