//! Property-based tests for `concat`.
//!
//! - **Associativity**: `concat(concat(a, b), c) == concat(a, concat(b, c))`
//! - **Override merge**: for mappings, the last operand holding a key wins
//!   regardless of grouping.

use std::collections::BTreeMap;

use liftkit::dynamic::{Value, concat, mconcat};
use liftkit::typeclass::Semigroup;
use proptest::prelude::*;
use rstest::rstest;

fn concat3(a: Value, b: Value, c: Value) -> (Result<Value, liftkit::Error>, Result<Value, liftkit::Error>) {
    let left = concat(vec![a.clone(), b.clone()]).and_then(|ab| concat(vec![ab, c.clone()]));
    let right = concat(vec![b, c]).and_then(|bc| concat(vec![a, bc]));
    (left, right)
}

fn mapping() -> impl Strategy<Value = BTreeMap<String, i32>> {
    prop::collection::btree_map("[a-d]", any::<i32>(), 0..4)
}

fn to_value(entries: &BTreeMap<String, i32>) -> Value {
    Value::mapping(entries.clone())
}

proptest! {
    #[test]
    fn prop_sequence_associativity(
        a in prop::collection::vec(any::<i32>(), 0..4),
        b in prop::collection::vec(any::<i32>(), 0..4),
        c in prop::collection::vec(any::<i32>(), 0..4),
    ) {
        let (left, right) = concat3(Value::from(a), Value::from(b), Value::from(c));
        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_string_associativity(a in ".{0,4}", b in ".{0,4}", c in ".{0,4}") {
        let (left, right) = concat3(Value::from(a), Value::from(b), Value::from(c));
        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_number_associativity(a in -1_000_i32..1_000, b in -1_000_i32..1_000, c in -1_000_i32..1_000) {
        let (left, right) = concat3(Value::from(a), Value::from(b), Value::from(c));
        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_mapping_later_keys_win(a in mapping(), b in mapping(), c in mapping()) {
        let (left, right) = concat3(to_value(&a), to_value(&b), to_value(&c));
        let expected = to_value(&a.combine(b).combine(c));
        prop_assert_eq!(left, Ok(expected.clone()));
        prop_assert_eq!(right, Ok(expected));
    }

    #[test]
    fn prop_mconcat_matches_concat(items in prop::collection::vec(".{0,3}", 1..5)) {
        let operands: Vec<Value> = items.iter().map(|item| Value::from(item.as_str())).collect();
        prop_assert_eq!(mconcat(Value::Seq(operands.clone())), concat(operands));
    }
}

#[rstest]
fn overlapping_keys_across_three_mappings() {
    let a = Value::mapping([("k", 1), ("a", 1)]);
    let b = Value::mapping([("k", 2), ("b", 2)]);
    let c = Value::mapping([("k", 3)]);
    let (left, right) = concat3(a, b, c);
    let expected = Value::mapping([("k", 3), ("a", 1), ("b", 2)]);
    assert_eq!(left, Ok(expected.clone()));
    assert_eq!(right, Ok(expected));
}
