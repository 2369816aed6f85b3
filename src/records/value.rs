//! Field value ordering and grouping keys.
//!
//! Record fields are dynamically typed (`serde_json::Value`), so sorting and
//! grouping need a total order and a hashable key that both distinguish a
//! missing field from an explicit null.

use serde_json::Value;
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

/// Grouping key for a record field.
///
/// `Missing` marks records that lack the field entirely. It is distinct from
/// `Value(Value::Null)`, which marks a field that is present but null.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldKey {
    Missing,
    Value(Value),
}

// JSON numbers cannot be NaN, so Value's PartialEq is reflexive.
impl Eq for FieldKey {}

impl Hash for FieldKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            FieldKey::Missing => state.write_u8(0),
            FieldKey::Value(value) => {
                state.write_u8(1);
                hash_value(value, state);
            }
        }
    }
}

impl From<Value> for FieldKey {
    fn from(value: Value) -> Self {
        FieldKey::Value(value)
    }
}

fn hash_value<H: Hasher>(value: &Value, state: &mut H) {
    match value {
        Value::Null => state.write_u8(0),
        Value::Bool(b) => {
            state.write_u8(1);
            b.hash(state);
        }
        Value::Number(n) => {
            state.write_u8(2);
            n.hash(state);
        }
        Value::String(s) => {
            state.write_u8(3);
            s.hash(state);
        }
        Value::Array(items) => {
            state.write_u8(4);
            for item in items {
                hash_value(item, state);
            }
        }
        // Map equality ignores entry order; hash only the size to stay
        // consistent with it.
        Value::Object(map) => {
            state.write_u8(5);
            state.write_usize(map.len());
        }
    }
}

/// Compare two sort keys, where `None` stands for a missing field.
///
/// A missing field orders before every present value; two missing fields
/// compare equal.
pub fn compare_sort_keys(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(a), Some(b)) => compare_values(a, b),
    }
}

/// Total order over JSON values.
///
/// Values of different types order by type rank:
/// null < bool < number < string < array < object. Within a type: false
/// before true, numbers numerically, strings by byte order, arrays
/// elementwise then by length, objects by entry count.
pub fn compare_values(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::Null, Value::Null) => Ordering::Equal,
        (Value::Bool(a), Value::Bool(b)) => a.cmp(b),
        (Value::Number(a), Value::Number(b)) => {
            let a = a.as_f64().unwrap_or_default();
            let b = b.as_f64().unwrap_or_default();
            // No NaN in JSON, so the partial order is total here.
            a.partial_cmp(&b).unwrap_or(Ordering::Equal)
        }
        (Value::String(a), Value::String(b)) => a.cmp(b),
        (Value::Array(a), Value::Array(b)) => a
            .iter()
            .zip(b.iter())
            .map(|(x, y)| compare_values(x, y))
            .find(|ordering| *ordering != Ordering::Equal)
            .unwrap_or_else(|| a.len().cmp(&b.len())),
        (Value::Object(a), Value::Object(b)) => a.len().cmp(&b.len()),
        _ => type_rank(a).cmp(&type_rank(b)),
    }
}

fn type_rank(value: &Value) -> u8 {
    match value {
        Value::Null => 0,
        Value::Bool(_) => 1,
        Value::Number(_) => 2,
        Value::String(_) => 3,
        Value::Array(_) => 4,
        Value::Object(_) => 5,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::hash_map::DefaultHasher;

    fn hash_of(key: &FieldKey) -> u64 {
        let mut hasher = DefaultHasher::new();
        key.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_missing_orders_before_every_value() {
        for value in [json!(null), json!(false), json!(-10), json!(""), json!([])] {
            assert_eq!(compare_sort_keys(None, Some(&value)), Ordering::Less);
            assert_eq!(compare_sort_keys(Some(&value), None), Ordering::Greater);
        }
        assert_eq!(compare_sort_keys(None, None), Ordering::Equal);
    }

    #[test]
    fn test_type_rank_order() {
        let ascending = [
            json!(null),
            json!(false),
            json!(true),
            json!(-3),
            json!(2.5),
            json!(7),
            json!("abc"),
            json!("abd"),
            json!([1, 2]),
            json!({"a": 1}),
        ];
        for window in ascending.windows(2) {
            assert_ne!(
                compare_values(&window[0], &window[1]),
                Ordering::Greater,
                "{} should not order after {}",
                window[0],
                window[1]
            );
        }
    }

    #[test]
    fn test_numbers_compare_numerically_across_int_and_float() {
        assert_eq!(compare_values(&json!(2), &json!(2.0)), Ordering::Equal);
        assert_eq!(compare_values(&json!(2), &json!(2.5)), Ordering::Less);
        assert_eq!(compare_values(&json!(-1), &json!(1)), Ordering::Less);
    }

    #[test]
    fn test_arrays_compare_elementwise_then_by_length() {
        assert_eq!(compare_values(&json!([1, 2]), &json!([1, 3])), Ordering::Less);
        assert_eq!(compare_values(&json!([1, 2]), &json!([1, 2, 0])), Ordering::Less);
        assert_eq!(compare_values(&json!([2]), &json!([1, 9])), Ordering::Greater);
    }

    #[test]
    fn test_field_key_missing_distinct_from_null() {
        let missing = FieldKey::Missing;
        let null = FieldKey::Value(json!(null));
        assert_ne!(missing, null);
        assert_ne!(hash_of(&missing), hash_of(&null));
    }

    #[test]
    fn test_field_key_equal_values_hash_equal() {
        let a = FieldKey::Value(json!("x"));
        let b = FieldKey::Value(json!("x"));
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
    }
}
