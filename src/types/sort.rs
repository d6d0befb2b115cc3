//! List-shaping helpers used by the entity store.

use std::cmp::Ordering;

use serde_json::{Map, Value};

/// Parsed sort directive: a field name, optionally prefixed with `-` for
/// descending order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortSpec {
    pub key: String,
    pub descending: bool,
}

impl SortSpec {
    pub fn parse(raw: &str) -> Self {
        match raw.strip_prefix('-') {
            Some(key) => Self {
                key: key.to_string(),
                descending: true,
            },
            None => Self {
                key: raw.to_string(),
                descending: false,
            },
        }
    }
}

/// Sort records in place by the given directive.
///
/// Records missing the key (or holding null) sort last regardless of
/// direction; equal keys keep their input order (the sort is stable).
pub(crate) fn order_records(items: &mut [Map<String, Value>], spec: &SortSpec) {
    items.sort_by(|a, b| {
        let av = a.get(&spec.key).filter(|v| !v.is_null());
        let bv = b.get(&spec.key).filter(|v| !v.is_null());
        match (av, bv) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Greater,
            (Some(_), None) => Ordering::Less,
            (Some(a), Some(b)) => {
                let ord = compare_values(a, b);
                if spec.descending {
                    ord.reverse()
                } else {
                    ord
                }
            }
        }
    });
}

/// Order two JSON values of the same type; mismatched or unordered types
/// compare as equal, which leaves their relative order untouched.
fn compare_values(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::Number(a), Value::Number(b)) => {
            let a = a.as_f64().unwrap_or(f64::NAN);
            let b = b.as_f64().unwrap_or(f64::NAN);
            a.partial_cmp(&b).unwrap_or(Ordering::Equal)
        }
        (Value::String(a), Value::String(b)) => a.cmp(b),
        (Value::Bool(a), Value::Bool(b)) => a.cmp(b),
        _ => Ordering::Equal,
    }
}
