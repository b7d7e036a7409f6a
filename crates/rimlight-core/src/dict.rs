//! Get and set values inside a nested dictionary by dotted key path
//!
//! Both operations are pure tree walks with the same miss policy: a key
//! that is absent, or an intermediate value that is not itself a
//! dictionary, ends the walk without an error. `get` reports such a miss as
//! `None`, distinct from a stored `Value::Null` which comes back as
//! `Some(Value::Null)`. `set` drops the write; it never creates missing
//! intermediate dictionaries.

use serde_json::{Map, Value};
use tracing::debug;

use crate::keypath::KeyPath;

/// A nested string-keyed dictionary, the root shape both operations expect
pub type Dict = Map<String, Value>;

/// Look up the value at `path`
///
/// Returns `None` for a zero-segment path, a missing key anywhere along the
/// path, or a non-dictionary intermediate value. The terminal value is
/// returned as stored, with no further interpretation.
pub fn get<'a>(root: &'a Dict, path: &KeyPath) -> Option<&'a Value> {
    let (head, tail) = path.head_and_tail()?;
    if tail.is_empty() {
        return root.get(head);
    }
    match root.get(head) {
        Some(Value::Object(nested)) => get(nested, &tail),
        _ => None,
    }
}

/// Look up a string value at `path`
///
/// A present value of a different type is a miss, not an error.
pub fn get_str<'a>(root: &'a Dict, path: &KeyPath) -> Option<&'a str> {
    get(root, path).and_then(Value::as_str)
}

/// Look up a numeric value at `path`
pub fn get_f64(root: &Dict, path: &KeyPath) -> Option<f64> {
    get(root, path).and_then(Value::as_f64)
}

/// Look up a nested dictionary at `path`
pub fn get_dict<'a>(root: &'a Dict, path: &KeyPath) -> Option<&'a Dict> {
    get(root, path).and_then(Value::as_object)
}

/// Write `value` at `path`, overwriting whatever is stored there
///
/// Returns whether the write landed. A zero-segment path is a no-op, and a
/// write through a missing or non-dictionary intermediate is dropped: only
/// a pre-existing dictionary is traversed, so patching a field never
/// fabricates structure around it.
pub fn set(root: &mut Dict, path: &KeyPath, value: Value) -> bool {
    let Some((head, tail)) = path.head_and_tail() else {
        return false;
    };
    if tail.is_empty() {
        root.insert(head.to_string(), value);
        return true;
    }
    match root.get_mut(head) {
        Some(Value::Object(nested)) => set(nested, &tail, value),
        _ => {
            debug!(path = %path, "dropped write through missing or non-dictionary key");
            false
        }
    }
}
