//! Nested-structure flattening and key shortening.
//!
//! The flattening transform inlines a nested object (including indexed
//! array elements) into a single-level row of `short_key -> primitive`
//! pairs, so an array of structurally similar but nested objects can still
//! be rendered as one tabular block.
//!
//! Key names pass through [`shorten_key`], a fixed abbreviation table with a
//! small context-gated secondary table. The context parameter is the
//! accumulated key-path prefix; the secondary table fires when that prefix
//! relates to line items, so e.g. `sku` abbreviates inside `items0_` rows
//! without colliding with sibling fields. The gate is a heuristic, not a
//! collision guarantee: unanticipated key names that shorten to the same
//! flattened key silently overwrite earlier ones.
//!
//! ```rust
//! use tokpack::{flatten_object, pack, Value};
//!
//! let order = pack!({
//!     "customer": {"name": "Ann", "email": "ann@ex.com"},
//!     "items": [{"sku": "W-1", "quantity": 2}]
//! });
//!
//! let row = flatten_object(order.as_object().unwrap(), "", 3);
//! let keys: Vec<_> = row.keys().cloned().collect();
//! assert_eq!(keys, vec!["c_n", "c_e", "i0_s", "i0_q"]);
//! ```

use crate::{Map, Value};

/// Flatten depth used by the encoder when the caller does not flatten
/// explicitly. Three levels of array nesting cover typical order/line-item
/// shapes without exploding pathological inputs into huge rows.
pub(crate) const DEFAULT_MAX_DEPTH: usize = 3;

/// Maps a structural key name to its abbreviated form.
///
/// A fixed table abbreviates well-known key names; keys not in the table
/// pass through unchanged. A secondary table applies when the enclosing
/// key-path (`context`, the accumulated prefix) contains `item` or `i`,
/// giving line-item fields their own abbreviations.
///
/// # Examples
///
/// ```rust
/// use tokpack::shorten_key;
///
/// assert_eq!(shorten_key("customer", ""), "c");
/// assert_eq!(shorten_key("orderId", ""), "oid");
/// assert_eq!(shorten_key("sku", ""), "sku");      // only abbreviated in item context
/// assert_eq!(shorten_key("sku", "i0"), "s");
/// assert_eq!(shorten_key("address", ""), "address");
/// ```
#[must_use]
pub fn shorten_key(key: &str, context: &str) -> String {
    if context.contains("item") || context.contains('i') {
        match key {
            "sku" => return "s".to_string(),
            "quantity" => return "q".to_string(),
            "price" => return "p".to_string(),
            "items" | "item" => return "i".to_string(),
            _ => {}
        }
    }

    match key {
        "items" | "item" => "i",
        "customer" => "c",
        "quantity" => "q",
        "price" => "p",
        "orderId" => "oid",
        "status" => "st",
        "total" => "t",
        "name" => "n",
        "email" => "e",
        other => other,
    }
    .to_string()
}

/// Flattens `obj` into a single-level row of `short_key -> value` pairs.
///
/// Keys join with `_` per nesting level (one token cheaper than a dot under
/// common tokenizers); array elements append their index directly to the
/// parent key. `max_depth` bounds array recursion: once exhausted, or for
/// empty arrays, the array value is stored verbatim and the tabular encoder
/// coerces it to null (cells must be primitive).
///
/// Later flattened keys that collide with earlier ones overwrite them.
///
/// # Examples
///
/// ```rust
/// use tokpack::{flatten_object, pack};
///
/// let obj = pack!({"user": {"name": "Ann"}, "tags": ["a", "b"]});
/// let row = flatten_object(obj.as_object().unwrap(), "", 3);
///
/// assert_eq!(row.get("user_n").and_then(|v| v.as_str()), Some("Ann"));
/// assert_eq!(row.get("tags0").and_then(|v| v.as_str()), Some("a"));
/// assert_eq!(row.get("tags1").and_then(|v| v.as_str()), Some("b"));
/// ```
#[must_use]
pub fn flatten_object(obj: &Map, prefix: &str, max_depth: usize) -> Map {
    let mut row = Map::new();
    flatten_into(&mut row, obj, prefix, max_depth);
    row
}

fn flatten_into(row: &mut Map, obj: &Map, prefix: &str, max_depth: usize) {
    for (key, value) in obj.iter() {
        let short = shorten_key(key, prefix);
        let new_key = if prefix.is_empty() {
            short
        } else {
            format!("{}_{}", prefix, short)
        };

        match value {
            Value::Null => {
                row.insert(new_key, Value::Null);
            }
            Value::Array(arr) if !arr.is_empty() && max_depth > 0 => {
                for (idx, elem) in arr.iter().enumerate() {
                    let elem_key = format!("{}{}", new_key, idx);
                    match elem {
                        Value::Object(nested) => {
                            flatten_into(row, nested, &elem_key, max_depth - 1);
                        }
                        Value::Array(sub) => {
                            // One level deeper with an explicit sub-index;
                            // anything deeper degrades to verbatim storage.
                            for (sub_idx, sub_elem) in sub.iter().enumerate() {
                                let sub_key = format!("{}_{}", elem_key, sub_idx);
                                match sub_elem {
                                    Value::Object(nested) => {
                                        flatten_into(row, nested, &sub_key, max_depth - 1);
                                    }
                                    other => {
                                        row.insert(sub_key, other.clone());
                                    }
                                }
                            }
                        }
                        other => {
                            row.insert(elem_key, other.clone());
                        }
                    }
                }
            }
            Value::Array(_) => {
                // Empty, or depth exhausted: stored verbatim, coerced to
                // null by the tabular cell encoder.
                row.insert(new_key, value.clone());
            }
            Value::Object(nested) => {
                flatten_into(row, nested, &new_key, max_depth);
            }
            other => {
                row.insert(new_key, other.clone());
            }
        }
    }
}
