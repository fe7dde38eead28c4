//! The encoding engine.
//!
//! This module implements the recursive value-to-text transformation: the
//! primitive encoder, the uniformity detector that licenses tabular
//! rendering, the array encoder state machine, the tabular renderer, the
//! object encoder, and the top-level dispatch.
//!
//! The whole engine is pure: identical `(value, options)` inputs always
//! yield byte-identical output, no shared state is read or written, and
//! concurrent callers need no coordination.
//!
//! ## Output shapes
//!
//! ```rust
//! use tokpack::{encode, pack, EncodeOptions, Delimiter};
//!
//! let opts = EncodeOptions::new();
//!
//! // Objects: comma-joined key:value pairs
//! assert_eq!(encode(&pack!({"name": "John", "age": 30}), &opts), "name:John,age:30");
//!
//! // Arrays: explicit element count, then the items
//! assert_eq!(encode(&pack!({"tags": ["jazz", "chill", "lofi"]}), &opts),
//!            "tags[3]jazz,chill,lofi");
//!
//! // Uniform object arrays: one header line, one row per element
//! let users = pack!({"users": [{"name": "Alice", "age": 25}, {"name": "Bob", "age": 30}]});
//! let opts = EncodeOptions::new().with_delimiter(Delimiter::Tab);
//! assert_eq!(encode(&users, &opts),
//!            "users[2]{name,age}:\nAlice\t25\nBob\t30");
//! ```

use crate::flatten::{flatten_object, DEFAULT_MAX_DEPTH};
use crate::quote::{is_literal_like, needs_quoting, quote, quote_single_line};
use crate::{Delimiter, EncodeOptions, Map, Value};

/// Encodes any value into the packed notation.
///
/// Dispatches on the value's variant: arrays go through the array encoder,
/// objects through the object encoder, everything else through the
/// primitive encoder.
///
/// # Examples
///
/// ```rust
/// use tokpack::{encode, pack, EncodeOptions};
///
/// let value = pack!({"user": {"name": "John", "age": 30}});
/// assert_eq!(encode(&value, &EncodeOptions::new()), "user{name:John,age:30}");
///
/// let opts = EncodeOptions::new().with_compact_null(true);
/// assert_eq!(encode(&pack!(null), &opts), "~");
/// ```
#[must_use]
pub fn encode(value: &Value, options: &EncodeOptions) -> String {
    match value {
        Value::Array(arr) => encode_array(arr, "", options),
        Value::Object(obj) => encode_object(obj, options),
        scalar => encode_primitive(scalar, options),
    }
}

/// Encodes a scalar value: null, boolean, number, or string.
///
/// Null renders as `~` under `compact_null`, booleans as `1`/`0` under
/// `compact_booleans`, numbers in their shortest round-trippable decimal
/// form, and strings through the quoting oracle for the active scalar
/// delimiter. Containers delegate back to [`encode`].
#[must_use]
pub fn encode_primitive(value: &Value, options: &EncodeOptions) -> String {
    match value {
        Value::Null => if options.compact_null { "~" } else { "null" }.to_string(),
        Value::Bool(true) => if options.compact_booleans { "1" } else { "true" }.to_string(),
        Value::Bool(false) => if options.compact_booleans { "0" } else { "false" }.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => {
            if needs_quoting(s, options.scalar_delimiter()) {
                quote(s)
            } else {
                s.clone()
            }
        }
        Value::Array(arr) => encode_array(arr, "", options),
        Value::Object(obj) => encode_object(obj, options),
    }
}

/// Inspects an array for uniformity: every element a plain object, key sets
/// equal in size and membership to the first element's, and every value a
/// scalar. Returns the canonical column list (the first element's key
/// order) when uniform.
///
/// Empty arrays are never uniform; callers render `[0]` instead.
///
/// # Examples
///
/// ```rust
/// use tokpack::{uniform_keys, pack, Value};
///
/// let arr = pack!([{"a": 1, "b": 2}, {"b": 4, "a": 3}]);
/// let keys = uniform_keys(arr.as_array().unwrap());
/// assert_eq!(keys, Some(vec!["a".to_string(), "b".to_string()]));
///
/// let mixed = pack!([{"a": 1}, 2]);
/// assert_eq!(uniform_keys(mixed.as_array().unwrap()), None);
/// ```
#[must_use]
pub fn uniform_keys(arr: &[Value]) -> Option<Vec<String>> {
    let first = arr.first()?.as_object()?;
    let keys: Vec<String> = first.keys().cloned().collect();

    for element in arr {
        let obj = element.as_object()?;
        if obj.len() != keys.len() {
            return None;
        }
        for key in &keys {
            if !obj.contains_key(key) {
                return None;
            }
        }
        for value in obj.values() {
            if !value.is_primitive() {
                return None;
            }
        }
    }

    Some(keys)
}

/// How an array rendered: as a self-naming tabular block (the header
/// already carries the key name), or as an inline list the caller prefixes
/// with its key.
enum ArrayForm {
    Table(String),
    List(String),
}

/// Encodes an array. `key_name` is the already-encoded key the array sits
/// under, or empty at top level; it only appears in output for the tabular
/// form's semantic header.
#[must_use]
pub fn encode_array(arr: &[Value], key_name: &str, options: &EncodeOptions) -> String {
    match render_array(arr, key_name, options) {
        ArrayForm::Table(s) | ArrayForm::List(s) => s,
    }
}

fn render_array(arr: &[Value], key_name: &str, options: &EncodeOptions) -> ArrayForm {
    if arr.is_empty() {
        return ArrayForm::List("[0]".to_string());
    }

    if options.tabular && options.flatten && arr.iter().all(Value::is_object) {
        let rows: Vec<Map> = arr
            .iter()
            .filter_map(Value::as_object)
            .map(|obj| flatten_object(obj, "", DEFAULT_MAX_DEPTH))
            .collect();

        // Union of all row keys in first-seen order; rows missing a column
        // backfill with null.
        let mut columns: Vec<String> = Vec::new();
        for row in &rows {
            for key in row.keys() {
                if !columns.iter().any(|c| c == key) {
                    columns.push(key.clone());
                }
            }
        }

        return ArrayForm::Table(render_table(key_name, &columns, &rows, options));
    }

    if options.tabular {
        if let Some(columns) = uniform_keys(arr) {
            let rows: Vec<Map> = arr.iter().filter_map(Value::as_object).cloned().collect();
            return ArrayForm::Table(render_table(key_name, &columns, &rows, options));
        }
    }

    // List form: explicit count, then each element encoded recursively.
    let mut out = String::new();
    out.push('[');
    out.push_str(&arr.len().to_string());
    out.push(']');
    if options.readable {
        out.push(' ');
    }

    let separator = if options.readable { ", " } else { "," };
    for (i, element) in arr.iter().enumerate() {
        if i > 0 {
            out.push_str(separator);
        }
        match element {
            Value::Array(nested) => out.push_str(&encode_array(nested, "", options)),
            Value::Object(obj) => {
                out.push('{');
                out.push_str(&encode_object(obj, options));
                out.push('}');
            }
            scalar => out.push_str(&encode_primitive(scalar, options)),
        }
    }

    ArrayForm::List(out)
}

/// Renders tabular rows under the canonical column list.
///
/// With a key name, emits the semantic header `key[N]{cols}:` followed by
/// newline-joined rows. Without one (top-level array), emits a plain
/// delimiter-joined header row followed by the data rows.
fn render_table(key_name: &str, columns: &[String], rows: &[Map], options: &EncodeOptions) -> String {
    let delimiter = options.tabular_delimiter();
    let mut out = String::new();

    if key_name.is_empty() {
        out.push_str(&columns.join(delimiter.as_str()));
    } else {
        out.push_str(key_name);
        out.push('[');
        out.push_str(&rows.len().to_string());
        out.push_str("]{");
        out.push_str(&columns.join(","));
        out.push_str("}:");
    }

    for row in rows {
        out.push('\n');
        for (i, column) in columns.iter().enumerate() {
            if i > 0 {
                out.push_str(delimiter.as_str());
            }
            let cell = row.get(column).unwrap_or(&Value::Null);
            out.push_str(&encode_cell(cell, delimiter, options));
        }
    }

    out
}

/// Encodes one tabular cell.
///
/// Non-scalar leftovers from the flattener (empty arrays, depth-exhausted
/// substructure) coerce to null. String cells containing a newline are
/// force-quoted with the newline escaped, since a raw newline would corrupt
/// the row layout. Otherwise the generic quoting rule applies, relaxed for
/// the cell position: quotes are dropped when the content contains no tab,
/// double quote, or active delimiter and is not literal-shaped, because the
/// comma/space ambiguity the oracle guards against cannot arise inside a
/// delimited cell.
fn encode_cell(value: &Value, delimiter: Delimiter, options: &EncodeOptions) -> String {
    let value = if value.is_primitive() { value } else { &Value::Null };

    match value {
        Value::String(s) => {
            if s.contains('\n') || s.contains('\r') {
                return quote_single_line(s);
            }
            if needs_quoting(s, delimiter) {
                let safe_bare = !s.contains('\t')
                    && !s.contains('"')
                    && !s.contains(delimiter.as_char())
                    && !is_literal_like(s);
                if safe_bare {
                    s.clone()
                } else {
                    quote(s)
                }
            } else {
                s.clone()
            }
        }
        scalar => encode_primitive(scalar, options),
    }
}

/// Encodes an object as comma-joined entries.
///
/// Scalar entries render as `key:value`, nested objects as `key{...}` (or a
/// bare key when empty), arrays as `key[...]` or as a self-naming tabular
/// block. Keys run through the quoting oracle under the default comma
/// rules.
///
/// Returns the empty string for an empty object; the caller decides whether
/// that means a bare key or nothing at all.
#[must_use]
pub fn encode_object(obj: &Map, options: &EncodeOptions) -> String {
    let mut out = String::new();
    let separator = if options.readable { ", " } else { "," };

    for (i, (key, value)) in obj.iter().enumerate() {
        if i > 0 {
            out.push_str(separator);
        }

        let encoded_key = if needs_quoting(key, Delimiter::Comma) {
            quote(key)
        } else {
            key.clone()
        };

        match value {
            Value::Array(arr) => match render_array(arr, &encoded_key, options) {
                // The semantic header already names the key.
                ArrayForm::Table(block) => out.push_str(&block),
                ArrayForm::List(list) => {
                    out.push_str(&encoded_key);
                    out.push_str(&list);
                }
            },
            Value::Object(nested) => {
                let inner = encode_object(nested, options);
                out.push_str(&encoded_key);
                if !inner.is_empty() {
                    out.push('{');
                    out.push_str(&inner);
                    out.push('}');
                }
            }
            scalar => {
                out.push_str(&encoded_key);
                out.push(':');
                if options.readable {
                    out.push(' ');
                }
                out.push_str(&encode_primitive(scalar, options));
            }
        }
    }

    out
}
