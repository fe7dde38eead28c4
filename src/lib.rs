//! # tokpack
//!
//! A one-way serializer that packs JSON-like values into a compact textual
//! notation optimized for minimal token count when consumed by Large
//! Language Models, while remaining human-inspectable.
//!
//! ## Why pack?
//!
//! JSON spends tokens on braces, brackets, and quotes that an LLM rarely
//! needs to understand structured data. The packed notation drops that
//! overhead: objects become `key:value` pairs, arrays carry an explicit
//! element count instead of closing brackets, and uniform object arrays
//! collapse into a header line plus one delimiter-joined row per element.
//! Typical structured payloads shrink by 30-60% in tokens.
//!
//! ## Key Features
//!
//! - **Tabular arrays**: uniform object arrays render as a `key[N]{cols}:`
//!   header plus rows, never repeating field names per element
//! - **Quote minimization**: strings are only quoted when the output would
//!   otherwise be ambiguous; under a tab delimiter, values with spaces stay
//!   bare
//! - **Flattening**: nested objects can be inlined into single-level rows
//!   with abbreviated compound keys
//! - **Serde compatible**: encode anything implementing `Serialize`
//! - **Pure and deterministic**: encoding is a pure function with no shared
//!   state; identical inputs always produce byte-identical output
//!
//! ## Quick Start
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! tokpack = "0.1"
//! serde = { version = "1.0", features = ["derive"] }
//! ```
//!
//! ### Basic Encoding
//!
//! ```rust
//! use serde::Serialize;
//! use tokpack::to_string;
//!
//! #[derive(Serialize)]
//! struct User {
//!     name: String,
//!     age: u32,
//! }
//!
//! let user = User { name: "John".to_string(), age: 30 };
//! let packed = to_string(&user).unwrap();
//! assert_eq!(packed, "name:John,age:30");
//! ```
//!
//! ### Tabular Arrays
//!
//! Arrays of objects with identical key sets and scalar values collapse
//! into tables:
//!
//! ```rust
//! use tokpack::{encode, pack, EncodeOptions};
//!
//! let data = pack!({
//!     "users": [
//!         {"name": "Alice", "age": 25},
//!         {"name": "Bob", "age": 30}
//!     ]
//! });
//!
//! let packed = encode(&data, &EncodeOptions::new());
//! assert_eq!(packed, "users[2]{name,age}:\nAlice\t25\nBob\t30");
//! ```
//!
//! ### Presets
//!
//! ```rust
//! use tokpack::{encode, pack, EncodeOptions};
//!
//! let value = pack!({"done": true, "note": null});
//!
//! // forLLM: compact literals, tab-delimited tables
//! assert_eq!(encode(&value, &EncodeOptions::for_llm()), "done:1,note:~");
//!
//! // forDebugging: standard literals, spaces after separators
//! assert_eq!(
//!     encode(&value, &EncodeOptions::for_debugging()),
//!     "done: true, note: null"
//! );
//! ```
//!
//! ## One-way by design
//!
//! This crate only encodes. There is no parser: the notation is meant to be
//! produced by programs and read by LLMs or humans. The quoting rules keep
//! the output unambiguous enough to read back (a string `"42"` is never
//! confusable with the number `42`), but round-trip fidelity is not a
//! contract.
//!
//! ## Safety Guarantees
//!
//! - No `unsafe` code blocks
//! - The `Value`-level encoder is total and never panics
//! - Cyclic inputs are unrepresentable: `Value` is an owned tree
//!
//! ## Examples
//!
//! See the `demos/` directory for runnable examples:
//!
//! - **`simple.rs`** - encoding structs and dynamic values
//! - **`presets.rs`** - the four named option presets side by side
//! - **`token_savings.rs`** - packed output vs JSON
//!
//! Run any demo with: `cargo run --example <name>`

pub mod encode;
pub mod error;
pub mod flatten;
pub mod macros;
pub mod map;
pub mod options;
pub mod quote;
pub mod ser;
pub mod value;

pub use encode::{encode, encode_array, encode_object, encode_primitive, uniform_keys};
pub use error::{Error, Result};
pub use flatten::{flatten_object, shorten_key};
pub use map::Map;
pub use options::{Delimiter, EncodeOptions};
pub use quote::{is_numeric_literal, needs_quoting, quote};
pub use ser::ValueSerializer;
pub use value::{Number, Value};

use serde::Serialize;
use std::io;

/// Serialize any `T: Serialize` to a packed string with default options.
///
/// # Examples
///
/// ```rust
/// use tokpack::to_string;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// let packed = to_string(&Point { x: 1, y: 2 }).unwrap();
/// assert_eq!(packed, "x:1,y:2");
/// ```
///
/// # Errors
///
/// Returns an error if the value cannot be represented as a JSON-like
/// value tree (e.g., a map with non-string keys).
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string<T>(value: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    to_string_with_options(value, EncodeOptions::default())
}

/// Serialize any `T: Serialize` to a packed string with custom options.
///
/// # Examples
///
/// ```rust
/// use tokpack::{to_string_with_options, EncodeOptions, Delimiter};
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// let options = EncodeOptions::new().with_delimiter(Delimiter::Tab);
/// let packed = to_string_with_options(&Point { x: 1, y: 2 }, options).unwrap();
/// ```
///
/// # Errors
///
/// Returns an error if the value cannot be represented as a value tree.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_with_options<T>(value: &T, options: EncodeOptions) -> Result<String>
where
    T: ?Sized + Serialize,
{
    let tree = to_value(value)?;
    Ok(encode(&tree, &options))
}

/// Convert any `T: Serialize` to a [`Value`].
///
/// Useful for working with data dynamically when the structure isn't known
/// at compile time, or for building inputs to [`encode`] directly.
///
/// # Examples
///
/// ```rust
/// use tokpack::{to_value, Value};
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// let value: Value = to_value(&Point { x: 1, y: 2 }).unwrap();
/// assert!(value.is_object());
/// ```
///
/// # Errors
///
/// Returns an error if the value cannot be represented as a value tree.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_value<T>(value: &T) -> Result<Value>
where
    T: ?Sized + Serialize,
{
    crate::ser::to_value_inner(value)
}

/// Serialize any `T: Serialize` to a writer in packed form.
///
/// # Examples
///
/// ```rust
/// use tokpack::to_writer;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// let mut buffer = Vec::new();
/// to_writer(&mut buffer, &Point { x: 1, y: 2 }).unwrap();
/// assert_eq!(buffer, b"x:1,y:2");
/// ```
///
/// # Errors
///
/// Returns an error if conversion fails or writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W, T>(writer: W, value: &T) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    to_writer_with_options(writer, value, EncodeOptions::default())
}

/// Serialize any `T: Serialize` to a writer in packed form with custom
/// options.
///
/// # Errors
///
/// Returns an error if conversion fails or writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer_with_options<W, T>(mut writer: W, value: &T, options: EncodeOptions) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    let packed = to_string_with_options(value, options)?;
    writer
        .write_all(packed.as_bytes())
        .map_err(|e| Error::io(&e.to_string()))?;
    Ok(())
}
