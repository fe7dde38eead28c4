//! Error types.
//!
//! The encoder core on [`Value`](crate::Value) is total: every value
//! encodes to some string, with no error path. Errors only arise at the
//! edges:
//!
//! - the serde bridge meets a shape the closed value union cannot express
//!   (a non-string map key, an unsupported variant form)
//! - a writer fails while receiving the encoded output
//!
//! ## Examples
//!
//! ```rust
//! use std::collections::BTreeMap;
//! use tokpack::to_string;
//!
//! let mut map = BTreeMap::new();
//! map.insert(1u32, "one");
//!
//! // Non-string map keys have no representation in the output
//! assert!(to_string(&map).is_err());
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors that can occur while converting a value
/// for encoding or writing the encoded output.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// IO error while writing encoded output
    #[error("IO error: {0}")]
    Io(String),

    /// Unsupported type for conversion to a value tree
    #[error("Unsupported type: {0}")]
    UnsupportedType(String),

    /// Custom error
    #[error("Error: {0}")]
    Custom(String),

    /// Generic message
    #[error("{0}")]
    Message(String),
}

impl Error {
    /// Creates an unsupported type error for types that cannot be
    /// represented as a value tree.
    pub fn unsupported_type(msg: &str) -> Self {
        Error::UnsupportedType(msg.to_string())
    }

    /// Creates a custom error with a display message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tokpack::Error;
    ///
    /// let err = Error::custom("something went wrong");
    /// assert!(err.to_string().contains("something went wrong"));
    /// ```
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// Creates an I/O error for writer failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
