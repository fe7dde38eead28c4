//! Configuration options for encoding.
//!
//! This module provides types to customize the packed output:
//!
//! - [`EncodeOptions`]: main configuration struct, passed unchanged through
//!   every recursion level of the encoder
//! - [`Delimiter`]: choice of cell/list delimiter (comma, tab, or pipe)
//!
//! ## Examples
//!
//! ```rust
//! use tokpack::{EncodeOptions, Delimiter, to_string_with_options};
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Data { x: i32, y: i32 }
//!
//! let data = Data { x: 1, y: 2 };
//!
//! // Explicit tab delimiter
//! let options = EncodeOptions::new().with_delimiter(Delimiter::Tab);
//! let packed = to_string_with_options(&data, options).unwrap();
//!
//! // Or start from a preset
//! let packed = to_string_with_options(&data, EncodeOptions::for_llm()).unwrap();
//! ```

/// Delimiter choice for arrays and tabular rows.
///
/// - **Comma**: default for inline lists, most compatible
/// - **Tab**: best for tabular data; values containing plain spaces stay
///   unquoted, which is the format's main token saver
/// - **Pipe**: readable for markdown-style tables
///
/// # Examples
///
/// ```rust
/// use tokpack::Delimiter;
///
/// assert_eq!(Delimiter::Comma.as_str(), ",");
/// assert_eq!(Delimiter::Tab.as_str(), "\t");
/// assert_eq!(Delimiter::Pipe.as_str(), "|");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Delimiter {
    #[default]
    Comma,
    Tab,
    Pipe,
}

impl Delimiter {
    /// Returns the string representation of this delimiter.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Delimiter::Comma => ",",
            Delimiter::Tab => "\t",
            Delimiter::Pipe => "|",
        }
    }

    /// Returns the delimiter character.
    #[must_use]
    pub const fn as_char(&self) -> char {
        match self {
            Delimiter::Comma => ',',
            Delimiter::Tab => '\t',
            Delimiter::Pipe => '|',
        }
    }
}

/// Configuration options for encoding.
///
/// Constructed once by the caller (or taken from a preset), passed by
/// reference through the whole recursive encode, never mutated.
///
/// The `delimiter` field is optional: when left unset, scalar and list
/// contexts fall back to comma while the tabular renderer falls back to tab,
/// matching each context's most token-efficient unambiguous choice.
///
/// # Examples
///
/// ```rust
/// use tokpack::{EncodeOptions, Delimiter};
///
/// // Default options: tabular detection on, everything else off
/// let options = EncodeOptions::new();
/// assert!(options.tabular);
/// assert!(!options.flatten);
///
/// // Custom configuration
/// let options = EncodeOptions::new()
///     .with_compact_booleans(true)
///     .with_delimiter(Delimiter::Pipe);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct EncodeOptions {
    /// Render booleans as `1`/`0` instead of `true`/`false`.
    pub compact_booleans: bool,
    /// Render null as `~` instead of `null`.
    pub compact_null: bool,
    /// Insert a space after separators. Affects whitespace only, never
    /// structure.
    pub readable: bool,
    /// Delimiter for list items and tabular cells. `None` resolves to comma
    /// in scalar/list contexts and tab in tabular rows.
    pub delimiter: Option<Delimiter>,
    /// Render uniform object arrays as header-plus-rows tables.
    pub tabular: bool,
    /// Flatten nested objects into compound short keys before tabular
    /// rendering.
    pub flatten: bool,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        EncodeOptions {
            compact_booleans: false,
            compact_null: false,
            readable: false,
            delimiter: None,
            tabular: true,
            flatten: false,
        }
    }
}

impl EncodeOptions {
    /// Creates default options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Preset for LLM prompts: compact literals, tab-delimited tables.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tokpack::{EncodeOptions, Delimiter};
    ///
    /// let options = EncodeOptions::for_llm();
    /// assert!(options.compact_booleans);
    /// assert!(options.compact_null);
    /// assert_eq!(options.delimiter, Some(Delimiter::Tab));
    /// ```
    #[must_use]
    pub fn for_llm() -> Self {
        EncodeOptions {
            compact_booleans: true,
            compact_null: true,
            readable: false,
            delimiter: Some(Delimiter::Tab),
            tabular: true,
            flatten: false,
        }
    }

    /// Like [`EncodeOptions::for_llm`], but additionally flattens nested
    /// objects into single-level rows with shortened keys.
    #[must_use]
    pub fn for_llm_nested() -> Self {
        EncodeOptions {
            flatten: true,
            ..Self::for_llm()
        }
    }

    /// Preset for debugging: standard literals, comma delimiter, spaces
    /// after separators.
    #[must_use]
    pub fn for_debugging() -> Self {
        EncodeOptions {
            compact_booleans: false,
            compact_null: false,
            readable: true,
            delimiter: Some(Delimiter::Comma),
            tabular: true,
            flatten: false,
        }
    }

    /// Preset for maximum compatibility: standard literals, comma delimiter,
    /// no extra whitespace.
    #[must_use]
    pub fn for_compatibility() -> Self {
        EncodeOptions {
            compact_booleans: false,
            compact_null: false,
            readable: false,
            delimiter: Some(Delimiter::Comma),
            tabular: true,
            flatten: false,
        }
    }

    /// Sets compact boolean rendering (`1`/`0`).
    #[must_use]
    pub fn with_compact_booleans(mut self, compact: bool) -> Self {
        self.compact_booleans = compact;
        self
    }

    /// Sets compact null rendering (`~`).
    #[must_use]
    pub fn with_compact_null(mut self, compact: bool) -> Self {
        self.compact_null = compact;
        self
    }

    /// Sets readable mode (spaces after separators).
    #[must_use]
    pub fn with_readable(mut self, readable: bool) -> Self {
        self.readable = readable;
        self
    }

    /// Sets the delimiter for list items and tabular cells.
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: Delimiter) -> Self {
        self.delimiter = Some(delimiter);
        self
    }

    /// Enables or disables tabular rendering of uniform arrays.
    #[must_use]
    pub fn with_tabular(mut self, tabular: bool) -> Self {
        self.tabular = tabular;
        self
    }

    /// Enables or disables the flattening transform for object arrays.
    #[must_use]
    pub fn with_flatten(mut self, flatten: bool) -> Self {
        self.flatten = flatten;
        self
    }

    /// The delimiter used for scalars and inline lists: the configured one,
    /// or comma when unset.
    #[must_use]
    pub fn scalar_delimiter(&self) -> Delimiter {
        self.delimiter.unwrap_or(Delimiter::Comma)
    }

    /// The delimiter used for tabular cells: the configured one, or tab when
    /// unset.
    #[must_use]
    pub fn tabular_delimiter(&self) -> Delimiter {
        self.delimiter.unwrap_or(Delimiter::Tab)
    }
}
