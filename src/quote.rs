//! The quoting oracle.
//!
//! Decides, per scalar string and per delimiter mode, whether a string must
//! be wrapped in double quotes to remain unambiguous in the packed output.
//!
//! The rules are deliberately asymmetric between delimiter modes: under a
//! tab delimiter, strings containing plain spaces stay unquoted because tabs
//! delimit unambiguously even when values contain spaces. That is the
//! format's main token saver for tabular data. Under comma or pipe, a space
//! is ambiguous (readable mode inserts spaces after separators), so it
//! forces quoting.
//!
//! Independent of the delimiter, a string whose full text matches `true`,
//! `false`, `null`, or the numeric literal grammar is always quoted, so a
//! string value is never misread as a different primitive type.

use crate::Delimiter;

/// Returns `true` if `text` must be quoted to stay unambiguous under the
/// given delimiter.
///
/// # Examples
///
/// ```rust
/// use tokpack::{needs_quoting, Delimiter};
///
/// assert!(!needs_quoting("hello", Delimiter::Comma));
/// assert!(needs_quoting("hello world", Delimiter::Comma));
/// assert!(!needs_quoting("hello world", Delimiter::Tab));
/// assert!(needs_quoting("true", Delimiter::Tab));
/// assert!(needs_quoting("-1.5e3", Delimiter::Comma));
/// ```
#[must_use]
pub fn needs_quoting(text: &str, delimiter: Delimiter) -> bool {
    // An unquoted empty token is indistinguishable from "no value".
    if text.is_empty() {
        return true;
    }

    let structural = text
        .chars()
        .any(|c| matches!(c, ':' | '[' | ']' | '{' | '}'));

    let ambiguous = match delimiter {
        Delimiter::Tab => structural || text.contains('\t') || text.contains('|'),
        Delimiter::Comma | Delimiter::Pipe => {
            structural || text.contains(delimiter.as_char()) || text.contains(' ')
        }
    };

    ambiguous || is_literal_like(text)
}

/// Returns `true` if the string's full text matches a `true`/`false`/`null`
/// keyword or the numeric literal grammar, case-sensitively.
#[inline]
#[must_use]
pub fn is_literal_like(text: &str) -> bool {
    text == "true" || text == "false" || text == "null" || is_numeric_literal(text)
}

/// Matches the numeric literal grammar: optional leading `-`, digits,
/// optional `.digits`, optional `[eE][+-]?digits`.
///
/// This is stricter than `str::parse::<f64>` on purpose: `inf`, `NaN`, and
/// leading-`+` forms are not numeric literals in the output grammar, so
/// strings shaped like them stay unquoted.
#[must_use]
pub fn is_numeric_literal(text: &str) -> bool {
    let bytes = text.as_bytes();
    let mut i = 0;

    if i < bytes.len() && bytes[i] == b'-' {
        i += 1;
    }

    let int_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    if i == int_start {
        return false;
    }

    if i < bytes.len() && bytes[i] == b'.' {
        i += 1;
        let frac_start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        if i == frac_start {
            return false;
        }
    }

    if i < bytes.len() && (bytes[i] == b'e' || bytes[i] == b'E') {
        i += 1;
        if i < bytes.len() && (bytes[i] == b'+' || bytes[i] == b'-') {
            i += 1;
        }
        let exp_start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        if i == exp_start {
            return false;
        }
    }

    i == bytes.len()
}

/// Wraps `text` in double quotes, escaping embedded double quotes with a
/// backslash. No other character is escaped.
#[must_use]
pub fn quote(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('"');
    for ch in text.chars() {
        if ch == '"' {
            out.push('\\');
        }
        out.push(ch);
    }
    out.push('"');
    out
}

/// Like [`quote`], but additionally escapes `\n` and `\r` so the quoted form
/// stays on one line. Used for tabular cells, where a literal newline would
/// corrupt the row-based layout.
#[must_use]
pub(crate) fn quote_single_line(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('"');
    for ch in text.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            _ => out.push(ch),
        }
    }
    out.push('"');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_string_always_quoted() {
        assert!(needs_quoting("", Delimiter::Comma));
        assert!(needs_quoting("", Delimiter::Tab));
        assert!(needs_quoting("", Delimiter::Pipe));
    }

    #[test]
    fn test_tab_mode_spares_spaces() {
        assert!(!needs_quoting("hello world", Delimiter::Tab));
        assert!(needs_quoting("hello\tworld", Delimiter::Tab));
        assert!(needs_quoting("a|b", Delimiter::Tab));
        assert!(needs_quoting("a:b", Delimiter::Tab));
    }

    #[test]
    fn test_comma_mode() {
        assert!(needs_quoting("a,b", Delimiter::Comma));
        assert!(needs_quoting("a b", Delimiter::Comma));
        assert!(needs_quoting("a[b", Delimiter::Comma));
        assert!(needs_quoting("a}b", Delimiter::Comma));
        // Pipe is not the active delimiter here
        assert!(!needs_quoting("a|b", Delimiter::Comma));
    }

    #[test]
    fn test_pipe_mode() {
        assert!(needs_quoting("a|b", Delimiter::Pipe));
        assert!(needs_quoting("a b", Delimiter::Pipe));
        assert!(!needs_quoting("a,b", Delimiter::Pipe));
    }

    #[test]
    fn test_literal_shapes_quoted_in_every_mode() {
        for delim in [Delimiter::Comma, Delimiter::Tab, Delimiter::Pipe] {
            assert!(needs_quoting("true", delim));
            assert!(needs_quoting("false", delim));
            assert!(needs_quoting("null", delim));
            assert!(needs_quoting("42", delim));
            assert!(needs_quoting("-3.25", delim));
            assert!(needs_quoting("1e6", delim));
        }
        // Case-sensitive: these are not the reserved literals
        assert!(!needs_quoting("True", Delimiter::Comma));
        assert!(!needs_quoting("NULL", Delimiter::Comma));
    }

    #[test]
    fn test_numeric_literal_grammar() {
        assert!(is_numeric_literal("0"));
        assert!(is_numeric_literal("-7"));
        assert!(is_numeric_literal("3.5"));
        assert!(is_numeric_literal("-0.001"));
        assert!(is_numeric_literal("1e9"));
        assert!(is_numeric_literal("2E-3"));
        assert!(is_numeric_literal("6.02e+23"));

        assert!(!is_numeric_literal(""));
        assert!(!is_numeric_literal("-"));
        assert!(!is_numeric_literal("."));
        assert!(!is_numeric_literal("1."));
        assert!(!is_numeric_literal(".5"));
        assert!(!is_numeric_literal("1e"));
        assert!(!is_numeric_literal("1e+"));
        assert!(!is_numeric_literal("+1"));
        assert!(!is_numeric_literal("inf"));
        assert!(!is_numeric_literal("NaN"));
        assert!(!is_numeric_literal("12ab"));
    }

    #[test]
    fn test_quote_escapes_only_quotes() {
        assert_eq!(quote("plain"), "\"plain\"");
        assert_eq!(quote("say \"hi\""), "\"say \\\"hi\\\"\"");
        // Newlines pass through unescaped in the generic form
        assert_eq!(quote("a\nb"), "\"a\nb\"");
    }

    #[test]
    fn test_quote_single_line() {
        assert_eq!(quote_single_line("a\nb"), "\"a\\nb\"");
        assert_eq!(quote_single_line("a\r\nb"), "\"a\\r\\nb\"");
        assert_eq!(quote_single_line("say \"hi\""), "\"say \\\"hi\\\"\"");
    }
}
