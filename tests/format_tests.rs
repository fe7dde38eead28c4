//! Output-format conformance tests.
//!
//! Each test pins down one piece of the notation's surface grammar:
//! literal rendering, array counts, semantic headers, quoting, delimiter
//! handling, flattening. Expected strings are written out byte-for-byte so
//! a regression in any rendering rule fails loudly.

use tokpack::{encode, pack, Delimiter, EncodeOptions, Value};

fn default_opts() -> EncodeOptions {
    EncodeOptions::new()
}

#[test]
fn test_string_array_inline() {
    let value = pack!({"tags": ["jazz", "chill", "lofi"]});
    assert_eq!(encode(&value, &default_opts()), "tags[3]jazz,chill,lofi");
}

#[test]
fn test_flat_object() {
    let value = pack!({"name": "John", "age": 30});
    assert_eq!(encode(&value, &default_opts()), "name:John,age:30");
}

#[test]
fn test_nested_object_braces() {
    let value = pack!({"user": {"name": "John", "age": 30}});
    assert_eq!(encode(&value, &default_opts()), "user{name:John,age:30}");
}

#[test]
fn test_strings_needing_quotes_in_array() {
    let value = pack!({"titles": ["Hello World", "Test, Value"]});
    assert_eq!(
        encode(&value, &default_opts()),
        "titles[2]\"Hello World\",\"Test, Value\""
    );
}

#[test]
fn test_uniform_array_semantic_header() {
    let value = pack!({
        "users": [
            {"name": "Alice", "age": 25},
            {"name": "Bob", "age": 30}
        ]
    });
    let options = EncodeOptions::new().with_delimiter(Delimiter::Tab);
    assert_eq!(
        encode(&value, &options),
        "users[2]{name,age}:\nAlice\t25\nBob\t30"
    );
}

#[test]
fn test_compact_null_top_level() {
    let options = EncodeOptions::new().with_compact_null(true);
    assert_eq!(encode(&Value::Null, &options), "~");
}

#[test]
fn test_standard_literals_without_compact_flags() {
    assert_eq!(encode(&Value::Null, &default_opts()), "null");
    assert_eq!(encode(&pack!(true), &default_opts()), "true");
    assert_eq!(encode(&pack!(false), &default_opts()), "false");
}

#[test]
fn test_compact_booleans() {
    let options = EncodeOptions::new().with_compact_booleans(true);
    assert_eq!(encode(&pack!(true), &options), "1");
    assert_eq!(encode(&pack!(false), &options), "0");
    // compact_booleans alone leaves null untouched
    assert_eq!(encode(&Value::Null, &options), "null");
}

#[test]
fn test_empty_containers() {
    assert_eq!(encode(&pack!({"tags": []}), &default_opts()), "tags[0]");
    assert_eq!(encode(&pack!({"config": {}}), &default_opts()), "config");
    assert_eq!(encode(&pack!([]), &default_opts()), "[0]");
    assert_eq!(encode(&pack!({}), &default_opts()), "");
}

#[test]
fn test_tabular_header_is_comma_joined_regardless_of_delimiter() {
    let value = pack!({"rows": [{"a": 1, "b": 2}]});
    for delimiter in [Delimiter::Comma, Delimiter::Tab, Delimiter::Pipe] {
        let options = EncodeOptions::new().with_delimiter(delimiter);
        let out = encode(&value, &options);
        assert!(
            out.starts_with("rows[1]{a,b}:\n"),
            "unexpected header in {out:?}"
        );
    }
}

#[test]
fn test_pipe_delimited_rows() {
    let value = pack!({"rows": [{"a": 1, "b": 2}, {"a": 3, "b": 4}]});
    let options = EncodeOptions::new().with_delimiter(Delimiter::Pipe);
    assert_eq!(encode(&value, &options), "rows[2]{a,b}:\n1|2\n3|4");
}

#[test]
fn test_comma_delimited_rows() {
    let value = pack!({"rows": [{"a": 1, "b": 2}]});
    let options = EncodeOptions::new().with_delimiter(Delimiter::Comma);
    assert_eq!(encode(&value, &options), "rows[1]{a,b}:\n1,2");
}

#[test]
fn test_unkeyed_table_has_plain_header_row() {
    let value = pack!([{"x": 1, "y": 2}, {"x": 3, "y": 4}]);
    assert_eq!(encode(&value, &default_opts()), "x\ty\n1\t2\n3\t4");
}

#[test]
fn test_tabular_off_renders_bracketed_list() {
    let value = pack!({"users": [{"name": "Alice"}, {"name": "Bob"}]});
    let options = EncodeOptions::new().with_tabular(false);
    assert_eq!(
        encode(&value, &options),
        "users[2]{name:Alice},{name:Bob}"
    );
}

#[test]
fn test_non_uniform_array_keeps_list_form() {
    // Mixed element types never tabularize
    let value = pack!({"mixed": [1, "two", {"n": 3}]});
    assert_eq!(encode(&value, &default_opts()), "mixed[3]1,two,{n:3}");

    // Same keys but a nested value blocks uniformity
    let value = pack!({"rows": [{"a": 1}, {"a": {"b": 2}}]});
    assert_eq!(encode(&value, &default_opts()), "rows[2]{a:1},{a{b:2}}");
}

#[test]
fn test_nested_arrays_in_list_form() {
    let value = pack!({"grid": [[1, 2], [3, 4]]});
    assert_eq!(encode(&value, &default_opts()), "grid[2][2]1,2,[2]3,4");
}

#[test]
fn test_flatten_produces_compound_columns() {
    let value = pack!({
        "orders": [
            {"orderId": 1, "customer": {"name": "Ann", "email": "a@x.io"}},
            {"orderId": 2, "customer": {"name": "Bob", "email": "b@x.io"}}
        ]
    });
    let options = EncodeOptions::for_llm_nested();
    assert_eq!(
        encode(&value, &options),
        "orders[2]{oid,c_n,c_e}:\n1\tAnn\ta@x.io\n2\tBob\tb@x.io"
    );
}

#[test]
fn test_flatten_indexes_nested_arrays() {
    let value = pack!({
        "orders": [
            {"orderId": 1, "items": [{"sku": "A1", "price": 9.5}]}
        ]
    });
    let options = EncodeOptions::for_llm_nested();
    assert_eq!(
        encode(&value, &options),
        "orders[1]{oid,i0_s,i0_p}:\n1\tA1\t9.5"
    );
}

#[test]
fn test_flatten_unions_columns_and_backfills_null() {
    let value = pack!({
        "rows": [
            {"a": 1, "b": 2},
            {"a": 3, "c": 4}
        ]
    });
    let options = EncodeOptions::new().with_flatten(true);
    assert_eq!(
        encode(&value, &options),
        "rows[2]{a,b,c}:\n1\t2\tnull\n3\tnull\t4"
    );
}

#[test]
fn test_flatten_backfill_honors_compact_null() {
    let value = pack!({"rows": [{"a": 1}, {"b": 2}]});
    let options = EncodeOptions::new()
        .with_flatten(true)
        .with_compact_null(true);
    assert_eq!(encode(&value, &options), "rows[2]{a,b}:\n1\t~\n~\t2");
}

#[test]
fn test_readable_mode_spacing() {
    let value = pack!({"name": "John", "tags": ["a", "b"], "user": {"age": 30}});
    let options = EncodeOptions::new().with_readable(true);
    assert_eq!(
        encode(&value, &options),
        "name: John, tags[2] a, b, user{age: 30}"
    );
}

#[test]
fn test_quoting_literal_shaped_strings() {
    // String values that collide with literals must stay distinguishable
    let value = pack!({"a": "true", "b": "false", "c": "null", "d": "42", "e": "-3.5"});
    assert_eq!(
        encode(&value, &default_opts()),
        "a:\"true\",b:\"false\",c:\"null\",d:\"42\",e:\"-3.5\""
    );
}

#[test]
fn test_quoting_structural_characters() {
    let value = pack!({"a": "x:y", "b": "x[y", "c": "x{y", "d": "x,y", "e": ""});
    assert_eq!(
        encode(&value, &default_opts()),
        "a:\"x:y\",b:\"x[y\",c:\"x{y\",d:\"x,y\",e:\"\""
    );
}

#[test]
fn test_quote_escaping() {
    let value = pack!({"say": "she said \"hi\""});
    assert_eq!(
        encode(&value, &default_opts()),
        "say:\"she said \\\"hi\\\"\""
    );
}

#[test]
fn test_case_sensitive_literal_check() {
    // Only lowercase exact matches count as literal-shaped
    let value = pack!({"a": "True", "b": "NULL", "c": "False"});
    assert_eq!(encode(&value, &default_opts()), "a:True,b:NULL,c:False");
}

#[test]
fn test_tab_cell_keeps_comma_content_bare() {
    let value = pack!({"rows": [{"note": "red, loud"}, {"note": "quiet"}]});
    assert_eq!(
        encode(&value, &default_opts()),
        "rows[2]{note}:\nred, loud\nquiet"
    );
}

#[test]
fn test_cell_containing_active_delimiter_stays_quoted() {
    let value = pack!({"rows": [{"note": "a|b"}]});
    let options = EncodeOptions::new().with_delimiter(Delimiter::Pipe);
    assert_eq!(encode(&value, &options), "rows[1]{note}:\n\"a|b\"");
}

#[test]
fn test_cell_newline_escaped() {
    let value = pack!({"rows": [{"note": "line1\nline2"}]});
    assert_eq!(
        encode(&value, &default_opts()),
        "rows[1]{note}:\n\"line1\\nline2\""
    );
}

#[test]
fn test_preset_for_llm() {
    let value = pack!({"ok": true, "skip": false, "gap": null});
    assert_eq!(
        encode(&value, &EncodeOptions::for_llm()),
        "ok:1,skip:0,gap:~"
    );
}

#[test]
fn test_preset_for_llm_nested_flattens() {
    let value = pack!({"rows": [{"a": {"b": 1}}]});
    assert_eq!(
        encode(&value, &EncodeOptions::for_llm_nested()),
        "rows[1]{a_b}:\n1"
    );
}

#[test]
fn test_preset_for_debugging() {
    let value = pack!({"ok": true, "gap": null});
    assert_eq!(
        encode(&value, &EncodeOptions::for_debugging()),
        "ok: true, gap: null"
    );
}

#[test]
fn test_preset_for_compatibility_uses_comma_rows() {
    let value = pack!({"rows": [{"a": 1, "b": 2}]});
    assert_eq!(
        encode(&value, &EncodeOptions::for_compatibility()),
        "rows[1]{a,b}:\n1,2"
    );
}

#[test]
fn test_number_rendering() {
    let value = pack!({"i": 7, "neg": (-12), "f": 2.5, "whole": (3.0f64)});
    // Whole floats render through Display, which drops the trailing .0
    assert_eq!(
        encode(&value, &default_opts()),
        "i:7,neg:-12,f:2.5,whole:3"
    );
}
