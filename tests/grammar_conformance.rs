//! Grammar conformance tests for the parsing pipeline.
//!
//! Exercises the public API over the full JSON grammar (RFC 8259): scalars,
//! strings with escapes, numbers, nested composites, and the failure modes
//! required for malformed and adversarial input.

use jsontree::{parse, parse_str, parse_with_limits, Limits, Number, ParseError, Value};

// ============================================================================
// Root values
// ============================================================================

#[test]
fn empty_object_root() {
    assert_eq!(parse(b"{}").unwrap(), Value::Object(vec![]));
}

#[test]
fn empty_array_root() {
    // Any JSON value is accepted at the root.
    assert_eq!(parse(b"[]").unwrap(), Value::Array(vec![]));
}

#[test]
fn scalar_roots() {
    assert_eq!(parse(b"null").unwrap(), Value::Null);
    assert_eq!(parse(b"true").unwrap(), Value::Bool(true));
    assert_eq!(parse(b"false").unwrap(), Value::Bool(false));
    assert_eq!(parse(b"0").unwrap(), Value::Number(Number::Int(0)));
    assert_eq!(parse(br#""""#).unwrap().as_str(), Some(""));
}

#[test]
fn whitespace_around_root_ignored() {
    let value = parse(b" \t\r\n {} \n ").unwrap();
    assert_eq!(value, Value::Object(vec![]));
}

// ============================================================================
// Objects and arrays
// ============================================================================

#[test]
fn object_with_mixed_values() {
    let root = parse(br#"{"a":1,"b":[1,2,3]}"#).unwrap();
    let pairs = root.as_object().unwrap();
    assert_eq!(pairs.len(), 2);

    let b = root.get_field("b").unwrap();
    let items = b.as_array().unwrap();
    assert_eq!(items.len(), 3);
    for (i, item) in items.iter().enumerate() {
        assert_eq!(item.as_i64(), Some(i as i64 + 1));
    }
}

#[test]
fn object_preserves_encounter_order() {
    let root = parse(br#"{"z":0,"a":1,"m":2}"#).unwrap();
    let keys: Vec<&str> = root
        .as_object()
        .unwrap()
        .iter()
        .map(|(k, _)| k.as_ref())
        .collect();
    assert_eq!(keys, vec!["z", "a", "m"]);
}

#[test]
fn deeply_mixed_nesting() {
    let root = parse(br#"[{"a":[{"b":[null,true,{"c":1}]}]}]"#).unwrap();
    let c = root
        .lookup("0.a.0.b.2.c")
        .unwrap();
    assert_eq!(c.as_i64(), Some(1));
}

#[test]
fn duplicate_keys_rejected() {
    let err = parse(br#"{"k":1,"k":2}"#).unwrap_err();
    assert!(matches!(err, ParseError::DuplicateKey { key, .. } if key == "k"));
}

#[test]
fn trailing_comma_in_object_rejected() {
    let err = parse(br#"{"a":1,}"#).unwrap_err();
    assert!(matches!(err, ParseError::TrailingComma { .. }));
}

#[test]
fn trailing_comma_in_array_rejected() {
    let err = parse(b"[1,2,]").unwrap_err();
    assert!(matches!(err, ParseError::TrailingComma { .. }));
}

#[test]
fn lone_comma_rejected() {
    assert!(parse(b"[,]").is_err());
    assert!(parse(br#"{,}"#).is_err());
}

#[test]
fn unclosed_composites_rejected() {
    assert!(parse(b"[1, 2").is_err());
    assert!(parse(br#"{"a": 1"#).is_err());
    assert!(parse(b"[").is_err());
    assert!(parse(b"{").is_err());
}

// ============================================================================
// Strings and escapes
// ============================================================================

#[test]
fn escaped_quotes_decode() {
    let root = parse(br#"{"x":"he said \"hi\""}"#).unwrap();
    assert_eq!(
        root.get_field("x").unwrap().as_str(),
        Some(r#"he said "hi""#)
    );
}

#[test]
fn short_escapes_decode() {
    let root = parse(br#""line1\nline2\ttabbed\\done""#).unwrap();
    assert_eq!(root.as_str(), Some("line1\nline2\ttabbed\\done"));
}

#[test]
fn unterminated_string_rejected() {
    let err = parse(br#"{"a": "unclosed"#).unwrap_err();
    assert!(matches!(err, ParseError::UnterminatedString { .. }));
}

#[test]
fn keys_are_decoded_before_matching() {
    let root = parse(br#"{"tab\there": 1}"#).unwrap();
    assert_eq!(root.get_field("tab\there").unwrap().as_i64(), Some(1));
}

// ============================================================================
// Numbers
// ============================================================================

#[test]
fn integer_and_float_variants() {
    let root = parse(b"[1, -2, 0, 3.5, 1e2, -1.5e-1]").unwrap();
    let items = root.as_array().unwrap();
    assert_eq!(items[0], Value::Number(Number::Int(1)));
    assert_eq!(items[1], Value::Number(Number::Int(-2)));
    assert_eq!(items[2], Value::Number(Number::Int(0)));
    assert_eq!(items[3], Value::Number(Number::Float(3.5)));
    assert_eq!(items[4], Value::Number(Number::Float(100.0)));
    assert_eq!(items[5], Value::Number(Number::Float(-0.15)));
}

#[test]
fn i64_boundary_values() {
    assert_eq!(
        parse(b"9223372036854775807").unwrap().as_i64(),
        Some(i64::MAX)
    );
    assert_eq!(
        parse(b"-9223372036854775808").unwrap().as_i64(),
        Some(i64::MIN)
    );
}

#[test]
fn malformed_numbers_rejected() {
    for input in [&b"01"[..], b"1.", b"1e", b"--1", b"+1", b"1.2.3"] {
        assert!(parse(input).is_err(), "{input:?} should be rejected");
    }
}

// ============================================================================
// Keywords
// ============================================================================

#[test]
fn near_miss_keywords_rejected() {
    for input in [&b"trud"[..], b"fals", b"nil", b"TRUE"] {
        let result = parse(input);
        assert!(result.is_err(), "{input:?} should be rejected");
    }
}

// ============================================================================
// Adversarial input
// ============================================================================

#[test]
fn deep_nesting_fails_cleanly() {
    // 100k opening brackets: must fail with the depth error, not blow the
    // call stack.
    let input = vec![b'['; 100_000];
    let err = parse(&input).unwrap_err();
    assert!(matches!(err, ParseError::MaxDepthExceeded { .. }));
}

#[test]
fn deep_nesting_within_limit_parses() {
    let depth = 100;
    let mut input = vec![b'['; depth];
    input.extend(std::iter::repeat(b']').take(depth));
    let mut value = &parse(&input).unwrap();
    for _ in 0..depth - 1 {
        value = value.get_index(0).unwrap();
    }
    assert_eq!(value, &Value::Array(vec![]));
}

#[test]
fn input_size_limit_enforced() {
    let limits = Limits {
        max_input_size: 4,
        ..Limits::standard()
    };
    let err = parse_with_limits(b"[1, 2]", limits).unwrap_err();
    assert!(matches!(err, ParseError::InputTooLarge { size: 6, max: 4 }));
}

#[test]
fn intern_table_cap_enforced() {
    let limits = Limits {
        max_interned_strings: 2,
        ..Limits::standard()
    };
    let err = parse_with_limits(br#"["a","b","c"]"#, limits).unwrap_err();
    assert_eq!(err, ParseError::InternTableFull { max: 2 });

    // Repeated strings do not count against the cap.
    let ok = parse_with_limits(br#"["a","b","a","b"]"#, limits).unwrap();
    assert_eq!(ok.as_array().unwrap().len(), 4);
}

// ============================================================================
// Idempotence
// ============================================================================

#[test]
fn parsing_twice_yields_equal_trees() {
    let input = br#"{"a":[1,2.5,"x"],"b":{"c":null,"d":[true,false]}}"#;
    let first = parse(input).unwrap();
    let second = parse(input).unwrap();
    assert_eq!(first, second);
}

#[test]
fn parse_str_matches_parse() {
    let text = r#"{"k":"v"}"#;
    assert_eq!(parse_str(text).unwrap(), parse(text.as_bytes()).unwrap());
}

// ============================================================================
// Session isolation
// ============================================================================

#[test]
fn independent_parses_do_not_interfere() {
    // Each session owns its cursor and intern table, so parallel parses of
    // different documents stay independent and trees cross threads freely.
    let handles: Vec<_> = (0..8)
        .map(|i| {
            std::thread::spawn(move || {
                let doc = format!(r#"{{"worker":{i},"tag":"t{i}"}}"#);
                parse(doc.as_bytes()).unwrap()
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let root = handle.join().unwrap();
        assert_eq!(root.get_field("worker").unwrap().as_i64(), Some(i as i64));
        assert_eq!(
            root.get_field("tag").unwrap().as_str(),
            Some(format!("t{i}").as_str())
        );
    }
}
