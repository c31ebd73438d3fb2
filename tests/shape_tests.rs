use jsonshape::{classify, looks_like_json, Shape};

struct Case {
    name: &'static str,
    input: &'static str,
    expected: bool,
}

const CASES: &[Case] = &[
    // Objects
    Case { name: "valid empty object", input: "{}", expected: true },
    Case { name: "valid object with content", input: r#"{"key": "value"}"#, expected: true },
    Case { name: "valid object with whitespace", input: "  {  }  ", expected: true },
    Case { name: "valid object with nested content", input: r#"{"key": {"nested": "value"}}"#, expected: true },
    // Arrays
    Case { name: "valid empty array", input: "[]", expected: true },
    Case { name: "valid array with content", input: r#"["item1", "item2"]"#, expected: true },
    Case { name: "valid array with whitespace", input: "  [  ]  ", expected: true },
    Case { name: "valid array with nested content", input: r#"[{"key": "value"}, [1, 2, 3]]"#, expected: true },
    // Rejected
    Case { name: "empty string", input: "", expected: false },
    Case { name: "whitespace only", input: "   ", expected: false },
    Case { name: "single character", input: "a", expected: false },
    Case { name: "object start array end", input: "{]", expected: false },
    Case { name: "array start object end", input: "[}", expected: false },
    Case { name: "object missing closing brace", input: "{", expected: false },
    Case { name: "object missing opening brace", input: "}", expected: false },
    Case { name: "array missing closing bracket", input: "[", expected: false },
    Case { name: "array missing opening bracket", input: "]", expected: false },
    Case { name: "plain text", input: "hello world", expected: false },
    Case { name: "number", input: "123", expected: false },
    Case { name: "string literal", input: r#""hello""#, expected: false },
    Case { name: "boolean", input: "true", expected: false },
    Case { name: "null", input: "null", expected: false },
    // Shape only: the interior is never checked
    Case { name: "object with unquoted content", input: "{key: value}", expected: true },
    Case { name: "array with unquoted content", input: "[item1, item2]", expected: true },
];

#[test]
fn test_looks_like_json_table() {
    for case in CASES {
        assert_eq!(
            looks_like_json(case.input),
            case.expected,
            "{}: looks_like_json({:?})",
            case.name,
            case.input
        );
    }
}

#[test]
fn test_classify_agrees_with_predicate() {
    for case in CASES {
        assert_eq!(
            classify(case.input).is_some(),
            looks_like_json(case.input),
            "{}",
            case.name
        );
    }
}

#[test]
fn test_classify_reports_kind() {
    assert_eq!(classify(r#"{"key": "value"}"#), Some(Shape::Object));
    assert_eq!(classify(r#"[{"key": "value"}, [1, 2, 3]]"#), Some(Shape::Array));
    // The outer pair decides, not the first nested container.
    assert_eq!(classify(r#"[{"a": 1}]"#), Some(Shape::Array));
    assert_eq!(classify("{]"), None);
}

#[test]
fn test_padding_with_newlines_and_tabs() {
    assert!(looks_like_json("\n\t{\"id\": 1}\r\n"));
    assert!(looks_like_json("\r\n[1]\t\t"));
    assert!(!looks_like_json("\n\t\r\n"));
}

#[test]
fn test_long_input() {
    let body = "very long string ".repeat(1000);
    assert!(looks_like_json(&format!(r#"{{"payload": {{"data": "{}"}}}}"#, body)));
    assert!(!looks_like_json(&format!("payload: {}", body)));
    assert!(!looks_like_json(&body));
}
