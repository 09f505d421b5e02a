use blueprint::{Constraints, ParseError, Schema, StructDesc, TypeDesc, ValueKind};

#[test]
fn test_parse_minimal_document() {
    let bytes = br#"{"title":"X","type":"object","properties":{},"required":["a"]}"#;
    let schema = Schema::parse(bytes).unwrap();

    assert_eq!(schema.title, "X");
    assert_eq!(schema.kind, ValueKind::Object);
    assert!(schema.properties.is_empty());
    assert_eq!(schema.required, ["a"]);
}

#[test]
fn test_parse_collects_property_names() {
    let bytes = br#"{
        "title": "Person",
        "type": "object",
        "properties": {
            "firstName": {"type": "string"},
            "age": {"type": "integer", "minimum": 0}
        },
        "required": ["firstName"]
    }"#;
    let schema = Schema::parse(bytes).unwrap();

    assert!(schema.properties.contains_key("firstName"));
    assert!(schema.properties.contains_key("age"));
    // Property contents are not rebuilt from the wire yet; only the names.
    assert_eq!(schema.properties["age"].kind, None);
    assert_eq!(schema.properties["age"].minimum, None);
}

#[test]
fn test_parse_rejects_array_root() {
    let err = Schema::parse(b"[1, 2, 3]").unwrap_err();
    match err {
        ParseError::RootNotObject { got } => assert_eq!(got, serde_json::json!([1, 2, 3])),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_parse_rejects_non_string_title() {
    let err = Schema::parse(br#"{"title": 42}"#).unwrap_err();
    assert!(matches!(err, ParseError::Decode { ref key, .. } if key == "title"));
}

#[test]
fn test_parse_rejects_non_string_required_entry() {
    let err = Schema::parse(br#"{"title":"X","required":[1]}"#).unwrap_err();
    assert!(matches!(err, ParseError::Decode { ref key, .. } if key == "required"));
}

#[test]
fn test_parse_rejects_invalid_json() {
    assert!(matches!(
        Schema::parse(b"{not json"),
        Err(ParseError::Json(_))
    ));
}

#[test]
fn test_parse_rejects_invalid_utf8() {
    assert!(matches!(
        Schema::parse(&[0xff, 0xfe, 0x7b]),
        Err(ParseError::Utf8(_))
    ));
}

#[test]
fn test_round_trip_preserves_title_and_required_order() {
    let ty = TypeDesc::Struct(
        StructDesc::new("Person")
            .field_with("firstName", TypeDesc::Str, Constraints::new().required())
            .field_with("lastName", TypeDesc::Str, Constraints::new().required())
            .field("age", TypeDesc::Int),
    );
    let schema = Schema::create(&ty).unwrap();
    let parsed = Schema::parse(&schema.to_bytes()).unwrap();

    assert_eq!(parsed.title, schema.title);
    assert_eq!(parsed.required, schema.required);
    // Property names survive; their contents are a documented parsing gap.
    let parsed_names: Vec<_> = parsed.properties.keys().collect();
    let original_names: Vec<_> = schema.properties.keys().collect();
    assert_eq!(parsed_names, original_names);
}

#[test]
fn test_parse_without_optional_fields() {
    let schema = Schema::parse(b"{}").unwrap();
    assert_eq!(schema.title, "");
    assert!(schema.properties.is_empty());
    assert!(schema.required.is_empty());
}
