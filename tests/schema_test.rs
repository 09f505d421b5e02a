use blueprint::{Constraints, EnumDesc, Schema, StructDesc, TypeDesc, ValueKind};

fn person() -> TypeDesc {
    TypeDesc::Struct(
        StructDesc::new("Person")
            .field_with("firstName", TypeDesc::Str, Constraints::new().required())
            .field_with("lastName", TypeDesc::Str, Constraints::new().required())
            .field_with(
                "age",
                TypeDesc::Int,
                Constraints::new().description("Age in years").minimum(0.0),
            ),
    )
}

#[test]
fn test_person_schema() {
    let schema = Schema::create(&person()).unwrap();

    assert_eq!(schema.title, "Person");
    assert_eq!(schema.kind, ValueKind::Object);
    assert_eq!(schema.properties["firstName"].kind, Some(ValueKind::String));
    assert_eq!(schema.properties["lastName"].kind, Some(ValueKind::String));
    assert_eq!(schema.properties["age"].kind, Some(ValueKind::Integer));
    assert_eq!(
        schema.properties["age"].description.as_deref(),
        Some("Age in years")
    );
    assert_eq!(schema.properties["age"].minimum, Some(0.0));
    assert_eq!(schema.required, ["firstName", "lastName"]);
}

#[test]
fn test_schema_kind_matches_type_kind() {
    let types = [
        TypeDesc::Int,
        TypeDesc::Float,
        TypeDesc::Str,
        TypeDesc::Bool,
        TypeDesc::List(Box::new(TypeDesc::Int)),
        TypeDesc::Array(Box::new(TypeDesc::Str)),
        TypeDesc::Struct(StructDesc::new("T")),
        TypeDesc::Enum(EnumDesc::new("E", ["A"])),
    ];
    for ty in &types {
        assert_eq!(Schema::create(ty).unwrap().kind, ty.kind().unwrap());
    }
}

#[test]
fn test_required_is_ordered_subset_of_properties() {
    let schema = Schema::create(&person()).unwrap();

    // Declaration order, not alphabetical.
    assert_eq!(schema.required, ["firstName", "lastName"]);
    for name in &schema.required {
        assert!(schema.properties.contains_key(name));
    }
}

#[test]
fn test_enum_member_produces_any_of_entries() {
    let ty = TypeDesc::Struct(
        StructDesc::new("Flag").field("value", TypeDesc::Enum(EnumDesc::new("AB", ["A", "B"]))),
    );
    let schema = Schema::create(&ty).unwrap();
    let property = &schema.properties["value"];

    assert_eq!(property.kind, None);
    assert_eq!(property.any_of.len(), 2);
    assert_eq!(property.any_of[0].values, ["A"]);
    assert_eq!(property.any_of[0].description.as_deref(), Some("A"));
    assert_eq!(property.any_of[1].values, ["B"]);
    assert_eq!(property.any_of[1].description.as_deref(), Some("B"));
}

#[test]
fn test_equality_ignores_property_order_but_not_required_order() {
    let a = Schema::create(&TypeDesc::Struct(
        StructDesc::new("T")
            .field_with("x", TypeDesc::Int, Constraints::new().required())
            .field_with("y", TypeDesc::Str, Constraints::new().required()),
    ))
    .unwrap();

    // Same members declared in the opposite order: the property map compares
    // as a set, but required is a sequence and now differs.
    let b = Schema::create(&TypeDesc::Struct(
        StructDesc::new("T")
            .field_with("y", TypeDesc::Str, Constraints::new().required())
            .field_with("x", TypeDesc::Int, Constraints::new().required()),
    ))
    .unwrap();

    assert_ne!(a, b);

    let mut reordered = b.clone();
    reordered.required = vec!["x".to_string(), "y".to_string()];
    assert_eq!(a, reordered);
}

#[test]
fn test_describe_driven_schema_for_builtins() {
    assert_eq!(Schema::of::<i64>().unwrap().kind, ValueKind::Integer);
    assert_eq!(Schema::of::<Vec<String>>().unwrap().kind, ValueKind::Array);
}

#[test]
fn test_unsupported_member_type_fails() {
    let ty = TypeDesc::Struct(StructDesc::new("T").field("raw", TypeDesc::Opaque("RawHandle")));
    assert!(Schema::create(&ty).is_err());
}
