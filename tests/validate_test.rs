use blueprint::{Constraints, JsonPath, StructDesc, TypeDesc, Validator, ValidationErrors};
use serde_json::json;

fn person_validator() -> Validator {
    let ty = TypeDesc::Struct(
        StructDesc::new("Person")
            .field_with("firstName", TypeDesc::Str, Constraints::new().required())
            .field_with("lastName", TypeDesc::Str, Constraints::new().required())
            .field_with(
                "age",
                TypeDesc::Int,
                Constraints::new().description("Age in years").minimum(0.0),
            )
            .field_with(
                "scores",
                TypeDesc::List(Box::new(TypeDesc::Int)),
                Constraints::new().min_items(1).max_items(5),
            )
            .items(Constraints::new().minimum(0.0).maximum(100.0)),
    );
    Validator::from_type(&ty, Some(&Constraints::new()), None).unwrap()
}

fn failure(validator: &Validator, value: serde_json::Value) -> ValidationErrors {
    validator
        .validate(&value, &JsonPath::root())
        .into_result()
        .unwrap_err()
}

#[test]
fn test_conforming_payload_passes() {
    let validator = person_validator();
    let result = validator.validate(
        &json!({
            "firstName": "Ada",
            "lastName": "Lovelace",
            "age": 36,
            "scores": [90, 85]
        }),
        &JsonPath::root(),
    );
    assert!(result.is_success());
}

#[test]
fn test_all_violations_are_reported_at_once() {
    let validator = person_validator();
    let errors = failure(
        &validator,
        json!({
            "lastName": "Lovelace",
            "age": -1,
            "scores": []
        }),
    );

    assert_eq!(errors.with_code("required").len(), 1);
    assert_eq!(errors.with_code("min_value").len(), 1);
    assert_eq!(errors.with_code("min_items").len(), 1);
}

#[test]
fn test_nested_errors_carry_full_paths() {
    let validator = person_validator();
    let errors = failure(
        &validator,
        json!({
            "firstName": "Ada",
            "lastName": "Lovelace",
            "scores": [50, 101]
        }),
    );

    assert_eq!(errors.len(), 1);
    assert_eq!(errors.first().code, "max_value");
    assert_eq!(errors.first().path.to_string(), "scores[1]");
}

#[test]
fn test_missing_optional_member_is_not_an_error() {
    let validator = person_validator();
    let result = validator.validate(
        &json!({"firstName": "Ada", "lastName": "Lovelace"}),
        &JsonPath::root(),
    );
    assert!(result.is_success());
}

#[test]
fn test_pattern_constraint_end_to_end() {
    let ty = TypeDesc::Struct(StructDesc::new("Login").field_with(
        "name",
        TypeDesc::Str,
        Constraints::new().required().pattern("^[a-z][a-z0-9_]*$"),
    ));
    let validator = Validator::from_type(&ty, Some(&Constraints::new()), None).unwrap();

    assert!(validator
        .validate(&json!({"name": "ada_01"}), &JsonPath::root())
        .is_success());

    let errors = failure(&validator, json!({"name": "0ada"}));
    assert_eq!(errors.first().code, "pattern");
    assert_eq!(errors.first().path.to_string(), "name");
}

#[test]
fn test_describe_driven_validator() {
    let validator = Validator::of::<Vec<i64>>().unwrap();
    assert!(validator
        .validate(&json!([1, 2, 3]), &JsonPath::root())
        .is_success());

    let errors = failure(&validator, json!([1, "two"]));
    assert_eq!(errors.first().code, "invalid_type");
    assert_eq!(errors.first().path.to_string(), "[1]");
}

#[test]
fn test_type_mismatch_at_root() {
    let validator = person_validator();
    let errors = failure(&validator, json!("not an object"));
    assert_eq!(errors.first().code, "invalid_type");
    assert!(errors.first().path.is_root());
}
