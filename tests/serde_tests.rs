#![cfg(feature = "serde")]

//! Integration tests for serde support.
//!
//! Values and dictionaries round-trip through JSON; signatures serialize
//! so that classification results can be inspected or cached.

use keyword_curry::dictionary;
use keyword_curry::value::{Dictionary, Opaque, Value};
use rstest::rstest;

// =============================================================================
// Value Tests
// =============================================================================

#[rstest]
#[case(Value::Nil, "null")]
#[case(Value::from(true), "true")]
#[case(Value::from(42), "42")]
#[case(Value::from(1.5), "1.5")]
#[case(Value::from("text"), r#""text""#)]
#[case(Value::from(vec![Value::from(1), Value::Nil]), "[1,null]")]
fn test_value_json_roundtrip(#[case] value: Value, #[case] expected: &str) {
    let json = serde_json::to_string(&value).unwrap();
    assert_eq!(json, expected);

    let restored: Value = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, value);
}

#[rstest]
fn test_opaque_value_fails_to_serialize() {
    let value = Value::from(Opaque::new(String::from("double")));
    let error = serde_json::to_string(&value).unwrap_err();
    assert!(error.to_string().contains("opaque"));
}

#[rstest]
fn test_out_of_range_integer_fails_to_deserialize() {
    let result: Result<Value, _> = serde_json::from_str("18446744073709551615");
    assert!(result.is_err());
}

// =============================================================================
// Dictionary Tests
// =============================================================================

#[rstest]
fn test_dictionary_serializes_in_insertion_order() {
    let named = dictionary! { "zeta" => 1, "alpha" => "two", "mid" => Value::Nil };
    let json = serde_json::to_string(&named).unwrap();
    assert_eq!(json, r#"{"zeta":1,"alpha":"two","mid":null}"#);
}

#[rstest]
fn test_dictionary_json_roundtrip() {
    let named = dictionary! {
        "key1" => 1,
        "nested" => dictionary! { "inner" => vec![Value::from(1), Value::from(2)] },
    };
    let json = serde_json::to_string(&named).unwrap();
    let restored: Dictionary = serde_json::from_str(&json).unwrap();

    assert_eq!(restored, named);
    assert!(restored.get("nested").is_some_and(Value::is_dictionary));
}

#[rstest]
fn test_dictionary_rejects_non_map() {
    let result: Result<Dictionary, _> = serde_json::from_str("[1, 2]");
    assert!(result.is_err());
}

#[rstest]
fn test_duplicate_json_keys_keep_last_value() {
    let restored: Dictionary = serde_json::from_str(r#"{"key1":1,"key1":2}"#).unwrap();
    assert_eq!(restored.len(), 1);
    assert_eq!(restored.get("key1"), Some(&Value::from(2)));
}

// =============================================================================
// Signature Tests
// =============================================================================

#[cfg(feature = "keyword")]
mod signature {
    use keyword_curry::signature::{Arity, ParameterList, Signature, classify};
    use rstest::rstest;

    #[rstest]
    fn test_parameter_list_json_roundtrip() {
        let parameters = ParameterList::new()
            .positional("pos1")
            .rest("rest")
            .named_required("key1");
        let json = serde_json::to_string(&parameters).unwrap();
        let restored: ParameterList = serde_json::from_str(&json).unwrap();

        assert_eq!(restored, parameters);
    }

    #[rstest]
    fn test_signature_json_roundtrip() {
        let signature = classify(
            ParameterList::new()
                .positional("pos1")
                .named_required("key1")
                .named_optional("key2")
                .as_slice(),
        );
        let json = serde_json::to_string(&signature).unwrap();
        let restored: Signature = serde_json::from_str(&json).unwrap();

        assert_eq!(restored, signature);
        assert_eq!(restored.positional_arity(), Arity::Fixed(1));
    }

    #[rstest]
    fn test_arity_uses_snake_case() {
        assert_eq!(serde_json::to_string(&Arity::Variadic).unwrap(), r#""variadic""#);
        assert_eq!(serde_json::to_string(&Arity::Fixed(2)).unwrap(), r#"{"fixed":2}"#);
    }
}
