use crate::ast;
use crate::NormalizedValue;
use crate::Param;
use crate::ValueKind;
use proptest::prelude::*;
use std::collections::BTreeMap;

#[test]
fn scalars_pass_through() {
    assert_eq!(
        NormalizedValue::from_ast(&ast::Value::Int(ast::Number::from(42))),
        NormalizedValue::Int(42),
    );
    assert_eq!(
        NormalizedValue::from_ast(&ast::Value::Float(1.5)),
        NormalizedValue::Float(1.5),
    );
    assert_eq!(
        NormalizedValue::from_ast(&ast::Value::String("hi".to_string())),
        NormalizedValue::String("hi".to_string()),
    );
    assert_eq!(
        NormalizedValue::from_ast(&ast::Value::Boolean(true)),
        NormalizedValue::Bool(true),
    );
    assert_eq!(
        NormalizedValue::from_ast(&ast::Value::Null),
        NormalizedValue::Null,
    );
    assert_eq!(
        NormalizedValue::from_ast(&ast::Value::Enum("ADMIN".to_string())),
        NormalizedValue::String("ADMIN".to_string()),
    );
}

#[test]
fn variables_become_dollar_prefixed_strings() {
    let value = ast::Value::Variable("userId".to_string());
    assert_eq!(
        NormalizedValue::from_ast(&value),
        NormalizedValue::String("$userId".to_string()),
    );
}

#[test]
fn nested_lists_are_not_flattened() {
    let value = ast::Value::List(vec![
        ast::Value::Int(ast::Number::from(1)),
        ast::Value::List(vec![
            ast::Value::Int(ast::Number::from(2)),
            ast::Value::Variable("x".to_string()),
        ]),
    ]);
    assert_eq!(
        NormalizedValue::from_ast(&value),
        NormalizedValue::List(vec![
            NormalizedValue::Int(1),
            NormalizedValue::List(vec![
                NormalizedValue::Int(2),
                NormalizedValue::String("$x".to_string()),
            ]),
        ]),
    );
}

#[test]
fn object_literals_are_serialized_to_json_text() {
    let mut fields = BTreeMap::new();
    fields.insert("limit".to_string(), ast::Value::Int(ast::Number::from(10)));
    fields.insert("after".to_string(), ast::Value::Variable("cursor".to_string()));
    fields.insert("tags".to_string(), ast::Value::List(vec![
        ast::Value::String("a".to_string()),
    ]));
    let value = ast::Value::Object(fields);

    let normalized = NormalizedValue::from_ast(&value);
    assert_eq!(
        normalized.as_str(),
        Some(r#"{"after":"$cursor","limit":10,"tags":["a"]}"#),
    );

    let reparsed: serde_json::Value =
        serde_json::from_str(normalized.as_str().unwrap()).unwrap();
    assert_eq!(reparsed["limit"], serde_json::json!(10));
}

#[test]
fn object_literal_keys_come_out_sorted_not_in_source_order() {
    let result = crate::parse_query(
        "{ search(filter: {zeta: 1, alpha: 2, mid: true}) { id } }",
        crate::QueryVariables::new(),
    ).unwrap();
    let params = result.data()[0].operations()[0].params().unwrap();
    assert_eq!(params[0].kind(), ValueKind::ObjectValue);
    assert_eq!(
        params[0].value().as_str(),
        Some(r#"{"alpha":2,"mid":true,"zeta":1}"#),
    );
}

#[test]
fn normalized_values_serialize_untagged() {
    let value = NormalizedValue::List(vec![
        NormalizedValue::Null,
        NormalizedValue::Bool(false),
        NormalizedValue::Int(3),
        NormalizedValue::String("$v".to_string()),
    ]);
    assert_eq!(
        serde_json::to_value(&value).unwrap(),
        serde_json::json!([null, false, 3, "$v"]),
    );
}

#[test]
fn params_keep_order_and_drop_unnamed_entries() {
    let arguments = vec![
        ("first".to_string(), ast::Value::Int(ast::Number::from(5))),
        (String::new(), ast::Value::Boolean(true)),
        ("filter".to_string(), ast::Value::Enum("ACTIVE".to_string())),
    ];

    let params = Param::list_from_ast(&arguments);
    assert_eq!(params.len(), 2);

    assert_eq!(params[0].name(), "first");
    assert_eq!(params[0].value(), &NormalizedValue::Int(5));
    assert_eq!(params[0].kind(), ValueKind::IntValue);

    assert_eq!(params[1].name(), "filter");
    assert_eq!(params[1].value(), &NormalizedValue::String("ACTIVE".to_string()));
    assert_eq!(params[1].kind(), ValueKind::EnumValue);
}

fn arb_scalar() -> impl Strategy<Value = ast::Value<'static>> {
    prop_oneof![
        any::<i32>().prop_map(|n| ast::Value::Int(ast::Number::from(n))),
        any::<bool>().prop_map(ast::Value::Boolean),
        "[a-z]{0,8}".prop_map(ast::Value::String),
        "[a-z][a-zA-Z0-9]{0,6}".prop_map(ast::Value::Variable),
        Just(ast::Value::Null),
    ]
}

fn arb_value() -> impl Strategy<Value = ast::Value<'static>> {
    arb_scalar().prop_recursive(3, 24, 6, |inner| {
        prop::collection::vec(inner, 0..6).prop_map(ast::Value::List)
    })
}

proptest! {
    #[test]
    fn list_normalization_is_elementwise(values in prop::collection::vec(arb_value(), 0..8)) {
        let normalized = NormalizedValue::from_ast(&ast::Value::List(values.clone()));
        let items = normalized.as_list().expect("lists normalize to lists");

        prop_assert_eq!(items.len(), values.len());
        for (item, value) in items.iter().zip(values.iter()) {
            prop_assert_eq!(item, &NormalizedValue::from_ast(value));
        }
    }
}
