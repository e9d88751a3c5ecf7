use crate::ast;
use crate::NormalizedValue;
use crate::OperationNode;
use crate::SelectionKind;
use crate::ValueKind;

fn top_level_selections(query: &str) -> Vec<OperationNode> {
    let document = ast::parse(query).unwrap();
    let ast::Definition::Operation(op_def) = &document.definitions[0] else {
        panic!("expected an operation definition");
    };
    let selection_set = match op_def {
        ast::OperationDefinition::SelectionSet(selection_set) => selection_set,
        ast::OperationDefinition::Query(query) => &query.selection_set,
        ast::OperationDefinition::Mutation(mutation) => &mutation.selection_set,
        ast::OperationDefinition::Subscription(sub) => &sub.selection_set,
    };
    selection_set.items.iter().map(OperationNode::from_ast).collect()
}

#[test]
fn plain_field_has_no_params_or_fields() {
    let nodes = top_level_selections("{ ping }");
    assert_eq!(nodes.len(), 1);
    assert_eq!(nodes[0].kind(), SelectionKind::Field);
    assert_eq!(nodes[0].name(), "ping");
    assert_eq!(nodes[0].params(), None);
    assert_eq!(nodes[0].fields(), None);
    assert_eq!(nodes[0].operation_type(), None);
}

#[test]
fn aliased_field_is_named_alias_colon_name() {
    let nodes = top_level_selections("{ me: viewer { id } }");
    assert_eq!(nodes[0].name(), "me: viewer");
    assert_eq!(nodes[0].fields().map(|fields| fields.len()), Some(1));
}

#[test]
fn arguments_and_nested_fields_are_built_recursively() {
    let nodes = top_level_selections(r#"
        {
          user(id: $id, role: ADMIN) {
            friends(first: 10) { name }
          }
        }
    "#);

    let user = &nodes[0];
    let params = user.params().unwrap();
    assert_eq!(params.len(), 2);
    assert_eq!(params[0].name(), "id");
    assert_eq!(params[0].value(), &NormalizedValue::String("$id".to_string()));
    assert_eq!(params[0].kind(), ValueKind::Variable);
    assert_eq!(params[1].kind(), ValueKind::EnumValue);

    let friends = &user.fields().unwrap()[0];
    assert_eq!(friends.name(), "friends");
    assert_eq!(friends.params().unwrap()[0].value(), &NormalizedValue::Int(10));

    let name = &friends.fields().unwrap()[0];
    assert_eq!(name.name(), "name");
    assert_eq!(name.fields(), None);
}

#[test]
fn fragment_spreads_are_leaves_named_after_the_fragment() {
    let nodes = top_level_selections("{ user { ...UserFields } }");
    let spread = &nodes[0].fields().unwrap()[0];
    assert_eq!(spread.kind(), SelectionKind::FragmentSpread);
    assert_eq!(spread.name(), "UserFields");
    assert_eq!(spread.params(), None);
    assert_eq!(spread.fields(), None);
}

#[test]
fn inline_fragments_are_named_after_their_type_condition() {
    let nodes = top_level_selections(r#"
        {
          node {
            ... on User { name }
            ... @include(if: true) { id }
          }
        }
    "#);
    let children = nodes[0].fields().unwrap();

    assert_eq!(children[0].kind(), SelectionKind::InlineFragment);
    assert_eq!(children[0].name(), "InlineFragment if User");
    assert_eq!(children[0].params(), None);
    assert_eq!(children[0].fields().unwrap()[0].name(), "name");

    assert_eq!(children[1].kind(), SelectionKind::InlineFragment);
    assert_eq!(children[1].name(), "Anonymous");
}

#[test]
fn node_count_includes_every_descendant() {
    let nodes = top_level_selections("{ a { b c { d } } e }");
    let total: usize = nodes.iter().map(OperationNode::node_count).sum();
    assert_eq!(total, 5);
}

#[test]
fn nodes_serialize_with_null_params_and_fields() {
    let nodes = top_level_selections("{ ping }");
    assert_eq!(
        serde_json::to_value(&nodes[0]).unwrap(),
        serde_json::json!({
            "kind": "Field",
            "name": "ping",
            "params": null,
            "fields": null,
        }),
    );
}
