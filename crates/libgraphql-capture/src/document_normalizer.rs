use crate::ast;
use crate::Definition;
use crate::DefinitionKind;
use crate::OperationKind;
use crate::OperationNode;
use thiserror::Error;

const ANONYMOUS_DEFINITION_NAME: &str = "request";

struct DefinitionParts<'ast, 'a> {
    kind: DefinitionKind,
    name: Option<&'ast String>,
    op_kind: Option<OperationKind>,
    selection_set: &'ast ast::SelectionSet<'a>,
}
impl<'ast, 'a> DefinitionParts<'ast, 'a> {
    fn from_ast(def: &'ast ast::Definition<'a>) -> Self {
        use ast::Definition as Def;
        use ast::OperationDefinition as OpDef;
        match def {
            Def::Fragment(frag_def) => Self {
                kind: DefinitionKind::FragmentDefinition,
                name: Some(&frag_def.name),
                op_kind: None,
                selection_set: &frag_def.selection_set,
            },

            Def::Operation(OpDef::SelectionSet(selection_set)) => Self {
                kind: DefinitionKind::OperationDefinition,
                name: None,
                op_kind: Some(OperationKind::Query),
                selection_set,
            },

            Def::Operation(OpDef::Query(query)) => Self {
                kind: DefinitionKind::OperationDefinition,
                name: query.name.as_ref(),
                op_kind: Some(OperationKind::Query),
                selection_set: &query.selection_set,
            },

            Def::Operation(OpDef::Mutation(mutation)) => Self {
                kind: DefinitionKind::OperationDefinition,
                name: mutation.name.as_ref(),
                op_kind: Some(OperationKind::Mutation),
                selection_set: &mutation.selection_set,
            },

            Def::Operation(OpDef::Subscription(subscription)) => Self {
                kind: DefinitionKind::OperationDefinition,
                name: subscription.name.as_ref(),
                op_kind: Some(OperationKind::Subscription),
                selection_set: &subscription.selection_set,
            },
        }
    }

    fn display_name(&self) -> String {
        match (self.name, self.op_kind) {
            (Some(name), _) => name.clone(),
            (None, Some(op_kind)) => op_kind.as_str().to_string(),
            (None, None) => ANONYMOUS_DEFINITION_NAME.to_string(),
        }
    }
}

/// Convert every top-level definition of a parsed document into a
/// [`Definition`], preserving source order.
///
/// Each top-level selection is stamped with the definition's operation type,
/// or with its own selection kind when the definition has none (fragments).
pub fn normalize_document(
    document: &ast::Document<'_>,
) -> Result<Vec<Definition>, NormalizeError> {
    document.definitions.iter().map(|def| {
        let parts = DefinitionParts::from_ast(def);
        let name = parts.display_name();

        if parts.selection_set.items.is_empty() {
            return Err(NormalizeError::EmptySelectionSet {
                definition_name: name,
            });
        }

        let operations =
            parts.selection_set.items.iter()
                .map(|selection| {
                    let mut node = OperationNode::from_ast(selection);
                    node.operation_type = Some(match parts.op_kind {
                        Some(op_kind) => op_kind.as_str().to_string(),
                        None => node.kind.as_str().to_string(),
                    });
                    node
                })
                .collect();

        Ok(Definition {
            name,
            kind: parts.kind,
            operations,
        })
    }).collect()
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum NormalizeError {
    #[error("Definition `{definition_name}` has no selection set")]
    EmptySelectionSet {
        definition_name: String,
    },
}
