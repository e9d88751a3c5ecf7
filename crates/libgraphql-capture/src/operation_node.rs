use crate::ast;
use crate::Param;
use serde::Serialize;

/// The grammar kind of the selection an [`OperationNode`] was built from.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize)]
pub enum SelectionKind {
    Field,
    FragmentSpread,
    InlineFragment,
}
impl SelectionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Field => "Field",
            Self::FragmentSpread => "FragmentSpread",
            Self::InlineFragment => "InlineFragment",
        }
    }
}
impl std::fmt::Display for SelectionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One node of a normalized selection tree: a field, fragment spread, or
/// inline fragment along with its arguments and nested selections.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct OperationNode {
    pub(crate) kind: SelectionKind,
    pub(crate) name: String,
    pub(crate) params: Option<Vec<Param>>,
    pub(crate) fields: Option<Vec<OperationNode>>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub(crate) operation_type: Option<String>,
}
impl OperationNode {
    /// Nested selections, or `None` when the selection has no selection set.
    pub fn fields(&self) -> Option<&[OperationNode]> {
        self.fields.as_deref()
    }

    pub fn kind(&self) -> SelectionKind {
        self.kind
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// The type stamped onto top-level nodes of a definition: the declared
    /// operation type, or the node's own kind when there is none.
    pub fn operation_type(&self) -> Option<&str> {
        self.operation_type.as_deref()
    }

    /// Arguments, or `None` when the selection carries no argument list.
    pub fn params(&self) -> Option<&[Param]> {
        self.params.as_deref()
    }

    /// Number of nodes in the tree rooted at this node (including itself).
    pub fn node_count(&self) -> usize {
        1 + self.fields.iter()
            .flatten()
            .map(OperationNode::node_count)
            .sum::<usize>()
    }

    pub fn from_ast(selection: &ast::Selection<'_>) -> Self {
        match selection {
            ast::Selection::Field(field) => Self {
                kind: SelectionKind::Field,
                name: match &field.alias {
                    Some(alias) => format!("{alias}: {}", field.name),
                    None => field.name.clone(),
                },
                params: (!field.arguments.is_empty())
                    .then(|| Param::list_from_ast(&field.arguments)),
                fields: Self::fields_from_ast(&field.selection_set),
                operation_type: None,
            },

            ast::Selection::FragmentSpread(spread) => Self {
                kind: SelectionKind::FragmentSpread,
                name: spread.fragment_name.clone(),
                params: None,
                fields: None,
                operation_type: None,
            },

            ast::Selection::InlineFragment(inline_frag) => Self {
                kind: SelectionKind::InlineFragment,
                name: match &inline_frag.type_condition {
                    Some(ast::TypeCondition::On(type_name)) =>
                        format!("InlineFragment if {type_name}"),
                    None => "Anonymous".to_string(),
                },
                params: None,
                fields: Self::fields_from_ast(&inline_frag.selection_set),
                operation_type: None,
            },
        }
    }

    fn fields_from_ast(selection_set: &ast::SelectionSet<'_>) -> Option<Vec<Self>> {
        if selection_set.items.is_empty() {
            return None;
        }
        Some(selection_set.items.iter().map(Self::from_ast).collect())
    }
}
