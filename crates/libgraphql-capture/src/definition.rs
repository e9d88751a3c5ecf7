use crate::OperationNode;
use serde::Serialize;

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize)]
pub enum DefinitionKind {
    FragmentDefinition,
    OperationDefinition,
}
impl DefinitionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FragmentDefinition => "FragmentDefinition",
            Self::OperationDefinition => "OperationDefinition",
        }
    }
}

/// A normalized top-level definition of an executable document.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Definition {
    pub(crate) name: String,
    pub(crate) kind: DefinitionKind,
    pub(crate) operations: Vec<OperationNode>,
}
impl Definition {
    pub fn is_fragment(&self) -> bool {
        self.kind == DefinitionKind::FragmentDefinition
    }

    pub fn kind(&self) -> DefinitionKind {
        self.kind
    }

    /// The declared name of the definition, falling back to its operation
    /// type (e.g. `query`) and finally to `request`.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn operations(&self) -> &[OperationNode] {
        self.operations.as_slice()
    }
}
