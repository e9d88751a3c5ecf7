use crate::ast;
use crate::NormalizedValue;
use crate::ValueKind;
use serde::Serialize;

/// One named argument passed to a field, with its value normalized for
/// display.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Param {
    pub(crate) name: String,
    pub(crate) value: NormalizedValue,
    pub(crate) kind: ValueKind,
}
impl Param {
    pub fn kind(&self) -> ValueKind {
        self.kind
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn value(&self) -> &NormalizedValue {
        &self.value
    }

    /// Normalize an argument list, preserving source order. Entries without a
    /// name are dropped.
    pub fn list_from_ast(arguments: &[(String, ast::Value<'_>)]) -> Vec<Param> {
        arguments.iter()
            .filter(|(name, _)| !name.is_empty())
            .map(|(name, value)| Param {
                name: name.clone(),
                value: NormalizedValue::from_ast(value),
                kind: ValueKind::of(value),
            })
            .collect()
    }
}
