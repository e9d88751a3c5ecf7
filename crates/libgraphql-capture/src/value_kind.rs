use crate::ast;
use serde::Serialize;

/// The grammar-level kind tag of an argument value, named the way GraphQL
/// tooling conventionally names AST value nodes.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize)]
pub enum ValueKind {
    BooleanValue,
    EnumValue,
    FloatValue,
    IntValue,
    ListValue,
    NullValue,
    ObjectValue,
    StringValue,
    Variable,
}
impl ValueKind {
    pub fn of(value: &ast::Value<'_>) -> Self {
        match value {
            ast::Value::Variable(_) => Self::Variable,
            ast::Value::Int(_) => Self::IntValue,
            ast::Value::Float(_) => Self::FloatValue,
            ast::Value::String(_) => Self::StringValue,
            ast::Value::Boolean(_) => Self::BooleanValue,
            ast::Value::Null => Self::NullValue,
            ast::Value::Enum(_) => Self::EnumValue,
            ast::Value::List(_) => Self::ListValue,
            ast::Value::Object(_) => Self::ObjectValue,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BooleanValue => "BooleanValue",
            Self::EnumValue => "EnumValue",
            Self::FloatValue => "FloatValue",
            Self::IntValue => "IntValue",
            Self::ListValue => "ListValue",
            Self::NullValue => "NullValue",
            Self::ObjectValue => "ObjectValue",
            Self::StringValue => "StringValue",
            Self::Variable => "Variable",
        }
    }
}
impl std::fmt::Display for ValueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
