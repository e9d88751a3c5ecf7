use crate::ast;
use serde::Serialize;

/// A display-oriented rendition of a GraphQL argument value.
///
/// Scalars keep their literal payload, lists stay nested, variable references
/// become `$name` strings, and object literals are flattened into their JSON
/// text so that renderers only ever deal with scalars and lists.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum NormalizedValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    List(Vec<NormalizedValue>),
}
impl NormalizedValue {
    pub fn as_list(&self) -> Option<&[NormalizedValue]> {
        if let Self::List(values) = self {
            Some(values.as_slice())
        } else {
            None
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        if let Self::String(str) = self {
            Some(str.as_str())
        } else {
            None
        }
    }

    /// Normalize a single grammar value. Never fails; kinds without a
    /// meaningful literal payload surface as [`NormalizedValue::Null`].
    ///
    /// Object literals become their JSON text with keys in sorted order, not
    /// source order: `{z: 1, a: 2}` renders as `{"a":2,"z":1}`.
    pub fn from_ast(ast_value: &ast::Value<'_>) -> Self {
        match ast_value {
            ast::Value::List(values) =>
                Self::List(values.iter().map(Self::from_ast).collect()),

            ast::Value::Variable(var_name) =>
                Self::String(format!("${var_name}")),

            ast::Value::Object(entries) => {
                let fields: serde_json::Map<String, serde_json::Value> =
                    entries.iter()
                        .map(|(key, value)| (key.clone(), Self::from_ast(value).to_json()))
                        .collect();
                Self::String(serde_json::Value::Object(fields).to_string())
            },

            ast::Value::Int(number) =>
                number.as_i64().map_or(Self::Null, Self::Int),

            ast::Value::Float(value) =>
                Self::Float(*value),

            ast::Value::String(value) =>
                Self::String(value.clone()),

            ast::Value::Boolean(value) =>
                Self::Bool(*value),

            ast::Value::Enum(value) =>
                Self::String(value.clone()),

            ast::Value::Null =>
                Self::Null,
        }
    }

    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Self::Null => serde_json::Value::Null,
            Self::Bool(value) => serde_json::Value::Bool(*value),
            Self::Int(value) => serde_json::Value::from(*value),
            // Non-finite floats have no JSON form and become `null`.
            Self::Float(value) => serde_json::Value::from(*value),
            Self::String(value) => serde_json::Value::String(value.clone()),
            Self::List(values) =>
                serde_json::Value::Array(values.iter().map(Self::to_json).collect()),
        }
    }
}
