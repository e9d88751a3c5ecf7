use crate::parse_query;
use crate::ParseResult;
use crate::QueryParseError;
use serde::Serialize;
use thiserror::Error;

/// Variables sent alongside a query.
///
/// Usually an object keyed by variable name, but whatever JSON value the
/// client sent is kept as-is (some clients send `[]` for "no variables").
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(transparent)]
pub struct QueryVariables(serde_json::Value);
impl QueryVariables {
    /// An empty variables object.
    pub fn new() -> Self {
        Self(serde_json::Value::Object(serde_json::Map::new()))
    }

    pub fn as_json(&self) -> &serde_json::Value {
        &self.0
    }

    pub fn as_object(&self) -> Option<&serde_json::Map<String, serde_json::Value>> {
        self.0.as_object()
    }

    /// Look up one variable by name. Always `None` for non-object variables.
    pub fn get(&self, name: &str) -> Option<&serde_json::Value> {
        self.as_object().and_then(|vars| vars.get(name))
    }

    /// True for an empty object.
    pub fn is_empty(&self) -> bool {
        self.as_object().is_some_and(serde_json::Map::is_empty)
    }

    pub fn into_json(self) -> serde_json::Value {
        self.0
    }
}
impl Default for QueryVariables {
    fn default() -> Self {
        Self::new()
    }
}
impl From<serde_json::Value> for QueryVariables {
    fn from(value: serde_json::Value) -> Self {
        Self(value)
    }
}
impl From<serde_json::Map<String, serde_json::Value>> for QueryVariables {
    fn from(map: serde_json::Map<String, serde_json::Value>) -> Self {
        Self(serde_json::Value::Object(map))
    }
}

/// One logical query found in a captured request body, before parsing.
#[derive(Clone, Debug, PartialEq)]
pub struct RawQuery {
    pub text: String,
    pub variables: QueryVariables,
}
impl RawQuery {
    pub fn new(text: impl Into<String>, variables: QueryVariables) -> Self {
        Self {
            text: text.into(),
            variables,
        }
    }

    pub fn parse(&self) -> Result<ParseResult, QueryParseError> {
        parse_query(&self.text, self.variables.clone())
    }
}

/// Turn the `variables` value captured with a request into [`QueryVariables`].
///
/// | captured value          | result                      |
/// |-------------------------|-----------------------------|
/// | absent or `null`        | empty object                |
/// | `""`                    | empty object                |
/// | any other string        | its decoded JSON value      |
/// | any other value         | the value itself            |
///
/// A string that decodes to `null` is treated as absent.
pub fn normalize_variables(
    variables: Option<&serde_json::Value>,
) -> Result<QueryVariables, VariablesError> {
    use serde_json::Value;
    match variables {
        None | Some(Value::Null) => Ok(QueryVariables::new()),

        Some(Value::String(encoded)) if encoded.is_empty() => Ok(QueryVariables::new()),

        Some(Value::String(encoded)) => Ok(match serde_json::from_str::<Value>(encoded)? {
            Value::Null => QueryVariables::new(),
            decoded => QueryVariables::from(decoded),
        }),

        Some(other) => Ok(QueryVariables::from(other.clone())),
    }
}

#[derive(Debug, Error)]
pub enum VariablesError {
    #[error("Query variables are not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
}
