use crate::ParseResult;
use crate::QueryParseError;
use crate::ResponseMeta;
use serde::Serialize;
use std::sync::Arc;

/// The final, renderer-facing unit: one parsed (or failed) query alongside
/// the transaction it came from and its slice of the response body.
#[derive(Clone, Debug, PartialEq)]
pub struct DisplayRecord {
    pub(crate) url: String,
    pub(crate) response: Arc<ResponseMeta>,
    pub(crate) response_body: Option<Arc<serde_json::Value>>,
    pub(crate) query: Result<ParseResult, QueryParseError>,
}
impl DisplayRecord {
    pub fn query(&self) -> Result<&ParseResult, &QueryParseError> {
        self.query.as_ref()
    }

    pub fn response(&self) -> &ResponseMeta {
        &self.response
    }

    /// The response payload that answers this query: the element at the
    /// query's batch position for batched responses, the whole body
    /// otherwise, or `None` if the body could not be read or parsed.
    pub fn response_body(&self) -> Option<&serde_json::Value> {
        self.response_body.as_deref()
    }

    pub fn url(&self) -> &str {
        self.url.as_str()
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DisplayRecordView<'a> {
    url: &'a str,
    response: &'a ResponseMeta,
    response_body: Option<&'a serde_json::Value>,
    #[serde(flatten)]
    query: QueryView<'a>,
}

#[derive(Serialize)]
#[serde(untagged)]
enum QueryView<'a> {
    Parsed(&'a ParseResult),
    Failed {
        error: String,
    },
}

/// Serializes as the transaction fields merged with the [`ParseResult`]
/// fields, or with a single `error` message when the query failed to parse.
impl Serialize for DisplayRecord {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        DisplayRecordView {
            url: &self.url,
            response: &self.response,
            response_body: self.response_body.as_deref(),
            query: match &self.query {
                Ok(parse_result) => QueryView::Parsed(parse_result),
                Err(err) => QueryView::Failed {
                    error: err.to_string(),
                },
            },
        }.serialize(serializer)
    }
}
