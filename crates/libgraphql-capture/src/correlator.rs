use crate::DisplayRecord;
use crate::ParseResult;
use crate::QueryParseError;
use crate::TransactionRecord;
use std::sync::Arc;

enum ResponseBody {
    Batched(Vec<Arc<serde_json::Value>>),
    Single(Arc<serde_json::Value>),
    Unavailable,
}
impl ResponseBody {
    fn parse(text: &str) -> Result<Self, serde_json::Error> {
        if text.trim().is_empty() {
            return Ok(Self::Single(Arc::new(serde_json::Value::Object(serde_json::Map::new()))));
        }
        Ok(match serde_json::from_str::<serde_json::Value>(text)? {
            serde_json::Value::Array(items) =>
                Self::Batched(items.into_iter().map(Arc::new).collect()),
            single => Self::Single(Arc::new(single)),
        })
    }

    fn slice_for(&self, batch_index: usize) -> Option<Arc<serde_json::Value>> {
        match self {
            Self::Batched(items) => items.get(batch_index).cloned(),
            Self::Single(body) => Some(Arc::clone(body)),
            Self::Unavailable => None,
        }
    }
}

/// Fetch the transaction's response body and pair it with each parsed query.
///
/// Queries and batched responses are matched purely by position: query `i`
/// gets element `i` of an array body. A non-array body is shared by every
/// query. Failing to read or parse the body is logged, and records are still
/// produced without a response body.
pub async fn correlate_responses<R: TransactionRecord>(
    record: &R,
    parsed_queries: Vec<Result<ParseResult, QueryParseError>>,
) -> Vec<DisplayRecord> {
    let request = record.request();
    let response_body = match record.content().await {
        Ok(text) => ResponseBody::parse(&text).unwrap_or_else(|err| {
            log::warn!("Failed to parse response body of {}: {err}", request.url);
            ResponseBody::Unavailable
        }),
        Err(err) => {
            log::warn!("Failed to retrieve response body of {}: {err}", request.url);
            ResponseBody::Unavailable
        },
    };

    if let ResponseBody::Batched(items) = &response_body
        && items.len() != parsed_queries.len() {
        log::debug!(
            "Batched response of {} has {} entries for {} queries.",
            request.url,
            items.len(),
            parsed_queries.len(),
        );
    }

    let response = Arc::new(record.response().clone());
    parsed_queries.into_iter()
        .enumerate()
        .map(|(batch_index, query)| DisplayRecord {
            url: request.url.clone(),
            response: Arc::clone(&response),
            response_body: response_body.slice_for(batch_index),
            query,
        })
        .collect()
}
