use crate::normalize_variables;
use crate::ContentType;
use crate::HttpRequest;
use crate::QueryVariables;
use crate::RawQuery;
use crate::VariablesError;
use thiserror::Error;

type Result<T> = std::result::Result<T, ExtractError>;

/// Pull every (query, variables) pair out of a request that has already been
/// classified as GraphQL.
///
/// JSON bodies may be a single request object or a batch (array) of them;
/// the returned queries keep batch order so they can later be matched to a
/// batched response by position.
pub fn extract_queries(request: &HttpRequest) -> Result<Vec<RawQuery>> {
    if request.has_content_type(ContentType::GraphQL) {
        let text = request.body_text().unwrap_or_default();
        let variables = normalize_variables(
            request.post_data.as_ref().and_then(|post_data| post_data.variables.as_ref()),
        ).map_err(|err| ExtractError::invalid_variables(request, 0, err))?;
        return Ok(vec![RawQuery::new(text, variables)]);
    }

    if request.has_content_type(ContentType::FormUrlEncoded) {
        let param = request.form_param("query")
            .ok_or_else(|| ExtractError::MissingFormQuery {
                url: request.url.clone(),
            })?;
        let text = param.decoded_value()
            .map_err(|err| ExtractError::InvalidFormQuery {
                url: request.url.clone(),
                err,
            })?;
        return Ok(vec![RawQuery::new(text, QueryVariables::new())]);
    }

    let body = match request.body_text() {
        Some(text) if !text.trim().is_empty() =>
            serde_json::from_str::<serde_json::Value>(text)
                .map_err(|err| ExtractError::InvalidBody {
                    url: request.url.clone(),
                    err,
                })?,
        _ => serde_json::Value::Object(serde_json::Map::new()),
    };

    let batch = match body {
        serde_json::Value::Array(items) => items,
        single => vec![single],
    };

    batch.iter().enumerate().map(|(batch_index, item)| {
        let variables = normalize_variables(item.get("variables"))
            .map_err(|err| ExtractError::invalid_variables(request, batch_index, err))?;
        Ok(RawQuery::new(batch_item_query(item), variables))
    }).collect()
}

/// `graphQuery` takes precedence over `query` when both are present.
fn batch_item_query(item: &serde_json::Value) -> String {
    let non_empty_str = |key: &str| {
        item.get(key)
            .and_then(serde_json::Value::as_str)
            .filter(|text| !text.is_empty())
    };

    match non_empty_str("graphQuery").or_else(|| non_empty_str("query")) {
        Some(text) => text.to_string(),
        None => {
            log::debug!("Batch item carries no query text: {item}");
            String::new()
        },
    }
}

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Internal Error Parsing: {url}. Message: request body is not valid JSON: {err}")]
    InvalidBody {
        url: String,
        err: serde_json::Error,
    },

    #[error("Internal Error Parsing: {url}. Message: `query` form parameter is not valid URL-encoded UTF-8: {err}")]
    InvalidFormQuery {
        url: String,
        err: std::string::FromUtf8Error,
    },

    #[error("Internal Error Parsing: {url}. Message: variables of batch item {batch_index}: {err}")]
    InvalidVariables {
        url: String,
        batch_index: usize,
        err: VariablesError,
    },

    #[error("Internal Error Parsing: {url}. Message: no `query` form parameter")]
    MissingFormQuery {
        url: String,
    },
}
impl ExtractError {
    fn invalid_variables(
        request: &HttpRequest,
        batch_index: usize,
        err: VariablesError,
    ) -> Self {
        Self::InvalidVariables {
            url: request.url.clone(),
            batch_index,
            err,
        }
    }
}
