use crate::ClassifierConfig;
use crate::ContentType;
use crate::HttpRequest;
use regex::Regex;
use thiserror::Error;

/// Decides whether a captured request carries a GraphQL operation.
#[derive(Clone, Debug, Default)]
pub struct TransactionClassifier {
    url_patterns: Vec<Regex>,
}
impl TransactionClassifier {
    /// Compile the given URL patterns, failing on the first invalid one.
    pub fn new<S: AsRef<str>>(
        url_patterns: impl IntoIterator<Item = S>,
    ) -> Result<Self, PatternCompileError> {
        let url_patterns =
            url_patterns.into_iter()
                .map(|pattern| {
                    let pattern = pattern.as_ref();
                    Regex::new(pattern).map_err(|err| PatternCompileError {
                        pattern: pattern.to_string(),
                        err,
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { url_patterns })
    }

    pub fn from_config(config: &ClassifierConfig) -> Result<Self, PatternCompileError> {
        Self::new(&config.url_patterns)
    }

    /// Like [`new`](Self::new), but invalid patterns are logged and skipped.
    pub fn lenient<S: AsRef<str>>(url_patterns: impl IntoIterator<Item = S>) -> Self {
        let url_patterns =
            url_patterns.into_iter()
                .filter_map(|pattern| match Regex::new(pattern.as_ref()) {
                    Ok(regex) => Some(regex),
                    Err(err) => {
                        log::warn!(
                            "Ignoring invalid URL pattern `{}`: {err}",
                            pattern.as_ref(),
                        );
                        None
                    },
                })
                .collect();
        Self { url_patterns }
    }

    pub fn url_patterns(&self) -> impl Iterator<Item = &str> {
        self.url_patterns.iter().map(Regex::as_str)
    }

    /// Never fails: anything ambiguous or malformed is classified as
    /// not-GraphQL.
    pub fn is_graphql(&self, request: &HttpRequest) -> bool {
        match self.classify(request) {
            Ok(is_graphql) => is_graphql,
            Err(err) => {
                log::debug!(
                    "Treating {} {} as non-GraphQL: {err}",
                    request.method,
                    request.url,
                );
                false
            },
        }
    }

    fn classify(&self, request: &HttpRequest) -> Result<bool, ClassifyError> {
        if request.has_content_type(ContentType::GraphQL) {
            return Ok(true);
        }

        if !request.is_preflight()
            && self.url_patterns.iter().any(|regex| regex.is_match(&request.url)) {
            return Ok(true);
        }

        if request.has_content_type(ContentType::Json) {
            let body = match request.body_text() {
                Some(text) if !text.trim().is_empty() =>
                    serde_json::from_str::<serde_json::Value>(text)?,
                _ => return Ok(false),
            };
            let candidate = match &body {
                serde_json::Value::Array(items) => items.first(),
                other => Some(other),
            };
            return Ok(candidate
                .and_then(|item| item.get("query"))
                .is_some_and(query_is_set));
        }

        if request.has_content_type(ContentType::FormUrlEncoded)
            && let Some(param) = request.form_param("query") {
            let query = param.decoded_value()?;
            return Ok(!query.is_empty());
        }

        Ok(false)
    }
}

/// `null`, `false`, `0` and `""` all count as no query.
fn query_is_set(query: &serde_json::Value) -> bool {
    use serde_json::Value;
    match query {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64() != Some(0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[derive(Debug, Error)]
#[error("Invalid URL pattern `{pattern}`: {err}")]
pub struct PatternCompileError {
    pub pattern: String,
    #[source]
    pub err: regex::Error,
}

#[derive(Debug, Error)]
enum ClassifyError {
    #[error("request body is not valid JSON: {0}")]
    InvalidJsonBody(#[from] serde_json::Error),

    #[error("`query` form parameter is not valid URL-encoded UTF-8: {0}")]
    InvalidFormQuery(#[from] std::string::FromUtf8Error),
}
