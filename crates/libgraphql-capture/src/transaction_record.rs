use crate::HttpRequest;
use std::future::Future;
use thiserror::Error;

/// Response metadata as captured. Opaque to this crate; it is handed through
/// to [`DisplayRecord`](crate::DisplayRecord)s untouched.
pub type ResponseMeta = serde_json::Value;

/// One captured request/response pair.
///
/// Implementations are read-only views over a capture source. The response
/// body is the only thing fetched asynchronously.
pub trait TransactionRecord {
    fn request(&self) -> &HttpRequest;

    fn response(&self) -> &ResponseMeta;

    /// Retrieve the response body text.
    fn content(&self) -> impl Future<Output = Result<String, ResponseContentError>> + Send;
}

#[derive(Debug, Error)]
pub enum ResponseContentError {
    #[error("Response body is not valid base64: {0}")]
    Base64Decode(#[from] base64::DecodeError),

    #[error("Response body is not valid UTF-8: {0}")]
    Utf8Decode(#[from] std::string::FromUtf8Error),

    #[error("Response body is unavailable: {0}")]
    Unavailable(String),
}
