use crate::HttpRequest;
use crate::ResponseContentError;
use crate::ResponseMeta;
use crate::TransactionRecord;
use base64::Engine as _;
use serde::Deserialize;
use std::future::Future;

/// One `log.entries[]` item of a HAR file.
///
/// The response is kept as raw JSON: only `response.content` is interpreted,
/// and only when the body is requested.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HarEntry {
    #[serde(default)]
    pub started_date_time: Option<String>,
    pub request: HttpRequest,
    #[serde(default)]
    pub response: ResponseMeta,
}
impl HarEntry {
    /// Decode `response.content.text`, honoring `encoding: "base64"`. A
    /// missing body reads as empty.
    pub fn response_text(&self) -> Result<String, ResponseContentError> {
        let content = self.response.get("content");
        let text =
            content.and_then(|content| content.get("text"))
                .and_then(serde_json::Value::as_str)
                .unwrap_or_default();
        let encoding =
            content.and_then(|content| content.get("encoding"))
                .and_then(serde_json::Value::as_str);

        match encoding {
            Some(encoding) if encoding.eq_ignore_ascii_case("base64") => {
                let bytes = base64::engine::general_purpose::STANDARD.decode(text)?;
                Ok(String::from_utf8(bytes)?)
            },
            _ => Ok(text.to_string()),
        }
    }
}
impl TransactionRecord for HarEntry {
    fn request(&self) -> &HttpRequest {
        &self.request
    }

    fn response(&self) -> &ResponseMeta {
        &self.response
    }

    fn content(&self) -> impl Future<Output = Result<String, ResponseContentError>> + Send {
        std::future::ready(self.response_text())
    }
}
