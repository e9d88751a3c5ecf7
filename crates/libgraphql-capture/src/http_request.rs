use crate::ContentType;
use serde::Deserialize;
use serde::Serialize;

/// The request half of a captured transaction. Field names follow the HAR 1.2
/// `request` object so captures deserialize directly.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HttpRequest {
    pub method: String,
    pub url: String,
    #[serde(default)]
    pub headers: Vec<Header>,
    #[serde(default)]
    pub post_data: Option<PostData>,
}
impl HttpRequest {
    /// Whether any `Content-Type` header names the given media type, ignoring
    /// case and any `;`-delimited parameters.
    pub fn has_content_type(&self, content_type: ContentType) -> bool {
        self.headers.iter().any(|header| {
            header.name.eq_ignore_ascii_case("content-type")
                && ContentType::media_type_of(&header.value)
                    .eq_ignore_ascii_case(content_type.as_str())
        })
    }

    pub fn is_preflight(&self) -> bool {
        self.method.eq_ignore_ascii_case("OPTIONS")
    }

    /// The raw request body text, if any was captured.
    pub fn body_text(&self) -> Option<&str> {
        self.post_data.as_ref().and_then(|post_data| post_data.text.as_deref())
    }

    /// The first form parameter with the given name.
    pub fn form_param(&self, name: &str) -> Option<&FormParam> {
        self.post_data.as_ref()
            .and_then(|post_data| post_data.params.iter().find(|param| param.name == name))
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Header {
    pub name: String,
    pub value: String,
}
impl Header {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostData {
    #[serde(default)]
    pub mime_type: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub params: Vec<FormParam>,
    /// Variables some capture sources attach next to an
    /// `application/graphql` body.
    #[serde(default)]
    pub variables: Option<serde_json::Value>,
}

/// A form parameter as captured. The value is still URL-encoded.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct FormParam {
    pub name: String,
    #[serde(default)]
    pub value: String,
}
impl FormParam {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    pub fn decoded_value(&self) -> Result<String, std::string::FromUtf8Error> {
        urlencoding::decode(&self.value).map(|decoded| decoded.into_owned())
    }
}
