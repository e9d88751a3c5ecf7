/// The request media types that can carry a GraphQL operation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ContentType {
    FormUrlEncoded,
    GraphQL,
    Json,
}
impl ContentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FormUrlEncoded => "application/x-www-form-urlencoded",
            Self::GraphQL => "application/graphql",
            Self::Json => "application/json",
        }
    }

    /// Strip any parameters (`; charset=utf-8`, ...) from a `Content-Type`
    /// header value.
    pub(crate) fn media_type_of(header_value: &str) -> &str {
        header_value.split(';').next().unwrap_or_default().trim()
    }
}
