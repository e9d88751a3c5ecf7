use crate::ast;
use crate::normalize_document;
use crate::ParseResult;
use crate::QueryVariables;
use thiserror::Error;
use uuid::Uuid;

type Result<T> = std::result::Result<T, QueryParseError>;

/// Parse GraphQL query text and normalize it into a [`ParseResult`].
///
/// Failures are returned rather than raised so that one broken query in a
/// batch never prevents its siblings from being displayed.
pub fn parse_query(query: &str, variables: QueryVariables) -> Result<ParseResult> {
    let document = ast::parse(query).map_err(|err| {
        log::debug!("GraphQL syntax error in captured query: {err}");
        QueryParseError::Syntax {
            query: query.to_string(),
            message: err.to_string(),
        }
    })?;

    let data = normalize_document(&document).map_err(|err| {
        log::warn!("Failed to normalize captured query: {err}");
        QueryParseError::Internal {
            query: query.to_string(),
            message: err.to_string(),
        }
    })?;

    let fragments =
        data.iter()
            .filter(|def| def.is_fragment())
            .cloned()
            .collect();

    Ok(ParseResult {
        id: Uuid::now_v7().to_string(),
        bare_query: query.to_string(),
        query_variables: variables,
        fragments,
        data,
        raw_parse: format!("{document:?}"),
    })
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum QueryParseError {
    #[error("GraphQL Error Parsing: {query}. Message: {message}")]
    Syntax {
        query: String,
        message: String,
    },

    #[error("Internal Error Parsing: {query}. Message: {message}")]
    Internal {
        query: String,
        message: String,
    },
}
impl QueryParseError {
    pub fn message(&self) -> &str {
        match self {
            Self::Syntax { message, .. } | Self::Internal { message, .. } => message,
        }
    }

    pub fn query(&self) -> &str {
        match self {
            Self::Syntax { query, .. } | Self::Internal { query, .. } => query,
        }
    }
}
