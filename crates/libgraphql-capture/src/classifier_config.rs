use serde::Deserialize;
use std::path::Path;
use std::path::PathBuf;
use thiserror::Error;

/// Caller-supplied settings for a
/// [`TransactionClassifier`](crate::TransactionClassifier).
///
/// ```json
/// { "urlPatterns": ["/graphql$", "^https://api\\.example\\.com/gql"] }
/// ```
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ClassifierConfig {
    /// Regular expressions matched against request URLs. A match marks any
    /// non-preflight request as GraphQL regardless of its body.
    #[serde(default)]
    pub url_patterns: Vec<String>,
}
impl ClassifierConfig {
    pub fn from_file(file_path: impl AsRef<Path>) -> Result<Self, ConfigLoadError> {
        let file_path = file_path.as_ref();
        let content = std::fs::read_to_string(file_path)
            .map_err(|err| ConfigLoadError::FileReadError {
                file_path: file_path.to_path_buf(),
                err,
            })?;
        Self::from_str(&content).map_err(|err| ConfigLoadError::ParseError {
            file_path: file_path.to_path_buf(),
            err,
        })
    }

    pub fn from_str(content: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }

    /// Append extra URL patterns after the configured ones.
    pub fn with_url_patterns(mut self, patterns: impl IntoIterator<Item = String>) -> Self {
        self.url_patterns.extend(patterns);
        self
    }
}

#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("Failed to read config file {file_path:?}: {err}")]
    FileReadError {
        file_path: PathBuf,
        err: std::io::Error,
    },

    #[error("Failed to parse config file {file_path:?}: {err}")]
    ParseError {
        file_path: PathBuf,
        err: serde_json::Error,
    },
}
