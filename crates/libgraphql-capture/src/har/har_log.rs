use crate::har::HarEntry;
use serde::Deserialize;
use std::path::Path;
use std::path::PathBuf;
use thiserror::Error;

type Result<T> = std::result::Result<T, HarLoadError>;

#[derive(Deserialize)]
struct HarFile {
    log: HarLog,
}

/// The `log` object of a HAR file: the captured entries in capture order.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct HarLog {
    #[serde(default)]
    pub entries: Vec<HarEntry>,
}
impl HarLog {
    pub fn from_file(file_path: impl AsRef<Path>) -> Result<Self> {
        let file_path = file_path.as_ref();
        if !file_path.is_file() {
            return Err(HarLoadError::PathIsNotAFile(file_path.to_path_buf()));
        }

        let bytes = std::fs::read(file_path)
            .map_err(|err| HarLoadError::FileReadError {
                file_path: file_path.to_path_buf(),
                err,
            })?;

        let content = String::from_utf8(bytes)
            .map_err(|err| HarLoadError::FileDecodeError {
                file_path: file_path.to_path_buf(),
                err,
            })?;

        Self::from_str(&content).map_err(|err| HarLoadError::ParseError {
            file_path: file_path.to_path_buf(),
            err,
        })
    }

    /// Parse the JSON text of a whole HAR file.
    pub fn from_str(content: &str) -> std::result::Result<Self, serde_json::Error> {
        serde_json::from_str::<HarFile>(content).map(|har| har.log)
    }
}

#[derive(Debug, Error)]
pub enum HarLoadError {
    #[error("{file_path:?} is not valid UTF-8: {err}")]
    FileDecodeError {
        file_path: PathBuf,
        err: std::string::FromUtf8Error,
    },

    #[error("Failed to read {file_path:?}: {err}")]
    FileReadError {
        file_path: PathBuf,
        err: std::io::Error,
    },

    #[error("{file_path:?} is not a valid HAR file: {err}")]
    ParseError {
        file_path: PathBuf,
        err: serde_json::Error,
    },

    #[error("{0:?} is not a file")]
    PathIsNotAFile(PathBuf),
}
