use crate::provider::Edition;
use ayat_render::{RenderError, VerseAddress};
use std::path::PathBuf;

pub type DatasetResult<T> = Result<T, DatasetError>;

/// Failures while obtaining, caching or pairing the two corpora
#[derive(thiserror::Error, Debug)]
pub enum DatasetError {
    /// The provider answered 404; nothing usable can be rendered.
    #[error("{edition} dataset unavailable at {url} (HTTP 404)")]
    ProviderUnavailable { edition: Edition, url: String },

    #[error("transport error fetching {edition} dataset: {message}")]
    Transport { edition: Edition, message: String },

    #[error("invalid {edition} dataset JSON: {source}")]
    Decode {
        edition: Edition,
        #[source]
        source: serde_json::Error,
    },

    #[error("cache I/O error at '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Arabic and English corpora do not line up verse for verse.
    #[error("corpus mismatch: {0}")]
    Mismatch(String),

    #[error("surah {requested} out of range (corpus has {available})")]
    ChapterOutOfRange { requested: u32, available: usize },
}

impl DatasetError {
    pub fn mismatch(msg: impl Into<String>) -> Self {
        Self::Mismatch(msg.into())
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Anything that stops a batch run
#[derive(thiserror::Error, Debug)]
pub enum BatchError {
    #[error(transparent)]
    Dataset(#[from] DatasetError),

    #[error("rendering {address} failed: {source}")]
    Render {
        address: VerseAddress,
        #[source]
        source: RenderError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_edition() {
        let err = DatasetError::ProviderUnavailable {
            edition: Edition::Arabic,
            url: "http://example.invalid".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("quran-uthmani"));
        assert!(msg.contains("404"));

        assert!(DatasetError::mismatch("x").to_string().starts_with("corpus mismatch:"));
    }
}
