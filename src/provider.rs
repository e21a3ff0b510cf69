//! Remote dataset access
//!
//! Both editions come from the alquran.cloud API as one JSON document each.

use crate::error::{DatasetError, DatasetResult};
use reqwest::blocking::Client;
use reqwest::StatusCode;
use std::fmt;
use std::time::Duration;

const API_BASE: &str = "http://api.alquran.cloud/v1/quran";

/// The two corpora a wallpaper is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edition {
    /// Arabic text in the Uthmani script
    Arabic,
    /// Sahih International English translation
    English,
}

impl Edition {
    /// Edition identifier in the API path.
    pub fn identifier(self) -> &'static str {
        match self {
            Edition::Arabic => "quran-uthmani",
            Edition::English => "en.sahih",
        }
    }

    pub fn endpoint(self) -> String {
        self.endpoint_at(API_BASE)
    }

    /// Endpoint for this edition under another API base.
    pub fn endpoint_at(self, base: &str) -> String {
        format!("{}/{}", base.trim_end_matches('/'), self.identifier())
    }

    /// Fixed cache file name for this edition.
    pub fn cache_file_name(self) -> &'static str {
        match self {
            Edition::Arabic => "quran-ar.json",
            Edition::English => "quran-en.json",
        }
    }
}

impl fmt::Display for Edition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}

/// Source of raw corpus JSON for an edition.
pub trait DatasetProvider {
    fn fetch(&self, edition: Edition) -> DatasetResult<Vec<u8>>;
}

pub trait ReqwestErrorExt {
    fn to_user_friendly_message(&self) -> String;
}

impl ReqwestErrorExt for reqwest::Error {
    fn to_user_friendly_message(&self) -> String {
        if self.is_timeout() {
            format!("the request timed out ({})", self)
        } else if self.is_connect() || self.is_request() {
            format!("connection error, check your internet connection ({})", self)
        } else if self.is_decode() || self.is_body() {
            format!("unexpected response body ({})", self)
        } else {
            self.to_string()
        }
    }
}

/// Blocking HTTP client against the alquran.cloud API
#[derive(Debug, Clone)]
pub struct HttpProvider {
    client: Client,
    base: String,
}

impl HttpProvider {
    pub fn new() -> Result<Self, reqwest::Error> {
        Self::with_base(API_BASE)
    }

    /// Provider against a different API base, e.g. a mirror.
    pub fn with_base(base: impl Into<String>) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .user_agent(concat!("ayat-wallpaper/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(300))
            .build()?;
        Ok(Self::with_client(client, base))
    }

    pub fn with_client(client: Client, base: impl Into<String>) -> Self {
        Self {
            client,
            base: base.into(),
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }
}

impl DatasetProvider for HttpProvider {
    fn fetch(&self, edition: Edition) -> DatasetResult<Vec<u8>> {
        let url = edition.endpoint_at(&self.base);
        log::debug!("GET {}", url);

        let transport = |message: String| DatasetError::Transport { edition, message };

        let response = self
            .client
            .get(&url)
            .send()
            .map_err(|e| transport(e.to_user_friendly_message()))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            log::error!("HTTP ERROR 404 - Probably an invalid ayah reference provided");
            return Err(DatasetError::ProviderUnavailable { edition, url });
        }
        if !status.is_success() {
            return Err(transport(format!("unexpected HTTP status {}", status)));
        }

        let body = response
            .bytes()
            .map_err(|e| transport(e.to_user_friendly_message()))?;
        Ok(body.to_vec())
    }
}
