//! Local JSON cache in front of the dataset provider
//!
//! Each edition is stored verbatim under a fixed file name. A present file
//! suppresses the network call entirely; there is no expiry. Only bodies that
//! decode are written, so a bad download is fetched again on the next run.

use crate::corpus::{Corpus, CorpusPair};
use crate::error::{DatasetError, DatasetResult};
use crate::provider::{DatasetProvider, Edition};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub const DEFAULT_CACHE_DIR: &str = "quran_data";

/// Directory holding one JSON blob per edition
#[derive(Debug, Clone)]
pub struct CorpusCache {
    dir: PathBuf,
}

impl CorpusCache {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path(&self, edition: Edition) -> PathBuf {
        self.dir.join(edition.cache_file_name())
    }

    /// Cached bytes, or `None` on a miss.
    pub fn read(&self, edition: Edition) -> DatasetResult<Option<Vec<u8>>> {
        let path = self.path(edition);
        match std::fs::read(&path) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(DatasetError::io(path, e)),
        }
    }

    pub fn write(&self, edition: Edition, bytes: &[u8]) -> DatasetResult<PathBuf> {
        std::fs::create_dir_all(&self.dir).map_err(|e| DatasetError::io(&self.dir, e))?;
        let path = self.path(edition);
        // Readers only ever see a complete file
        let partial = path.with_extension("json.part");
        std::fs::write(&partial, bytes).map_err(|e| DatasetError::io(&partial, e))?;
        std::fs::rename(&partial, &path).map_err(|e| DatasetError::io(&path, e))?;
        Ok(path)
    }
}

impl Default for CorpusCache {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_DIR)
    }
}

/// Cache-or-fetch loader for both editions
pub struct CorpusStore<P: DatasetProvider> {
    cache: CorpusCache,
    provider: P,
}

impl<P: DatasetProvider> CorpusStore<P> {
    pub fn new(cache: CorpusCache, provider: P) -> Self {
        Self { cache, provider }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Load one edition, downloading and caching it on a miss.
    pub fn load(&self, edition: Edition) -> DatasetResult<Corpus> {
        match self.cache.read(edition)? {
            Some(bytes) => {
                log::debug!("Using cached {}", self.cache.path(edition).display());
                Corpus::from_json(&bytes, edition)
            }
            None => {
                log::info!(
                    "Local {} file not found, downloading now...",
                    edition.cache_file_name()
                );
                log::info!("Please wait...");
                let bytes = self.provider.fetch(edition)?;
                let corpus = Corpus::from_json(&bytes, edition)?;
                let path = self.cache.write(edition, &bytes)?;
                log::info!("{} successfully created", path.display());
                Ok(corpus)
            }
        }
    }

    /// Load both editions and check they pair up.
    pub fn load_pair(&self) -> DatasetResult<CorpusPair> {
        let arabic = self.load(Edition::Arabic)?;
        let english = self.load(Edition::English)?;
        CorpusPair::new(arabic, english)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_dir(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!(
            "ayat_cache_{name}_{}_{}",
            std::process::id(),
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap()
                .as_nanos()
        ))
    }

    #[test]
    fn miss_then_hit() {
        let dir = temp_dir("miss_then_hit");
        let cache = CorpusCache::new(&dir);

        assert!(cache.read(Edition::English).unwrap().is_none());
        let path = cache.write(Edition::English, b"{}").unwrap();
        assert_eq!(path, dir.join("quran-en.json"));
        assert_eq!(cache.read(Edition::English).unwrap().unwrap(), b"{}");
        assert!(cache.read(Edition::Arabic).unwrap().is_none());
        assert!(!dir.join("quran-en.json.part").exists());

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn default_dir_is_quran_data() {
        let cache = CorpusCache::default();
        assert_eq!(cache.path(Edition::Arabic), Path::new("quran_data").join("quran-ar.json"));
    }
}
