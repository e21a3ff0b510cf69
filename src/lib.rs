//! Ayat Wallpaper Generator
//!
//! Generates one wallpaper per verse of the Quran: Arabic (Uthmani) text on
//! top, the Sahih International translation below, white on black at
//! 1920x1080. Corpora are downloaded once from alquran.cloud and cached as
//! JSON; images land in `generated_images/s###a###.jpg`.

pub mod cache;
pub mod corpus;
pub mod driver;
pub mod error;
pub mod provider;

pub use cache::{CorpusCache, CorpusStore};
pub use corpus::{Ayah, Corpus, CorpusPair, Surah, Verse};
pub use driver::{all_surahs, BatchDriver, BatchSummary, DriverOptions, SURAH_COUNT};
pub use error::{BatchError, DatasetError, DatasetResult};
pub use provider::{DatasetProvider, Edition, HttpProvider};

pub use ayat_render;
