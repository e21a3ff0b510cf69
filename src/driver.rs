//! Batch driver: one wallpaper per verse, chapter by chapter
//!
//! Strictly sequential. The first failure aborts the run.

use crate::cache::CorpusStore;
use crate::corpus::CorpusPair;
use crate::error::BatchError;
use crate::provider::DatasetProvider;
use ayat_render::shaping::{is_arabic, shape_with, ShapingOptions};
use ayat_render::{TextRasterizer, VerseImageGenerator};
use std::ops::RangeInclusive;
use std::path::PathBuf;

/// Number of surahs in the Quran.
pub const SURAH_COUNT: u32 = 114;

pub const DEFAULT_OUTPUT_DIR: &str = "generated_images";

/// Every surah, in order.
pub fn all_surahs() -> RangeInclusive<u32> {
    1..=SURAH_COUNT
}

#[derive(Debug, Clone)]
pub struct DriverOptions {
    pub output_dir: PathBuf,
    pub shaping: ShapingOptions,
    /// Leave verses whose output file already exists untouched.
    pub skip_existing: bool,
}

impl Default for DriverOptions {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            shaping: ShapingOptions::default(),
            skip_existing: false,
        }
    }
}

/// Counts for a finished run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BatchSummary {
    pub rendered: usize,
    pub skipped: usize,
}

impl std::ops::AddAssign for BatchSummary {
    fn add_assign(&mut self, other: Self) {
        self.rendered += other.rendered;
        self.skipped += other.skipped;
    }
}

pub struct BatchDriver<R: TextRasterizer> {
    generator: VerseImageGenerator<R>,
    options: DriverOptions,
}

impl<R: TextRasterizer> BatchDriver<R> {
    pub fn new(generator: VerseImageGenerator<R>, options: DriverOptions) -> Self {
        Self { generator, options }
    }

    pub fn options(&self) -> &DriverOptions {
        &self.options
    }

    /// Load both corpora through `store`, then render every requested surah.
    pub fn run<P, I>(&mut self, store: &CorpusStore<P>, chapters: I) -> Result<BatchSummary, BatchError>
    where
        P: DatasetProvider,
        I: IntoIterator<Item = u32>,
    {
        let corpora = store.load_pair()?;
        self.run_with(&corpora, chapters)
    }

    /// Render every requested surah from already loaded corpora.
    pub fn run_with<I>(&mut self, corpora: &CorpusPair, chapters: I) -> Result<BatchSummary, BatchError>
    where
        I: IntoIterator<Item = u32>,
    {
        let mut summary = BatchSummary::default();
        for chapter in chapters {
            match corpora.surah_name(chapter) {
                Some(name) => log::info!(
                    "Generating wallpapers for Surah {} ({}), please wait...",
                    chapter,
                    name
                ),
                None => log::info!("Generating wallpapers for Surah {}, please wait...", chapter),
            }
            summary += self.generate_surah(corpora, chapter)?;
            log::info!("Successfully generated images for Surah {}", chapter);
        }
        Ok(summary)
    }

    /// Render one wallpaper per verse of a 1-based surah.
    pub fn generate_surah(&mut self, corpora: &CorpusPair, chapter: u32) -> Result<BatchSummary, BatchError> {
        let mut summary = BatchSummary::default();

        for verse in corpora.verses(chapter)? {
            let address = verse.address;

            if self.options.skip_existing {
                let path = self.generator.output_path(&self.options.output_dir, address);
                if path.exists() {
                    log::debug!("Skipping {}, {} exists", address, path.display());
                    summary.skipped += 1;
                    continue;
                }
            }

            if !is_arabic(verse.original) {
                log::warn!("Verse {} has no Arabic text in the original edition", address);
            }
            log::debug!("{}", verse.original);
            log::debug!("{}{}", verse.translation, address.citation());

            let shaped = shape_with(verse.original, &self.options.shaping);
            self.generator
                .render_verse(&shaped, verse.translation, address, &self.options.output_dir)
                .map_err(|source| BatchError::Render { address, source })?;
            summary.rendered += 1;
        }

        Ok(summary)
    }
}
