//! Verse wallpaper rendering
//!
//! Places the shaped Arabic block (reverse line order) above the translation
//! block (forward line order) on a fixed-size canvas and saves it under a
//! name derived from the verse address.

use crate::config::RenderConfig;
use crate::error::{RenderError, RenderResult};
use crate::fonts::TextRasterizer;
use crate::typography::{FormattedParagraph, LineOrder, TextLayoutEngine};
use image::{Rgb, RgbImage};
use std::fmt;
use std::path::{Path, PathBuf};

/// Position of a verse: 1-based chapter (surah) and verse-in-chapter (ayah).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VerseAddress {
    pub chapter: u32,
    pub verse: u32,
}

impl VerseAddress {
    pub fn new(chapter: u32, verse: u32) -> Self {
        Self { chapter, verse }
    }

    /// `s002a255` for chapter 2, verse 255.
    pub fn file_stem(&self) -> String {
        format!("s{:03}a{:03}", self.chapter, self.verse)
    }

    /// Suffix appended to the translation text.
    pub fn citation(&self) -> String {
        format!(" - Quran[{}:{}]", self.chapter, self.verse)
    }
}

impl fmt::Display for VerseAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.chapter, self.verse)
    }
}

/// Both text blocks of a verse, positioned on the canvas
#[derive(Debug, Clone, PartialEq)]
pub struct VerseLayout {
    pub original: FormattedParagraph,
    pub translation: FormattedParagraph,
}

/// Renders verse wallpapers with one rasterizer and one configuration
pub struct VerseImageGenerator<R: TextRasterizer> {
    rasterizer: R,
    config: RenderConfig,
}

impl<R: TextRasterizer> VerseImageGenerator<R> {
    pub fn new(rasterizer: R, config: RenderConfig) -> Self {
        Self { rasterizer, config }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    pub fn rasterizer(&self) -> &R {
        &self.rasterizer
    }

    /// Where the wallpaper for `address` is written inside `output_dir`.
    pub fn output_path(&self, output_dir: &Path, address: VerseAddress) -> PathBuf {
        output_dir.join(format!(
            "{}.{}",
            address.file_stem(),
            self.config.format.extension()
        ))
    }

    /// Position both blocks. `translation` is drawn as given, without citation.
    pub fn layout_verse(&mut self, shaped_original: &str, translation: &str) -> VerseLayout {
        let top = self.config.top_margin();
        let mut engine = TextLayoutEngine::new(&mut self.rasterizer, &self.config);

        let original = engine.layout_paragraph(shaped_original, top, LineOrder::Reverse);
        let translation = engine.layout_paragraph(translation, original.bottom(), LineOrder::Forward);

        VerseLayout {
            original,
            translation,
        }
    }

    /// Rasterize a verse onto a fresh canvas. The citation for `address` is
    /// appended to the translation.
    pub fn render_canvas(
        &mut self,
        shaped_original: &str,
        translation: &str,
        address: VerseAddress,
    ) -> RenderResult<RgbImage> {
        let (width, height) = (self.config.width, self.config.height);
        if width == 0 || height == 0 {
            return Err(RenderError::Canvas { width, height });
        }

        let cited = format!("{}{}", translation, address.citation());
        let layout = self.layout_verse(shaped_original, &cited);

        let mut canvas = RgbImage::from_pixel(width, height, Rgb(self.config.background));
        let color = Rgb(self.config.foreground);
        let font_size = self.config.font_size;

        for line in layout.original.lines.iter().chain(&layout.translation.lines) {
            self.rasterizer
                .draw(&mut canvas, &line.text, (line.x, line.y), font_size, color);
        }

        Ok(canvas)
    }

    /// Render and save one verse, returning the written path.
    pub fn render_verse(
        &mut self,
        shaped_original: &str,
        translation: &str,
        address: VerseAddress,
        output_dir: &Path,
    ) -> RenderResult<PathBuf> {
        let canvas = self.render_canvas(shaped_original, translation, address)?;

        std::fs::create_dir_all(output_dir)?;
        let path = self.output_path(output_dir, address);
        canvas
            .save_with_format(&path, self.config.format.image_format())
            .map_err(|source| RenderError::Save {
                path: path.clone(),
                source,
            })?;

        log::debug!("Wrote {} ({})", path.display(), address);
        Ok(path)
    }
}
