//! Font management for wallpaper text
//!
//! Provides font loading, glyph caching, metrics and rasterization for the
//! Arabic and English lines using fontdue. One face is used for both scripts,
//! so it must carry the Arabic presentation forms produced by the shaper.

use crate::error::{RenderError, RenderResult};
use fontdue::{Font, FontSettings, Metrics};
use image::{Rgb, RgbImage};
use std::collections::HashMap;
use std::path::Path;

/// Font candidates in priority order, `fonts/Amiri-Regular.ttf` in the working directory first.
const FONT_CANDIDATES: &[(&str, &str)] = &[
    ("Amiri", "fonts/Amiri-Regular.ttf"),
    ("Amiri", concat!(env!("CARGO_MANIFEST_DIR"), "/../fonts/Amiri-Regular.ttf")),
    // Debian/Ubuntu fonts-hosny-amiri
    ("Amiri", "/usr/share/fonts/truetype/amiri/amiri-regular.ttf"),
    ("Amiri", "/usr/share/fonts/opentype/amiri/amiri-regular.ttf"),
    // Windows system fonts with Arabic presentation forms
    ("Traditional Arabic", "C:\\Windows\\Fonts\\trado.ttf"),
    ("Arial", "C:\\Windows\\Fonts\\arial.ttf"),
    // Last-resort Linux fallback
    ("DejaVu Sans", "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf"),
];

/// Size of a laid-out run of text in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextExtent {
    pub width: f32,
    pub height: f32,
}

/// Measures and draws single lines of already-shaped text.
///
/// Text is drawn strictly left to right, glyph by glyph; callers are expected
/// to hand over visually ordered strings.
pub trait TextRasterizer {
    fn measure(&mut self, text: &str, font_size: f32) -> TextExtent;

    /// Draw `text` with its top-left corner at `origin`.
    fn draw(
        &mut self,
        canvas: &mut RgbImage,
        text: &str,
        origin: (f32, f32),
        font_size: f32,
        color: Rgb<u8>,
    );
}

/// Font context containing the loaded face and a glyph cache
pub struct FontContext {
    pub font: Font,
    pub font_name: String,

    // Rasterized glyphs keyed by (char, size bits)
    glyph_cache: HashMap<(char, u32), (Metrics, Vec<u8>)>,
}

impl FontContext {
    /// Load the first available font from the candidate list
    pub fn initialize_fonts() -> RenderResult<Self> {
        for (font_name, font_path) in FONT_CANDIDATES {
            if Path::new(font_path).exists() {
                log::info!("Loading font: {} from {}", font_name, font_path);
                return Self::load(font_name, Path::new(font_path));
            }
        }

        Err(RenderError::font(
            "no suitable Arabic font found (expected fonts/Amiri-Regular.ttf)",
        ))
    }

    /// Load a specific font file
    pub fn from_path(path: impl AsRef<Path>) -> RenderResult<Self> {
        let path = path.as_ref();
        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "custom".to_string());
        Self::load(&name, path)
    }

    fn load(font_name: &str, path: &Path) -> RenderResult<Self> {
        let font_data = std::fs::read(path)
            .map_err(|e| RenderError::font(format!("read font file '{}': {}", path.display(), e)))?;
        let font = Font::from_bytes(font_data, FontSettings::default())
            .map_err(|e| RenderError::font(format!("parse font '{}': {}", path.display(), e)))?;

        Ok(Self {
            font,
            font_name: font_name.to_string(),
            glyph_cache: HashMap::new(),
        })
    }

    /// Whether the face maps `ch` to a real glyph.
    pub fn has_glyph(&self, ch: char) -> bool {
        self.font.lookup_glyph_index(ch) != 0
    }

    /// Distance between the top of a line and its baseline.
    pub fn ascent(&self, font_size: f32) -> f32 {
        self.font
            .horizontal_line_metrics(font_size)
            .map(|m| m.ascent)
            .unwrap_or(font_size)
    }

    pub fn line_height(&self, font_size: f32) -> f32 {
        self.font
            .horizontal_line_metrics(font_size)
            .map(|m| m.ascent - m.descent)
            .unwrap_or(font_size)
    }

    fn glyph(&mut self, ch: char, font_size: f32) -> &(Metrics, Vec<u8>) {
        let font = &self.font;
        self.glyph_cache
            .entry((ch, font_size.to_bits()))
            .or_insert_with(|| font.rasterize(ch, font_size))
    }

    /// Advance width with kerning
    pub fn calculate_text_width(&mut self, text: &str, font_size: f32) -> f32 {
        let chars: Vec<char> = text.chars().collect();
        let mut width = 0.0;
        for (i, &ch) in chars.iter().enumerate() {
            width += self.glyph(ch, font_size).0.advance_width;
            if let Some(&next) = chars.get(i + 1) {
                width += self.font.horizontal_kern(ch, next, font_size).unwrap_or(0.0);
            }
        }
        width
    }
}

impl TextRasterizer for FontContext {
    fn measure(&mut self, text: &str, font_size: f32) -> TextExtent {
        TextExtent {
            width: self.calculate_text_width(text, font_size),
            height: self.line_height(font_size),
        }
    }

    fn draw(
        &mut self,
        canvas: &mut RgbImage,
        text: &str,
        origin: (f32, f32),
        font_size: f32,
        color: Rgb<u8>,
    ) {
        let baseline = origin.1 + self.ascent(font_size);
        let chars: Vec<char> = text.chars().collect();
        let mut pen_x = origin.0;

        for (i, &ch) in chars.iter().enumerate() {
            let kern = chars
                .get(i + 1)
                .and_then(|&next| self.font.horizontal_kern(ch, next, font_size))
                .unwrap_or(0.0);

            let (metrics, coverage) = self.glyph(ch, font_size);
            let left = (pen_x + metrics.xmin as f32).round() as i64;
            let top = (baseline - metrics.height as f32 - metrics.ymin as f32).round() as i64;
            blend_coverage(canvas, coverage, metrics.width, left, top, color);

            pen_x += metrics.advance_width + kern;
        }
    }
}

/// Alpha-blend a coverage bitmap onto the canvas, clipping at the edges.
fn blend_coverage(
    canvas: &mut RgbImage,
    coverage: &[u8],
    glyph_width: usize,
    left: i64,
    top: i64,
    color: Rgb<u8>,
) {
    if glyph_width == 0 {
        return;
    }
    let (canvas_w, canvas_h) = (canvas.width() as i64, canvas.height() as i64);

    for (row, scanline) in coverage.chunks(glyph_width).enumerate() {
        let y = top + row as i64;
        if y < 0 || y >= canvas_h {
            continue;
        }
        for (col, &alpha) in scanline.iter().enumerate() {
            let x = left + col as i64;
            if alpha == 0 || x < 0 || x >= canvas_w {
                continue;
            }
            let pixel = canvas.get_pixel_mut(x as u32, y as u32);
            let a = alpha as u32;
            for c in 0..3 {
                let bg = pixel.0[c] as u32;
                let fg = color.0[c] as u32;
                pixel.0[c] = ((fg * a + bg * (255 - a)) / 255) as u8;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blend_clips_outside_canvas() {
        let mut canvas = RgbImage::new(4, 4);
        let coverage = vec![255u8; 9];
        blend_coverage(&mut canvas, &coverage, 3, 2, -1, Rgb([255, 255, 255]));

        assert_eq!(canvas.get_pixel(2, 0).0, [255, 255, 255]);
        assert_eq!(canvas.get_pixel(3, 1).0, [255, 255, 255]);
        assert_eq!(canvas.get_pixel(1, 0).0, [0, 0, 0]);
        assert_eq!(canvas.get_pixel(2, 2).0, [0, 0, 0]);
    }

    #[test]
    fn blend_mixes_partial_coverage() {
        let mut canvas = RgbImage::from_pixel(1, 1, Rgb([0, 0, 0]));
        blend_coverage(&mut canvas, &[51], 1, 0, 0, Rgb([255, 255, 255]));
        assert_eq!(canvas.get_pixel(0, 0).0, [51, 51, 51]);
    }

    #[test]
    fn missing_font_file_is_an_error() {
        let err = FontContext::from_path("/definitely/not/here/Amiri.ttf")
            .err()
            .expect("loading a missing file must fail");
        assert!(matches!(err, RenderError::Font(_)));
        assert!(err.to_string().contains("Amiri.ttf"));
    }

    #[test]
    fn unparsable_font_file_is_a_font_error() {
        let path = std::env::temp_dir().join(format!("ayat_not_a_font_{}.ttf", std::process::id()));
        std::fs::write(&path, b"definitely not a font").unwrap();

        let err = FontContext::from_path(&path)
            .err()
            .expect("garbage bytes must not parse");
        assert!(matches!(err, RenderError::Font(ref m) if m.starts_with("parse font")));

        std::fs::remove_file(&path).ok();
    }
}
