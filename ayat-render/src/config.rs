//! Render settings for verse wallpapers
//!
//! Every knob the renderer reads lives here and is passed in at call time.

use image::ImageFormat;

/// Output encoding for generated wallpapers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Jpeg,
    Png,
}

impl OutputFormat {
    /// File extension written after the `s###a###` stem.
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Jpeg => "jpg",
            OutputFormat::Png => "png",
        }
    }

    pub fn image_format(self) -> ImageFormat {
        match self {
            OutputFormat::Jpeg => ImageFormat::Jpeg,
            OutputFormat::Png => ImageFormat::Png,
        }
    }
}

/// Canvas, typography and output settings for one render.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    pub width: u32,
    pub height: u32,
    /// Pixel size used for both scripts.
    pub font_size: f32,
    /// Maximum characters per wrapped line.
    pub wrap_width: usize,
    /// Vertical cursor start as a fraction of canvas height.
    pub top_margin_fraction: f32,
    /// Extra pixels between consecutive lines.
    pub line_padding: f32,
    pub background: [u8; 3],
    pub foreground: [u8; 3],
    pub format: OutputFormat,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 1920,
            height: 1080,
            font_size: 35.0,
            wrap_width: 120,
            top_margin_fraction: 0.15,
            line_padding: 10.0,
            background: [0, 0, 0],
            foreground: [255, 255, 255],
            format: OutputFormat::Jpeg,
        }
    }
}

impl RenderConfig {
    /// Y coordinate where the first line is placed.
    pub fn top_margin(&self) -> f32 {
        self.top_margin_fraction * self.height as f32
    }
}
