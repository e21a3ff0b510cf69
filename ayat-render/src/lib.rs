//! Ayat Wallpaper Renderer
//!
//! Turns one verse (Arabic original plus English translation) into a
//! fixed-size wallpaper image: Arabic shaping and bidi reordering, character
//! budget word wrapping, centred line layout and fontdue rasterization.

pub mod config;
pub mod error;
pub mod fonts;
pub mod shaping;
pub mod typography;
pub mod verse_renderer;

// Re-export commonly used functions and types
pub use config::{OutputFormat, RenderConfig};
pub use error::{RenderError, RenderResult};
pub use fonts::{FontContext, TextExtent, TextRasterizer};
pub use shaping::{shape, shape_with, BidiMode, ShapingOptions};
pub use typography::{wrap_text, FormattedLine, FormattedParagraph, LineOrder};
pub use verse_renderer::{VerseAddress, VerseImageGenerator, VerseLayout};
