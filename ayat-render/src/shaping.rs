//! Arabic shaping and visual reordering
//!
//! fontdue draws characters one after another from left to right and knows
//! nothing about cursive joining or right-to-left runs. Before a verse reaches
//! the renderer every letter is swapped for its contextual presentation form
//! by `ar-reshaper` and the whole string is put into visual order.

use ar_reshaper::{ArabicReshaper, ReshaperConfig};
use unicode_bidi::BidiInfo;
use unicode_script::{Script, UnicodeScript};

/// How the reshaped text is put into visual order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BidiMode {
    /// Reverse every character. Only correct for pure right-to-left runs.
    Reverse,
    /// Unicode bidirectional algorithm, keeps embedded numerals readable.
    #[default]
    Full,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShapingOptions {
    pub bidi: BidiMode,
    /// Drop vowel and Quranic annotation marks before shaping.
    pub delete_harakat: bool,
}

impl Default for ShapingOptions {
    fn default() -> Self {
        Self {
            bidi: BidiMode::Full,
            delete_harakat: true,
        }
    }
}

/// Shape and reorder with default options.
pub fn shape(text: &str) -> String {
    shape_with(text, &ShapingOptions::default())
}

pub fn shape_with(text: &str, options: &ShapingOptions) -> String {
    let reshaped = reshape(text, options);
    match options.bidi {
        BidiMode::Reverse => reshaped.chars().rev().collect(),
        BidiMode::Full => visual_order(&reshaped),
    }
}

/// Whether the text contains anything in the Arabic script.
pub fn is_arabic(text: &str) -> bool {
    text.chars().any(|ch| ch.script() == Script::Arabic)
}

/// Replace letters with their contextual presentation forms, keeping logical order.
///
/// Uses the reshaper's stock Arabic configuration (lam-alef ligatures on),
/// only the harakat switch is taken from `options`.
pub fn reshape(text: &str, options: &ShapingOptions) -> String {
    let config = ReshaperConfig {
        delete_harakat: options.delete_harakat,
        ..ReshaperConfig::default()
    };
    ArabicReshaper::new(config).reshape(text)
}

fn mirror(ch: char) -> char {
    match ch {
        '(' => ')',
        ')' => '(',
        '[' => ']',
        ']' => '[',
        '{' => '}',
        '}' => '{',
        '<' => '>',
        '>' => '<',
        '«' => '»',
        '»' => '«',
        '\u{FD3E}' => '\u{FD3F}',
        '\u{FD3F}' => '\u{FD3E}',
        other => other,
    }
}

/// Reorder each paragraph from logical to visual order with the bidi algorithm.
pub fn visual_order(text: &str) -> String {
    let bidi = BidiInfo::new(text, None);
    let mut out = String::with_capacity(text.len());

    for para in &bidi.paragraphs {
        let line = para.range.clone();
        let (levels, runs) = bidi.visual_runs(para, line);
        for run in runs {
            let segment = &text[run.clone()];
            if levels[run.start].is_rtl() {
                out.extend(segment.chars().rev().map(mirror));
            } else {
                out.push_str(segment);
            }
        }
    }
    out
}
